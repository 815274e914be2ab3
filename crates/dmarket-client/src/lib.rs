/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public DMarket client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Credentials, Ed25519Signer, sign};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    DEFAULT_BASE_URL,
    DmarketClient,
    DmarketError,
    RequestSigner,
    Result,
    SIGNATURE_PREFIX,
    SignatureHeaders,
    SignedRequest,
};

// Re-export all types
pub use types::*;
