/*
[INPUT]:  HTTP client configuration, credentials, and API paths
[OUTPUT]: Signed HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod market;
pub mod request;
pub mod signature;

pub use error::{DmarketError, Result};
pub use request::{SignedRequest, current_nonce, encode_query};
pub use signature::{RequestSigner, SIGNATURE_PREFIX, SignatureHeaders};

pub use client::{ClientConfig, DEFAULT_BASE_URL, DmarketClient};
