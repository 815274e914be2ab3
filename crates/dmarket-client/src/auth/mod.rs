/*
[INPUT]:  API credentials and messages to sign
[OUTPUT]: Validated credentials and Ed25519 signatures
[POS]:    Auth layer - handles DMarket request authentication
[UPDATE]: When credential handling or signature methods change
*/

pub mod credentials;
pub mod signer;

pub use credentials::Credentials;
pub use signer::{Ed25519Signer, sign};
