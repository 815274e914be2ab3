/*
[INPUT]:  Message bytes and hex-encoded secret key material
[OUTPUT]: Detached Ed25519 signatures, hex-encoded
[POS]:    Auth layer - cryptographic signing for request authentication
[UPDATE]: When changing signing algorithm or key format
*/

use ed25519_dalek::{KEYPAIR_LENGTH, Signature, Signer, SigningKey, Verifier};

use crate::http::{DmarketError, Result};

/// Ed25519 signer for request authentication
#[derive(Debug, Clone)]
pub struct Ed25519Signer {
    signing_key: SigningKey,
}

impl Ed25519Signer {
    /// Create signer from a hex-encoded secret key.
    ///
    /// Only the 64-byte keypair layout issued by the marketplace (seed
    /// followed by public key) is accepted, and the public half must match
    /// the seed.
    pub fn from_hex(secret_key_hex: &str) -> Result<Self> {
        let bytes = hex::decode(secret_key_hex.trim())
            .map_err(|e| DmarketError::KeyFormat(format!("not valid hex: {e}")))?;

        let keypair: [u8; KEYPAIR_LENGTH] = bytes.as_slice().try_into().map_err(|_| {
            let len = bytes.len();
            DmarketError::KeyFormat(format!("expected {KEYPAIR_LENGTH} bytes, got {len}"))
        })?;
        let signing_key = SigningKey::from_keypair_bytes(&keypair).map_err(|e| {
            DmarketError::KeyFormat(format!("public half does not match seed: {e}"))
        })?;

        Ok(Self { signing_key })
    }

    /// Sign a message and return the detached signature
    pub fn sign(&self, message: &[u8]) -> Signature {
        self.signing_key.sign(message)
    }

    /// Sign a message and return the 128-character hex signature
    pub fn sign_hex(&self, message: &[u8]) -> String {
        hex::encode(self.sign(message).to_bytes())
    }

    /// Get the raw public key bytes
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Get the public key as lowercase hex
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key_bytes())
    }

    /// Verify a signature against a message
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        self.signing_key
            .verifying_key()
            .verify(message, signature)
            .is_ok()
    }
}

/// Sign `message` with a hex secret key in one step
pub fn sign(message: &[u8], secret_key_hex: &str) -> Result<String> {
    Ok(Ed25519Signer::from_hex(secret_key_hex)?.sign_hex(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 8032, section 7.1
    const RFC_SEED_1: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
    const RFC_PUBLIC_1: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
    const RFC_SIGNATURE_1: &str = "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b";

    const RFC_SEED_2: &str = "4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb";
    const RFC_PUBLIC_2: &str = "3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c";
    const RFC_SIGNATURE_2: &str = "92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00";

    fn keypair_hex(seed: &str, public: &str) -> String {
        format!("{seed}{public}")
    }

    #[test]
    fn test_rfc8032_vector_empty_message() {
        let signature = sign(b"", &keypair_hex(RFC_SEED_1, RFC_PUBLIC_1)).unwrap();
        assert_eq!(signature, RFC_SIGNATURE_1);
    }

    #[test]
    fn test_rfc8032_vector_single_byte() {
        let signature = sign(&[0x72], &keypair_hex(RFC_SEED_2, RFC_PUBLIC_2)).unwrap();
        assert_eq!(signature, RFC_SIGNATURE_2);
    }

    #[test]
    fn test_request_shaped_message() {
        let message = b"POST/exchange/v1/target/create{\"targets\":[]}1700000000";
        let signature = sign(message, &keypair_hex(RFC_SEED_1, RFC_PUBLIC_1)).unwrap();
        assert_eq!(
            signature,
            "fac4052462772fb35623059e2b67476071311e3ae256a2934d203564cd796288b1d3e1543f0bb1df5a415909d9adef3aac9f0bd3b4ed14f882d0263557e5cd0c"
        );
    }

    #[test]
    fn test_signing_is_deterministic() {
        let signer = Ed25519Signer::from_hex(&keypair_hex(RFC_SEED_1, RFC_PUBLIC_1)).unwrap();
        let first = signer.sign_hex(b"GET/account/v1/balance1700000000");
        let second = signer.sign_hex(b"GET/account/v1/balance1700000000");
        assert_eq!(first, second);
        assert_eq!(first.len(), 128);
    }

    #[test]
    fn test_public_key_matches_keypair() {
        let signer = Ed25519Signer::from_hex(&keypair_hex(RFC_SEED_2, RFC_PUBLIC_2)).unwrap();
        assert_eq!(signer.public_key_hex(), RFC_PUBLIC_2);
    }

    #[test]
    fn test_sign_and_verify() {
        let signer = Ed25519Signer::from_hex(&keypair_hex(RFC_SEED_2, RFC_PUBLIC_2)).unwrap();
        let message = b"test message";
        let signature = signer.sign(message);
        assert!(signer.verify(message, &signature));
        assert!(!signer.verify(b"other message", &signature));
    }

    #[test]
    fn test_bare_seed_is_key_format_error() {
        let err = Ed25519Signer::from_hex(RFC_SEED_1).unwrap_err();
        assert!(matches!(err, DmarketError::KeyFormat(_)));

        let err = sign(b"GET/p1", RFC_SEED_1).unwrap_err();
        assert!(matches!(err, DmarketError::KeyFormat(_)));
    }

    #[test]
    fn test_wrong_length_is_key_format_error() {
        let err = Ed25519Signer::from_hex("abcd").unwrap_err();
        assert!(matches!(err, DmarketError::KeyFormat(_)));
    }

    #[test]
    fn test_invalid_hex_is_key_format_error() {
        let err = sign(b"msg", "zz").unwrap_err();
        assert!(matches!(err, DmarketError::KeyFormat(_)));
    }

    #[test]
    fn test_mismatched_public_half_is_rejected() {
        let err = Ed25519Signer::from_hex(&keypair_hex(RFC_SEED_1, RFC_PUBLIC_2)).unwrap_err();
        assert!(matches!(err, DmarketError::KeyFormat(_)));
    }
}
