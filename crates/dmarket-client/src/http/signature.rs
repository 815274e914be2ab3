/*
[INPUT]:  Canonical request and Ed25519 signer
[OUTPUT]: Signed request headers (X-Api-Key, X-Request-Sign, X-Sign-Date)
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use crate::auth::Ed25519Signer;
use crate::http::request::SignedRequest;

pub const HEADER_API_KEY: &str = "X-Api-Key";
pub const HEADER_REQUEST_SIGN: &str = "X-Request-Sign";
pub const HEADER_SIGN_DATE: &str = "X-Sign-Date";

/// Scheme tag prepended to the hex signature
pub const SIGNATURE_PREFIX: &str = "dmar ed25519 ";

/// Header values for one signed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeaders {
    pub api_key: String,
    pub request_sign: String,
    pub sign_date: String,
}

impl SignatureHeaders {
    /// Header name/value pairs in wire order
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            (HEADER_API_KEY, self.api_key.as_str()),
            (HEADER_REQUEST_SIGN, self.request_sign.as_str()),
            (HEADER_SIGN_DATE, self.sign_date.as_str()),
        ]
    }
}

/// Signs canonical requests on behalf of one API key
#[derive(Debug, Clone)]
pub struct RequestSigner {
    public_key: String,
    signer: Ed25519Signer,
}

impl RequestSigner {
    /// Create a new request signer for the given public key
    pub fn new(public_key: impl Into<String>, signer: Ed25519Signer) -> Self {
        Self {
            public_key: public_key.into(),
            signer,
        }
    }

    /// Sign a request according to the DMarket API scheme
    ///
    /// Message: `method + canonical_path + body + nonce`
    /// Header: `X-Request-Sign: dmar ed25519 <hex signature>`
    pub fn sign_request(&self, request: &SignedRequest) -> SignatureHeaders {
        let signature = self.signer.sign_hex(request.string_to_sign().as_bytes());
        SignatureHeaders {
            api_key: self.public_key.clone(),
            request_sign: format!("{SIGNATURE_PREFIX}{signature}"),
            sign_date: request.nonce().to_string(),
        }
    }

    pub fn signer(&self) -> &Ed25519Signer {
        &self.signer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::Signature;
    use serde_json::json;

    const KEYPAIR: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";

    fn request_signer() -> RequestSigner {
        RequestSigner::new("public-key", Ed25519Signer::from_hex(KEYPAIR).unwrap())
    }

    #[test]
    fn test_sign_request_headers() {
        let payload = json!({"targets": [{"amount": 1}]});
        let req =
            SignedRequest::build("POST", "/exchange/v1/target/create", Some(&payload), "1700000000")
                .unwrap();
        let headers = request_signer().sign_request(&req);

        assert_eq!(headers.api_key, "public-key");
        assert_eq!(headers.sign_date, "1700000000");
        assert!(headers.request_sign.starts_with("dmar ed25519 "));
        assert_eq!(headers.request_sign.len(), SIGNATURE_PREFIX.len() + 128);
    }

    #[test]
    fn test_signature_verifies_against_string_to_sign() {
        let signer = request_signer();
        let payload = json!({"gameId": "a8db", "limit": 1});
        let req =
            SignedRequest::build("GET", "/exchange/v1/market/items", Some(&payload), "1700000000")
                .unwrap();
        let headers = signer.sign_request(&req);

        let hex_sig = headers.request_sign.trim_start_matches(SIGNATURE_PREFIX);
        let bytes: [u8; 64] = hex::decode(hex_sig).unwrap().try_into().unwrap();
        let signature = Signature::from_bytes(&bytes);
        assert!(signer.signer().verify(req.string_to_sign().as_bytes(), &signature));
    }

    #[test]
    fn test_header_pairs_order() {
        let req = SignedRequest::build("GET", "/account/v1/balance", None, "7").unwrap();
        let headers = request_signer().sign_request(&req);
        let names: Vec<_> = headers.pairs().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["X-Api-Key", "X-Request-Sign", "X-Sign-Date"]);
    }
}
