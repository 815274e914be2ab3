/*
[INPUT]:  Known key and message fixtures
[OUTPUT]: Test results for signing and credentials
[POS]:    Integration tests - authentication
[UPDATE]: When key format or signing scheme changes
*/

mod common;

use common::{TEST_PUBLIC_KEY, TEST_SECRET_KEY};
use dmarket_client::{Credentials, DmarketError, Ed25519Signer, RequestSigner, SignedRequest, sign};
use serde_json::json;

#[test]
fn test_sign_reproduces_fixture() {
    let message = b"GET/trade-aggregator/v1/last-sales?gameId=a8db&title=AK-47%20%7C%20B%20the%20Monster%20%28Factory%20New%291700000000";
    let signature = sign(message, TEST_SECRET_KEY).expect("sign");
    assert_eq!(
        signature,
        "95ebb97601a6e5004d56be3d3e03916928003d5f84313fc45d3ac0ef4d9b026ced9a7dffe4481eaa1b3dda4089d4fb29da0ec5ff37e9e834097a1d85fefca601"
    );
}

#[test]
fn test_request_signer_matches_fixture() {
    let payload = json!({
        "gameId": "a8db",
        "title": "AK-47 | B the Monster (Factory New)",
    });
    let path = "/trade-aggregator/v1/last-sales";
    let request =
        SignedRequest::build("GET", path, Some(&payload), "1700000000").expect("canonical request");

    let signer = RequestSigner::new(
        TEST_PUBLIC_KEY,
        Ed25519Signer::from_hex(TEST_SECRET_KEY).expect("signer"),
    );
    let headers = signer.sign_request(&request);

    assert_eq!(headers.api_key, TEST_PUBLIC_KEY);
    assert_eq!(headers.sign_date, "1700000000");
    assert_eq!(
        headers.request_sign,
        "dmar ed25519 95ebb97601a6e5004d56be3d3e03916928003d5f84313fc45d3ac0ef4d9b026ced9a7dffe4481eaa1b3dda4089d4fb29da0ec5ff37e9e834097a1d85fefca601"
    );
}

#[test]
fn test_signer_exposes_matching_public_key() {
    let signer = Ed25519Signer::from_hex(TEST_SECRET_KEY).expect("signer");
    assert_eq!(signer.public_key_hex(), TEST_PUBLIC_KEY);
}

#[test]
fn test_credentials_reject_empty_values() {
    assert!(matches!(Credentials::new("", "ab"), Err(DmarketError::Config(_))));
    assert!(matches!(Credentials::new("ab", ""), Err(DmarketError::Config(_))));
}
