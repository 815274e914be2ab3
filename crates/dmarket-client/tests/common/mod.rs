/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for dmarket-client tests

#![allow(dead_code)]

use std::time::Duration;

use dmarket_client::{ClientConfig, Credentials, DmarketClient};
use wiremock::MockServer;

/// RFC 8032 test key 1 in the 64-byte keypair layout (seed || public)
pub const TEST_SECRET_KEY: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
pub const TEST_PUBLIC_KEY: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn test_client(server: &MockServer) -> DmarketClient {
    test_client_with_timeout(server, Duration::from_secs(5))
}

pub fn test_client_with_timeout(server: &MockServer, timeout: Duration) -> DmarketClient {
    let credentials = Credentials::new(TEST_PUBLIC_KEY, TEST_SECRET_KEY).expect("credentials");
    let config = ClientConfig {
        base_url: server.uri(),
        timeout,
        ..ClientConfig::default()
    };
    DmarketClient::with_config(credentials, config).expect("client init")
}
