/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for comlink-client tests

use std::sync::Arc;

use comlink_client::{ClientConfig, ComlinkClient, FixedClock};
use wiremock::MockServer;

pub const TEST_TIMESTAMP_MS: i64 = 1_700_000_000_000;
pub const TEST_ACCESS_KEY: &str = "test-access";
pub const TEST_SECRET_KEY: &str = "test-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at `server` for both hosts, signing with the test keys at a fixed instant
pub fn signed_client(server: &MockServer) -> ComlinkClient {
    let config = ClientConfig {
        base_url: server.uri(),
        stats_base_url: server.uri(),
        ..ClientConfig::default()
    }
    .with_credentials(TEST_ACCESS_KEY, TEST_SECRET_KEY);
    ComlinkClient::with_config_and_clock(config, Arc::new(FixedClock(TEST_TIMESTAMP_MS)))
        .expect("client init")
}

/// Client pointed at `server` without credentials
#[allow(dead_code)]
pub fn unsigned_client(server: &MockServer) -> ComlinkClient {
    let config = ClientConfig {
        base_url: server.uri(),
        stats_base_url: server.uri(),
        ..ClientConfig::default()
    };
    ComlinkClient::with_config(config).expect("client init")
}
