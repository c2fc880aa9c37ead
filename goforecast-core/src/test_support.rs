//! Shared fixtures for tests that talk HTTP to a local mock server.

use reqwest::{Client, redirect::Policy};
use wiremock::MockServer;

/// Client that talks to the mock server directly, ignoring any proxy
/// configured in the environment.
pub(crate) fn loopback_client() -> Client {
    Client::builder()
        .no_proxy()
        .redirect(Policy::none())
        .build()
        .expect("loopback client should build")
}

/// `host:port` of a running mock server, as a geocoding host.
pub(crate) fn host_of(server: &MockServer) -> String {
    server.address().to_string()
}

/// A `host:port` with nothing listening on it.
pub(crate) fn closed_port() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    listener.local_addr().expect("local addr").to_string()
}
