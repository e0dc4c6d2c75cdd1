//! Test configuration helpers pointing the library at a mock MediaWiki server

use std::time::Duration;
use wiremock::MockServer;
use wiki_reflect::{Config, WikiReflector};

/// Path the mock API is served under
pub const API_PATH: &str = "/w/api.php";

/// User agent sent by every test client
pub const TEST_USER_AGENT: &str = "wiki-reflect-tests/0.1 (integration tests)";

/// Config whose API endpoint is the mock server (no `{lang}` placeholder, so
/// every edition hits the same server)
pub fn mock_config(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.wiki.api_url = format!("{}{}", server.uri(), API_PATH);
    config.wiki.user_agent = TEST_USER_AGENT.to_string();
    config.wiki.request_timeout = Duration::from_secs(5);
    config
}

/// Config pointing at a port nothing listens on
pub fn unreachable_config() -> Config {
    let mut config = Config::default();
    config.wiki.api_url = format!("http://127.0.0.1:1{}", API_PATH);
    config.wiki.request_timeout = Duration::from_secs(5);
    config
}

/// Start a mock server and build a reflector against it
pub async fn start_mock_wiki() -> (MockServer, WikiReflector) {
    let server = MockServer::start().await;
    let reflector = WikiReflector::new(&mock_config(&server)).expect("valid mock config");
    (server, reflector)
}
