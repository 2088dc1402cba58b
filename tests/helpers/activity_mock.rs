//! Mock activities server for testing
//!
//! Wraps a wiremock server with mounting helpers for each endpoint of the
//! activities service.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use activity_board::{
    config::Settings,
    services::ApiClient,
    state::BoardOptions,
    Dispatcher,
};
use std::time::Duration;

pub const SESSION_COOKIE: &str = "session=teacher-session";

/// Mock activities API server
pub struct ActivityMockServer {
    pub server: MockServer,
}

impl ActivityMockServer {
    /// Start a new mock server
    pub async fn new() -> Self {
        super::init_test_logging();
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Default settings pointing at this server
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        settings.api.base_url = self.uri();
        settings.api.timeout_seconds = 5;
        settings
    }

    pub fn api_client(&self) -> ApiClient {
        ApiClient::new(&self.settings().api).expect("Failed to build API client")
    }

    /// Dispatcher with a message lifetime long enough not to interfere
    pub fn dispatcher(&self) -> Dispatcher {
        self.dispatcher_with(BoardOptions {
            message_ttl: Duration::from_secs(30),
            restore_session: false,
        })
    }

    pub fn dispatcher_with(&self, options: BoardOptions) -> Dispatcher {
        Dispatcher::new(self.api_client(), options)
    }

    /// Serve the given snapshot on every activities fetch
    pub async fn mock_activities(&self, body: &str) {
        Mock::given(method("GET"))
            .and(path("/activities"))
            .respond_with(json_body(200, body))
            .mount(&self.server)
            .await;
    }

    /// Serve `body` for the next `times` fetches only
    ///
    /// Mounted before a fallback snapshot, this models data changing on the
    /// server between fetches.
    pub async fn mock_activities_times(&self, body: &str, times: u64) {
        Mock::given(method("GET"))
            .and(path("/activities"))
            .respond_with(json_body(200, body))
            .up_to_n_times(times)
            .mount(&self.server)
            .await;
    }

    /// Accept a login and set the session cookie
    pub async fn mock_login_success(&self, username: &str) {
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", format!("{}; Path=/", SESSION_COOKIE).as_str())
                    .set_body_json(json!({ "username": username, "message": "Login successful" })),
            )
            .mount(&self.server)
            .await;
    }

    pub async fn mock_login_failure(&self, detail: &str) {
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "detail": detail })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_logout(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/api/logout"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "message": "Logged out" })))
            .mount(&self.server)
            .await;
    }

    /// Mount an arbitrary response on a method and encoded path
    pub async fn mock_json(&self, http_method: &str, url_path: &str, status: u16, body: Value) {
        Mock::given(method(http_method))
            .and(path(url_path))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }
}

fn json_body(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body.as_bytes().to_vec(), "application/json")
}
