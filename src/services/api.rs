//! Activities API client
//!
//! Typed wrappers over the HTTP endpoints of the sign-up service. Every
//! non-OK response is turned into `BoardError::Rejected` carrying the
//! server's `detail` text when the body has one.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;
use crate::config::ApiConfig;
use crate::models::{
    Activities, CurrentUser, ErrorResponse, LoginRequest, LoginResponse, MessageResponse,
    StudentRequest,
};
use crate::utils::errors::{BoardError, Result};

/// HTTP client for the activities API
///
/// Cloning is cheap and clones share the cookie store, so the session
/// cookie set by a login is sent by every clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new ApiClient instance
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .cookie_store(true)
            .build()?;

        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(BoardError::Config(format!(
                "API base URL cannot be used as a base: {}",
                config.base_url
            )));
        }

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL, percent-encoding each path segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| BoardError::Config(format!("API base URL cannot be used as a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Fetch the current activities snapshot
    pub async fn fetch_activities(&self) -> Result<Activities> {
        let url = self.endpoint(&["activities"])?;
        debug!(url = %url, "Fetching activities");

        let response = check_status(self.client.get(url).send().await?).await?;
        let activities: Activities = response.json().await?;

        debug!(count = activities.len(), "Fetched activities");
        Ok(activities)
    }

    /// Log in as a teacher with form-encoded credentials
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let url = self.endpoint(&["api", "login"])?;
        debug!(url = %url, username = username, "Sending login request");

        let form = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = check_status(self.client.post(url).form(&form).send().await?).await?;

        Ok(response.json().await?)
    }

    /// End the teacher session
    pub async fn logout(&self) -> Result<()> {
        let url = self.endpoint(&["api", "logout"])?;
        debug!(url = %url, "Sending logout request");

        check_status(self.client.post(url).send().await?).await?;
        Ok(())
    }

    /// Ask the server who is logged in for the current cookie, if anyone
    pub async fn current_user(&self) -> Result<Option<CurrentUser>> {
        let url = self.endpoint(&["auth", "me"])?;
        debug!(url = %url, "Checking current session");

        let response = check_status(self.client.get(url).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Sign a student up for an activity
    pub async fn signup(&self, activity: &str, email: &str) -> Result<()> {
        let url = self.endpoint(&["activities", activity, "signup"])?;
        debug!(url = %url, email = email, "Sending signup request");

        let request = self.client.post(url).query(&[("email", email)]);
        check_status(request.send().await?).await?;
        Ok(())
    }

    /// Remove a student from an activity
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<()> {
        let url = self.endpoint(&["activities", activity, "unregister"])?;
        debug!(url = %url, email = email, "Sending unregister request");

        let request = self.client.delete(url).query(&[("email", email)]);
        check_status(request.send().await?).await?;
        Ok(())
    }

    /// Register a student through the teacher endpoint
    ///
    /// Returns the server's confirmation message, if it sent one.
    pub async fn register_student(&self, activity: &str, email: &str) -> Result<Option<String>> {
        let url = self.endpoint(&["api", "activities", activity, "register"])?;
        debug!(url = %url, email = email, "Sending teacher register request");

        self.post_student(url, email).await
    }

    /// Unregister a student through the teacher endpoint
    pub async fn unregister_student(&self, activity: &str, email: &str) -> Result<Option<String>> {
        let url = self.endpoint(&["api", "activities", activity, "unregister"])?;
        debug!(url = %url, email = email, "Sending teacher unregister request");

        self.post_student(url, email).await
    }

    async fn post_student(&self, url: Url, email: &str) -> Result<Option<String>> {
        let body = StudentRequest { student_email: email };
        let response = check_status(self.client.post(url).json(&body).send().await?).await?;

        let payload: MessageResponse = parse_lenient(response).await?;
        Ok(payload.message)
    }
}

/// Turn a non-OK response into `BoardError::Rejected`
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorResponse>(&text)
        .ok()
        .and_then(ErrorResponse::into_text);

    debug!(status = status.as_u16(), detail = ?detail, "Request rejected");
    Err(BoardError::Rejected {
        status: status.as_u16(),
        detail,
    })
}

/// Decode an optional JSON body; an empty body yields the default value
async fn parse_lenient<T: DeserializeOwned + Default>(response: Response) -> Result<T> {
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(T::default());
    }
    Ok(serde_json::from_str(&text)?)
}
