//! Pure Matchbook REST API client.
//!
//! A minimal client for the Matchbook backend. Covers the OTP endpoints
//! (request a passcode, verify it), account creation, and the user/match
//! endpoints consumed by the profile screens.
//!
//! # Example
//!
//! ```rust,ignore
//! use matchbook_client::MatchbookClient;
//!
//! let client = MatchbookClient::new("http://localhost:8000".into());
//!
//! client.send_otp("a@example.com").await?;
//! let profile = client.verify_otp("a@example.com", "1234", false).await?;
//! ```

pub mod error;
pub mod types;

pub use error::{ClientError, Result};
pub use types::{NewUser, UserProfile};

use serde_json::Value;
use types::ErrorBody;

/// Environment variable holding the backend base URL.
const BASE_URL_VAR: &str = "MATCHBOOK_API_URL";

pub struct MatchbookClient {
    client: reqwest::Client,
    base_url: String,
}

impl MatchbookClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a client from `MATCHBOOK_API_URL`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_VAR)
            .map_err(|_| ClientError::Config(format!("{} is not set", BASE_URL_VAR)))?;
        Ok(Self::new(base_url))
    }

    /// Request a one-time passcode for `email`. The backend delivers the
    /// code out-of-band; the success body is ignored.
    pub async fn send_otp(&self, email: &str) -> Result<()> {
        let url = format!("{}/users/send-otp", self.base_url);
        let resp = self
            .client
            .post(&url)
            .query(&[("user_email", email)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(api_error(status.as_u16(), resp.text().await.unwrap_or_default()));
        }

        tracing::debug!(email, "OTP requested");
        Ok(())
    }

    /// Verify a one-time passcode. `registration` selects the sign-up branch
    /// on the server. On the login branch the success body is a list whose
    /// first element is the user's profile; the registration branch answers
    /// with a bare acknowledgment, which maps to `None`.
    pub async fn verify_otp(
        &self,
        email: &str,
        code: &str,
        registration: bool,
    ) -> Result<Option<UserProfile>> {
        let url = format!("{}/users/verify-otp", self.base_url);
        let reg = if registration { "true" } else { "false" };
        let resp = self
            .client
            .post(&url)
            .query(&[("user_email", email), ("otp", code), ("reg", reg)])
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(api_error(status.as_u16(), body));
        }

        tracing::debug!(email, registration, "OTP verified");
        parse_verify_body(&body)
    }

    /// Create an account. The draft is submitted in a single request; the
    /// backend responds with the stored profile.
    pub async fn create_user(&self, user: &NewUser) -> Result<UserProfile> {
        let url = format!("{}/users/", self.base_url);
        let resp = self.client.post(&url).json(user).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(api_error(status.as_u16(), resp.text().await.unwrap_or_default()));
        }

        let profile: UserProfile = resp
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;
        tracing::info!(user_id = profile.id, "account created");
        Ok(profile)
    }

    /// Fetch a user by id.
    pub async fn get_user(&self, user_id: i64) -> Result<UserProfile> {
        let url = format!("{}/users/{}", self.base_url, user_id);
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(api_error(status.as_u16(), resp.text().await.unwrap_or_default()));
        }

        resp.json().await.map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Replace a user's profile.
    pub async fn update_user(&self, user_id: i64, user: &NewUser) -> Result<UserProfile> {
        let url = format!("{}/users/{}", self.base_url, user_id);
        let resp = self.client.put(&url).json(user).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(api_error(status.as_u16(), resp.text().await.unwrap_or_default()));
        }

        resp.json().await.map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Delete a user's account. Callers owning a session for this user are
    /// expected to log it out afterwards.
    pub async fn delete_user(&self, user_id: i64) -> Result<()> {
        let url = format!("{}/users/{}", self.base_url, user_id);
        let resp = self.client.delete(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(api_error(status.as_u16(), resp.text().await.unwrap_or_default()));
        }

        tracing::info!(user_id, "account deleted");
        Ok(())
    }

    /// Fetch the match list for a user, best score first.
    pub async fn find_matches(&self, user_id: i64) -> Result<Vec<UserProfile>> {
        let url = format!("{}/users/{}/matches", self.base_url, user_id);
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(api_error(status.as_u16(), resp.text().await.unwrap_or_default()));
        }

        resp.json().await.map_err(|e| ClientError::Parse(e.to_string()))
    }
}

/// Build an `Api` error from a non-2xx response, preferring the backend's
/// `detail` text over the raw body.
fn api_error(status: u16, body: String) -> ClientError {
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|e| e.detail)
        .unwrap_or(body);
    ClientError::Api { status, message }
}

/// Interpret a successful verify-OTP body. A JSON list of profiles yields
/// its first element; an empty list or a non-list acknowledgment yields
/// `None`.
fn parse_verify_body(body: &str) -> Result<Option<UserProfile>> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return Ok(None),
    };
    if !value.is_array() {
        return Ok(None);
    }
    let profiles: Vec<UserProfile> =
        serde_json::from_value(value).map_err(|e| ClientError::Parse(e.to_string()))?;
    Ok(profiles.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_body_login_returns_first_profile() {
        let body = r#"[{"id":1,"name":"A","age":30,"gender":"Female","email":"a@x.com","city":"X","interests":["x","y"]}]"#;
        let profile = parse_verify_body(body).unwrap();
        let profile = profile.expect("login body should yield a profile");
        assert_eq!(profile.id, 1);
        assert_eq!(profile.name, "A");
        assert_eq!(profile.interests, vec!["x", "y"]);
    }

    #[test]
    fn test_verify_body_ack_returns_none() {
        assert!(parse_verify_body("").unwrap().is_none());
        assert!(parse_verify_body("null").unwrap().is_none());
        assert!(parse_verify_body(r#"{"message":"OTP verified"}"#).unwrap().is_none());
        assert!(parse_verify_body("[]").unwrap().is_none());
    }

    #[test]
    fn test_verify_body_malformed_list_is_parse_error() {
        let body = r#"[{"id":"not-a-number"}]"#;
        let err = parse_verify_body(body).unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }

    #[test]
    fn test_api_error_prefers_detail_field() {
        let err = api_error(400, r#"{"detail":"Invalid OTP"}"#.to_string());
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid OTP");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_api_error_falls_back_to_raw_body() {
        let err = api_error(502, "Bad Gateway".to_string());
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_profile_missing_interests_defaults_to_empty() {
        let body = r#"{"id":2,"name":"B","age":25,"gender":"Male","email":"b@x.com","city":"Y"}"#;
        let profile: UserProfile = serde_json::from_str(body).unwrap();
        assert!(profile.interests.is_empty());
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = MatchbookClient::new("http://localhost:8000/".into());
        assert_eq!(client.base_url, "http://localhost:8000");
    }
}
