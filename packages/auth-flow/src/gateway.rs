//! Gateway seam for the OTP backend.
//!
//! The wizards talk to the backend through `BaseAuthGateway` so tests can
//! substitute a scripted gateway. `MatchbookClient` is the production
//! implementation; client errors map onto the flow taxonomy via `From`.

use async_trait::async_trait;
use matchbook_client::{MatchbookClient, NewUser, UserProfile};

use crate::error::FlowError;

/// Backend operations the auth flows depend on.
///
/// Stateless by contract: one request per call, no caching, no retry. A
/// caller retries by invoking the method again.
#[async_trait]
pub trait BaseAuthGateway: Send + Sync {
    /// Ask the backend to deliver a one-time passcode for `email`.
    async fn request_code(&self, email: &str) -> Result<(), FlowError>;

    /// Submit a passcode. `registration` selects the server's sign-up
    /// branch. Login success carries the user's profile; registration
    /// success is a bare acknowledgment (`None`).
    async fn verify_code(
        &self,
        email: &str,
        code: &str,
        registration: bool,
    ) -> Result<Option<UserProfile>, FlowError>;

    /// Create the account in a single atomic request.
    async fn create_account(&self, account: NewUser) -> Result<UserProfile, FlowError>;
}

#[async_trait]
impl BaseAuthGateway for MatchbookClient {
    async fn request_code(&self, email: &str) -> Result<(), FlowError> {
        Ok(self.send_otp(email).await?)
    }

    async fn verify_code(
        &self,
        email: &str,
        code: &str,
        registration: bool,
    ) -> Result<Option<UserProfile>, FlowError> {
        Ok(self.verify_otp(email, code, registration).await?)
    }

    async fn create_account(&self, account: NewUser) -> Result<UserProfile, FlowError> {
        Ok(self.create_user(&account).await?)
    }
}
