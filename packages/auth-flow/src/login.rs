//! Login wizard: request a passcode, verify it, done.
//!
//! Steps only move forward. There is no back-transition from
//! `AwaitingCode`; requesting a fresh code means starting a new flow,
//! matching the stateless gateway contract. The caller drives one step at
//! a time and must not overlap step calls.

use std::sync::Arc;

use tracing::info;

use crate::error::FlowError;
use crate::gateway::BaseAuthGateway;
use crate::session::AuthSession;
use crate::validate;

/// Named steps of the login flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStep {
    AwaitingEmail,
    AwaitingCode,
    Authenticated,
}

/// Two-step OTP login. On success the authenticated profile is installed
/// into the shared [`AuthSession`].
pub struct LoginFlow {
    gateway: Arc<dyn BaseAuthGateway>,
    session: AuthSession,
    step: LoginStep,
    email: String,
    last_error: Option<String>,
}

impl LoginFlow {
    pub fn new(gateway: Arc<dyn BaseAuthGateway>, session: AuthSession) -> Self {
        Self {
            gateway,
            session,
            step: LoginStep::AwaitingEmail,
            email: String::new(),
            last_error: None,
        }
    }

    /// Submit the email and request a passcode. Advances to `AwaitingCode`
    /// on success; on failure the step is unchanged and the gateway's error
    /// is surfaced.
    pub async fn submit_email(&mut self, email: &str) -> Result<(), FlowError> {
        self.last_error = None;
        if self.step != LoginStep::AwaitingEmail {
            return Err(self.fail(FlowError::Validation(
                "an email was already submitted for this login".to_string(),
            )));
        }
        if !validate::valid_email(email) {
            return Err(self.fail(FlowError::Validation(format!(
                "\"{email}\" is not a valid email address"
            ))));
        }

        match self.gateway.request_code(email).await {
            Ok(()) => {
                self.email = email.to_string();
                self.step = LoginStep::AwaitingCode;
                info!(email, "login code requested");
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Submit the passcode. On success the returned profile is installed
    /// into the session and the flow terminates in `Authenticated`. A
    /// success response without a profile is a protocol violation and
    /// leaves the step unchanged.
    pub async fn submit_code(&mut self, code: &str) -> Result<(), FlowError> {
        self.last_error = None;
        if self.step != LoginStep::AwaitingCode {
            return Err(self.fail(FlowError::Validation(
                "request a code before verifying one".to_string(),
            )));
        }
        if code.trim().is_empty() {
            return Err(self.fail(FlowError::Validation("enter the code you received".to_string())));
        }

        match self.gateway.verify_code(&self.email, code, false).await {
            Ok(Some(profile)) => {
                info!(user_id = profile.id, "login verified");
                self.session.login(profile);
                self.step = LoginStep::Authenticated;
                Ok(())
            }
            Ok(None) => Err(self.fail(FlowError::UnexpectedResponse(
                "verification succeeded but no profile was returned".to_string(),
            ))),
            Err(err) => Err(self.fail(err)),
        }
    }

    pub fn step(&self) -> LoginStep {
        self.step
    }

    /// Email remembered from the first step; empty until then.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Display text of the most recent failure, cleared on the next submit.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn fail(&mut self, err: FlowError) -> FlowError {
        self.last_error = Some(err.to_string());
        err
    }
}
