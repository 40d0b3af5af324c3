//! Registration wizard: verify the email, collect the profile, collect the
//! questionnaire, submit once.
//!
//! The draft lives only inside the flow and is sent to the backend in a
//! single atomic request; nothing is persisted partially. Profile fields
//! and the questionnaire are collected in separate steps because the
//! questionnaire is long and its prompt set can evolve independently of
//! the profile shape.

use std::sync::Arc;

use matchbook_client::NewUser;
use tracing::info;

use crate::error::FlowError;
use crate::gateway::BaseAuthGateway;
use crate::questionnaire::Questionnaire;
use crate::session::AuthSession;
use crate::validate::{self, Interests};

/// Named steps of the registration flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStep {
    AwaitingEmail,
    AwaitingCode,
    CollectingProfile,
    CollectingQuestionnaire,
    Submitting,
    Authenticated,
}

/// Profile attributes as entered on the details form.
#[derive(Debug, Clone)]
pub struct ProfileDetails {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub city: String,
    pub interests: Interests,
}

/// Client-only accumulation of the data to register with. Discarded with
/// the flow on success or abandonment.
#[derive(Debug, Clone, Default)]
struct RegistrationDraft {
    name: String,
    age: u32,
    gender: String,
    city: String,
    interests: Vec<String>,
    questionnaire: Questionnaire,
}

/// Four-step OTP registration. On success the backend-issued profile is
/// installed into the shared [`AuthSession`].
pub struct RegistrationFlow {
    gateway: Arc<dyn BaseAuthGateway>,
    session: AuthSession,
    step: RegistrationStep,
    email: String,
    draft: RegistrationDraft,
    last_error: Option<String>,
}

impl RegistrationFlow {
    pub fn new(gateway: Arc<dyn BaseAuthGateway>, session: AuthSession) -> Self {
        Self {
            gateway,
            session,
            step: RegistrationStep::AwaitingEmail,
            email: String::new(),
            draft: RegistrationDraft::default(),
            last_error: None,
        }
    }

    /// Submit the email and request a passcode. Same contract as the login
    /// flow's first step.
    pub async fn submit_email(&mut self, email: &str) -> Result<(), FlowError> {
        self.last_error = None;
        if self.step != RegistrationStep::AwaitingEmail {
            return Err(self.fail(FlowError::Validation(
                "an email was already submitted for this registration".to_string(),
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
                self.step = RegistrationStep::AwaitingCode;
                info!(email, "registration code requested");
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Submit the passcode on the registration branch. Success is a bare
    /// acknowledgment; no identity exists yet, so none is installed.
    pub async fn submit_code(&mut self, code: &str) -> Result<(), FlowError> {
        self.last_error = None;
        if self.step != RegistrationStep::AwaitingCode {
            return Err(self.fail(FlowError::Validation(
                "request a code before verifying one".to_string(),
            )));
        }
        if code.trim().is_empty() {
            return Err(self.fail(FlowError::Validation("enter the code you received".to_string())));
        }

        match self.gateway.verify_code(&self.email, code, true).await {
            Ok(_) => {
                self.step = RegistrationStep::CollectingProfile;
                info!(email = %self.email, "registration email verified");
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Merge the profile attributes into the draft. All fields are
    /// validated locally before the transition; no backend call happens
    /// here.
    pub fn submit_profile(&mut self, details: ProfileDetails) -> Result<(), FlowError> {
        self.last_error = None;
        if self.step != RegistrationStep::CollectingProfile {
            return Err(self.fail(FlowError::Validation(
                "verify your email before filling in details".to_string(),
            )));
        }

        let name = details.name.trim();
        let gender = details.gender.trim();
        let city = details.city.trim();
        let interests = details.interests.normalize();

        if name.is_empty() {
            return Err(self.fail(FlowError::Validation("name is required".to_string())));
        }
        if details.age == 0 {
            return Err(self.fail(FlowError::Validation("age is required".to_string())));
        }
        if gender.is_empty() {
            return Err(self.fail(FlowError::Validation("gender is required".to_string())));
        }
        if city.is_empty() {
            return Err(self.fail(FlowError::Validation("city is required".to_string())));
        }
        if interests.is_empty() {
            return Err(self.fail(FlowError::Validation(
                "at least one interest is required".to_string(),
            )));
        }

        self.draft.name = name.to_string();
        self.draft.age = details.age;
        self.draft.gender = gender.to_string();
        self.draft.city = city.to_string();
        self.draft.interests = interests;
        self.step = RegistrationStep::CollectingQuestionnaire;
        Ok(())
    }

    /// Record one questionnaire answer. Purely local, callable in any
    /// order, last write per question wins.
    pub fn answer_question(&mut self, question: &str, answer: &str) -> Result<(), FlowError> {
        if self.step != RegistrationStep::CollectingQuestionnaire {
            return Err(self.fail(FlowError::Validation(
                "fill in your details before the questionnaire".to_string(),
            )));
        }
        self.draft.questionnaire.answer(question, answer);
        Ok(())
    }

    /// Submit the whole draft in one request. Requires every canonical
    /// question to be answered; on backend failure the flow reverts to
    /// `CollectingQuestionnaire` so the caller can retry.
    pub async fn submit_registration(&mut self) -> Result<(), FlowError> {
        self.last_error = None;
        if self.step != RegistrationStep::CollectingQuestionnaire {
            return Err(self.fail(FlowError::Validation(
                "complete the earlier steps before submitting".to_string(),
            )));
        }
        let missing = self.draft.questionnaire.missing();
        if !missing.is_empty() {
            return Err(self.fail(FlowError::Validation(format!(
                "{} questionnaire answers are missing",
                missing.len()
            ))));
        }

        self.step = RegistrationStep::Submitting;
        let draft = self.draft.clone();
        let account = NewUser {
            name: draft.name,
            age: draft.age,
            gender: draft.gender,
            email: self.email.clone(),
            city: draft.city,
            interests: draft.interests,
            questionnaire: draft.questionnaire.into_answers(),
        };

        match self.gateway.create_account(account).await {
            Ok(profile) => {
                info!(user_id = profile.id, "registration complete");
                self.session.login(profile);
                self.step = RegistrationStep::Authenticated;
                Ok(())
            }
            Err(err) => {
                self.step = RegistrationStep::CollectingQuestionnaire;
                let err = match err {
                    FlowError::Rejected(msg) if msg.trim().is_empty() => {
                        FlowError::Rejected("Registration failed".to_string())
                    }
                    other => other,
                };
                Err(self.fail(err))
            }
        }
    }

    pub fn step(&self) -> RegistrationStep {
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
