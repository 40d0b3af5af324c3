//! # auth-flow
//!
//! Progressive OTP authentication for the Matchbook client: a login wizard,
//! a registration wizard, and the process-wide session store they populate.
//!
//! ## Core pieces
//!
//! - [`BaseAuthGateway`] — seam over the backend's OTP and account
//!   endpoints; [`matchbook_client::MatchbookClient`] is the production
//!   implementation.
//! - [`AuthSession`] — shared holder of the authenticated profile.
//!   Collaborators like the [`guard`] read it synchronously.
//! - [`LoginFlow`] — `AwaitingEmail -> AwaitingCode -> Authenticated`.
//! - [`RegistrationFlow`] — adds profile collection, the fifteen-question
//!   questionnaire, and a single atomic account submit.
//!
//! ## Invariants
//!
//! - Steps only move forward, and never skip: a code can be verified only
//!   after a code request succeeded for the same email.
//! - A failed step leaves its wizard in the pre-call state; the error is
//!   returned and exposed via `last_error()` for rendering.
//! - Nothing retries automatically; every retry is a fresh caller-issued
//!   step call. One step call in flight per wizard (caller discipline).
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use auth_flow::{AuthSession, LoginFlow, LoginStep};
//! use matchbook_client::MatchbookClient;
//!
//! let session = AuthSession::new();
//! let gateway = Arc::new(MatchbookClient::from_env()?);
//! let mut flow = LoginFlow::new(gateway, session.clone());
//!
//! flow.submit_email("a@x.com").await?;
//! assert_eq!(flow.step(), LoginStep::AwaitingCode);
//!
//! flow.submit_code("1234").await?;
//! assert!(session.is_authenticated());
//! ```

pub mod error;
pub mod gateway;
pub mod guard;
pub mod login;
pub mod questionnaire;
pub mod register;
pub mod session;
pub mod validate;

pub use error::{FlowError, Result};
pub use gateway::BaseAuthGateway;
pub use guard::{resolve, Route};
pub use login::{LoginFlow, LoginStep};
pub use questionnaire::{Questionnaire, QUESTIONS};
pub use register::{ProfileDetails, RegistrationFlow, RegistrationStep};
pub use session::AuthSession;
pub use validate::Interests;
