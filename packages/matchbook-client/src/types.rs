//! Request and response types for the Matchbook API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A registered user as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub email: String,
    pub city: String,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// Payload for account creation. Interests are already normalized and the
/// questionnaire maps question text to the user's answer.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub email: String,
    pub city: String,
    pub interests: Vec<String>,
    pub questionnaire: HashMap<String, String>,
}

/// Error body shape used by the backend (`{"detail": "..."}`).
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: Option<String>,
}
