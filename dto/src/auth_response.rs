use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Body returned by the auth endpoint for every operation.
/// A `false` success flag is an application-level failure, even though the HTTP status is OK.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct AuthResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

impl AuthResponse {
    pub fn new(success: bool, message: Option<String>) -> Self {
        Self { success, message }
    }
}
