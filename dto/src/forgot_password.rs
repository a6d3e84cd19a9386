use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    username: String,
}

impl ForgotPasswordRequest {
    pub fn new(username: String) -> Self {
        Self { username }
    }
}
