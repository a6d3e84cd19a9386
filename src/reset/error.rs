use crate::reset::phase::FlowPhase;
use thiserror::Error;

pub type Result<T, E = ResetError> = std::result::Result<T, E>;

const DEFAULT_NETWORK_MESSAGE: &str = "Unable to reach the server. Please try again.";

/// Local checks run before anything is sent to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your username.")]
    EmptyUsername,
    #[error("The verification code must be exactly 6 digits.")]
    InvalidCodeFormat,
    #[error("The new password must be at least 6 characters long.")]
    PasswordTooShort,
    #[error("The passwords do not match.")]
    PasswordMismatch,
}

/// Why a request didn't produce a usable answer from the server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportFailure {
    #[error("The request timed out. Please try again.")]
    TimedOut,
    #[error("The server answered with an error [status: {0}]. Please try again later.")]
    Http(u16),
    #[error("The server can't be reached. Please check your connection.")]
    Unreachable,
    #[error("An unexpected error has occurred. Please try again.")]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResetError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("This step is not available right now [phase: {0}].")]
    UnexpectedPhase(FlowPhase),
    #[error("The request timed out. Please try again.")]
    Timeout,
    #[error("{0}")]
    Network(TransportFailure),
    #[error("{0}")]
    ServerRejection(String),
}

impl ResetError {
    /// Message shown when a failure can't be described more precisely to the user.
    pub fn generic_network_message() -> &'static str {
        DEFAULT_NETWORK_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use crate::reset::error::{ResetError, TransportFailure, ValidationError};

    #[test]
    fn should_display_server_message_as_is() {
        let error = ResetError::ServerRejection("bad code".to_owned());

        assert_eq!("bad code", error.to_string());
    }

    #[test]
    fn should_display_validation_message() {
        let error = ResetError::from(ValidationError::PasswordMismatch);

        assert_eq!("The passwords do not match.", error.to_string());
    }

    #[test]
    fn should_display_http_status() {
        let error = ResetError::Network(TransportFailure::Http(502));

        assert!(error.to_string().contains("502"));
    }
}
