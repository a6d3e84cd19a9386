use crate::reset::error::ValidationError;
use crate::reset::error::ValidationError::{
    EmptyUsername, InvalidCodeFormat, PasswordMismatch, PasswordTooShort,
};
use std::fmt::{Debug, Formatter};

pub const CODE_LENGTH: usize = 6;
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Trim the username, which must not be empty.
pub fn validate_username(username: &str) -> Result<&str, ValidationError> {
    let username = username.trim();
    if username.is_empty() {
        Err(EmptyUsername)
    } else {
        Ok(username)
    }
}

/// Keep only what the code field accepts while the user types: digits, no more than [CODE_LENGTH].
pub fn sanitize_code(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(CODE_LENGTH)
        .collect()
}

pub fn validate_code(code: &str) -> Result<(), ValidationError> {
    if code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(InvalidCodeFormat)
    }
}

/// The new password, as typed twice by the user.
#[derive(Clone, PartialEq)]
pub struct PasswordCandidate<'a> {
    value: &'a str,
    confirmation: &'a str,
}

impl<'a> PasswordCandidate<'a> {
    pub fn new(value: &'a str, confirmation: &'a str) -> Self {
        Self {
            value,
            confirmation,
        }
    }

    pub fn value(&self) -> &'a str {
        self.value
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.value.chars().count() < MIN_PASSWORD_LENGTH {
            Err(PasswordTooShort)
        } else if self.value != self.confirmation {
            Err(PasswordMismatch)
        } else {
            Ok(())
        }
    }
}

impl Debug for PasswordCandidate<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "PasswordCandidate {{value=MASKED, confirmation=MASKED}}")
    }
}

/// Run the checks of the reset step in order, stopping at the first failure.
pub fn validate_reset(code: &str, candidate: &PasswordCandidate) -> Result<(), ValidationError> {
    validate_code(code)?;
    candidate.validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    // region validate_username
    #[test]
    fn should_trim_username() {
        assert_eq!(Ok("jdoe"), validate_username("  jdoe\t"));
    }

    #[parameterized(username = {"", "   ", "\n\t"})]
    fn should_reject_empty_username(username: &str) {
        assert_eq!(Err(EmptyUsername), validate_username(username));
    }
    // endregion

    // region sanitize_code
    #[parameterized(
        input = {"123456", "12 34 56", "1a2b3c", "12345678", "abc", "١٢٣٤٥٦"},
        expected_code = {"123456", "123456", "123", "123456", "", ""}
    )]
    fn should_sanitize_code(input: &str, expected_code: &str) {
        assert_eq!(expected_code, sanitize_code(input));
    }
    // endregion

    // region validate_code
    #[parameterized(code = {"000000", "123456", "987654"})]
    fn should_accept_code(code: &str) {
        assert_eq!(Ok(()), validate_code(code));
    }

    #[parameterized(code = {"", "12345", "1234567", "12345a", " 123456", "12 456"})]
    fn should_reject_code(code: &str) {
        assert_eq!(Err(InvalidCodeFormat), validate_code(code));
    }
    // endregion

    // region PasswordCandidate
    #[parameterized(
        value = {"abcde", "abcdef", "abcdef", "ééééé"},
        confirmation = {"abcde", "abcdeg", "abcdef", "ééééé"},
        expected_result = {Err(PasswordTooShort), Err(PasswordMismatch), Ok(()), Err(PasswordTooShort)}
    )]
    fn should_validate_password_candidate(
        value: &str,
        confirmation: &str,
        expected_result: Result<(), ValidationError>,
    ) {
        let candidate = PasswordCandidate::new(value, confirmation);

        assert_eq!(expected_result, candidate.validate());
    }

    #[test]
    fn should_mask_password_candidate_when_debugging() {
        let candidate = PasswordCandidate::new("s3cret!", "s3cret!");

        assert!(!format!("{candidate:?}").contains("s3cret!"));
    }
    // endregion

    // region validate_reset
    #[test]
    fn should_check_code_before_password() {
        let candidate = PasswordCandidate::new("abc", "xyz");

        assert_eq!(Err(InvalidCodeFormat), validate_reset("12345", &candidate));
    }

    #[test]
    fn should_check_length_before_mismatch() {
        let candidate = PasswordCandidate::new("abc", "xyz");

        assert_eq!(Err(PasswordTooShort), validate_reset("123456", &candidate));
    }
    // endregion
}
