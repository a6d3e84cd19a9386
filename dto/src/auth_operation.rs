use std::fmt::{Display, Formatter};

/// Operations understood by the auth endpoint, sent in the `operation` form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOperation {
    ForgotPassword,
    ResetPassword,
}

impl AuthOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthOperation::ForgotPassword => "forgotPassword",
            AuthOperation::ResetPassword => "resetPassword",
        }
    }
}

impl Display for AuthOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
