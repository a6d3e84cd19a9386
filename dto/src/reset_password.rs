use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

#[derive(Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    code: String,
    new_password: String,
}

impl ResetPasswordRequest {
    pub fn new(code: String, new_password: String) -> Self {
        Self { code, new_password }
    }
}

impl Debug for ResetPasswordRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ResetPasswordRequest {{code=MASKED, new_password=MASKED}}"
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::reset_password::ResetPasswordRequest;

    #[test]
    fn should_serialize_with_endpoint_field_names() {
        let request = ResetPasswordRequest::new("123456".to_owned(), "s3cret!".to_owned());

        let json = serde_json::to_string(&request).unwrap();

        assert_eq!(r#"{"code":"123456","newPassword":"s3cret!"}"#, json);
    }

    #[test]
    fn should_mask_secrets_when_debugging() {
        let request = ResetPasswordRequest::new("123456".to_owned(), "s3cret!".to_owned());

        let debug = format!("{request:?}");

        assert!(!debug.contains("123456"));
        assert!(!debug.contains("s3cret!"));
    }
}
