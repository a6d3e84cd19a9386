pub mod auth_operation;
pub mod auth_response;
pub mod forgot_password;
pub mod reset_password;
