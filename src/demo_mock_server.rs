use crate::reset::config::AUTH_ENDPOINT_PATH;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const DEMO_USERNAME: &str = "demo";
pub const DEMO_CODE: &str = "123456";

/// Start a fake auth backend, so the whole flow can be tried without the real one.
/// Only [DEMO_USERNAME] receives a code, and only [DEMO_CODE] resets the password.
/// The server stops when the returned value is dropped.
pub async fn init_demo() -> MockServer {
    let mock_server = MockServer::start().await;
    mock_forgot_password(&mock_server).await;
    mock_reset_password(&mock_server).await;
    info!("Demo auth backend listening on {}", mock_server.uri());

    mock_server
}

async fn mock_forgot_password(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(AUTH_ENDPOINT_PATH))
        .and(body_string_contains("forgotPassword"))
        .and(body_string_contains(format!(
            r#"{{"username":"{DEMO_USERNAME}"}}"#
        )))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"{{"success":true,"message":"A code has been sent to your email address (hint: {DEMO_CODE})."}}"#
        )))
        .with_priority(1)
        .mount(mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path(AUTH_ENDPOINT_PATH))
        .and(body_string_contains("forgotPassword"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"success":false,"message":"No account matches this username."}"#,
        ))
        .with_priority(2)
        .mount(mock_server)
        .await;
}

async fn mock_reset_password(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(AUTH_ENDPOINT_PATH))
        .and(body_string_contains("resetPassword"))
        .and(body_string_contains(format!(r#""code":"{DEMO_CODE}""#)))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"success":true,"message":"Your password has been changed."}"#,
        ))
        .with_priority(1)
        .mount(mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path(AUTH_ENDPOINT_PATH))
        .and(body_string_contains("resetPassword"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"success":false,"message":"The verification code is invalid or has expired."}"#,
        ))
        .with_priority(2)
        .mount(mock_server)
        .await;
}
