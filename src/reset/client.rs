use crate::reset::error::TransportFailure;
use crate::tools::log_message_and_return;
use dto::auth_operation::AuthOperation;
use dto::auth_response::AuthResponse;
use dto::forgot_password::ForgotPasswordRequest;
use dto::reset_password::ResetPasswordRequest;
use reqwest::Client;
use reqwest::multipart::Form;
use serde::Serialize;
use std::time::Duration;

/// What came back from the auth endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome {
    /// `success: true`, with the optional message of the server.
    Accepted(Option<String>),
    /// `success: false`: the server understood the request and refused it.
    Rejected(Option<String>),
    TransportFailure(TransportFailure),
}

impl From<AuthResponse> for ApiOutcome {
    fn from(response: AuthResponse) -> Self {
        let message = response
            .message()
            .as_ref()
            .filter(|message| !message.trim().is_empty())
            .cloned();
        if *response.success() {
            ApiOutcome::Accepted(message)
        } else {
            ApiOutcome::Rejected(message)
        }
    }
}

/// Client of the backend auth endpoint.
/// Each call is a multipart form with an `operation` field and a `json` field holding the payload.
#[derive(Debug, Clone)]
pub struct AuthClient {
    client: Client,
    endpoint: String,
}

impl AuthClient {
    pub fn new(client: Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }

    pub async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
        timeout: Duration,
    ) -> ApiOutcome {
        self.post(AuthOperation::ForgotPassword, request, Some(timeout))
            .await
            .unwrap_or_else(ApiOutcome::TransportFailure)
    }

    /// No explicit timeout here: the transport default applies.
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> ApiOutcome {
        self.post(AuthOperation::ResetPassword, request, None)
            .await
            .unwrap_or_else(ApiOutcome::TransportFailure)
    }

    async fn post<P: Serialize>(
        &self,
        operation: AuthOperation,
        payload: &P,
        timeout: Option<Duration>,
    ) -> Result<ApiOutcome, TransportFailure> {
        let json = serde_json::to_string(payload).map_err(log_message_and_return(
            "Can't serialize auth payload",
            TransportFailure::Unknown,
        ))?;
        let form = Form::new()
            .text("operation", operation.as_str())
            .text("json", json);

        let mut request = self.client.post(&self.endpoint).multipart(form);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        debug!("Calling auth endpoint [operation: {operation}]");
        let response = request.send().await.map_err(|error| {
            let failure = classify_error(&error);
            error!("Auth request failed [operation: {operation}]\n{error:#?}");
            failure
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("Server error [operation: {operation}, status: {status}]");
            return Err(TransportFailure::Http(status.as_u16()));
        }

        let body = response.text().await.map_err(|error| {
            let failure = classify_error(&error);
            error!("Can't read auth response [operation: {operation}]\n{error:#?}");
            failure
        })?;
        let response: AuthResponse = serde_json::from_str(&body).map_err(
            log_message_and_return("Auth response is malformed", TransportFailure::Unknown),
        )?;

        Ok(response.into())
    }
}

fn classify_error(error: &reqwest::Error) -> TransportFailure {
    if error.is_timeout() {
        TransportFailure::TimedOut
    } else if error.is_connect() {
        TransportFailure::Unreachable
    } else if let Some(status) = error.status() {
        TransportFailure::Http(status.as_u16())
    } else {
        TransportFailure::Unknown
    }
}
