use crate::tools::env_args::{retrieve_arg_value, retrieve_arg_value_or};
use derive_getters::Getters;
use std::time::Duration;

pub const AUTH_ENDPOINT_PATH: &str = "/intro/api/auth.php";
pub const DEFAULT_LOGIN_PATH: &str = "/intro/login.php";
pub const DEFAULT_API_ORIGIN: &str = "http://localhost";
pub const DEFAULT_REQUEST_CODE_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_secs(2);

const API_ORIGIN_ARG: &[&str] = &["-o", "--api-origin"];
const LOGIN_URL_ARG: &[&str] = &["--login-url"];

#[derive(Debug, Clone, PartialEq, Getters)]
pub struct ResetFlowConfig {
    /// Scheme, host and port of the backend, without trailing slash.
    api_origin: String,
    /// Where the user is sent once the password has been changed.
    login_url: String,
    request_code_timeout: Duration,
    redirect_delay: Duration,
}

impl ResetFlowConfig {
    pub fn new(api_origin: String, login_url: String) -> Self {
        Self {
            api_origin: api_origin.trim_end_matches('/').to_owned(),
            login_url,
            request_code_timeout: DEFAULT_REQUEST_CODE_TIMEOUT,
            redirect_delay: DEFAULT_REDIRECT_DELAY,
        }
    }

    /// Config pointing at `api_origin`, with the login page served by the same backend.
    pub fn for_origin(api_origin: &str) -> Self {
        let api_origin = api_origin.trim_end_matches('/');
        Self::new(
            api_origin.to_owned(),
            format!("{api_origin}{DEFAULT_LOGIN_PATH}"),
        )
    }

    /// Build the config from the args passed to the app (`--api-origin=`, `--login-url=`).
    pub fn from_args() -> Self {
        let api_origin = retrieve_arg_value_or(API_ORIGIN_ARG, DEFAULT_API_ORIGIN);
        let config = Self::for_origin(&api_origin);
        match retrieve_arg_value(LOGIN_URL_ARG).filter(|url| !url.is_empty()) {
            Some(login_url) => Self::new(config.api_origin, login_url),
            None => config,
        }
    }

    pub fn with_request_code_timeout(mut self, request_code_timeout: Duration) -> Self {
        self.request_code_timeout = request_code_timeout;
        self
    }

    pub fn with_redirect_delay(mut self, redirect_delay: Duration) -> Self {
        self.redirect_delay = redirect_delay;
        self
    }

    pub fn auth_endpoint(&self) -> String {
        format!("{}{AUTH_ENDPOINT_PATH}", self.api_origin)
    }
}

impl Default for ResetFlowConfig {
    fn default() -> Self {
        Self::for_origin(DEFAULT_API_ORIGIN)
    }
}
