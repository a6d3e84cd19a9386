pub mod client;
pub mod config;
pub mod error;
pub mod hooks;
pub mod phase;
pub mod strength;
pub mod validation;

use crate::reset::client::{ApiOutcome, AuthClient};
use crate::reset::config::ResetFlowConfig;
use crate::reset::error::ResetError::{Network, ServerRejection, Timeout, UnexpectedPhase};
use crate::reset::error::{ResetError, Result, TransportFailure};
use crate::reset::hooks::FlowHooks;
use crate::reset::phase::FlowPhase::{CodeSent, Done, Idle, RequestingCode, ResettingPassword};
use crate::reset::phase::{FlowPhase, ResetSession};
use crate::reset::validation::{PasswordCandidate, validate_reset, validate_username};
use dto::forgot_password::ForgotPasswordRequest;
use dto::reset_password::ResetPasswordRequest;
use reqwest::Client;
use std::sync::Arc;

const CODE_SENT_MESSAGE: &str = "A verification code has been sent.";
const PASSWORD_RESET_MESSAGE: &str =
    "Your password has been reset. You will be redirected to the login page.";
const REJECTED_MESSAGE: &str = "The request has been rejected. Please check your input.";

/// Drive the two steps of a password reset: ask for a code, then submit it with a new password.
///
/// Every input is validated before anything is sent. Failures are all recoverable:
/// they are returned, reported through [FlowHooks::on_error],
/// and the controller goes back to a phase from which the user can submit again.
pub struct ResetFlowController {
    client: AuthClient,
    config: ResetFlowConfig,
    hooks: Arc<dyn FlowHooks>,
    phase: FlowPhase,
    session: Option<ResetSession>,
}

impl ResetFlowController {
    pub fn new(config: ResetFlowConfig, client: Client, hooks: Arc<dyn FlowHooks>) -> Self {
        let client = AuthClient::new(client, config.auth_endpoint());
        Self {
            client,
            config,
            hooks,
            phase: Idle,
            session: None,
        }
    }

    pub fn phase(&self) -> FlowPhase {
        self.phase
    }

    pub fn session(&self) -> Option<&ResetSession> {
        self.session.as_ref()
    }

    /// Ask the server to send a verification code for `username`.
    /// Only available from [FlowPhase::Idle]; leads to [FlowPhase::CodeSent] on success.
    pub async fn request_code(&mut self, username: &str) -> Result<()> {
        if self.phase != Idle {
            return Err(self.fail(UnexpectedPhase(self.phase)));
        }
        let username = match validate_username(username) {
            Ok(username) => username.to_owned(),
            Err(error) => return Err(self.fail(error.into())),
        };
        debug!("Requesting a reset code [username: {username}]");

        let request = ForgotPasswordRequest::new(username.clone());
        let outcome = {
            let in_flight = InFlight::begin(&mut self.phase, &*self.hooks, RequestingCode, Idle);
            let outcome = self
                .client
                .forgot_password(&request, *self.config.request_code_timeout())
                .await;
            if let ApiOutcome::Accepted(_) = outcome {
                self.session = Some(ResetSession::new(username));
                in_flight.settle(CodeSent);
            }
            outcome
        };

        match outcome {
            ApiOutcome::Accepted(message) => {
                info!("Reset code sent");
                self.hooks
                    .on_success(message.as_deref().unwrap_or(CODE_SENT_MESSAGE));
                Ok(())
            }
            ApiOutcome::Rejected(message) => Err(self.fail(ServerRejection(
                message.unwrap_or_else(|| REJECTED_MESSAGE.to_owned()),
            ))),
            ApiOutcome::TransportFailure(TransportFailure::TimedOut) => Err(self.fail(Timeout)),
            ApiOutcome::TransportFailure(failure) => Err(self.fail(Network(failure))),
        }
    }

    /// Submit the received code along with the new password, typed twice.
    /// Only available from [FlowPhase::CodeSent]. On success, the flow is [FlowPhase::Done]
    /// and [FlowHooks::on_redirect] is called once the redirect delay has elapsed.
    pub async fn submit_reset(
        &mut self,
        code: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<()> {
        if self.phase != CodeSent {
            return Err(self.fail(UnexpectedPhase(self.phase)));
        }
        let candidate = PasswordCandidate::new(new_password, confirm_password);
        if let Err(error) = validate_reset(code, &candidate) {
            return Err(self.fail(error.into()));
        }

        let request = ResetPasswordRequest::new(code.to_owned(), candidate.value().to_owned());
        let outcome = {
            let in_flight =
                InFlight::begin(&mut self.phase, &*self.hooks, ResettingPassword, CodeSent);
            let outcome = self.client.reset_password(&request).await;
            if let ApiOutcome::Accepted(_) = outcome {
                in_flight.settle(Done);
            }
            outcome
        };

        match outcome {
            ApiOutcome::Accepted(message) => {
                if let Some(session) = self.session.take() {
                    info!("Password has been reset [username: {}]", session.username());
                }
                self.hooks
                    .on_success(message.as_deref().unwrap_or(PASSWORD_RESET_MESSAGE));
                self.schedule_redirect();
                Ok(())
            }
            ApiOutcome::Rejected(message) => Err(self.fail(ServerRejection(
                message.unwrap_or_else(|| REJECTED_MESSAGE.to_owned()),
            ))),
            ApiOutcome::TransportFailure(failure) => Err(self.fail_with_message(
                Network(failure),
                ResetError::generic_network_message(),
            )),
        }
    }

    /// Forget the current session and go back to the code request.
    pub fn start_over(&mut self) -> Result<()> {
        match self.phase {
            Idle => Ok(()),
            CodeSent => {
                self.session = None;
                set_phase(&mut self.phase, &*self.hooks, Idle);
                Ok(())
            }
            phase => Err(self.fail(UnexpectedPhase(phase))),
        }
    }

    /// Fire and forget: the redirect can't be cancelled once the password has changed.
    fn schedule_redirect(&self) {
        let hooks = Arc::clone(&self.hooks);
        let destination = self.config.login_url().clone();
        let delay = *self.config.redirect_delay();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            debug!("Redirecting to login page [destination: {destination}]");
            hooks.on_redirect(&destination);
        });
    }

    fn fail(&self, error: ResetError) -> ResetError {
        let message = error.to_string();
        self.fail_with_message(error, &message)
    }

    fn fail_with_message(&self, error: ResetError, message: &str) -> ResetError {
        warn!("Reset flow step failed [phase: {}]: {error:?}", self.phase);
        self.hooks.on_error(message);
        error
    }
}

fn set_phase(phase: &mut FlowPhase, hooks: &dyn FlowHooks, next: FlowPhase) {
    debug!("Reset flow phase: {phase} -> {next}");
    *phase = next;
    hooks.on_phase_change(next);
}

/// Holds the flow in a busy phase while a request is in flight.
/// Unless settled, the fallback phase is restored when dropped, including when the request
/// future is dropped before completion.
struct InFlight<'a> {
    phase: &'a mut FlowPhase,
    hooks: &'a dyn FlowHooks,
    fallback: FlowPhase,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn begin(
        phase: &'a mut FlowPhase,
        hooks: &'a dyn FlowHooks,
        busy: FlowPhase,
        fallback: FlowPhase,
    ) -> Self {
        set_phase(phase, hooks, busy);
        Self {
            phase,
            hooks,
            fallback,
            settled: false,
        }
    }

    fn settle(mut self, next: FlowPhase) {
        set_phase(self.phase, self.hooks, next);
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            set_phase(self.phase, self.hooks, self.fallback);
        }
    }
}
