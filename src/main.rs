use log::error;
use reset_flow::reset::ResetFlowController;
use reset_flow::reset::config::ResetFlowConfig;
use reset_flow::reset::hooks::FlowHooks;
use reset_flow::reset::phase::FlowPhase;
use reset_flow::reset::strength::StrengthBand;
use reset_flow::reset::validation::sanitize_code;
use reset_flow::tools::web::build_client;
use std::io::{BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::Notify;

/// Terminal rendition of the reset page: notifications are printed,
/// the "submit" control is the next prompt, shown once no request is in flight.
#[derive(Default)]
struct TerminalHooks {
    redirected: Notify,
}

impl FlowHooks for TerminalHooks {
    fn on_success(&self, message: &str) {
        println!("[OK] {message}");
    }

    fn on_error(&self, message: &str) {
        eprintln!("[ERROR] {message}");
    }

    fn on_phase_change(&self, phase: FlowPhase) {
        if phase.is_busy() {
            println!("Please wait...");
        }
    }

    fn on_redirect(&self, destination: &str) {
        println!("Redirecting to {destination}");
        self.redirected.notify_one();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    #[cfg(feature = "demo")]
    let demo_server = reset_flow::demo_mock_server::init_demo().await;
    #[cfg(feature = "demo")]
    let config = ResetFlowConfig::for_origin(&demo_server.uri());
    #[cfg(not(feature = "demo"))]
    let config = ResetFlowConfig::from_args();

    let client = match build_client() {
        Ok(client) => client,
        Err(error) => {
            error!("Can't start: {error}");
            return ExitCode::FAILURE;
        }
    };
    let hooks = Arc::new(TerminalHooks::default());
    let mut controller = ResetFlowController::new(config, client, hooks.clone());

    loop {
        // region Request code
        while controller.phase() == FlowPhase::Idle {
            let Some(username) = prompt("Username: ") else {
                return ExitCode::FAILURE;
            };
            let _ = controller.request_code(&username).await;
        }
        // endregion

        // region Submit reset
        while controller.phase().shows_reset_form() && controller.phase() != FlowPhase::Done {
            let Some(code) = prompt("Verification code (leave empty to request a new one): ")
            else {
                return ExitCode::FAILURE;
            };
            if is_new_code_request(&code) {
                let _ = controller.start_over();
                break;
            }
            let code = sanitize_code_entry(&code);
            let Some(new_password) = prompt("New password: ") else {
                return ExitCode::FAILURE;
            };
            if let Some(meter) = render_strength_meter(&new_password) {
                println!("{meter}");
            }
            let Some(confirm_password) = prompt("Confirm new password: ") else {
                return ExitCode::FAILURE;
            };
            let _ = controller
                .submit_reset(&code, &new_password, &confirm_password)
                .await;
        }
        // endregion

        if controller.phase() == FlowPhase::Done {
            hooks.redirected.notified().await;
            return ExitCode::SUCCESS;
        }
    }
}

/// Only an empty line asks for a new code; anything else is submitted and validated.
fn is_new_code_request(input: &str) -> bool {
    input.trim().is_empty()
}

/// Digits are kept as the code field does, unless there are none:
/// the raw entry is then submitted so that the format error is reported.
fn sanitize_code_entry(input: &str) -> String {
    let code = sanitize_code(input);
    if code.is_empty() {
        input.trim().to_owned()
    } else {
        code
    }
}

fn render_strength_meter(password: &str) -> Option<String> {
    let band = StrengthBand::for_password(password);
    let label = band.label()?;
    let severity = band.severity()?;
    Some(format!(
        "Password strength: {label} ({}%, {severity:?})",
        band.fill_percent()
    ))
}

/// Read one line from stdin, without its line ending. `None` once stdin is closed.
fn prompt(label: &str) -> Option<String> {
    print!("{label}");
    if let Err(error) = std::io::stdout().flush() {
        error!("Can't write to terminal: {error}");
        return None;
    }
    let mut line = String::new();
    match std::io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_owned()),
        Err(error) => {
            error!("Can't read from terminal: {error}");
            None
        }
    }
}
