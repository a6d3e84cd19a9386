use crate::reset::phase::FlowPhase;

/// Presentation seam of the flow: the controller reports through these hooks
/// and never touches any UI itself.
///
/// Hooks are called from the task driving the controller,
/// except [FlowHooks::on_redirect] which is called from the redirect timer.
pub trait FlowHooks: Send + Sync {
    fn on_success(&self, message: &str);

    fn on_error(&self, message: &str);

    fn on_phase_change(&self, phase: FlowPhase);

    /// The password has been changed and the configured delay has elapsed.
    fn on_redirect(&self, destination: &str);
}
