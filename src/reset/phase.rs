use derive_getters::Getters;
use std::fmt::{Display, Formatter};

/// Steps of the reset flow, as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowPhase {
    #[default]
    Idle,
    RequestingCode,
    CodeSent,
    ResettingPassword,
    Done,
}

impl FlowPhase {
    /// A request is in flight: the submit control must stay disabled.
    pub fn is_busy(&self) -> bool {
        matches!(self, FlowPhase::RequestingCode | FlowPhase::ResettingPassword)
    }

    /// The code and new password form is the one to display.
    pub fn shows_reset_form(&self) -> bool {
        matches!(
            self,
            FlowPhase::CodeSent | FlowPhase::ResettingPassword | FlowPhase::Done
        )
    }
}

impl Display for FlowPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FlowPhase::Idle => "idle",
            FlowPhase::RequestingCode => "requesting code",
            FlowPhase::CodeSent => "code sent",
            FlowPhase::ResettingPassword => "resetting password",
            FlowPhase::Done => "done",
        };
        write!(f, "{name}")
    }
}

/// What the flow remembers once the server has sent a code.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct ResetSession {
    username: String,
}

impl ResetSession {
    pub fn new(username: String) -> Self {
        Self { username }
    }
}

#[cfg(test)]
mod tests {
    use crate::reset::phase::FlowPhase;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        phase = {FlowPhase::Idle, FlowPhase::RequestingCode, FlowPhase::CodeSent, FlowPhase::ResettingPassword, FlowPhase::Done},
        expected_busy = {false, true, false, true, false},
        expected_reset_form = {false, false, true, true, true}
    )]
    fn should_tell_presentation_what_to_show(
        phase: FlowPhase,
        expected_busy: bool,
        expected_reset_form: bool,
    ) {
        assert_eq!(expected_busy, phase.is_busy());
        assert_eq!(expected_reset_form, phase.shows_reset_form());
    }
}
