pub const MAX_STRENGTH_SCORE: u8 = 4;
const STRONG_LENGTH: usize = 8;

pub type StrengthScore = u8;

/// Each satisfied criterion adds one point: at least 8 characters, an ASCII lowercase letter,
/// an ASCII uppercase letter, an ASCII digit, anything that isn't ASCII alphanumeric.
/// The score is capped at [MAX_STRENGTH_SCORE], so four and five criteria share the top band.
pub fn score_password_strength(password: &str) -> StrengthScore {
    let criteria = [
        password.chars().count() >= STRONG_LENGTH,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let satisfied = criteria.iter().filter(|satisfied| **satisfied).count() as u8;
    satisfied.min(MAX_STRENGTH_SCORE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Danger,
    Warning,
    Info,
    Success,
}

/// How a score is rendered by the strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthBand {
    /// Nothing typed worth rating: the meter is hidden.
    Hidden,
    VeryWeak,
    Weak,
    Fair,
    Strong,
}

impl StrengthBand {
    pub fn from_score(score: StrengthScore) -> Self {
        match score.min(MAX_STRENGTH_SCORE) {
            0 => StrengthBand::Hidden,
            1 => StrengthBand::VeryWeak,
            2 => StrengthBand::Weak,
            3 => StrengthBand::Fair,
            _ => StrengthBand::Strong,
        }
    }

    pub fn for_password(password: &str) -> Self {
        Self::from_score(score_password_strength(password))
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            StrengthBand::Hidden => None,
            StrengthBand::VeryWeak => Some("Very Weak"),
            StrengthBand::Weak => Some("Weak"),
            StrengthBand::Fair => Some("Fair"),
            StrengthBand::Strong => Some("Strong"),
        }
    }

    pub fn severity(&self) -> Option<Severity> {
        match self {
            StrengthBand::Hidden => None,
            StrengthBand::VeryWeak => Some(Severity::Danger),
            StrengthBand::Weak => Some(Severity::Warning),
            StrengthBand::Fair => Some(Severity::Info),
            StrengthBand::Strong => Some(Severity::Success),
        }
    }

    /// Width of the meter bar, in percent.
    pub fn fill_percent(&self) -> u8 {
        match self {
            StrengthBand::Hidden => 0,
            StrengthBand::VeryWeak => 25,
            StrengthBand::Weak => 50,
            StrengthBand::Fair => 75,
            StrengthBand::Strong => 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    // region score_password_strength
    #[parameterized(
        password = {"", "abcdefgh", "Abcdefg1", "Ab1!", "a", "A", "1", "!", "abcdefg", "ABCDEFGH1", "Abcdefg1!", "passé"},
        expected_score = {0, 2, 4, 4, 1, 1, 1, 1, 1, 3, 4, 2}
    )]
    fn should_score_password_strength(password: &str, expected_score: StrengthScore) {
        assert_eq!(expected_score, score_password_strength(password));
    }

    #[test]
    fn should_count_characters_rather_than_bytes() {
        // 7 characters, 14 bytes
        assert_eq!(1, score_password_strength("ééééééé"));
        assert_eq!(2, score_password_strength("éééééééé"));
    }

    #[test]
    fn should_never_decrease_when_adding_a_criterion() {
        let passwords = ["", "a", "abc", "ABC", "abcdefgh", "Abc", "abc!", "ABCDEFGH", "Ab1"];
        let additions = ["a", "B", "7", "#", "xxxxxxxx"];
        for password in passwords {
            let score = score_password_strength(password);
            assert!(score <= MAX_STRENGTH_SCORE);
            for addition in additions {
                let extended = format!("{password}{addition}");
                assert!(
                    score_password_strength(&extended) >= score,
                    "`{extended}` scored lower than `{password}`"
                );
            }
        }
    }
    // endregion

    // region StrengthBand
    #[parameterized(
        score = {0, 1, 2, 3, 4, 5},
        expected_label = {None, Some("Very Weak"), Some("Weak"), Some("Fair"), Some("Strong"), Some("Strong")},
        expected_severity = {None, Some(Severity::Danger), Some(Severity::Warning), Some(Severity::Info), Some(Severity::Success), Some(Severity::Success)},
        expected_fill = {0, 25, 50, 75, 100, 100}
    )]
    fn should_map_score_to_band(
        score: StrengthScore,
        expected_label: Option<&str>,
        expected_severity: Option<Severity>,
        expected_fill: u8,
    ) {
        let band = StrengthBand::from_score(score);

        assert_eq!(expected_label, band.label());
        assert_eq!(expected_severity, band.severity());
        assert_eq!(expected_fill, band.fill_percent());
    }

    #[test]
    fn should_fill_meter_for_strong_password() {
        let band = StrengthBand::for_password("Abcdefg1");

        assert_eq!(StrengthBand::Strong, band);
        assert_eq!(100, band.fill_percent());
    }

    #[test]
    fn should_hide_meter_for_empty_password() {
        assert_eq!(StrengthBand::Hidden, StrengthBand::for_password(""));
    }
    // endregion
}
