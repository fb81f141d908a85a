//! Tri-state check outcome shared by every naming and data check.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a single check outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum State {
    /// The rule is satisfied
    Pass,
    /// The rule is probably violated
    Warning,
    /// The rule is violated
    Fail,
}

impl State {
    /// Upper-case label used in reports.
    pub const fn label(self) -> &'static str {
        match self {
            State::Pass => "PASS",
            State::Warning => "WARNING",
            State::Fail => "FAIL",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one check, with an optional suggestion or explanation.
///
/// Non-passing outcomes carry a message (usually the word to use instead),
/// except for binary structural checks where the failure speaks for itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Status {
    state: State,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl Status {
    /// A passing outcome.
    pub const fn pass() -> Self {
        Self {
            state: State::Pass,
            message: None,
        }
    }

    /// A passing outcome with an explanatory note.
    pub fn pass_with(message: impl Into<String>) -> Self {
        Self {
            state: State::Pass,
            message: Some(message.into()),
        }
    }

    /// A warning with its suggestion.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            state: State::Warning,
            message: Some(message.into()),
        }
    }

    /// A failure with its suggestion.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            state: State::Fail,
            message: Some(message.into()),
        }
    }

    /// A failure without a message, for binary structural checks.
    pub const fn fail_bare() -> Self {
        Self {
            state: State::Fail,
            message: None,
        }
    }

    /// Severity of this outcome.
    pub const fn state(&self) -> State {
        self.state
    }

    /// Suggestion or explanation, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the check passed.
    pub fn is_pass(&self) -> bool {
        self.state == State::Pass
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::pass()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{} ({message})", self.state),
            None => write!(f, "{}", self.state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert!(Status::pass().is_pass());
        assert_eq!(Status::pass().message(), None);

        let warning = Status::warning("FUV_GALEX");
        assert_eq!(warning.state(), State::Warning);
        assert_eq!(warning.message(), Some("FUV_GALEX"));

        let bare = Status::fail_bare();
        assert_eq!(bare.state(), State::Fail);
        assert_eq!(bare.message(), None);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(State::Pass < State::Warning);
        assert!(State::Warning < State::Fail);
    }

    #[test]
    fn test_display() {
        assert_eq!(Status::fail("fred").to_string(), "FAIL (fred)");
        assert_eq!(Status::pass().to_string(), "PASS");
    }

    #[test]
    fn test_serializes_upper_case_state() {
        let json = serde_json::to_string(&Status::warning("ra")).unwrap();
        assert_eq!(json, r#"{"state":"WARNING","message":"ra"}"#);

        let json = serde_json::to_string(&Status::pass()).unwrap();
        assert_eq!(json, r#"{"state":"PASS"}"#);
    }
}
