//! Advisory diagnostics recorded alongside generated output.
//!
//! Diagnostics are a side channel: the engine accumulates them in call
//! order and never consults them. They never halt generation; callers
//! inspect them after the run and surface them to the end user.

use std::fmt;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single advisory message recorded during a generation run.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    severity: Severity,
    message: String,
}

impl Diagnostic {
    /// Create an error-severity diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Create a warning-severity diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// The severity this diagnostic was recorded with.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Check if this diagnostic is a warning.
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    /// The diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn diagnostic_display_includes_severity() {
        let diag = Diagnostic::warning("model type missing");
        assert_eq!(diag.to_string(), "warning: model type missing");
        assert!(diag.is_warning());
        assert_eq!(diag.severity(), Severity::Warning);
    }

    #[test]
    fn error_constructor_is_not_a_warning() {
        let diag = Diagnostic::error("boom");
        assert!(!diag.is_warning());
        assert_eq!(diag.message(), "boom");
    }
}
