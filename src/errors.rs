//! casekit error handling.
//!
//! Every failure the crate can report is a [`CaseError`]. All of them are
//! programmer-input errors: a malformed strategy, a missing collection or
//! converter, a trim that runs past the row, or a suite file that does not
//! describe a valid case. Nothing is caught or retried internally.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type CaseResult<T> = Result<T, CaseError>;

/// The single crate error type.
#[derive(Debug, Error, Diagnostic)]
pub enum CaseError {
    /// A strategy value outside its defined variant set.
    #[error("invalid value '{value}' for parameter '{parameter}'")]
    #[diagnostic(
        code(casekit::shaper::invalid_enumeration),
        help("expected one of: {expected}")
    )]
    InvalidEnumeration {
        parameter: &'static str,
        value: String,
        expected: &'static str,
    },

    /// A trim that would consume more row elements than exist.
    #[error("{message}")]
    #[diagnostic(
        code(casekit::shaper::out_of_range),
        help("use a props strategy that keeps the expectation, or give the case at least one argument")
    )]
    OutOfRange { message: String },

    /// A required collection or converter that was not supplied.
    #[error("required argument '{parameter}' is missing")]
    #[diagnostic(code(casekit::converter::missing_argument))]
    MissingArgument { parameter: &'static str },

    /// More argument slots than a case can carry.
    #[error("a test case carries at most {max} arguments, got {arity}")]
    #[diagnostic(code(casekit::arguments::arity_overflow))]
    ArityOverflow { arity: usize, max: usize },

    /// A suite file that parsed but does not describe valid cases.
    #[error("invalid suite {}: case #{index}: {reason}", .path.display())]
    #[diagnostic(code(casekit::suite::invalid_case))]
    Suite {
        path: PathBuf,
        index: usize,
        reason: String,
    },

    #[error("failed to read {}", .path.display())]
    #[diagnostic(code(casekit::suite::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML in {}", .path.display())]
    #[diagnostic(code(casekit::suite::yaml))]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl CaseError {
    /// The message carried by every out-of-range decomposition failure.
    pub const INSUFFICIENT_SELECTOR: &'static str =
        "insufficient property selector for the requested operation";

    pub fn out_of_range(detail: impl AsRef<str>) -> Self {
        CaseError::OutOfRange {
            message: format!("{}: {}", Self::INSUFFICIENT_SELECTOR, detail.as_ref()),
        }
    }

    pub fn missing(parameter: &'static str) -> Self {
        CaseError::MissingArgument { parameter }
    }

    /// Stable classification, for assertions in tests and adapters.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::InvalidEnumeration { .. } => "invalid_enumeration",
            Self::OutOfRange { .. } => "out_of_range",
            Self::MissingArgument { .. } => "missing_argument",
            Self::ArityOverflow { .. } => "arity_overflow",
            Self::Suite { .. } => "invalid_case",
            Self::Io { .. } => "io",
            Self::Yaml { .. } => "yaml",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_the_shortfall() {
        let err = CaseError::out_of_range("row has 2 elements, 2 would be dropped");
        let msg = err.to_string();
        assert!(msg.starts_with(CaseError::INSUFFICIENT_SELECTOR));
        assert!(msg.contains("2 would be dropped"));
        assert_eq!(err.kind_name(), "out_of_range");
    }

    #[test]
    fn missing_argument_names_the_parameter() {
        let err = CaseError::missing("converter");
        assert_eq!(err.to_string(), "required argument 'converter' is missing");
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("casekit::converter::missing_argument"));
    }
}
