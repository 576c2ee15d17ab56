//! Expectation kinds: how a case's expected outcome is named and whether the
//! expected value survives property decomposition.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value::Value;

/// The closed tag carried by every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpectationKind {
    /// No special capability.
    Plain,
    /// The case expects a returned value.
    Returns,
    /// The case expects a fault.
    Throws,
}

impl ExpectationKind {
    pub const ALL: [ExpectationKind; 3] = [
        ExpectationKind::Plain,
        ExpectationKind::Returns,
        ExpectationKind::Throws,
    ];

    /// Token placed before the expected description in a case name.
    pub const fn prefix(self) -> &'static str {
        match self {
            ExpectationKind::Plain => "",
            ExpectationKind::Returns => "returns",
            ExpectationKind::Throws => "throws",
        }
    }

    /// Stands in for an empty expected description.
    pub const fn description_substitute(self) -> &'static str {
        match self {
            ExpectationKind::Plain => "result",
            ExpectationKind::Returns | ExpectationKind::Throws => "expected",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ExpectationKind::Plain => "Plain",
            ExpectationKind::Returns => "Returns",
            ExpectationKind::Throws => "Throws",
        }
    }

    /// Row index into the trim table, see `shaper`.
    pub(crate) const fn index(self) -> usize {
        match self {
            ExpectationKind::Plain => 0,
            ExpectationKind::Returns => 1,
            ExpectationKind::Throws => 2,
        }
    }
}

impl fmt::Display for ExpectationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describes an expected failure. Only `type_name` is used for naming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fault {
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Fault {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: None,
        }
    }

    pub fn with_message(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: Some(message.into()),
        }
    }

    /// Captures the unqualified type name of `E` and its message.
    ///
    /// ```rust
    /// use casekit::case::Fault;
    /// let err = "x".parse::<i32>().unwrap_err();
    /// let fault = Fault::from_error(&err);
    /// assert_eq!(fault.type_name, "ParseIntError");
    /// ```
    pub fn from_error<E: std::error::Error>(error: &E) -> Self {
        Self {
            type_name: short_type_name::<E>().to_string(),
            message: Some(error.to_string()),
        }
    }
}

/// `core::num::error::ParseIntError` -> `ParseIntError`, generics dropped.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.type_name, message),
            None => f.write_str(&self.type_name),
        }
    }
}

/// The expectation of a case: its kind together with the expected value.
#[derive(Debug, Clone, PartialEq)]
pub enum Expectation {
    /// Caller-supplied description of the expected result.
    Plain(String),
    Returns(Value),
    Throws(Fault),
}

impl Expectation {
    pub fn kind(&self) -> ExpectationKind {
        match self {
            Expectation::Plain(_) => ExpectationKind::Plain,
            Expectation::Returns(_) => ExpectationKind::Returns,
            Expectation::Throws(_) => ExpectationKind::Throws,
        }
    }

    /// The expected-outcome text used in the case name, before substitution.
    pub fn description(&self) -> String {
        match self {
            Expectation::Plain(expected) => expected.clone(),
            Expectation::Returns(value) => value.to_string(),
            Expectation::Throws(fault) => fault.type_name.clone(),
        }
    }
}
