//! Test cases and their identity.
//!
//! A [`TestCase`] is an immutable value: a free-text definition, an
//! [`Expectation`], and an ordered list of [`Arguments`]. Its case name is
//! derived from the definition and expectation, computed on first use and
//! cached. Two cases are the same case exactly when their case names match.

use once_cell::sync::OnceCell;
use std::fmt;
use std::hash::{Hash, Hasher};

pub mod arguments;
pub mod expectation;

pub use arguments::{slot_name, Arguments, IntoArguments, MAX_ARITY};
pub use expectation::{Expectation, ExpectationKind, Fault};

use crate::value::Value;

/// Stands in for an empty definition wherever it is displayed.
pub const DEFINITION_SUBSTITUTE: &str = "definition";

/// One parameterized test scenario.
///
/// # Examples
///
/// ```rust
/// use casekit::case::{Fault, TestCase};
/// let case = TestCase::throws("Invalid login", Fault::new("ArgumentException"), ());
/// assert_eq!(case.case_name(), "Invalid login => throws ArgumentException");
/// ```
#[derive(Debug, Clone)]
pub struct TestCase {
    definition: String,
    expectation: Expectation,
    arguments: Arguments,
    case_name: OnceCell<String>,
}

impl TestCase {
    pub fn new(definition: impl Into<String>, expectation: Expectation, arguments: Arguments) -> Self {
        Self {
            definition: definition.into(),
            expectation,
            arguments,
            case_name: OnceCell::new(),
        }
    }

    /// A case whose expected outcome is described by free text.
    pub fn plain(
        definition: impl Into<String>,
        expected: impl Into<String>,
        arguments: impl IntoArguments,
    ) -> Self {
        Self::new(
            definition,
            Expectation::Plain(expected.into()),
            arguments.into_arguments(),
        )
    }

    /// A case expecting a returned value.
    ///
    /// `Value::Nil` is accepted here and names the case `returns null`;
    /// suite files reject `returns: ~` instead.
    pub fn returns(
        definition: impl Into<String>,
        expected: impl Into<Value>,
        arguments: impl IntoArguments,
    ) -> Self {
        Self::new(
            definition,
            Expectation::Returns(expected.into()),
            arguments.into_arguments(),
        )
    }

    /// A case expecting a fault.
    pub fn throws(
        definition: impl Into<String>,
        expected: Fault,
        arguments: impl IntoArguments,
    ) -> Self {
        Self::new(
            definition,
            Expectation::Throws(expected),
            arguments.into_arguments(),
        )
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn expectation(&self) -> &Expectation {
        &self.expectation
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    pub fn arity(&self) -> usize {
        self.arguments.arity()
    }

    // ------------------------------------------------------------------------
    // Capability queries
    // ------------------------------------------------------------------------

    pub fn kind(&self) -> ExpectationKind {
        self.expectation.kind()
    }

    pub fn has_capability(&self, kind: ExpectationKind) -> bool {
        self.kind() == kind
    }

    /// The expected return value, if this is a `Returns` case.
    pub fn returns_value(&self) -> Option<&Value> {
        match &self.expectation {
            Expectation::Returns(value) => Some(value),
            _ => None,
        }
    }

    /// The expected fault, if this is a `Throws` case.
    pub fn throws_fault(&self) -> Option<&Fault> {
        match &self.expectation {
            Expectation::Throws(fault) => Some(fault),
            _ => None,
        }
    }

    // ------------------------------------------------------------------------
    // Naming and identity
    // ------------------------------------------------------------------------

    /// `"{definition} => {prefix} {expected}"`, with substitutes for empty
    /// parts. Computed once per instance.
    pub fn case_name(&self) -> &str {
        self.case_name.get_or_init(|| self.compute_case_name())
    }

    fn compute_case_name(&self) -> String {
        let kind = self.kind();
        let definition = non_empty_or(&self.definition, DEFINITION_SUBSTITUTE);
        let description = self.expectation.description();
        let expected = non_empty_or(&description, kind.description_substitute());
        match kind.prefix() {
            "" => format!("{definition} => {expected}"),
            prefix => format!("{definition} => {prefix} {expected}"),
        }
    }

    /// True when `collection` is present and holds a case with the same name.
    pub fn contained_in<'a, I>(&self, collection: Option<I>) -> bool
    where
        I: IntoIterator<Item = &'a TestCase>,
    {
        collection.is_some_and(|cases| cases.into_iter().any(|other| other == self))
    }
}

fn non_empty_or<'a>(text: &'a str, substitute: &'a str) -> &'a str {
    if text.trim().is_empty() {
        substitute
    } else {
        text
    }
}

impl PartialEq for TestCase {
    fn eq(&self, other: &Self) -> bool {
        self.case_name() == other.case_name()
    }
}

impl Eq for TestCase {}

impl Hash for TestCase {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.case_name().hash(state);
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.case_name())
    }
}
