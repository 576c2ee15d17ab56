//! The argument shaper.
//!
//! Turns a [`TestCase`] and a strategy pair into the flat argument row a
//! parameterized test runner consumes.
//!
//! With [`ArgsStrategy::Instance`] the row is the case itself. With
//! [`ArgsStrategy::Properties`] the case is decomposed into its base list
//! `[definition, expected, arg1..argN]` and then trimmed from the front
//! according to the [`PropsStrategy`] and the case's expectation kind:
//!
//! | props          | Plain | Returns | Throws |
//! |----------------|-------|---------|--------|
//! | `NameIncluded` | 0 (definition replaced by case name) | 0 | 0 |
//! | `Default`      | 1     | 1       | 1      |
//! | `IfNotReturns` | 1     | 2       | 1      |
//! | `IfNotThrows`  | 1     | 1       | 2      |
//!
//! A trim that would leave nothing is an out-of-range error, never an empty
//! row.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use crate::case::{Expectation, ExpectationKind, Fault, TestCase};
use crate::errors::{CaseError, CaseResult};
use crate::value::Value;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Whole instance or decomposed properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArgsStrategy {
    #[default]
    Instance,
    Properties,
}

/// Which leading elements a decomposed row keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PropsStrategy {
    /// Keep everything, with the case name in place of the definition.
    NameIncluded,
    /// Drop the definition.
    #[default]
    Default,
    /// Like `Default`, and also drop the expected value of `Returns` cases.
    IfNotReturns,
    /// Like `Default`, and also drop the expected fault of `Throws` cases.
    IfNotThrows,
}

impl ArgsStrategy {
    pub const ALL: [ArgsStrategy; 2] = [ArgsStrategy::Instance, ArgsStrategy::Properties];
    const PARAMETER: &'static str = "args_strategy";
    const EXPECTED: &'static str = "instance, properties (or 0, 1)";

    pub const fn as_str(self) -> &'static str {
        match self {
            ArgsStrategy::Instance => "instance",
            ArgsStrategy::Properties => "properties",
        }
    }
}

impl PropsStrategy {
    pub const ALL: [PropsStrategy; 4] = [
        PropsStrategy::NameIncluded,
        PropsStrategy::Default,
        PropsStrategy::IfNotReturns,
        PropsStrategy::IfNotThrows,
    ];
    const PARAMETER: &'static str = "props_strategy";
    const EXPECTED: &'static str =
        "name-included, default, if-not-returns, if-not-throws (or 0, 1, 2, 3)";

    pub const fn as_str(self) -> &'static str {
        match self {
            PropsStrategy::NameIncluded => "name-included",
            PropsStrategy::Default => "default",
            PropsStrategy::IfNotReturns => "if-not-returns",
            PropsStrategy::IfNotThrows => "if-not-throws",
        }
    }

    const fn index(self) -> usize {
        match self {
            PropsStrategy::NameIncluded => 0,
            PropsStrategy::Default => 1,
            PropsStrategy::IfNotReturns => 2,
            PropsStrategy::IfNotThrows => 3,
        }
    }
}

/// Lowercases and strips `-`/`_`, so `IfNotReturns`, `if-not-returns` and
/// `if_not_returns` all read the same.
fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for ArgsStrategy {
    type Err = CaseError;

    fn from_str(raw: &str) -> CaseResult<Self> {
        if let Ok(n) = raw.trim().parse::<i64>() {
            return Self::try_from(n);
        }
        let key = normalize(raw);
        ArgsStrategy::ALL
            .into_iter()
            .find(|s| normalize(s.as_str()) == key)
            .ok_or_else(|| invalid(Self::PARAMETER, raw, Self::EXPECTED))
    }
}

impl FromStr for PropsStrategy {
    type Err = CaseError;

    fn from_str(raw: &str) -> CaseResult<Self> {
        if let Ok(n) = raw.trim().parse::<i64>() {
            return Self::try_from(n);
        }
        let key = normalize(raw);
        PropsStrategy::ALL
            .into_iter()
            .find(|s| normalize(s.as_str()) == key)
            .ok_or_else(|| invalid(Self::PARAMETER, raw, Self::EXPECTED))
    }
}

impl TryFrom<i64> for ArgsStrategy {
    type Error = CaseError;

    fn try_from(n: i64) -> CaseResult<Self> {
        usize::try_from(n)
            .ok()
            .and_then(|i| ArgsStrategy::ALL.get(i).copied())
            .ok_or_else(|| invalid(Self::PARAMETER, &n.to_string(), Self::EXPECTED))
    }
}

impl TryFrom<i64> for PropsStrategy {
    type Error = CaseError;

    fn try_from(n: i64) -> CaseResult<Self> {
        usize::try_from(n)
            .ok()
            .and_then(|i| PropsStrategy::ALL.get(i).copied())
            .ok_or_else(|| invalid(Self::PARAMETER, &n.to_string(), Self::EXPECTED))
    }
}

fn invalid(parameter: &'static str, value: &str, expected: &'static str) -> CaseError {
    CaseError::InvalidEnumeration {
        parameter,
        value: value.to_string(),
        expected,
    }
}

impl fmt::Display for ArgsStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PropsStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ROWS
// ============================================================================

/// One element of an argument row.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// The whole case, for `ArgsStrategy::Instance`.
    Case(TestCase),
    Value(Value),
    Fault(Fault),
}

pub type ArgumentRow = Vec<Argument>;

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Argument::Value(value)
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Case(case) => write!(f, "{}", case),
            Argument::Value(value) => write!(f, "{}", value),
            Argument::Fault(fault) => write!(f, "{}", fault),
        }
    }
}

/// A case serializes as `{"case": <case name>}`, a fault as its fields.
impl Serialize for Argument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Argument::Case(case) => {
                let mut s = serializer.serialize_struct("Case", 1)?;
                s.serialize_field("case", case.case_name())?;
                s.end()
            }
            Argument::Value(value) => value.serialize(serializer),
            Argument::Fault(fault) => fault.serialize(serializer),
        }
    }
}

// ============================================================================
// SHAPING
// ============================================================================

/// Leading elements dropped from the base list, indexed by
/// `[PropsStrategy][ExpectationKind]`.
const DROP_TABLE: [[usize; 3]; 4] = [
    // Plain, Returns, Throws
    [0, 0, 0], // NameIncluded
    [1, 1, 1], // Default
    [1, 2, 1], // IfNotReturns
    [1, 1, 2], // IfNotThrows
];

/// Number of leading base-list elements removed for this combination.
pub const fn leading_drop(props: PropsStrategy, kind: ExpectationKind) -> usize {
    DROP_TABLE[props.index()][kind.index()]
}

/// Shapes `case` into an argument row.
///
/// `props` is only consulted for `ArgsStrategy::Properties`.
///
/// ```rust
/// use casekit::case::TestCase;
/// use casekit::shaper::{shape, Argument, ArgsStrategy, PropsStrategy};
/// use casekit::value::Value;
///
/// let case = TestCase::returns("Adds", 3, (1, 2));
/// let row = shape(&case, ArgsStrategy::Properties, PropsStrategy::IfNotReturns).unwrap();
/// assert_eq!(row, vec![Argument::Value(Value::Int(1)), Argument::Value(Value::Int(2))]);
/// ```
pub fn shape(case: &TestCase, args: ArgsStrategy, props: PropsStrategy) -> CaseResult<ArgumentRow> {
    match args {
        ArgsStrategy::Instance => Ok(vec![Argument::Case(case.clone())]),
        ArgsStrategy::Properties => decompose(case, props),
    }
}

/// Parses both strategies from raw text, then shapes.
///
/// Both strategies are parsed up front, so an unknown `props` is reported
/// even when `args` is `instance`.
pub fn shape_raw(case: &TestCase, args: &str, props: &str) -> CaseResult<ArgumentRow> {
    let args: ArgsStrategy = args.parse()?;
    let props: PropsStrategy = props.parse()?;
    shape(case, args, props)
}

fn decompose(case: &TestCase, props: PropsStrategy) -> CaseResult<ArgumentRow> {
    let mut row = base_row(case);
    let drop = leading_drop(props, case.kind());
    if drop >= row.len() {
        return Err(CaseError::out_of_range(format!(
            "'{}' with {} drops {} of {} elements for '{}'",
            props,
            case.kind(),
            drop,
            row.len(),
            case.case_name()
        )));
    }
    if props == PropsStrategy::NameIncluded {
        row[0] = Argument::Value(Value::String(case.case_name().to_string()));
    }
    row.drain(..drop);
    trace!(case = case.case_name(), %props, len = row.len(), "shaped row");
    Ok(row)
}

/// `[definition, expected, arg1..argN]`
fn base_row(case: &TestCase) -> ArgumentRow {
    let mut row = Vec::with_capacity(case.arity() + 2);
    row.push(Argument::Value(Value::String(case.definition().to_string())));
    row.push(expected_argument(case.expectation()));
    row.extend(case.arguments().iter().cloned().map(Argument::Value));
    row
}

fn expected_argument(expectation: &Expectation) -> Argument {
    match expectation {
        Expectation::Plain(expected) => Argument::Value(Value::String(expected.clone())),
        Expectation::Returns(value) => Argument::Value(value.clone()),
        Expectation::Throws(fault) => Argument::Fault(fault.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(value: impl Into<Value>) -> Argument {
        Argument::Value(value.into())
    }

    #[test]
    fn strategies_parse_from_names_and_numbers() {
        assert_eq!("Properties".parse::<ArgsStrategy>().unwrap(), ArgsStrategy::Properties);
        assert_eq!("if_not_throws".parse::<PropsStrategy>().unwrap(), PropsStrategy::IfNotThrows);
        assert_eq!("NameIncluded".parse::<PropsStrategy>().unwrap(), PropsStrategy::NameIncluded);
        assert_eq!(PropsStrategy::try_from(2).unwrap(), PropsStrategy::IfNotReturns);
        assert_eq!(ArgsStrategy::try_from(0).unwrap(), ArgsStrategy::Instance);
    }

    #[test]
    fn numeric_text_parses_like_the_discriminant() {
        assert_eq!("2".parse::<PropsStrategy>().unwrap(), PropsStrategy::IfNotReturns);
        assert_eq!(" 1 ".parse::<ArgsStrategy>().unwrap(), ArgsStrategy::Properties);
        match "7".parse::<PropsStrategy>() {
            Err(CaseError::InvalidEnumeration { parameter, value, .. }) => {
                assert_eq!(parameter, "props_strategy");
                assert_eq!(value, "7");
            }
            other => panic!("expected invalid enumeration, got {other:?}"),
        }
    }

    #[test]
    fn unknown_strategy_names_the_parameter() {
        match "tuple".parse::<ArgsStrategy>() {
            Err(CaseError::InvalidEnumeration { parameter, value, .. }) => {
                assert_eq!(parameter, "args_strategy");
                assert_eq!(value, "tuple");
            }
            other => panic!("expected invalid enumeration, got {other:?}"),
        }
        match PropsStrategy::try_from(4) {
            Err(CaseError::InvalidEnumeration { parameter, .. }) => {
                assert_eq!(parameter, "props_strategy")
            }
            other => panic!("expected invalid enumeration, got {other:?}"),
        }
        assert!(ArgsStrategy::try_from(-1).is_err());
    }

    #[test]
    fn drop_table_matches_the_documented_policy() {
        use ExpectationKind::*;
        for kind in ExpectationKind::ALL {
            assert_eq!(leading_drop(PropsStrategy::NameIncluded, kind), 0);
            assert_eq!(leading_drop(PropsStrategy::Default, kind), 1);
        }
        assert_eq!(leading_drop(PropsStrategy::IfNotReturns, Returns), 2);
        assert_eq!(leading_drop(PropsStrategy::IfNotReturns, Throws), 1);
        assert_eq!(leading_drop(PropsStrategy::IfNotThrows, Throws), 2);
        assert_eq!(leading_drop(PropsStrategy::IfNotThrows, Plain), 1);
    }

    #[test]
    fn name_included_replaces_the_definition() {
        let case = TestCase::plain("Greets", "hello", ("Ada",));
        let row = shape(&case, ArgsStrategy::Properties, PropsStrategy::NameIncluded).unwrap();
        assert_eq!(row, vec![v("Greets => hello"), v("hello"), v("Ada")]);
    }

    #[test]
    fn name_included_never_runs_out_of_range() {
        let case = TestCase::returns("", 1, ());
        let row = shape(&case, ArgsStrategy::Properties, PropsStrategy::NameIncluded).unwrap();
        assert_eq!(row, vec![v("definition => returns 1"), v(1)]);
    }

    #[test]
    fn instance_ignores_props() {
        let case = TestCase::throws("Rejects", Fault::new("ArgumentException"), ());
        for props in PropsStrategy::ALL {
            let row = shape(&case, ArgsStrategy::Instance, props).unwrap();
            assert_eq!(row, vec![Argument::Case(case.clone())]);
        }
    }

    #[test]
    fn shape_raw_rejects_unknown_props_even_for_instance() {
        let case = TestCase::plain("A", "b", (1,));
        let err = shape_raw(&case, "instance", "everything").unwrap_err();
        assert_eq!(err.kind_name(), "invalid_enumeration");
    }

    #[test]
    fn rows_serialize_to_json() {
        let case = TestCase::throws("Rejects", Fault::new("ArgumentException"), (Some(1), None::<i64>));
        let row = shape(&case, ArgsStrategy::Properties, PropsStrategy::Default).unwrap();
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"[{"type_name":"ArgumentException"},1,null]"#);

        let row = shape(&case, ArgsStrategy::Instance, PropsStrategy::Default).unwrap();
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"[{"case":"Rejects => throws ArgumentException"}]"#);
    }
}
