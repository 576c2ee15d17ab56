//! Argument shaping over every strategy pair and expectation kind.

use casekit::case::{Arguments, MAX_ARITY};
use casekit::{shape, ArgsStrategy, Argument, CaseError, Fault, PropsStrategy, TestCase, Value};

/// One case per expectation kind and arity, the arity-0 cases included.
fn sample_cases() -> Vec<TestCase> {
    let mut cases = Vec::new();
    for arity in 0..=MAX_ARITY {
        let slots: Vec<Value> = (0..arity as i64).map(Value::from).collect();
        let args = || Arguments::try_from(slots.clone()).unwrap();
        cases.push(TestCase::new(
            format!("plain {arity}"),
            casekit::Expectation::Plain("ok".into()),
            args(),
        ));
        cases.push(TestCase::new(
            format!("returns {arity}"),
            casekit::Expectation::Returns(Value::from(arity as i64)),
            args(),
        ));
        cases.push(TestCase::new(
            format!("throws {arity}"),
            casekit::Expectation::Throws(Fault::new("ArgumentException")),
            args(),
        ));
    }
    cases
}

fn v(value: impl Into<Value>) -> Argument {
    Argument::Value(value.into())
}

#[cfg(test)]
mod instance_tests {
    use super::*;

    #[test]
    fn instance_row_is_the_case_itself() {
        for case in sample_cases() {
            for props in PropsStrategy::ALL {
                let row = shape(&case, ArgsStrategy::Instance, props).unwrap();
                assert_eq!(row.len(), 1);
                match &row[0] {
                    Argument::Case(inner) => assert_eq!(inner.case_name(), case.case_name()),
                    other => panic!("expected the case, got {other:?}"),
                }
            }
        }
    }
}

#[cfg(test)]
mod properties_tests {
    use super::*;

    #[test]
    fn default_keeps_expectation_and_arguments() {
        for case in sample_cases() {
            let row = shape(&case, ArgsStrategy::Properties, PropsStrategy::Default).unwrap();
            assert_eq!(row.len(), 1 + case.arity(), "{}", case.case_name());
            let args: Vec<Argument> = case.arguments().iter().cloned().map(Argument::Value).collect();
            assert_eq!(&row[1..], &args[..]);
        }
    }

    #[test]
    fn if_not_returns_drops_the_expected_value_of_returns_cases() {
        for case in sample_cases().into_iter().filter(|c| c.arity() > 0) {
            let row = shape(&case, ArgsStrategy::Properties, PropsStrategy::IfNotReturns).unwrap();
            if case.returns_value().is_some() {
                assert_eq!(row.len(), case.arity());
            } else {
                let default = shape(&case, ArgsStrategy::Properties, PropsStrategy::Default).unwrap();
                assert_eq!(row, default);
            }
        }
    }

    #[test]
    fn if_not_throws_drops_the_expected_fault_of_throws_cases() {
        for case in sample_cases().into_iter().filter(|c| c.arity() > 0) {
            let row = shape(&case, ArgsStrategy::Properties, PropsStrategy::IfNotThrows).unwrap();
            if case.throws_fault().is_some() {
                assert_eq!(row.len(), case.arity());
            } else {
                assert_eq!(row.len(), 1 + case.arity());
            }
        }
    }

    #[test]
    fn name_included_leads_with_the_case_name() {
        for case in sample_cases() {
            let row = shape(&case, ArgsStrategy::Properties, PropsStrategy::NameIncluded).unwrap();
            assert_eq!(row.len(), 2 + case.arity());
            assert_eq!(row[0], v(case.case_name()));
        }
    }

    #[test]
    fn repeated_shaping_is_equal_by_value() {
        let case = TestCase::returns("Adds", 3, (1, 2));
        for props in PropsStrategy::ALL {
            let first = shape(&case, ArgsStrategy::Properties, props).unwrap();
            let second = shape(&case, ArgsStrategy::Properties, props).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn nullable_slots_stay_in_position() {
        let case = TestCase::plain("Greets", "hello", (None::<&str>, "Ada", None::<i64>));
        let row = shape(&case, ArgsStrategy::Properties, PropsStrategy::Default).unwrap();
        assert_eq!(row, vec![v("hello"), v(Value::Nil), v("Ada"), v(Value::Nil)]);
    }
}

#[cfg(test)]
mod out_of_range_tests {
    use super::*;

    #[test]
    fn invalid_login_round_trip() {
        let case = TestCase::throws("Invalid login", Fault::new("ArgumentException"), ());
        assert_eq!(case.case_name(), "Invalid login => throws ArgumentException");

        let row = shape(&case, ArgsStrategy::Properties, PropsStrategy::Default).unwrap();
        assert_eq!(row, vec![Argument::Fault(Fault::new("ArgumentException"))]);

        let err = shape(&case, ArgsStrategy::Properties, PropsStrategy::IfNotThrows).unwrap_err();
        match err {
            CaseError::OutOfRange { message } => {
                assert!(message.contains("insufficient property selector for the requested operation"))
            }
            other => panic!("expected out of range, got {other:?}"),
        }
    }

    #[test]
    fn zero_argument_returns_case_under_if_not_returns() {
        let case = TestCase::returns("Constant", 42, ());
        let err = shape(&case, ArgsStrategy::Properties, PropsStrategy::IfNotReturns).unwrap_err();
        assert_eq!(err.kind_name(), "out_of_range");

        // The other kinds fall back to the default row.
        let plain = TestCase::plain("Constant", "42", ());
        let row = shape(&plain, ArgsStrategy::Properties, PropsStrategy::IfNotReturns).unwrap();
        assert_eq!(row, vec![v("42")]);
    }

    #[test]
    fn instance_never_fails() {
        let case = TestCase::returns("Constant", 42, ());
        for props in PropsStrategy::ALL {
            assert!(shape(&case, ArgsStrategy::Instance, props).is_ok());
        }
    }
}
