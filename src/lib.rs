//! casekit: parameterized test cases as typed data.
//!
//! A [`TestCase`] carries a definition, an expectation and up to nine
//! argument slots. The [`shaper`] turns a case into the flat argument row a
//! parameterized test runner consumes, and the [`converter`] does so for a
//! whole collection, once per distinct case.

pub use crate::case::{Expectation, ExpectationKind, Fault, IntoArguments, TestCase};
pub use crate::errors::{CaseError, CaseResult};
pub use crate::shaper::{shape, ArgsStrategy, Argument, ArgumentRow, PropsStrategy};
pub use crate::value::Value;

pub mod case;
pub mod cli;
pub mod converter;
pub mod display;
pub mod errors;
pub mod shaper;
pub mod suite;
pub mod value;
