//! Streams a collection of cases through the shaper, or through a custom
//! row converter, emitting one row per distinct case.
//!
//! Both the collection and the converter are validated when the conversion
//! is created, not when it is first iterated. The returned [`DistinctRows`]
//! is lazy and forward-only. The first conversion error is yielded once and
//! ends the iteration.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::iter::FusedIterator;

use tracing::debug;

use crate::case::TestCase;
use crate::errors::{CaseError, CaseResult};
use crate::shaper::{shape, ArgsStrategy, ArgumentRow, PropsStrategy};

/// Lazy iterator over the converted rows of the distinct cases in a source.
pub struct DistinctRows<I, F> {
    source: I,
    convert: F,
    seen: HashSet<String>,
    done: bool,
}

impl<I, C, F, R> Iterator for DistinctRows<I, F>
where
    I: Iterator<Item = C>,
    C: Borrow<TestCase>,
    F: FnMut(&TestCase) -> CaseResult<R>,
{
    type Item = CaseResult<R>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        for item in self.source.by_ref() {
            let case = item.borrow();
            if self.seen.contains(case.case_name()) {
                debug!(case = case.case_name(), "skipping duplicate case");
                continue;
            }
            self.seen.insert(case.case_name().to_string());
            let converted = (self.convert)(case);
            if converted.is_err() {
                self.done = true;
            }
            return Some(converted);
        }
        self.done = true;
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.source.size_hint().1)
        }
    }
}

impl<I, C, F, R> FusedIterator for DistinctRows<I, F>
where
    I: Iterator<Item = C>,
    C: Borrow<TestCase>,
    F: FnMut(&TestCase) -> CaseResult<R>,
{
}

/// Converts each distinct case with `converter`.
///
/// Fails immediately with a missing-argument error when `source` or
/// `converter` is absent.
pub fn convert_distinct<S, C, F, R>(
    source: Option<S>,
    converter: Option<F>,
) -> CaseResult<DistinctRows<S::IntoIter, F>>
where
    S: IntoIterator<Item = C>,
    C: Borrow<TestCase>,
    F: FnMut(&TestCase) -> CaseResult<R>,
{
    let source = source.ok_or_else(|| CaseError::missing("source"))?;
    let convert = converter.ok_or_else(|| CaseError::missing("converter"))?;
    Ok(DistinctRows {
        source: source.into_iter(),
        convert,
        seen: HashSet::new(),
        done: false,
    })
}

/// Shapes each distinct case with the given strategy pair.
///
/// ```rust
/// use casekit::case::TestCase;
/// use casekit::converter::to_argument_rows;
/// use casekit::shaper::{ArgsStrategy, PropsStrategy};
///
/// let cases = vec![
///     TestCase::returns("Adds", 3, (1, 2)),
///     TestCase::returns("Adds", 3, (2, 1)),
/// ];
/// let rows: Vec<_> = to_argument_rows(Some(&cases), ArgsStrategy::Properties, PropsStrategy::Default)
///     .unwrap()
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(rows.len(), 1);
/// ```
pub fn to_argument_rows<S, C>(
    source: Option<S>,
    args: ArgsStrategy,
    props: PropsStrategy,
) -> CaseResult<DistinctRows<S::IntoIter, impl FnMut(&TestCase) -> CaseResult<ArgumentRow>>>
where
    S: IntoIterator<Item = C>,
    C: Borrow<TestCase>,
{
    convert_distinct(source, Some(move |case: &TestCase| shape(case, args, props)))
}
