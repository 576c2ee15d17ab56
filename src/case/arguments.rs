//! The ordered argument slots of a case.
//!
//! A case carries between zero and [`MAX_ARITY`] slots named `Arg1..ArgN`.
//! The slot count is fixed when the list is built; every slot may hold
//! [`Value::Nil`].

use crate::errors::{CaseError, CaseResult};
use crate::value::Value;

/// The largest number of argument slots a case can carry.
pub const MAX_ARITY: usize = 9;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Arguments {
    slots: Vec<Value>,
}

impl Arguments {
    /// A case with no argument slots.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn arity(&self) -> usize {
        self.slots.len()
    }

    /// 1-based slot lookup, so `get(1)` is `Arg1`.
    pub fn get(&self, position: usize) -> Option<&Value> {
        position.checked_sub(1).and_then(|i| self.slots.get(i))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.slots.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.slots
    }

    /// Slots paired with their names, in declaration order.
    pub fn named(&self) -> impl Iterator<Item = (String, &Value)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, value)| (slot_name(i + 1), value))
    }
}

/// `slot_name(3) == "Arg3"`.
pub fn slot_name(position: usize) -> String {
    format!("Arg{position}")
}

impl TryFrom<Vec<Value>> for Arguments {
    type Error = CaseError;

    fn try_from(slots: Vec<Value>) -> CaseResult<Self> {
        if slots.len() > MAX_ARITY {
            return Err(CaseError::ArityOverflow {
                arity: slots.len(),
                max: MAX_ARITY,
            });
        }
        Ok(Self { slots })
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

/// Statically typed argument lists: tuples of up to nine values.
///
/// ```rust
/// use casekit::case::IntoArguments;
/// let args = (1, "two", Some(3.0), None::<bool>).into_arguments();
/// assert_eq!(args.arity(), 4);
/// assert!(args.get(4).unwrap().is_nil());
/// ```
pub trait IntoArguments {
    fn into_arguments(self) -> Arguments;
}

impl IntoArguments for Arguments {
    fn into_arguments(self) -> Arguments {
        self
    }
}

impl IntoArguments for () {
    fn into_arguments(self) -> Arguments {
        Arguments::empty()
    }
}

macro_rules! impl_into_arguments {
    ($($name:ident),+) => {
        impl<$($name: Into<Value>),+> IntoArguments for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_arguments(self) -> Arguments {
                let ($($name,)+) = self;
                Arguments {
                    slots: vec![$($name.into()),+],
                }
            }
        }
    };
}

impl_into_arguments!(A1);
impl_into_arguments!(A1, A2);
impl_into_arguments!(A1, A2, A3);
impl_into_arguments!(A1, A2, A3, A4);
impl_into_arguments!(A1, A2, A3, A4, A5);
impl_into_arguments!(A1, A2, A3, A4, A5, A6);
impl_into_arguments!(A1, A2, A3, A4, A5, A6, A7);
impl_into_arguments!(A1, A2, A3, A4, A5, A6, A7, A8);
impl_into_arguments!(A1, A2, A3, A4, A5, A6, A7, A8, A9);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_arguments_keep_declaration_order() {
        let args = (1, "b", true).into_arguments();
        assert_eq!(
            args.as_slice(),
            &[Value::from(1), Value::from("b"), Value::from(true)]
        );
        assert_eq!(args.get(0), None);
        assert_eq!(args.get(2), Some(&Value::from("b")));
        assert_eq!(args.get(4), None);
    }

    #[test]
    fn nine_slots_is_the_maximum() {
        let nine = (1, 2, 3, 4, 5, 6, 7, 8, 9).into_arguments();
        assert_eq!(nine.arity(), MAX_ARITY);

        let err = Arguments::try_from(vec![Value::Nil; MAX_ARITY + 1]).unwrap_err();
        assert_eq!(err.kind_name(), "arity_overflow");
    }

    #[test]
    fn slots_are_named_from_one() {
        let args = ("x", None::<i32>).into_arguments();
        let names: Vec<_> = args.named().map(|(name, _)| name).collect();
        assert_eq!(names, ["Arg1", "Arg2"]);
    }
}
