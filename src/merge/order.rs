use core::cmp::Ordering;
use core::fmt;

use crate::merge::{AbsentOrdering, MergeNavigator};
use crate::types::{NavigateCommand, TryOut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Three-way element comparison used by [`OrderMerge`].
///
/// Implemented for `FnMut(&X, &Y) -> Ordering` closures and for [`Natural`].
pub trait ElementCmp<X: ?Sized, Y: ?Sized> {
    fn compare(&mut self, x: &X, y: &Y) -> Ordering;
}

impl<X: ?Sized, Y: ?Sized, F> ElementCmp<X, Y> for F
where
    F: FnMut(&X, &Y) -> Ordering,
{
    #[inline]
    fn compare(&mut self, x: &X, y: &Y) -> Ordering {
        self(x, y)
    }
}

/// Compares elements with [`Ord`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<T: ?Sized + Ord> ElementCmp<T, T> for Natural {
    #[inline]
    fn compare(&mut self, x: &T, y: &T) -> Ordering {
        x.cmp(y)
    }
}

/// Outcome of an order scan.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Comparison {
    /// How X sorts relative to Y. Serialized as `-1`, `0` or `1`.
    #[cfg_attr(feature = "serde", serde(with = "ordering_serde"))]
    pub ordering: Ordering,
    /// Step that decided the ordering; `None` when the sequences are equal.
    pub position: Option<usize>,
}

#[cfg(feature = "serde")]
mod ordering_serde {
    use core::cmp::Ordering;

    use serde::de::{Error, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ordering: &Ordering, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(*ordering as i8)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Ordering, D::Error> {
        match i8::deserialize(deserializer)? {
            -1 => Ok(Ordering::Less),
            0 => Ok(Ordering::Equal),
            1 => Ok(Ordering::Greater),
            other => Err(D::Error::invalid_value(Unexpected::Signed(other.into()), &"-1, 0 or 1")),
        }
    }
}

impl Default for Comparison {
    fn default() -> Self {
        Self { ordering: Ordering::Equal, position: None }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let relation = match self.ordering {
            Ordering::Less => "sorts before",
            Ordering::Equal => "equals",
            Ordering::Greater => "sorts after",
        };
        match self.position {
            Some(position) => write!(f, "x {} y, decided at position {}", relation, position),
            None => write!(f, "x {} y", relation),
        }
    }
}

/// Lexicographic comparison of two sequences.
///
/// Equal pairs continue the scan. The first unequal pair decides, and so
/// does the first step where one side is exhausted, with the absent side
/// placed according to its [`AbsentOrdering`].
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use guard_rail::merge::{self, AbsentOrdering, OrderMerge};
///
/// let outcome = merge::merge([1, 2], [1, 2, 0], OrderMerge::new(AbsentOrdering::Lower));
/// assert_eq!(outcome.ordering, Ordering::Less);
/// assert_eq!(outcome.position, Some(2));
///
/// let outcome = merge::merge([1, 2], [1, 2, 0], OrderMerge::new(AbsentOrdering::Higher));
/// assert_eq!(outcome.ordering, Ordering::Greater);
/// ```
#[derive(Clone, Debug)]
pub struct OrderMerge<C = Natural> {
    compare: C,
    absent: AbsentOrdering,
    outcome: Comparison,
}

impl OrderMerge {
    #[inline]
    pub fn new(absent: AbsentOrdering) -> Self {
        Self::by(Natural, absent)
    }
}

impl Default for OrderMerge {
    fn default() -> Self {
        Self::new(AbsentOrdering::default())
    }
}

impl<C> OrderMerge<C> {
    /// Uses a custom three-way comparison.
    #[inline]
    pub fn by(compare: C, absent: AbsentOrdering) -> Self {
        Self { compare, absent, outcome: Comparison::default() }
    }

    #[inline]
    pub fn outcome(&self) -> Comparison {
        self.outcome
    }
}

impl<X: ?Sized, Y: ?Sized, C> MergeNavigator<X, Y> for OrderMerge<C>
where
    C: ElementCmp<X, Y>,
{
    type Verdict = Comparison;

    fn step(&mut self, position: usize, x: TryOut<&X>, y: TryOut<&Y>) -> NavigateCommand {
        let ordering = match (x, y) {
            (TryOut::Success(x), TryOut::Success(y)) => self.compare.compare(x, y),
            (TryOut::Failure, TryOut::Success(_)) => self.absent.absent_vs_present(),
            (TryOut::Success(_), TryOut::Failure) => self.absent.absent_vs_present().reverse(),
            (TryOut::Failure, TryOut::Failure) => {
                unreachable!("lockstep never yields a step with both sides absent")
            },
        };
        if ordering == Ordering::Equal {
            return NavigateCommand::CONTINUE;
        }
        self.outcome = Comparison { ordering, position: Some(position) };
        NavigateCommand::STOP
    }

    #[inline]
    fn verdict(&self) -> Comparison {
        self.outcome
    }
}
