use core::fmt;

use crate::merge::MergeNavigator;
use crate::types::{NavigateCommand, Side, TryOut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Element comparison used by [`EqualityMerge`].
///
/// Implemented for `FnMut(&X, &Y) -> bool` closures and for [`Equal`].
pub trait ElementEq<X: ?Sized, Y: ?Sized> {
    fn eq(&mut self, x: &X, y: &Y) -> bool;
}

impl<X: ?Sized, Y: ?Sized, F> ElementEq<X, Y> for F
where
    F: FnMut(&X, &Y) -> bool,
{
    #[inline]
    fn eq(&mut self, x: &X, y: &Y) -> bool {
        self(x, y)
    }
}

/// Compares elements with [`PartialEq`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Equal;

impl<X: ?Sized + PartialEq<Y>, Y: ?Sized> ElementEq<X, Y> for Equal {
    #[inline]
    fn eq(&mut self, x: &X, y: &Y) -> bool {
        x == y
    }
}

/// What ended an equality scan early.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Finding {
    /// Both sides had an element and they differ.
    Mismatch { position: usize },
    /// Only `present` still had an element.
    Imbalance { position: usize, present: Side },
}

impl Finding {
    #[must_use]
    #[inline]
    pub const fn position(&self) -> usize {
        match self {
            Self::Mismatch { position } | Self::Imbalance { position, .. } => *position,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mismatch { position } => write!(f, "elements differ at position {}", position),
            Self::Imbalance { position, present } => {
                write!(f, "only {} has an element at position {}", present, position)
            },
        }
    }
}

/// Outcome of an equality scan.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Equality {
    /// Steps examined, including the conclusive one.
    pub steps: usize,
    pub finding: Option<Finding>,
}

impl Equality {
    #[must_use]
    #[inline]
    pub const fn is_equal(&self) -> bool {
        self.finding.is_none()
    }
}

impl fmt::Display for Equality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.finding {
            None => write!(f, "sequences are equal over {} elements", self.steps),
            Some(finding) => finding.fmt(f),
        }
    }
}

/// Scans two sequences while corresponding elements are equal.
///
/// The first unequal pair or the first step where one side is already
/// exhausted stops the scan and is recorded as the [`Finding`].
///
/// # Examples
///
/// ```
/// use guard_rail::merge::{self, EqualityMerge, Finding};
///
/// let outcome = merge::merge([1, 2, 3], [1, 5, 3], EqualityMerge::new());
/// assert_eq!(outcome.finding, Some(Finding::Mismatch { position: 1 }));
///
/// let caseless = EqualityMerge::by(|a: &&str, b: &&str| a.eq_ignore_ascii_case(b));
/// assert!(merge::merge(["A", "b"], ["a", "B"], caseless).is_equal());
/// ```
#[derive(Clone, Debug, Default)]
pub struct EqualityMerge<C = Equal> {
    compare: C,
    outcome: Equality,
}

impl EqualityMerge {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C> EqualityMerge<C> {
    /// Uses a custom element comparison.
    #[inline]
    pub fn by(compare: C) -> Self {
        Self { compare, outcome: Equality::default() }
    }

    /// What the scan concluded so far.
    #[inline]
    pub fn outcome(&self) -> Equality {
        self.outcome
    }
}

impl<X: ?Sized, Y: ?Sized, C> MergeNavigator<X, Y> for EqualityMerge<C>
where
    C: ElementEq<X, Y>,
{
    type Verdict = Equality;

    fn step(&mut self, position: usize, x: TryOut<&X>, y: TryOut<&Y>) -> NavigateCommand {
        self.outcome.steps = position + 1;
        let finding = match (x, y) {
            (TryOut::Success(x), TryOut::Success(y)) => {
                if self.compare.eq(x, y) {
                    return NavigateCommand::CONTINUE;
                }
                Finding::Mismatch { position }
            },
            (TryOut::Success(_), TryOut::Failure) => Finding::Imbalance { position, present: Side::X },
            (TryOut::Failure, TryOut::Success(_)) => Finding::Imbalance { position, present: Side::Y },
            (TryOut::Failure, TryOut::Failure) => {
                unreachable!("lockstep never yields a step with both sides absent")
            },
        };
        self.outcome.finding = Some(finding);
        NavigateCommand::STOP
    }

    #[inline]
    fn verdict(&self) -> Equality {
        self.outcome
    }
}
