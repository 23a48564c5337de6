//! Violations surfaced by the traversal engines.
//!
//! The engines never decide on their own that input is invalid. Callbacks
//! return caller-classified errors and the engine wraps them with the place
//! they happened:
//!
//! - [`Violation::Element`] - a navigator rejected one element
//! - [`Violation::Imbalance`] - coupled traversal found one side exhausted early
//! - [`Violation::Aggregate`] - the total validator rejected the counts
//! - [`Violation::Cancelled`] - an async walk observed cancellation
//!
//! The first violation in visitation order wins; nothing is accumulated.
use core::fmt;

use crate::types::IndexVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the two sequences of a dual traversal.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    X,
    Y,
}

impl Side {
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Side::X => Side::Y,
            Side::Y => Side::X,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::X => f.write_str("x"),
            Side::Y => f.write_str("y"),
        }
    }
}

/// Where an element-level violation was raised.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Location {
    /// Position in a flat sequence.
    Index(usize),
    /// Flat offset and index vector in an N-dimensional array.
    Array { offset: usize, indices: IndexVec },
    /// Step of a dual traversal. `side` names the side-only validator that
    /// raised, or `None` for the combined validator.
    Step { step: usize, side: Option<Side> },
}

impl Location {
    /// Flat position regardless of the traversal shape.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Location::Index(index) => *index,
            Location::Array { offset, .. } => *offset,
            Location::Step { step, .. } => *step,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Index(index) => write!(f, "index {index}"),
            Location::Array { offset, indices } => {
                f.write_str("[")?;
                for (i, index) in indices.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{index}")?;
                }
                write!(f, "] (offset {offset})")
            },
            Location::Step { step, side: Some(side) } => write!(f, "step {step} ({side})"),
            Location::Step { step, side: None } => write!(f, "step {step}"),
        }
    }
}

/// Coarse classification of a [`Violation`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ViolationKind {
    Element,
    Imbalance,
    Aggregate,
    Cancelled,
}

/// Error produced by a traversal, wrapping the caller's error type `E`.
///
/// # Examples
///
/// ```
/// use guard_rail::{Location, Violation, ViolationKind};
///
/// let v: Violation<&str> = Violation::Element { location: Location::Index(2), error: "negative" };
/// assert_eq!(v.kind(), ViolationKind::Element);
/// assert_eq!(v.to_string(), "element violation at index 2: negative");
/// assert_eq!(v.map_err(str::len).into_error(), Some(8));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Violation<E> {
    Element { location: Location, error: E },
    /// Exactly one side held a value at `position`; `present` is that side.
    Imbalance { position: usize, present: Side },
    Aggregate(E),
    /// Cancellation was observed before pulling step `position`.
    Cancelled { position: usize },
}

impl<E> Violation<E> {
    #[inline]
    pub(crate) fn at_index(index: usize, error: E) -> Self {
        Self::Element { location: Location::Index(index), error }
    }

    #[inline]
    pub(crate) fn at_step(step: usize, side: Option<Side>, error: E) -> Self {
        Self::Element { location: Location::Step { step, side }, error }
    }

    #[must_use]
    pub fn kind(&self) -> ViolationKind {
        match self {
            Self::Element { .. } => ViolationKind::Element,
            Self::Imbalance { .. } => ViolationKind::Imbalance,
            Self::Aggregate(_) => ViolationKind::Aggregate,
            Self::Cancelled { .. } => ViolationKind::Cancelled,
        }
    }

    #[must_use]
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element { .. })
    }

    #[must_use]
    #[inline]
    pub fn is_imbalance(&self) -> bool {
        matches!(self, Self::Imbalance { .. })
    }

    #[must_use]
    #[inline]
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::Aggregate(_))
    }

    #[must_use]
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    /// Location of an element-level violation.
    #[must_use]
    pub fn location(&self) -> Option<&Location> {
        match self {
            Self::Element { location, .. } => Some(location),
            _ => None,
        }
    }

    /// The caller's error, for element and aggregate violations.
    #[must_use]
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Element { error, .. } | Self::Aggregate(error) => Some(error),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Element { error, .. } | Self::Aggregate(error) => Some(error),
            _ => None,
        }
    }

    /// Maps the caller's error type while preserving where it happened.
    pub fn map_err<F, T>(self, f: F) -> Violation<T>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Element { location, error } => Violation::Element { location, error: f(error) },
            Self::Imbalance { position, present } => Violation::Imbalance { position, present },
            Self::Aggregate(error) => Violation::Aggregate(f(error)),
            Self::Cancelled { position } => Violation::Cancelled { position },
        }
    }
}

impl<E: fmt::Display> fmt::Display for Violation<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element { location, error } => {
                write!(f, "element violation at {location}: {error}")
            },
            Self::Imbalance { position, present } => write!(
                f,
                "sequence imbalance at position {position}: only {present} has an element, {} is exhausted",
                present.other()
            ),
            Self::Aggregate(error) => write!(f, "aggregate violation: {error}"),
            Self::Cancelled { position } => write!(f, "traversal cancelled before step {position}"),
        }
    }
}

#[cfg(feature = "std")]
impl<E> std::error::Error for Violation<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Element { error, .. } | Self::Aggregate(error) => Some(error),
            _ => None,
        }
    }
}

/// Result alias used by every engine entry point.
pub type GuardResult<T, E> = Result<T, Violation<E>>;
