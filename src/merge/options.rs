use core::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where an exhausted side sorts relative to a present element on the other
/// side.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum AbsentOrdering {
    /// The shorter sequence sorts first, as in lexicographic order.
    #[default]
    Lower,
    /// The shorter sequence sorts last.
    Higher,
}

impl AbsentOrdering {
    /// Ordering of an absent element against a present one.
    #[inline]
    pub const fn absent_vs_present(self) -> Ordering {
        match self {
            Self::Lower => Ordering::Less,
            Self::Higher => Ordering::Greater,
        }
    }
}

/// Settings shared by the merge checks.
///
/// # Examples
///
/// ```
/// use guard_rail::merge::{AbsentOrdering, MergeOptions};
///
/// let options = MergeOptions::default().negate(true).absent(AbsentOrdering::Higher);
/// assert!(options.holds(false));
/// assert!(!options.holds(true));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct MergeOptions {
    /// Flip every verdict.
    pub negate: bool,
    pub absent: AbsentOrdering,
}

impl MergeOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn negate(mut self, negate: bool) -> Self {
        self.negate = negate;
        self
    }

    #[inline]
    pub fn absent(mut self, absent: AbsentOrdering) -> Self {
        self.absent = absent;
        self
    }

    /// Whether a check passes, given the raw predicate.
    #[inline]
    pub const fn holds(&self, predicate: bool) -> bool {
        predicate ^ self.negate
    }
}
