//! Presence of one side at one step of a dual-sequence walk.
use core::mem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Either the element a sequence produced at a step, or the fact that it was
/// already exhausted.
///
/// `TryOut` owns nothing beyond the wrapped value; it is `Copy` whenever `T`
/// is, so borrowed views (`TryOut<&T>`) are free to pass around.
///
/// # Examples
///
/// ```
/// use guard_rail::TryOut;
///
/// let present = TryOut::Success(3);
/// let absent: TryOut<i32> = TryOut::Failure;
///
/// assert_eq!(present.as_ref().value(), Some(&3));
/// assert!(absent.is_failure());
/// assert_eq!(TryOut::from(Some(1)).into_option(), Some(1));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum TryOut<T> {
    Success(T),
    Failure,
}

impl<T> TryOut<T> {
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    #[inline]
    pub fn as_ref(&self) -> TryOut<&T> {
        match self {
            Self::Success(value) => TryOut::Success(value),
            Self::Failure => TryOut::Failure,
        }
    }

    #[inline]
    pub fn map<U, F>(self, f: F) -> TryOut<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => TryOut::Success(f(value)),
            Self::Failure => TryOut::Failure,
        }
    }

    /// Returns the wrapped value, if any.
    #[must_use]
    #[inline]
    pub fn value(self) -> Option<T> {
        self.into_option()
    }

    #[must_use]
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure => None,
        }
    }

    /// Moves the value out, leaving `Failure` behind.
    #[inline]
    pub fn take(&mut self) -> TryOut<T> {
        mem::replace(self, Self::Failure)
    }
}

impl<T> From<Option<T>> for TryOut<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Success(v),
            None => Self::Failure,
        }
    }
}

impl<T> From<TryOut<T>> for Option<T> {
    #[inline]
    fn from(value: TryOut<T>) -> Self {
        value.into_option()
    }
}
