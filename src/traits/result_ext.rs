//! Extension trait for collapsing traversal results into caller errors.
//!
//! Policy layers usually expose a single error type. [`GuardResultExt`]
//! keeps element and aggregate errors as they are and asks the caller to
//! classify the two engine-level conditions (imbalance and cancellation).
//!
//! # Examples
//!
//! ```
//! use guard_rail::traits::GuardResultExt;
//! use guard_rail::{Side, Violation};
//!
//! let result: Result<(), Violation<String>> =
//!     Err(Violation::Imbalance { position: 3, present: Side::Y });
//! let collapsed = result.or_caller_error(|v| format!("lengths differ: {v:?}"));
//! assert!(collapsed.unwrap_err().starts_with("lengths differ"));
//! ```

use crate::types::Violation;

pub trait GuardResultExt<T, E> {
    /// Maps the caller error type inside a violation.
    fn map_guard_err<G, F>(self, f: F) -> Result<T, Violation<G>>
    where
        F: FnOnce(E) -> G;

    /// Unwraps element and aggregate violations to the caller error, and
    /// builds one with `classify` for imbalance and cancellation.
    fn or_caller_error<F>(self, classify: F) -> Result<T, E>
    where
        F: FnOnce(&Violation<E>) -> E;
}

impl<T, E> GuardResultExt<T, E> for Result<T, Violation<E>> {
    #[inline]
    fn map_guard_err<G, F>(self, f: F) -> Result<T, Violation<G>>
    where
        F: FnOnce(E) -> G,
    {
        self.map_err(|violation| violation.map_err(f))
    }

    fn or_caller_error<F>(self, classify: F) -> Result<T, E>
    where
        F: FnOnce(&Violation<E>) -> E,
    {
        match self {
            Ok(value) => Ok(value),
            Err(violation @ (Violation::Imbalance { .. } | Violation::Cancelled { .. })) => {
                Err(classify(&violation))
            },
            Err(Violation::Element { error, .. } | Violation::Aggregate(error)) => Err(error),
        }
    }
}
