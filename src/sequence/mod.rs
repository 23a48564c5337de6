//! Single-sequence engine.
//!
//! Walks a flat sequence exactly once, asking a navigator about each element
//! and handing the aggregate facts to a total validator at the end.
//!
//! Sources come in two capabilities:
//!
//! - forward-only iterables, wrapped in [`Forward`] by [`Traverse::new`]
//! - [`Indexed`] sources (slices, arrays, `Vec`, `VecDeque`), walked by
//!   position by [`Traverse::indexed`], which also enables the fast-count
//!   path
//!
//! # Examples
//!
//! ```
//! use guard_rail::sequence::{self, Traverse};
//! use guard_rail::{NavigateCommand, TraversalSummary, Violation};
//!
//! let data = vec![3, -1, 4];
//! let result = Traverse::indexed(&data)
//!     .navigate(|item, _, _| {
//!         if **item >= 0 { Ok(NavigateCommand::CONTINUE) } else { Err("negative") }
//!     })
//!     .check();
//! assert!(matches!(result, Err(Violation::Element { error: "negative", .. })));
//!
//! let at_most_three = |s: TraversalSummary| if s.total <= 3 { Ok(()) } else { Err("too long") };
//! assert_eq!(sequence::validate_count(&data, at_most_three), Ok(&data));
//! ```

pub mod source;
pub mod traverse;

pub use source::{Forward, Indexed, Positional, Pull};
pub use traverse::Traverse;

use crate::traits::{Accept, NoTotal, TotalValidator};
use crate::types::{TraversalSummary, Violation};

/// Starts a forward-only traversal. Shorthand for [`Traverse::new`].
#[inline]
pub fn traverse<T, E>(iter: T) -> Traverse<Forward<T::IntoIter>, Accept, NoTotal, E>
where
    T: IntoIterator,
{
    Traverse::new(iter)
}

/// Runs only the total validator of an indexed source, with
/// `(len, len, false)`, and hands the source back.
///
/// Agrees with a full walk by a navigator that accepts everything. The
/// length is read once; keeping the source unchanged meanwhile is up to the
/// caller.
pub fn validate_count<S, V, E>(source: S, total: V) -> Result<S, Violation<E>>
where
    S: Indexed,
    V: TotalValidator<TraversalSummary, E>,
{
    let summary = TraversalSummary::counted(source.len());
    guard_event!(debug, ?summary, "validating count without traversal");
    total.validate(summary).map_err(Violation::Aggregate)?;
    Ok(source)
}
