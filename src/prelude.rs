//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use guard_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Engines**: [`Traverse`], [`ArrayTraverse`], [`Coupled`], [`Paired`]
//! - **Data model**: [`NavigateCommand`], [`PairCommand`], [`TryOut`],
//!   [`TraversalSummary`], [`DualSummary`], [`Violation`], [`Side`]
//! - **Traits**: [`GuardResultExt`], [`Navigator`], [`TotalValidator`]
//! - **Options**: [`ArrayOptions`], [`MergeOptions`], [`AbsentOrdering`]
//!
//! # Examples
//!
//! ```
//! use guard_rail::prelude::*;
//!
//! fn all_positive(values: &[i32]) -> GuardResult<TraversalSummary, &'static str> {
//!     Traverse::indexed(values)
//!         .navigate(|v, _, _| if **v > 0 { Ok(NavigateCommand::CONTINUE) } else { Err("not positive") })
//!         .run()
//! }
//!
//! assert!(all_positive(&[1, 2]).is_ok());
//! assert!(all_positive(&[1, 0]).unwrap_err().is_element());
//! ```

// Engines
pub use crate::array::{ArrayOptions, ArrayTraverse, ArrayView};
pub use crate::dual::{Coupled, Paired};
pub use crate::sequence::Traverse;

// Merge checks
pub use crate::merge::{AbsentOrdering, EqualityMerge, MergeOptions, OrderMerge};

// Core types
pub use crate::types::{
    DualSummary, GuardResult, NavigateCommand, PairCommand, Side, TraversalSummary, TryOut,
    Violation,
};

// Traits
pub use crate::traits::{GuardResultExt, Navigator, TotalValidator};
