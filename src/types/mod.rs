//! Data model shared by every traversal engine.
//!
//! # Examples
//!
//! ```
//! use guard_rail::types::{NavigateCommand, TraversalSummary, TryOut};
//!
//! let cmd = NavigateCommand::skip_if(true);
//! assert!(cmd.is_skip() && !cmd.is_stop());
//!
//! let summary = TraversalSummary::new(4, 3, false);
//! assert_eq!(summary.skipped(), 1);
//!
//! let side: TryOut<i32> = None.into();
//! assert!(side.is_failure());
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod navigate;
pub mod summary;
pub mod try_out;
pub mod violation;

pub use navigate::*;
pub use summary::{DualSummary, TraversalSummary};
pub use try_out::*;
pub use violation::*;

/// SmallVec-backed dimension-index vector.
///
/// Uses inline storage for up to 4 dimensions, which covers the arrays
/// argument guards see in practice without touching the heap.
pub type IndexVec = SmallVec<[isize; 4]>;
