//! Traversal and validation core for argument guards.
//!
//! Every engine walks its input exactly once, asks a caller-supplied
//! *navigator* about each element (continue, skip it from the matched
//! count, or stop early) and hands the aggregate facts to a *total
//! validator* when the walk ends. Elements are re-yielded unchanged, so a
//! traversal can sit in front of the code that consumes the data.
//!
//! - [`sequence`]: flat sequences, forward-only or indexed
//! - [`array`]: N-dimensional row-major arrays with arbitrary lower bounds
//! - [`dual`]: two sequences in lockstep, coupled or paired
//! - [`merge`]: equality and ordering checks built on the dual walk
//! - `async_ext`: the dual engines over streams, with cancellation
//!   (requires the `async` feature)
//!
//! Failures are values: every engine yields [`Violation<E>`] wrapping the
//! caller's error type, and the first violation ends the walk.
//!
//! # Examples
//!
//! ## Single sequence
//!
//! ```
//! use guard_rail::prelude::*;
//!
//! let data = [1, 2, 2, 3];
//! let mut previous = None;
//! let kept: Vec<i32> = Traverse::new(data)
//!     .navigate(|item: &i32, _, _| {
//!         let duplicate = previous == Some(*item);
//!         previous = Some(*item);
//!         Ok::<_, ()>(NavigateCommand::new(duplicate, duplicate))
//!     })
//!     .total(|summary| {
//!         assert_eq!(summary, TraversalSummary::new(3, 2, true));
//!         Ok(())
//!     })
//!     .collect_checked()
//!     .unwrap();
//!
//! assert_eq!(kept, [1, 2, 2]);
//! ```
//!
//! ## Two sequences
//!
//! ```
//! use guard_rail::prelude::*;
//!
//! let result = Coupled::new([1, 2, 3], [1, 2, 3, 4]).navigate(|_: &i32, _: &i32, _, _| {
//!     Ok::<_, ()>(PairCommand::CONTINUE)
//! }).run();
//!
//! assert_eq!(result, Err(Violation::Imbalance { position: 3, present: Side::Y }));
//! ```
//!
//! ## Collapsing into a caller error
//!
//! ```
//! use guard_rail::prelude::*;
//!
//! let checked = Traverse::indexed(&[4, 8, 15])
//!     .navigate(|item, _, _| if **item % 2 == 0 { Ok(NavigateCommand::CONTINUE) } else { Err("odd") })
//!     .run()
//!     .or_caller_error(|_| "traversal interrupted");
//!
//! assert_eq!(checked, Err("odd"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

/// Index arithmetic and the array traversal engine
pub mod array;
/// Lockstep traversal of two sequences
pub mod dual;
/// Equality and ordering checks over two sequences
pub mod merge;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Single-sequence traversal engine
pub mod sequence;
/// Callback traits the engines are generic over
pub mod traits;
/// Commands, summaries and violations shared by every engine
pub mod types;

/// Async dual traversal over streams (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use traits::*;
pub use types::{
    DualSummary, GuardResult, IndexVec, Location, NavigateCommand, PairCommand, Side,
    TraversalSummary, TryOut, Violation, ViolationKind,
};
