//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus the
//! stream-based engines.
//!
//! # Usage
//!
//! ```
//! use guard_rail::prelude_async::*;
//!
//! # tokio_test();
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn tokio_test() {
//! let checked = ensure_equal(iter([1, 2]), iter([1, 2]), MergeOptions::default(), Never, |_| "differs");
//! assert!(checked.await.is_ok());
//! # }
//! ```
//!
//! # What's Included
//!
//! - Everything in [`prelude`](crate::prelude)
//! - **Engines**: [`AsyncLockstep`], [`AsyncCoupled`], [`AsyncPaired`]
//! - **Cancellation**: [`Cancellation`], [`CancelFlag`], [`Never`]
//! - **Adapters**: [`iter`]
//! - **Merge checks**: [`ensure_equal`], [`ensure_order`]

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::merge::{ensure_equal, ensure_order};
pub use crate::async_ext::{
    iter, AsyncCoupled, AsyncLockstep, AsyncPaired, CancelFlag, Cancellation, Never,
};
