//! Async dual-sequence traversal.
//!
//! Streams stand in for iterators: [`AsyncLockstep`], [`AsyncCoupled`] and
//! [`AsyncPaired`] run the same state machines as their
//! [`dual`](crate::dual) counterparts, suspending only while a side is
//! pulled. Synchronous sides adapt through [`iter`].
//!
//! Before every pull the engines consult a [`Cancellation`] token. A
//! cancelled walk drops both sides, yields
//! [`Violation::Cancelled`](crate::Violation::Cancelled) once and never
//! runs the total validator. Dropping the stream has the same effect
//! without the violation.
//!
//! # Feature Flag
//!
//! Requires the `async` feature:
//!
//! ```toml
//! [dependencies]
//! guard-rail = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use guard_rail::async_ext::{self, AsyncPaired, CancelFlag};
//! use guard_rail::Violation;
//!
//! # tokio_test();
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn tokio_test() {
//! let flag = CancelFlag::new();
//! flag.cancel();
//!
//! let result = AsyncPaired::new(async_ext::iter([1, 2]), async_ext::iter([3]))
//!     .total(|_| Err("never reached"))
//!     .cancel_on(flag)
//!     .run()
//!     .await;
//! assert_eq!(result, Err(Violation::Cancelled { position: 0 }));
//! # }
//! ```

mod cancel;
mod coupled;
mod lockstep;
pub mod merge;
mod paired;
mod stream;

pub use cancel::{CancelFlag, Cancellation, Never};
pub use coupled::AsyncCoupled;
pub use lockstep::AsyncLockstep;
pub use paired::AsyncPaired;
pub use stream::{iter, Iter};
