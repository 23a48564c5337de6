//! Dual-sequence engine.
//!
//! Two sequences are walked in lockstep, one step at a time, pulling once
//! from each side that still has data. Two modes build on [`Lockstep`]:
//!
//! - [`Coupled`] requires equal lengths and raises
//!   [`Violation::Imbalance`](crate::Violation::Imbalance) at the first step
//!   where only one side has an element.
//! - [`Paired`] tolerates unequal lengths and runs separate X, Y and combined
//!   navigators depending on which sides are present.
//!
//! Both report a [`DualSummary`](crate::DualSummary) to their total
//! validator once the walk ends.
//!
//! # Examples
//!
//! ```
//! use guard_rail::dual;
//! use guard_rail::PairCommand;
//!
//! let summary = dual::coupled([1, 2, 3], [2, 4, 6])
//!     .navigate(|x: &i32, y: &i32, _, _| {
//!         if x * 2 == *y { Ok(PairCommand::CONTINUE) } else { Err("not doubled") }
//!     })
//!     .run()
//!     .unwrap();
//! assert_eq!(summary.counts(), (3, 3));
//! ```

pub mod coupled;
pub mod lockstep;
pub mod paired;

pub use coupled::Coupled;
pub use lockstep::Lockstep;
pub use paired::Paired;

use crate::traits::{Accept, NoTotal};

/// Walks two iterables side by side. Shorthand for [`Lockstep::new`].
#[inline]
pub fn lockstep<IX, IY>(x: IX, y: IY) -> Lockstep<IX::IntoIter, IY::IntoIter>
where
    IX: IntoIterator,
    IY: IntoIterator,
{
    Lockstep::new(x, y)
}

/// Starts a coupled traversal. Shorthand for [`Coupled::new`].
#[inline]
pub fn coupled<IX, IY, E>(x: IX, y: IY) -> Coupled<IX::IntoIter, IY::IntoIter, Accept, NoTotal, E>
where
    IX: IntoIterator,
    IY: IntoIterator,
{
    Coupled::new(x, y)
}

/// Starts a paired traversal. Shorthand for [`Paired::new`].
#[inline]
pub fn paired<IX, IY, E>(
    x: IX,
    y: IY,
) -> Paired<IX::IntoIter, IY::IntoIter, Accept, Accept, Accept, NoTotal, E>
where
    IX: IntoIterator,
    IY: IntoIterator,
{
    Paired::new(x, y)
}
