//! Callback traits the engines are generic over.
//!
//! - [`Navigator`]: per-element verdict for flat sequences
//! - [`ArrayNavigator`]: per-element verdict that also sees the index vector
//! - [`PairNavigator`]: combined verdict for a dual-sequence step
//! - [`TotalValidator`]: aggregate check run once at the end
//! - [`GuardResultExt`]: collapsing violations into caller errors
//!
//! Closures with the matching signature implement the callback traits, so
//! engines are normally driven with plain closures. [`Accept`] and
//! [`NoTotal`] stand in for callbacks that were not supplied.
//!
//! # Examples
//!
//! ```
//! use guard_rail::traits::{Accept, Navigator, NoTotal, TotalValidator};
//! use guard_rail::{NavigateCommand, TraversalSummary};
//!
//! let cmd = Navigator::<i32, ()>::navigate(&mut Accept, &7, 0, 0);
//! assert_eq!(cmd, Ok(NavigateCommand::CONTINUE));
//! assert_eq!(TotalValidator::<TraversalSummary, ()>::validate(NoTotal, TraversalSummary::default()), Ok(()));
//! ```

pub mod navigator;
pub mod result_ext;
pub mod total_validator;

pub use navigator::{Accept, ArrayNavigator, Navigator, PairNavigator};
pub use result_ext::GuardResultExt;
pub use total_validator::{NoTotal, TotalValidator};
