//! Index arithmetic and the array traversal engine.
//!
//! - [`Cursor`] converts between flat row-major offsets and dimension-index
//!   vectors for arrays with arbitrary lower bounds, and advances
//!   odometer-style.
//! - [`ArraySource`] / [`ArrayView`] describe the array being walked.
//! - [`ArrayTraverse`] runs the single-sequence contract over every element
//!   in row-major order.
//!
//! # Examples
//!
//! ```
//! use guard_rail::array::{ArrayDimension, Cursor};
//!
//! let mut cursor = Cursor::<usize>::new(ArrayDimension::from_shape(&[2, 2]), true)?;
//! let mut offsets = vec![cursor.offset()];
//! while !cursor.inc() {
//!     offsets.push(cursor.offset());
//! }
//! assert_eq!(offsets, [0, 1, 2, 3]);
//! # Ok::<(), guard_rail::array::ShapeError>(())
//! ```

pub mod cursor;
pub mod dimension;
pub mod error;
pub mod traverse;
pub mod view;

pub use cursor::Cursor;
pub use dimension::{ArrayDimension, Offset};
pub use error::ShapeError;
pub use traverse::{ArrayOptions, ArrayTraverse};
pub use view::{ArraySource, ArrayView};
