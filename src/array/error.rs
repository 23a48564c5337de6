use core::fmt::{Display, Formatter, Result};

/// Problems with an array shape or a position within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// Backing storage does not hold exactly one element per position.
    LengthMismatch {
        expected: usize,
        actual: usize,
    },

    /// The element count does not fit the cursor's offset type.
    OffsetOverflow,

    /// `lower_bound + length` of a dimension does not fit `isize`.
    BoundsOverflow {
        dimension: usize,
    },

    OffsetOutOfRange {
        offset: u64,
        len: u64,
    },

    RankMismatch {
        expected: usize,
        actual: usize,
    },

    IndexOutOfBounds {
        dimension: usize,
        index: isize,
    },
}

impl Display for ShapeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ShapeError::LengthMismatch { expected, actual } => {
                write!(f, "array storage holds {actual} elements, shape requires {expected}")
            },
            ShapeError::OffsetOverflow => {
                write!(f, "element count does not fit the offset type")
            },
            ShapeError::BoundsOverflow { dimension } => {
                write!(f, "bounds of dimension {dimension} overflow isize")
            },
            ShapeError::OffsetOutOfRange { offset, len } => {
                write!(f, "offset {offset} is outside an array of {len} elements")
            },
            ShapeError::RankMismatch { expected, actual } => {
                write!(f, "expected {expected} indices, got {actual}")
            },
            ShapeError::IndexOutOfBounds { dimension, index } => {
                write!(f, "index {index} is outside dimension {dimension}")
            },
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShapeError {}
