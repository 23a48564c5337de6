use core::fmt::{Debug, Display};
use core::hash::Hash;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bounds of one array dimension: valid native indices are
/// `lower_bound .. lower_bound + length`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct ArrayDimension {
    pub lower_bound: isize,
    pub length: usize,
}

impl ArrayDimension {
    #[inline]
    pub const fn new(lower_bound: isize, length: usize) -> Self {
        Self { lower_bound, length }
    }

    #[inline]
    pub const fn zero_based(length: usize) -> Self {
        Self { lower_bound: 0, length }
    }

    /// Builds zero-based dimensions from a shape such as `[2, 3]`.
    pub fn from_shape(shape: &[usize]) -> impl Iterator<Item = ArrayDimension> + '_ {
        shape.iter().map(|&length| Self::zero_based(length))
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for usize {}
}

/// Integer type a [`Cursor`](super::Cursor) stores its flat offset in.
///
/// Implemented for `u32`, `u64` and `usize`. Arithmetic happens in `u64`;
/// the offset type only bounds how many elements a cursor may address.
pub trait Offset:
    Copy + Eq + Ord + Hash + Debug + Display + Default + sealed::Sealed
{
    const MAX: Self;

    fn to_u64(self) -> u64;

    fn from_u64(value: u64) -> Option<Self>;
}

impl Offset for u32 {
    const MAX: Self = u32::MAX;

    #[inline]
    fn to_u64(self) -> u64 {
        u64::from(self)
    }

    #[inline]
    fn from_u64(value: u64) -> Option<Self> {
        u32::try_from(value).ok()
    }
}

impl Offset for u64 {
    const MAX: Self = u64::MAX;

    #[inline]
    fn to_u64(self) -> u64 {
        self
    }

    #[inline]
    fn from_u64(value: u64) -> Option<Self> {
        Some(value)
    }
}

impl Offset for usize {
    const MAX: Self = usize::MAX;

    #[inline]
    fn to_u64(self) -> u64 {
        self as u64
    }

    #[inline]
    fn from_u64(value: u64) -> Option<Self> {
        usize::try_from(value).ok()
    }
}
