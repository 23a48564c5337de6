//! Multi-dimensional cursor over a row-major array.
//!
//! The cursor keeps a flat offset and a dimension-index vector in sync:
//!
//! ```text
//! flat = Σ (index_i - origin_i) * stride_i
//! ```
//!
//! where the last dimension has stride 1 and varies fastest. `origin_i` is
//! `0` for a zero-based cursor and the dimension's lower bound for a native
//! one; the choice is fixed at construction and decides how indices are
//! reported.
use smallvec::{smallvec, SmallVec};

use crate::array::dimension::{ArrayDimension, Offset};
use crate::array::error::ShapeError;
use crate::array::view::ArraySource;
use crate::types::IndexVec;

/// Odometer-style position within an N-dimensional array.
///
/// # Examples
///
/// ```
/// use guard_rail::array::{ArrayDimension, Cursor};
///
/// let mut cursor = Cursor::<u32>::new([ArrayDimension::new(1, 2), ArrayDimension::new(-1, 2)], false)?;
/// assert_eq!(cursor.indices(), &[1, -1]);
///
/// assert!(!cursor.inc());
/// assert_eq!((cursor.offset(), cursor.indices()), (1, &[1, 0][..]));
///
/// cursor.set_offset(2)?;
/// assert_eq!(cursor.indices(), &[2, -1]);
/// assert_eq!(cursor.offset_of(&[2, 0])?, 3);
/// # Ok::<(), guard_rail::array::ShapeError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<O: Offset = usize> {
    dims: SmallVec<[ArrayDimension; 4]>,
    origins: IndexVec,
    strides: SmallVec<[u64; 4]>,
    indices: IndexVec,
    offset: O,
    len: O,
    zero_based: bool,
    exhausted: bool,
}

impl<O: Offset> Cursor<O> {
    /// Creates a cursor at the first element.
    ///
    /// With rank 0 or any zero-length dimension the cursor addresses no
    /// elements and starts out exhausted.
    ///
    /// # Errors
    ///
    /// * [`ShapeError::BoundsOverflow`] - a dimension's native range overflows `isize`
    /// * [`ShapeError::OffsetOverflow`] - the element count does not fit `O`
    pub fn new<I>(dims: I, zero_based: bool) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = ArrayDimension>,
    {
        let dims: SmallVec<[ArrayDimension; 4]> = dims.into_iter().collect();

        let mut origins = IndexVec::with_capacity(dims.len());
        for (dimension, dim) in dims.iter().enumerate() {
            isize::try_from(dim.length)
                .ok()
                .and_then(|length| dim.lower_bound.checked_add(length))
                .ok_or(ShapeError::BoundsOverflow { dimension })?;
            origins.push(if zero_based { 0 } else { dim.lower_bound });
        }

        let empty = dims.is_empty() || dims.iter().any(|dim| dim.length == 0);
        let mut strides: SmallVec<[u64; 4]> = smallvec![0; dims.len()];
        let mut len = 0u64;
        if !empty {
            let mut stride = 1u64;
            for d in (0..dims.len()).rev() {
                strides[d] = stride;
                stride = stride
                    .checked_mul(dims[d].length as u64)
                    .ok_or(ShapeError::OffsetOverflow)?;
            }
            len = stride;
        }
        let len = O::from_u64(len).ok_or(ShapeError::OffsetOverflow)?;

        Ok(Self {
            indices: origins.clone(),
            origins,
            dims,
            strides,
            offset: O::default(),
            len,
            zero_based,
            exhausted: empty,
        })
    }

    #[must_use]
    #[inline]
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Number of addressable elements.
    #[inline]
    pub fn len(&self) -> O {
        self.len
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len.to_u64() == 0
    }

    /// Returns `true` once [`inc`](Self::inc) has run past the last
    /// element, or from the start for an empty array.
    #[must_use]
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    #[must_use]
    #[inline]
    pub fn is_zero_based(&self) -> bool {
        self.zero_based
    }

    #[inline]
    pub fn offset(&self) -> O {
        self.offset
    }

    /// Current index vector, zero-based or native as chosen at construction.
    #[inline]
    pub fn indices(&self) -> &[isize] {
        &self.indices
    }

    #[inline]
    pub fn dimensions(&self) -> &[ArrayDimension] {
        &self.dims
    }

    /// Moves to `offset`, recomputing the whole index vector.
    pub fn set_offset(&mut self, offset: O) -> Result<(), ShapeError> {
        let flat = offset.to_u64();
        let len = self.len.to_u64();
        if flat >= len {
            return Err(ShapeError::OffsetOutOfRange { offset: flat, len });
        }

        let mut rest = flat;
        for d in 0..self.dims.len() {
            let quotient = rest / self.strides[d];
            rest %= self.strides[d];
            self.indices[d] = self.origins[d] + quotient as isize;
        }
        self.offset = offset;
        self.exhausted = false;
        Ok(())
    }

    /// Flat offset of an index vector given in this cursor's convention.
    pub fn offset_of(&self, indices: &[isize]) -> Result<O, ShapeError> {
        if indices.len() != self.dims.len() {
            return Err(ShapeError::RankMismatch { expected: self.dims.len(), actual: indices.len() });
        }

        let mut flat = 0u64;
        for (dimension, &index) in indices.iter().enumerate() {
            let length = self.dims[dimension].length;
            let relative = index
                .checked_sub(self.origins[dimension])
                .filter(|relative| *relative >= 0 && (*relative as usize) < length)
                .ok_or(ShapeError::IndexOutOfBounds { dimension, index })?;
            flat += relative as u64 * self.strides[dimension];
        }

        if self.is_empty() {
            return Err(ShapeError::OffsetOutOfRange { offset: 0, len: 0 });
        }
        O::from_u64(flat).ok_or(ShapeError::OffsetOverflow)
    }

    /// Advances to the next element in row-major order.
    ///
    /// The last dimension moves first; when it runs past its length it
    /// resets to its origin and carries into the one before it. Returns
    /// `true` when the most significant dimension overflows, which leaves the
    /// cursor exhausted and wrapped back to the first element. An exhausted
    /// cursor never moves again and keeps returning `true`.
    pub fn inc(&mut self) -> bool {
        if self.exhausted {
            return true;
        }

        for d in (0..self.dims.len()).rev() {
            let next = self.indices[d] + 1;
            if ((next - self.origins[d]) as usize) < self.dims[d].length {
                self.indices[d] = next;
                self.offset = O::from_u64(self.offset.to_u64() + 1).unwrap_or(self.len);
                return false;
            }
            self.indices[d] = self.origins[d];
        }

        self.offset = O::default();
        self.exhausted = true;
        true
    }

    /// Returns to the first element.
    pub fn reset(&mut self) {
        self.indices.clone_from(&self.origins);
        self.offset = O::default();
        self.exhausted = self.is_empty();
    }

    /// Reads the element under the cursor.
    pub fn read<A>(&self, source: &A) -> Option<A::Item>
    where
        A: ArraySource + ?Sized,
    {
        if self.exhausted {
            return None;
        }
        usize::try_from(self.offset.to_u64()).ok().and_then(|offset| source.at_offset(offset))
    }
}
