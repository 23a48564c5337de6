use smallvec::SmallVec;

use crate::array::cursor::Cursor;
use crate::array::dimension::ArrayDimension;
use crate::array::error::ShapeError;

/// Regular N-dimensional array stored row-major in flat storage.
pub trait ArraySource {
    type Item;

    fn dimensions(&self) -> &[ArrayDimension];

    /// Number of elements in the backing storage. Must equal the product of
    /// the dimension lengths for a traversal to start.
    fn len(&self) -> usize;

    /// Element at a row-major flat offset.
    fn at_offset(&self, offset: usize) -> Option<Self::Item>;
}

impl<A: ArraySource + ?Sized> ArraySource for &A {
    type Item = A::Item;

    #[inline]
    fn dimensions(&self) -> &[ArrayDimension] {
        (**self).dimensions()
    }

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn at_offset(&self, offset: usize) -> Option<A::Item> {
        (**self).at_offset(offset)
    }
}

/// Borrowed N-dimensional view over a slice.
///
/// # Examples
///
/// ```
/// use guard_rail::array::{ArrayDimension, ArrayView};
///
/// let data = [1, 2, 3, 4, 5, 6];
/// let view = ArrayView::new(&data, [ArrayDimension::new(1, 2), ArrayDimension::new(0, 3)])?;
///
/// assert_eq!(view.get(&[2, 0]), Some(&4));
/// assert_eq!(view.get(&[0, 0]), None);
/// # Ok::<(), guard_rail::array::ShapeError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ArrayView<'a, T> {
    data: &'a [T],
    dims: SmallVec<[ArrayDimension; 4]>,
}

impl<'a, T> ArrayView<'a, T> {
    /// Wraps `data` with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::LengthMismatch`] when `data` does not hold
    /// exactly one element per position, and the construction errors of
    /// [`Cursor::new`] for degenerate bounds.
    pub fn new<I>(data: &'a [T], dims: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = ArrayDimension>,
    {
        let dims: SmallVec<[ArrayDimension; 4]> = dims.into_iter().collect();
        let expected = Cursor::<usize>::new(dims.iter().copied(), true)?.len();
        if data.len() != expected {
            return Err(ShapeError::LengthMismatch { expected, actual: data.len() });
        }
        Ok(Self { data, dims })
    }

    /// Zero-based view with the given shape.
    pub fn from_shape(data: &'a [T], shape: &[usize]) -> Result<Self, ShapeError> {
        Self::new(data, ArrayDimension::from_shape(shape))
    }

    #[must_use]
    #[inline]
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Element at a native (lower-bound-relative) index vector.
    pub fn get(&self, indices: &[isize]) -> Option<&'a T> {
        let cursor = Cursor::<usize>::new(self.dims.iter().copied(), false).ok()?;
        let offset = cursor.offset_of(indices).ok()?;
        self.data.get(offset)
    }
}

impl<'a, T> ArraySource for ArrayView<'a, T> {
    type Item = &'a T;

    #[inline]
    fn dimensions(&self) -> &[ArrayDimension] {
        &self.dims
    }

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn at_offset(&self, offset: usize) -> Option<&'a T> {
        self.data.get(offset)
    }
}
