//! Source capabilities, selected at compile time.
//!
//! - [`Pull`] is what the engine drives: a forward-only "give me the next
//!   element" interface that can be released early.
//! - [`Indexed`] marks sources with an O(1) length and positional access.
//!   [`Positional`] walks them by index without creating an iterator.
//! - [`Forward`] adapts any [`Iterator`].
use crate::types::alloc_type::{Vec, VecDeque};

/// Forward-only element supply driven by the traversal engines.
pub trait Pull {
    type Item;

    /// Produces the next element, or `None` once the source is exhausted.
    fn pull(&mut self) -> Option<Self::Item>;

    /// Number of elements still to come, when known in O(1).
    fn remaining(&self) -> Option<usize> {
        None
    }

    /// Drops whatever the source holds. Called on every exit path of a
    /// traversal; pulling afterwards yields `None`.
    fn release(&mut self) {}
}

/// Source with O(1) length and positional access.
///
/// # Examples
///
/// ```
/// use guard_rail::sequence::Indexed;
///
/// let data = [4, 5, 6];
/// let source = &data[..];
/// assert_eq!(Indexed::len(&source), 3);
/// assert_eq!(source.at(1), Some(&5));
/// assert_eq!(source.at(3), None);
/// ```
pub trait Indexed {
    type Item;

    fn len(&self) -> usize;

    fn at(&self, index: usize) -> Option<Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, T> Indexed for &'a [T] {
    type Item = &'a T;

    #[inline]
    fn len(&self) -> usize {
        let slice: &'a [T] = *self;
        slice.len()
    }

    #[inline]
    fn at(&self, index: usize) -> Option<&'a T> {
        let slice: &'a [T] = *self;
        slice.get(index)
    }
}

impl<'a, T, const N: usize> Indexed for &'a [T; N] {
    type Item = &'a T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn at(&self, index: usize) -> Option<&'a T> {
        let array: &'a [T; N] = *self;
        array.get(index)
    }
}

impl<'a, T> Indexed for &'a Vec<T> {
    type Item = &'a T;

    #[inline]
    fn len(&self) -> usize {
        let vec: &'a Vec<T> = *self;
        vec.len()
    }

    #[inline]
    fn at(&self, index: usize) -> Option<&'a T> {
        let vec: &'a Vec<T> = *self;
        vec.get(index)
    }
}

impl<'a, T> Indexed for &'a VecDeque<T> {
    type Item = &'a T;

    #[inline]
    fn len(&self) -> usize {
        let deque: &'a VecDeque<T> = *self;
        deque.len()
    }

    #[inline]
    fn at(&self, index: usize) -> Option<&'a T> {
        let deque: &'a VecDeque<T> = *self;
        deque.get(index)
    }
}

/// Walks an [`Indexed`] source by position.
#[derive(Clone, Debug)]
pub struct Positional<S> {
    source: S,
    next: usize,
}

impl<S: Indexed> Positional<S> {
    #[inline]
    pub fn new(source: S) -> Self {
        Self { source, next: 0 }
    }

    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[inline]
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: Indexed> Pull for Positional<S> {
    type Item = S::Item;

    #[inline]
    fn pull(&mut self) -> Option<S::Item> {
        if self.next >= self.source.len() {
            return None;
        }
        let item = self.source.at(self.next)?;
        self.next += 1;
        Some(item)
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        Some(self.source.len().saturating_sub(self.next))
    }

    #[inline]
    fn release(&mut self) {
        self.next = usize::MAX;
    }
}

/// Adapts an [`Iterator`] into a [`Pull`] source.
///
/// The iterator is dropped on [`release`](Pull::release), so resources it
/// holds go away as soon as the traversal ends rather than with the adapter.
#[derive(Clone, Debug)]
pub struct Forward<I> {
    iter: Option<I>,
}

impl<I: Iterator> Forward<I> {
    #[inline]
    pub fn new<T>(iter: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self { iter: Some(iter.into_iter()) }
    }

    /// Returns `true` once the iterator has been released.
    #[must_use]
    #[inline]
    pub fn is_released(&self) -> bool {
        self.iter.is_none()
    }
}

impl<I: Iterator> Pull for Forward<I> {
    type Item = I::Item;

    #[inline]
    fn pull(&mut self) -> Option<I::Item> {
        self.iter.as_mut()?.next()
    }

    #[inline]
    fn release(&mut self) {
        self.iter = None;
    }
}
