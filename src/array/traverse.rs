use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::array::cursor::Cursor;
use crate::array::error::ShapeError;
use crate::array::view::ArraySource;
use crate::traits::{Accept, ArrayNavigator, NoTotal, TotalValidator};
use crate::types::summary::Tally;
use crate::types::{IndexVec, Location, NavigateCommand, TraversalSummary, Violation};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How an array traversal reports dimension indices.
///
/// # Examples
///
/// ```
/// use guard_rail::array::ArrayOptions;
///
/// assert!(ArrayOptions::default().zero_based);
/// assert!(!ArrayOptions::native().zero_based);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ArrayOptions {
    /// Report indices starting at 0 instead of at each lower bound.
    pub zero_based: bool,
}

impl Default for ArrayOptions {
    fn default() -> Self {
        Self { zero_based: true }
    }
}

impl ArrayOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options reporting lower-bound-relative indices.
    #[inline]
    pub fn native() -> Self {
        Self { zero_based: false }
    }

    #[inline]
    pub fn zero_based(mut self, zero_based: bool) -> Self {
        self.zero_based = zero_based;
        self
    }
}

/// One-pass, row-major traversal of an N-dimensional array.
///
/// Same contract as [`Traverse`](crate::sequence::Traverse): elements are
/// re-yielded as `Ok(item)`, the navigator sees each one with its flat
/// offset and index vector, and the total validator runs once at the end.
/// An array without elements calls the total validator with `(0, 0, false)`
/// and never calls the navigator.
///
/// # Examples
///
/// ```
/// use guard_rail::array::{ArrayOptions, ArrayTraverse, ArrayView};
/// use guard_rail::NavigateCommand;
///
/// let data = [0u8; 6];
/// let view = ArrayView::from_shape(&data, &[2, 3])?;
///
/// let mut visited = Vec::new();
/// let summary = ArrayTraverse::new(view, ArrayOptions::default())?
///     .navigate(|_, _, indices, _| {
///         visited.push((indices[0], indices[1]));
///         Ok::<_, ()>(NavigateCommand::CONTINUE)
///     })
///     .run()
///     .unwrap();
///
/// assert_eq!(summary.total, 6);
/// assert_eq!(visited, [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
/// # Ok::<(), guard_rail::array::ShapeError>(())
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ArrayTraverse<A, N = Accept, V = NoTotal, E = ()> {
    source: A,
    cursor: Cursor<usize>,
    navigator: N,
    total: Option<V>,
    tally: Tally,
    done: bool,
    _error: PhantomData<fn() -> E>,
}

impl<A: ArraySource, E> ArrayTraverse<A, Accept, NoTotal, E> {
    /// Starts a traversal at the first element in row-major order.
    ///
    /// # Errors
    ///
    /// [`ShapeError::LengthMismatch`] when the source's storage does not hold
    /// exactly one element per position, plus the errors of [`Cursor::new`].
    pub fn new(source: A, options: ArrayOptions) -> Result<Self, ShapeError> {
        let cursor = Cursor::new(source.dimensions().iter().copied(), options.zero_based)?;
        let (expected, actual) = (cursor.len(), source.len());
        if expected != actual {
            guard_event!(debug, expected, actual, "array storage does not match its shape");
            return Err(ShapeError::LengthMismatch { expected, actual });
        }
        Ok(Self {
            source,
            cursor,
            navigator: Accept,
            total: Some(NoTotal),
            tally: Tally::default(),
            done: false,
            _error: PhantomData,
        })
    }
}

impl<A: ArraySource, N, V, E> ArrayTraverse<A, N, V, E> {
    /// Attaches the per-element navigator, called with the element, its
    /// flat offset, its index vector and the matched count so far.
    #[inline]
    pub fn navigate<F>(self, navigator: F) -> ArrayTraverse<A, F, V, E>
    where
        F: FnMut(&A::Item, usize, &[isize], usize) -> Result<NavigateCommand, E>,
    {
        self.with_navigator(navigator)
    }

    #[inline]
    pub fn with_navigator<M>(self, navigator: M) -> ArrayTraverse<A, M, V, E>
    where
        M: ArrayNavigator<A::Item, E>,
    {
        ArrayTraverse {
            source: self.source,
            cursor: self.cursor,
            navigator,
            total: self.total,
            tally: self.tally,
            done: self.done,
            _error: PhantomData,
        }
    }

    #[inline]
    pub fn total<F>(self, total: F) -> ArrayTraverse<A, N, F, E>
    where
        F: FnOnce(TraversalSummary) -> Result<(), E>,
    {
        ArrayTraverse {
            source: self.source,
            cursor: self.cursor,
            navigator: self.navigator,
            total: self.total.map(|_| total),
            tally: self.tally,
            done: self.done,
            _error: PhantomData,
        }
    }

    #[inline]
    pub fn summary(&self) -> TraversalSummary {
        self.tally.summary()
    }

    #[inline]
    pub fn cursor(&self) -> &Cursor<usize> {
        &self.cursor
    }
}

impl<A, N, V, E> ArrayTraverse<A, N, V, E>
where
    A: ArraySource,
    N: ArrayNavigator<A::Item, E>,
    V: TotalValidator<TraversalSummary, E>,
{
    /// Drains the traversal and returns what it saw.
    pub fn run(mut self) -> Result<TraversalSummary, Violation<E>> {
        for step in self.by_ref() {
            step?;
        }
        Ok(self.tally.summary())
    }

    pub fn collect_checked<B>(self) -> Result<B, Violation<E>>
    where
        B: FromIterator<A::Item>,
    {
        self.collect()
    }

    /// Drains the traversal and hands the source back.
    pub fn check(self) -> Result<A, Violation<E>>
    where
        A: Clone,
    {
        let source = self.source.clone();
        self.run()?;
        Ok(source)
    }

    fn finish(&mut self) -> Option<Violation<E>> {
        self.done = true;
        let summary = self.tally.summary();
        guard_event!(debug, ?summary, rank = self.cursor.rank(), "array traversal finished");
        let total = self.total.take()?;
        total.validate(summary).err().map(Violation::Aggregate)
    }
}

impl<A, N, V, E> Iterator for ArrayTraverse<A, N, V, E>
where
    A: ArraySource,
    N: ArrayNavigator<A::Item, E>,
    V: TotalValidator<TraversalSummary, E>,
{
    type Item = Result<A::Item, Violation<E>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.tally.is_stopped() && !self.cursor.is_exhausted() {
            if let Some(item) = self.cursor.read(&self.source) {
                let offset = self.cursor.offset();
                if offset == 0 {
                    guard_event!(trace, rank = self.cursor.rank(), "array traversal started");
                }
                let verdict = self.navigator.navigate(
                    &item,
                    offset,
                    self.cursor.indices(),
                    self.tally.matched(),
                );
                return match verdict {
                    Ok(cmd) => {
                        self.tally.record(cmd);
                        if cmd.is_stop() {
                            guard_event!(debug, offset, "navigator requested stop");
                        }
                        self.cursor.inc();
                        Some(Ok(item))
                    },
                    Err(error) => {
                        self.done = true;
                        self.total = None;
                        let indices = IndexVec::from_slice(self.cursor.indices());
                        Some(Err(Violation::Element { location: Location::Array { offset, indices }, error }))
                    },
                };
            }
        }
        self.finish().map(Err)
    }
}

impl<A, N, V, E> FusedIterator for ArrayTraverse<A, N, V, E>
where
    A: ArraySource,
    N: ArrayNavigator<A::Item, E>,
    V: TotalValidator<TraversalSummary, E>,
{
}
