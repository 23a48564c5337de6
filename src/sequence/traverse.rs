use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::sequence::source::{Forward, Indexed, Positional, Pull};
use crate::traits::{Accept, Navigator, NoTotal, TotalValidator};
use crate::types::summary::Tally;
use crate::types::{NavigateCommand, TraversalSummary, Violation};

/// One-pass, pass-through traversal of a flat sequence.
///
/// `Traverse` is lazy: it is an iterator that re-yields the source's
/// elements as `Ok(item)` while running the navigator on each one. After the
/// last element (or the one that requested a stop) it runs the total
/// validator once; a rejection comes out as a final `Err`. If the caller
/// never drives it that far, the total validator never runs.
///
/// The eager entry points ([`run`](Self::run),
/// [`collect_checked`](Self::collect_checked), [`check`](Self::check))
/// drain it before returning, so every violation surfaces synchronously.
///
/// # Type Parameters
///
/// * `P` - The [`Pull`] source
/// * `N` - The navigator ([`Accept`] when none is attached)
/// * `V` - The total validator ([`NoTotal`] when none is attached)
/// * `E` - The caller's error type
///
/// # Examples
///
/// ```
/// use guard_rail::sequence::Traverse;
/// use guard_rail::NavigateCommand;
///
/// let mut previous = None;
/// let seen: Result<Vec<_>, _> = Traverse::new([1, 2, 2, 3])
///     .navigate(|item: &i32, _, _| {
///         let duplicate = previous == Some(*item);
///         previous = Some(*item);
///         Ok::<_, &str>(NavigateCommand::new(duplicate, duplicate))
///     })
///     .total(|summary| {
///         assert!(summary.stopped);
///         assert_eq!((summary.total, summary.matched), (3, 2));
///         Ok(())
///     })
///     .collect();
///
/// assert_eq!(seen.unwrap(), vec![1, 2, 2]);
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Traverse<P, N = Accept, V = NoTotal, E = ()> {
    source: P,
    navigator: N,
    total: Option<V>,
    tally: Tally,
    done: bool,
    _error: PhantomData<fn() -> E>,
}

impl<I: Iterator, E> Traverse<Forward<I>, Accept, NoTotal, E> {
    /// Starts a traversal over any iterable, pulled forward-only.
    #[inline]
    pub fn new<T>(iter: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self::from_source(Forward::new(iter))
    }
}

impl<S: Indexed, E> Traverse<Positional<S>, Accept, NoTotal, E> {
    /// Starts a traversal over an indexed source, walked by position.
    #[inline]
    pub fn indexed(source: S) -> Self {
        Self::from_source(Positional::new(source))
    }
}

impl<P: Pull, E> Traverse<P, Accept, NoTotal, E> {
    #[inline]
    pub fn from_source(source: P) -> Self {
        Self {
            source,
            navigator: Accept,
            total: Some(NoTotal),
            tally: Tally::default(),
            done: false,
            _error: PhantomData,
        }
    }
}

impl<P: Pull, N, V, E> Traverse<P, N, V, E> {
    /// Attaches the per-element navigator.
    ///
    /// It receives the element, its position and the number of elements
    /// matched before it.
    #[inline]
    pub fn navigate<F>(self, navigator: F) -> Traverse<P, F, V, E>
    where
        F: FnMut(&P::Item, usize, usize) -> Result<NavigateCommand, E>,
    {
        self.with_navigator(navigator)
    }

    /// Attaches any [`Navigator`] implementation.
    #[inline]
    pub fn with_navigator<M>(self, navigator: M) -> Traverse<P, M, V, E>
    where
        M: Navigator<P::Item, E>,
    {
        Traverse {
            source: self.source,
            navigator,
            total: self.total,
            tally: self.tally,
            done: self.done,
            _error: PhantomData,
        }
    }

    /// Attaches the total validator, run once with the [`TraversalSummary`].
    #[inline]
    pub fn total<F>(self, total: F) -> Traverse<P, N, F, E>
    where
        F: FnOnce(TraversalSummary) -> Result<(), E>,
    {
        Traverse {
            source: self.source,
            navigator: self.navigator,
            total: self.total.map(|_| total),
            tally: self.tally,
            done: self.done,
            _error: PhantomData,
        }
    }

    /// Facts gathered so far.
    #[inline]
    pub fn summary(&self) -> TraversalSummary {
        self.tally.summary()
    }

    /// Returns `true` once the traversal has finished, by exhaustion,
    /// stop, or violation.
    #[must_use]
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.done
    }
}

impl<P, N, V, E> Traverse<P, N, V, E>
where
    P: Pull,
    N: Navigator<P::Item, E>,
    V: TotalValidator<TraversalSummary, E>,
{
    /// Drains the traversal and returns what it saw.
    ///
    /// When nothing was attached but a total validator and the source knows
    /// its length, the validator is called with `(len, len, false)` without
    /// walking the elements.
    pub fn run(mut self) -> Result<TraversalSummary, Violation<E>> {
        if let Some(len) = self.fast_count() {
            self.tally.advance_matched(len);
            if let Some(violation) = self.finish() {
                return Err(violation);
            }
            return Ok(self.tally.summary());
        }
        for step in self.by_ref() {
            step?;
        }
        Ok(self.tally.summary())
    }

    /// Drains the traversal into a collection of the re-yielded elements.
    pub fn collect_checked<B>(self) -> Result<B, Violation<E>>
    where
        B: FromIterator<P::Item>,
    {
        self.collect()
    }

    fn fast_count(&self) -> Option<usize> {
        if self.done || self.tally.position() > 0 || !self.navigator.accepts_all() {
            return None;
        }
        self.source.remaining()
    }

    fn finish(&mut self) -> Option<Violation<E>> {
        self.done = true;
        self.source.release();
        let summary = self.tally.summary();
        guard_event!(debug, ?summary, "traversal finished");
        let total = self.total.take()?;
        total.validate(summary).err().map(|error| {
            guard_event!(debug, ?summary, "total validator rejected traversal");
            Violation::Aggregate(error)
        })
    }

    fn abort(&mut self) {
        self.done = true;
        self.total = None;
        self.source.release();
    }
}

impl<S, N, V, E> Traverse<Positional<S>, N, V, E>
where
    S: Indexed + Clone,
    N: Navigator<S::Item, E>,
    V: TotalValidator<TraversalSummary, E>,
{
    /// Drains the traversal and hands the source back.
    ///
    /// With no navigator attached this takes the fast-count path.
    pub fn check(self) -> Result<S, Violation<E>> {
        let source = self.source.source().clone();
        self.run()?;
        Ok(source)
    }
}

impl<S, V, E> Traverse<Positional<S>, Accept, V, E>
where
    S: Indexed,
    V: TotalValidator<TraversalSummary, E>,
{
    /// Runs only the total validator, with `(len, len, false)`, and hands
    /// the source back. See [`validate_count`](crate::sequence::validate_count).
    pub fn check_count(self) -> Result<S, Violation<E>> {
        let source = self.source.into_source();
        match self.total {
            Some(total) => crate::sequence::validate_count(source, total),
            None => Ok(source),
        }
    }
}

impl<P, N, V, E> Iterator for Traverse<P, N, V, E>
where
    P: Pull,
    N: Navigator<P::Item, E>,
    V: TotalValidator<TraversalSummary, E>,
{
    type Item = Result<P::Item, Violation<E>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.tally.is_stopped() {
            if let Some(item) = self.source.pull() {
                let position = self.tally.position();
                if position == 0 {
                    guard_event!(trace, "traversal started");
                }
                return match self.navigator.navigate(&item, position, self.tally.matched()) {
                    Ok(cmd) => {
                        self.tally.record(cmd);
                        if cmd.is_stop() {
                            guard_event!(debug, position, "navigator requested stop");
                        }
                        Some(Ok(item))
                    },
                    Err(error) => {
                        self.abort();
                        guard_event!(debug, position, "navigator rejected element");
                        Some(Err(Violation::at_index(position, error)))
                    },
                };
            }
        }
        self.finish().map(Err)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        if self.tally.is_stopped() {
            return (0, Some(1));
        }
        (0, self.source.remaining().and_then(|len| len.checked_add(1)))
    }
}

impl<P, N, V, E> FusedIterator for Traverse<P, N, V, E>
where
    P: Pull,
    N: Navigator<P::Item, E>,
    V: TotalValidator<TraversalSummary, E>,
{
}
