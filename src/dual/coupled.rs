use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::dual::lockstep::Lockstep;
use crate::traits::{Accept, NoTotal, PairNavigator, TotalValidator};
use crate::types::summary::DualTally;
use crate::types::{DualSummary, PairCommand, Side, TryOut, Violation};

/// Dual traversal that requires both sequences to have the same length.
///
/// A step where exactly one side has an element raises
/// [`Violation::Imbalance`] before any navigator runs for it, so the
/// combined navigator always sees both elements. Steps are re-yielded as
/// `Ok((x, y))`; the total validator runs once at the end with the
/// [`DualSummary`].
///
/// # Examples
///
/// ```
/// use guard_rail::dual::Coupled;
/// use guard_rail::{PairCommand, Side, Violation};
///
/// let result = Coupled::new([1, 2, 3], [1, 2, 3, 4])
///     .navigate(|x: &i32, y: &i32, _, _| {
///         if x == y { Ok(PairCommand::CONTINUE) } else { Err("differs") }
///     })
///     .total(|_| panic!("never reached"))
///     .run();
///
/// assert_eq!(result, Err(Violation::Imbalance { position: 3, present: Side::Y }));
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Coupled<X, Y, N = Accept, V = NoTotal, E = ()> {
    steps: Lockstep<X, Y>,
    state: CoupledState<N, V, E>,
}

impl<X: Iterator, Y: Iterator, E> Coupled<X, Y, Accept, NoTotal, E> {
    #[inline]
    pub fn new<IX, IY>(x: IX, y: IY) -> Self
    where
        IX: IntoIterator<IntoIter = X>,
        IY: IntoIterator<IntoIter = Y>,
    {
        Self { steps: Lockstep::new(x, y), state: CoupledState::new() }
    }
}

impl<X: Iterator, Y: Iterator, N, V, E> Coupled<X, Y, N, V, E> {
    /// Attaches the combined navigator, called with both elements, the step
    /// and the running `(x_count, y_count)`.
    #[inline]
    pub fn navigate<F>(self, navigator: F) -> Coupled<X, Y, F, V, E>
    where
        F: FnMut(&X::Item, &Y::Item, usize, (usize, usize)) -> Result<PairCommand, E>,
    {
        self.with_navigator(navigator)
    }

    #[inline]
    pub fn with_navigator<M>(self, navigator: M) -> Coupled<X, Y, M, V, E>
    where
        M: PairNavigator<X::Item, Y::Item, E>,
    {
        Coupled { steps: self.steps, state: self.state.with_navigator(navigator) }
    }

    #[inline]
    pub fn total<F>(self, total: F) -> Coupled<X, Y, N, F, E>
    where
        F: FnOnce(DualSummary) -> Result<(), E>,
    {
        Coupled { steps: self.steps, state: self.state.with_total(total) }
    }

    #[inline]
    pub fn summary(&self) -> DualSummary {
        self.state.tally.summary()
    }
}

impl<X, Y, N, V, E> Coupled<X, Y, N, V, E>
where
    X: Iterator,
    Y: Iterator,
    N: PairNavigator<X::Item, Y::Item, E>,
    V: TotalValidator<DualSummary, E>,
{
    /// Drains the traversal and returns what it saw.
    pub fn run(mut self) -> Result<DualSummary, Violation<E>> {
        for step in self.by_ref() {
            step?;
        }
        Ok(self.summary())
    }

    pub fn collect_checked<B>(self) -> Result<B, Violation<E>>
    where
        B: FromIterator<(X::Item, Y::Item)>,
    {
        self.collect()
    }
}

impl<X, Y, N, V, E> Iterator for Coupled<X, Y, N, V, E>
where
    X: Iterator,
    Y: Iterator,
    N: PairNavigator<X::Item, Y::Item, E>,
    V: TotalValidator<DualSummary, E>,
{
    type Item = Result<(X::Item, Y::Item), Violation<E>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state.done {
            return None;
        }
        if self.state.wants_more() {
            if let Some((x, y)) = self.steps.next() {
                let step = self.state.step(x, y);
                if step.is_err() {
                    self.steps.release();
                }
                return Some(step);
            }
        }
        self.steps.release();
        self.state.finish().map(Err)
    }
}

impl<X, Y, N, V, E> FusedIterator for Coupled<X, Y, N, V, E>
where
    X: Iterator,
    Y: Iterator,
    N: PairNavigator<X::Item, Y::Item, E>,
    V: TotalValidator<DualSummary, E>,
{
}

/// Callbacks and counters of a coupled walk, independent of how the sides
/// are pulled.
pub(crate) struct CoupledState<N, V, E> {
    navigator: N,
    total: Option<V>,
    pub(crate) tally: DualTally,
    pub(crate) done: bool,
    _error: PhantomData<fn() -> E>,
}

impl<E> CoupledState<Accept, NoTotal, E> {
    pub(crate) fn new() -> Self {
        Self {
            navigator: Accept,
            total: Some(NoTotal),
            tally: DualTally::default(),
            done: false,
            _error: PhantomData,
        }
    }
}

impl<N, V, E> CoupledState<N, V, E> {
    pub(crate) fn with_navigator<M>(self, navigator: M) -> CoupledState<M, V, E> {
        CoupledState {
            navigator,
            total: self.total,
            tally: self.tally,
            done: self.done,
            _error: PhantomData,
        }
    }

    pub(crate) fn with_total<F>(self, total: F) -> CoupledState<N, F, E> {
        CoupledState {
            navigator: self.navigator,
            total: self.total.map(|_| total),
            tally: self.tally,
            done: self.done,
            _error: PhantomData,
        }
    }

    /// `true` while another step may be pulled.
    #[inline]
    pub(crate) fn wants_more(&self) -> bool {
        !self.done && !self.tally.is_stopped()
    }

    /// Ends the walk without running the total validator.
    #[cfg(feature = "async")]
    pub(crate) fn cancel(&mut self) -> Violation<E> {
        self.done = true;
        self.total = None;
        let position = self.tally.position();
        guard_event!(debug, position, "coupled traversal cancelled");
        Violation::Cancelled { position }
    }

    pub(crate) fn step<A, B>(&mut self, x: TryOut<A>, y: TryOut<B>) -> Result<(A, B), Violation<E>>
    where
        N: PairNavigator<A, B, E>,
    {
        let position = self.tally.position();
        if position == 0 {
            guard_event!(trace, "coupled traversal started");
        }
        match (x, y) {
            (TryOut::Success(x), TryOut::Success(y)) => {
                match self.navigator.navigate(&x, &y, position, self.tally.counts()) {
                    Ok(cmd) => {
                        self.tally.record(true, true, cmd);
                        if cmd.is_stop() {
                            guard_event!(debug, position, "navigator requested stop");
                        }
                        Ok((x, y))
                    },
                    Err(error) => {
                        self.abort();
                        Err(Violation::at_step(position, None, error))
                    },
                }
            },
            (x, _) => {
                let present = if x.is_success() { Side::X } else { Side::Y };
                self.abort();
                guard_event!(debug, position, %present, "coupled sequences out of balance");
                Err(Violation::Imbalance { position, present })
            },
        }
    }

    fn abort(&mut self) {
        self.done = true;
        self.total = None;
    }

    pub(crate) fn finish(&mut self) -> Option<Violation<E>>
    where
        V: TotalValidator<DualSummary, E>,
    {
        self.done = true;
        let summary = self.tally.summary();
        guard_event!(debug, ?summary, "coupled traversal finished");
        let total = self.total.take()?;
        total.validate(summary).err().map(Violation::Aggregate)
    }
}
