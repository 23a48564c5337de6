use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::dual::lockstep::Lockstep;
use crate::traits::{Accept, Navigator, NoTotal, PairNavigator, TotalValidator};
use crate::types::summary::DualTally;
use crate::types::{DualSummary, NavigateCommand, PairCommand, Side, TryOut, Violation};

/// Dual traversal that tolerates sequences of different lengths.
///
/// Per step, in this order:
///
/// 1. the X navigator, when X has an element
/// 2. the Y navigator, when Y has an element
/// 3. the combined navigator, when both have one
///
/// The combined slot is driven through
/// [`PairNavigator::navigate_step`], so an implementation that overrides it,
/// such as [`MergeStep`](crate::merge::MergeStep), also sees one-sided steps.
///
/// A stop from any of them ends the walk after the step. Steps are
/// re-yielded as `Ok((TryOut<x>, TryOut<y>))`. Whether counts must match is
/// up to the total validator.
///
/// # Examples
///
/// ```
/// use guard_rail::dual::Paired;
/// use guard_rail::{NavigateCommand, TryOut};
///
/// let mut seen_y = Vec::new();
/// let steps: Vec<_> = Paired::new([1, 2], [10, 20, 30])
///     .navigate_y(|y: &i32, step, _| {
///         seen_y.push((step, *y));
///         Ok::<_, ()>(NavigateCommand::CONTINUE)
///     })
///     .total(|summary| {
///         assert_eq!(summary.counts(), (2, 3));
///         Ok(())
///     })
///     .collect_checked()
///     .unwrap();
///
/// assert_eq!(steps[2], (TryOut::Failure, TryOut::Success(30)));
/// assert_eq!(seen_y, [(0, 10), (1, 20), (2, 30)]);
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Paired<X, Y, NX = Accept, NY = Accept, NB = Accept, V = NoTotal, E = ()> {
    steps: Lockstep<X, Y>,
    state: PairedState<NX, NY, NB, V, E>,
}

impl<X: Iterator, Y: Iterator, E> Paired<X, Y, Accept, Accept, Accept, NoTotal, E> {
    #[inline]
    pub fn new<IX, IY>(x: IX, y: IY) -> Self
    where
        IX: IntoIterator<IntoIter = X>,
        IY: IntoIterator<IntoIter = Y>,
    {
        Self { steps: Lockstep::new(x, y), state: PairedState::new() }
    }
}

impl<X: Iterator, Y: Iterator, NX, NY, NB, V, E> Paired<X, Y, NX, NY, NB, V, E> {
    /// Attaches the X-only navigator, called with the element, the step and
    /// the X count so far. Its skip applies to the X count.
    #[inline]
    pub fn navigate_x<F>(self, navigator: F) -> Paired<X, Y, F, NY, NB, V, E>
    where
        F: FnMut(&X::Item, usize, usize) -> Result<NavigateCommand, E>,
    {
        Paired { steps: self.steps, state: self.state.with_x(navigator) }
    }

    /// Attaches the Y-only navigator. Its skip applies to the Y count.
    #[inline]
    pub fn navigate_y<F>(self, navigator: F) -> Paired<X, Y, NX, F, NB, V, E>
    where
        F: FnMut(&Y::Item, usize, usize) -> Result<NavigateCommand, E>,
    {
        Paired { steps: self.steps, state: self.state.with_y(navigator) }
    }

    /// Attaches the combined navigator, run only on steps where both sides
    /// have an element.
    #[inline]
    pub fn navigate_both<F>(self, navigator: F) -> Paired<X, Y, NX, NY, F, V, E>
    where
        F: FnMut(&X::Item, &Y::Item, usize, (usize, usize)) -> Result<PairCommand, E>,
    {
        self.with_both(navigator)
    }

    /// Attaches any [`PairNavigator`] as the combined navigator.
    #[inline]
    pub fn with_both<M>(self, navigator: M) -> Paired<X, Y, NX, NY, M, V, E>
    where
        M: PairNavigator<X::Item, Y::Item, E>,
    {
        Paired { steps: self.steps, state: self.state.with_both(navigator) }
    }

    #[inline]
    pub fn total<F>(self, total: F) -> Paired<X, Y, NX, NY, NB, F, E>
    where
        F: FnOnce(DualSummary) -> Result<(), E>,
    {
        Paired { steps: self.steps, state: self.state.with_total(total) }
    }

    #[inline]
    pub fn summary(&self) -> DualSummary {
        self.state.tally.summary()
    }
}

impl<X, Y, NX, NY, NB, V, E> Paired<X, Y, NX, NY, NB, V, E>
where
    X: Iterator,
    Y: Iterator,
    NX: Navigator<X::Item, E>,
    NY: Navigator<Y::Item, E>,
    NB: PairNavigator<X::Item, Y::Item, E>,
    V: TotalValidator<DualSummary, E>,
{
    /// Drains the traversal and returns what it saw.
    pub fn run(mut self) -> Result<DualSummary, Violation<E>> {
        for step in self.by_ref() {
            let _ = step?;
        }
        Ok(self.summary())
    }

    pub fn collect_checked<B>(self) -> Result<B, Violation<E>>
    where
        B: FromIterator<(TryOut<X::Item>, TryOut<Y::Item>)>,
    {
        self.collect()
    }
}

impl<X, Y, NX, NY, NB, V, E> Iterator for Paired<X, Y, NX, NY, NB, V, E>
where
    X: Iterator,
    Y: Iterator,
    NX: Navigator<X::Item, E>,
    NY: Navigator<Y::Item, E>,
    NB: PairNavigator<X::Item, Y::Item, E>,
    V: TotalValidator<DualSummary, E>,
{
    type Item = Result<(TryOut<X::Item>, TryOut<Y::Item>), Violation<E>>;

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

impl<X, Y, NX, NY, NB, V, E> FusedIterator for Paired<X, Y, NX, NY, NB, V, E>
where
    X: Iterator,
    Y: Iterator,
    NX: Navigator<X::Item, E>,
    NY: Navigator<Y::Item, E>,
    NB: PairNavigator<X::Item, Y::Item, E>,
    V: TotalValidator<DualSummary, E>,
{
}

/// Callbacks and counters of a paired walk, independent of how the sides
/// are pulled.
pub(crate) struct PairedState<NX, NY, NB, V, E> {
    on_x: NX,
    on_y: NY,
    on_both: NB,
    total: Option<V>,
    pub(crate) tally: DualTally,
    pub(crate) done: bool,
    _error: PhantomData<fn() -> E>,
}

impl<E> PairedState<Accept, Accept, Accept, NoTotal, E> {
    pub(crate) fn new() -> Self {
        Self {
            on_x: Accept,
            on_y: Accept,
            on_both: Accept,
            total: Some(NoTotal),
            tally: DualTally::default(),
            done: false,
            _error: PhantomData,
        }
    }
}

impl<NX, NY, NB, V, E> PairedState<NX, NY, NB, V, E> {
    pub(crate) fn with_x<F>(self, on_x: F) -> PairedState<F, NY, NB, V, E> {
        PairedState {
            on_x,
            on_y: self.on_y,
            on_both: self.on_both,
            total: self.total,
            tally: self.tally,
            done: self.done,
            _error: PhantomData,
        }
    }

    pub(crate) fn with_y<F>(self, on_y: F) -> PairedState<NX, F, NB, V, E> {
        PairedState {
            on_x: self.on_x,
            on_y,
            on_both: self.on_both,
            total: self.total,
            tally: self.tally,
            done: self.done,
            _error: PhantomData,
        }
    }

    pub(crate) fn with_both<F>(self, on_both: F) -> PairedState<NX, NY, F, V, E> {
        PairedState {
            on_x: self.on_x,
            on_y: self.on_y,
            on_both,
            total: self.total,
            tally: self.tally,
            done: self.done,
            _error: PhantomData,
        }
    }

    pub(crate) fn with_total<F>(self, total: F) -> PairedState<NX, NY, NB, F, E> {
        PairedState {
            on_x: self.on_x,
            on_y: self.on_y,
            on_both: self.on_both,
            total: self.total.map(|_| total),
            tally: self.tally,
            done: self.done,
            _error: PhantomData,
        }
    }

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
        guard_event!(debug, position, "paired traversal cancelled");
        Violation::Cancelled { position }
    }

    #[allow(clippy::type_complexity)]
    pub(crate) fn step<A, B>(
        &mut self,
        x: TryOut<A>,
        y: TryOut<B>,
    ) -> Result<(TryOut<A>, TryOut<B>), Violation<E>>
    where
        NX: Navigator<A, E>,
        NY: Navigator<B, E>,
        NB: PairNavigator<A, B, E>,
    {
        let position = self.tally.position();
        if position == 0 {
            guard_event!(trace, "paired traversal started");
        }
        match self.visit(position, &x, &y) {
            Ok(cmd) => {
                self.tally.record(x.is_success(), y.is_success(), cmd);
                if cmd.is_stop() {
                    guard_event!(debug, position, "navigator requested stop");
                }
                Ok((x, y))
            },
            Err(violation) => {
                self.done = true;
                self.total = None;
                Err(violation)
            },
        }
    }

    /// Runs the navigators that apply to one step, in order, and merges
    /// their verdicts.
    fn visit<A, B>(
        &mut self,
        position: usize,
        x: &TryOut<A>,
        y: &TryOut<B>,
    ) -> Result<PairCommand, Violation<E>>
    where
        NX: Navigator<A, E>,
        NY: Navigator<B, E>,
        NB: PairNavigator<A, B, E>,
    {
        let (x_count, y_count) = self.tally.counts();
        let mut cmd = PairCommand::CONTINUE;

        if let TryOut::Success(item) = x {
            let verdict = self.on_x.navigate(item, position, x_count);
            cmd.merge_x(verdict.map_err(|e| Violation::at_step(position, Some(Side::X), e))?);
        }
        if let TryOut::Success(item) = y {
            let verdict = self.on_y.navigate(item, position, y_count);
            cmd.merge_y(verdict.map_err(|e| Violation::at_step(position, Some(Side::Y), e))?);
        }
        let verdict = self.on_both.navigate_step(x.as_ref(), y.as_ref(), position, (x_count, y_count));
        cmd |= verdict.map_err(|e| Violation::at_step(position, None, e))?;
        Ok(cmd)
    }

    pub(crate) fn finish(&mut self) -> Option<Violation<E>>
    where
        V: TotalValidator<DualSummary, E>,
    {
        self.done = true;
        let summary = self.tally.summary();
        guard_event!(debug, ?summary, "paired traversal finished");
        let total = self.total.take()?;
        total.validate(summary).err().map(Violation::Aggregate)
    }
}
