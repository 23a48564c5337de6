use core::future::poll_fn;
use core::pin::{pin, Pin};
use core::task::{ready, Context, Poll};

use futures_core::stream::{FusedStream, Stream};
use pin_project_lite::pin_project;

use crate::async_ext::cancel::{Cancellation, Never};
use crate::async_ext::lockstep::AsyncLockstep;
use crate::dual::paired::PairedState;
use crate::traits::{Accept, Navigator, NoTotal, PairNavigator, TotalValidator};
use crate::types::{DualSummary, NavigateCommand, PairCommand, TryOut, Violation};

pin_project! {
    /// Paired traversal over two streams.
    ///
    /// Same contract as [`Paired`](crate::dual::Paired), with the
    /// cancellation token checked before every pull.
    #[must_use = "streams do nothing unless polled"]
    pub struct AsyncPaired<
        X: Stream,
        Y: Stream,
        NX = Accept,
        NY = Accept,
        NB = Accept,
        V = NoTotal,
        C = Never,
        E = (),
    > {
        #[pin]
        steps: AsyncLockstep<X, Y>,
        state: PairedState<NX, NY, NB, V, E>,
        cancel: C,
    }
}

impl<X: Stream, Y: Stream, E> AsyncPaired<X, Y, Accept, Accept, Accept, NoTotal, Never, E> {
    #[inline]
    pub fn new(x: X, y: Y) -> Self {
        Self { steps: AsyncLockstep::new(x, y), state: PairedState::new(), cancel: Never }
    }
}

impl<X: Stream, Y: Stream, NX, NY, NB, V, C, E> AsyncPaired<X, Y, NX, NY, NB, V, C, E> {
    #[inline]
    pub fn navigate_x<F>(self, navigator: F) -> AsyncPaired<X, Y, F, NY, NB, V, C, E>
    where
        F: FnMut(&X::Item, usize, usize) -> Result<NavigateCommand, E>,
    {
        AsyncPaired { steps: self.steps, state: self.state.with_x(navigator), cancel: self.cancel }
    }

    #[inline]
    pub fn navigate_y<F>(self, navigator: F) -> AsyncPaired<X, Y, NX, F, NB, V, C, E>
    where
        F: FnMut(&Y::Item, usize, usize) -> Result<NavigateCommand, E>,
    {
        AsyncPaired { steps: self.steps, state: self.state.with_y(navigator), cancel: self.cancel }
    }

    #[inline]
    pub fn navigate_both<F>(self, navigator: F) -> AsyncPaired<X, Y, NX, NY, F, V, C, E>
    where
        F: FnMut(&X::Item, &Y::Item, usize, (usize, usize)) -> Result<PairCommand, E>,
    {
        self.with_both(navigator)
    }

    /// Attaches any [`PairNavigator`] as the combined navigator.
    #[inline]
    pub fn with_both<M>(self, navigator: M) -> AsyncPaired<X, Y, NX, NY, M, V, C, E>
    where
        M: PairNavigator<X::Item, Y::Item, E>,
    {
        AsyncPaired {
            steps: self.steps,
            state: self.state.with_both(navigator),
            cancel: self.cancel,
        }
    }

    #[inline]
    pub fn total<F>(self, total: F) -> AsyncPaired<X, Y, NX, NY, NB, F, C, E>
    where
        F: FnOnce(DualSummary) -> Result<(), E>,
    {
        AsyncPaired { steps: self.steps, state: self.state.with_total(total), cancel: self.cancel }
    }

    /// Checks `cancel` before every pull.
    #[inline]
    pub fn cancel_on<T: Cancellation>(self, cancel: T) -> AsyncPaired<X, Y, NX, NY, NB, V, T, E> {
        AsyncPaired { steps: self.steps, state: self.state, cancel }
    }

    #[inline]
    pub fn summary(&self) -> DualSummary {
        self.state.tally.summary()
    }
}

impl<X, Y, NX, NY, NB, V, C, E> AsyncPaired<X, Y, NX, NY, NB, V, C, E>
where
    X: Stream,
    Y: Stream,
    NX: Navigator<X::Item, E>,
    NY: Navigator<Y::Item, E>,
    NB: PairNavigator<X::Item, Y::Item, E>,
    V: TotalValidator<DualSummary, E>,
    C: Cancellation,
{
    /// Drains the traversal and returns what it saw.
    pub async fn run(self) -> Result<DualSummary, Violation<E>> {
        let mut this = pin!(self);
        while let Some(step) = poll_fn(|cx| this.as_mut().poll_next(cx)).await {
            let _ = step?;
        }
        Ok(this.summary())
    }
}

impl<X, Y, NX, NY, NB, V, C, E> Stream for AsyncPaired<X, Y, NX, NY, NB, V, C, E>
where
    X: Stream,
    Y: Stream,
    NX: Navigator<X::Item, E>,
    NY: Navigator<Y::Item, E>,
    NB: PairNavigator<X::Item, Y::Item, E>,
    V: TotalValidator<DualSummary, E>,
    C: Cancellation,
{
    type Item = Result<(TryOut<X::Item>, TryOut<Y::Item>), Violation<E>>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        if this.state.done {
            return Poll::Ready(None);
        }
        if this.state.wants_more() {
            if this.cancel.is_cancelled() {
                this.steps.release();
                return Poll::Ready(Some(Err(this.state.cancel())));
            }
            if let Some((x, y)) = ready!(this.steps.as_mut().poll_next(cx)) {
                let step = this.state.step(x, y);
                if step.is_err() {
                    this.steps.release();
                }
                return Poll::Ready(Some(step));
            }
        }
        this.steps.release();
        Poll::Ready(this.state.finish().map(Err))
    }
}

impl<X, Y, NX, NY, NB, V, C, E> FusedStream for AsyncPaired<X, Y, NX, NY, NB, V, C, E>
where
    X: Stream,
    Y: Stream,
    NX: Navigator<X::Item, E>,
    NY: Navigator<Y::Item, E>,
    NB: PairNavigator<X::Item, Y::Item, E>,
    V: TotalValidator<DualSummary, E>,
    C: Cancellation,
{
    fn is_terminated(&self) -> bool {
        self.state.done
    }
}
