use core::future::poll_fn;
use core::pin::{pin, Pin};
use core::task::{ready, Context, Poll};

use futures_core::stream::{FusedStream, Stream};
use pin_project_lite::pin_project;

use crate::async_ext::cancel::{Cancellation, Never};
use crate::async_ext::lockstep::AsyncLockstep;
use crate::dual::coupled::CoupledState;
use crate::traits::{Accept, NoTotal, PairNavigator, TotalValidator};
use crate::types::alloc_type::Vec;
use crate::types::{DualSummary, PairCommand, Violation};

pin_project! {
    /// Coupled traversal over two streams.
    ///
    /// Same contract as [`Coupled`](crate::dual::Coupled), with the
    /// cancellation token checked before every pull.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::async_ext::{self, AsyncCoupled};
    /// use guard_rail::PairCommand;
    ///
    /// # tokio_test();
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn tokio_test() {
    /// let summary = AsyncCoupled::new(async_ext::iter([1, 2]), async_ext::iter([1, 2]))
    ///     .navigate(|x: &i32, y: &i32, _, _| {
    ///         if x == y { Ok(PairCommand::CONTINUE) } else { Err("differs") }
    ///     })
    ///     .run()
    ///     .await
    ///     .unwrap();
    /// assert_eq!(summary.counts(), (2, 2));
    /// # }
    /// ```
    #[must_use = "streams do nothing unless polled"]
    pub struct AsyncCoupled<X: Stream, Y: Stream, N = Accept, V = NoTotal, C = Never, E = ()> {
        #[pin]
        steps: AsyncLockstep<X, Y>,
        state: CoupledState<N, V, E>,
        cancel: C,
    }
}

impl<X: Stream, Y: Stream, E> AsyncCoupled<X, Y, Accept, NoTotal, Never, E> {
    #[inline]
    pub fn new(x: X, y: Y) -> Self {
        Self { steps: AsyncLockstep::new(x, y), state: CoupledState::new(), cancel: Never }
    }
}

impl<X: Stream, Y: Stream, N, V, C, E> AsyncCoupled<X, Y, N, V, C, E> {
    #[inline]
    pub fn navigate<F>(self, navigator: F) -> AsyncCoupled<X, Y, F, V, C, E>
    where
        F: FnMut(&X::Item, &Y::Item, usize, (usize, usize)) -> Result<PairCommand, E>,
    {
        self.with_navigator(navigator)
    }

    #[inline]
    pub fn with_navigator<M>(self, navigator: M) -> AsyncCoupled<X, Y, M, V, C, E>
    where
        M: PairNavigator<X::Item, Y::Item, E>,
    {
        AsyncCoupled {
            steps: self.steps,
            state: self.state.with_navigator(navigator),
            cancel: self.cancel,
        }
    }

    #[inline]
    pub fn total<F>(self, total: F) -> AsyncCoupled<X, Y, N, F, C, E>
    where
        F: FnOnce(DualSummary) -> Result<(), E>,
    {
        AsyncCoupled { steps: self.steps, state: self.state.with_total(total), cancel: self.cancel }
    }

    /// Checks `cancel` before every pull.
    #[inline]
    pub fn cancel_on<T: Cancellation>(self, cancel: T) -> AsyncCoupled<X, Y, N, V, T, E> {
        AsyncCoupled { steps: self.steps, state: self.state, cancel }
    }

    #[inline]
    pub fn summary(&self) -> DualSummary {
        self.state.tally.summary()
    }
}

impl<X, Y, N, V, C, E> AsyncCoupled<X, Y, N, V, C, E>
where
    X: Stream,
    Y: Stream,
    N: PairNavigator<X::Item, Y::Item, E>,
    V: TotalValidator<DualSummary, E>,
    C: Cancellation,
{
    /// Drains the traversal and returns what it saw.
    pub async fn run(self) -> Result<DualSummary, Violation<E>> {
        let mut this = pin!(self);
        while let Some(step) = poll_fn(|cx| this.as_mut().poll_next(cx)).await {
            step?;
        }
        Ok(this.summary())
    }

    /// Drains the traversal into a `Vec` of the coupled pairs.
    #[allow(clippy::type_complexity)]
    pub async fn collect_checked(self) -> Result<Vec<(X::Item, Y::Item)>, Violation<E>> {
        let mut this = pin!(self);
        let mut pairs = Vec::new();
        while let Some(step) = poll_fn(|cx| this.as_mut().poll_next(cx)).await {
            pairs.push(step?);
        }
        Ok(pairs)
    }
}

impl<X, Y, N, V, C, E> Stream for AsyncCoupled<X, Y, N, V, C, E>
where
    X: Stream,
    Y: Stream,
    N: PairNavigator<X::Item, Y::Item, E>,
    V: TotalValidator<DualSummary, E>,
    C: Cancellation,
{
    type Item = Result<(X::Item, Y::Item), Violation<E>>;

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

impl<X, Y, N, V, C, E> FusedStream for AsyncCoupled<X, Y, N, V, C, E>
where
    X: Stream,
    Y: Stream,
    N: PairNavigator<X::Item, Y::Item, E>,
    V: TotalValidator<DualSummary, E>,
    C: Cancellation,
{
    fn is_terminated(&self) -> bool {
        self.state.done
    }
}
