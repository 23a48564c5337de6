use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::stream::{FusedStream, Stream};
use pin_project_lite::pin_project;

use crate::types::TryOut;

pin_project! {
    /// Walks two streams side by side.
    ///
    /// The async counterpart of [`Lockstep`](crate::dual::Lockstep): each
    /// step pulls X, then Y, from every side that still has data. An X item
    /// that arrives while Y is still pending is held until Y answers, so a
    /// step always pairs the i-th items. Exhausted sides are dropped at
    /// once.
    #[must_use = "streams do nothing unless polled"]
    pub struct AsyncLockstep<X: Stream, Y: Stream> {
        #[pin]
        x: Option<X>,
        #[pin]
        y: Option<Y>,
        held_x: Option<TryOut<X::Item>>,
    }
}

impl<X: Stream, Y: Stream> AsyncLockstep<X, Y> {
    #[inline]
    pub fn new(x: X, y: Y) -> Self {
        Self { x: Some(x), y: Some(y), held_x: None }
    }

    /// Drops both sides and anything held; the walk is over afterwards.
    pub fn release(self: Pin<&mut Self>) {
        let mut this = self.project();
        this.x.set(None);
        this.y.set(None);
        *this.held_x = None;
    }

    #[must_use]
    #[inline]
    pub fn is_released(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}

fn poll_side<S: Stream>(
    mut side: Pin<&mut Option<S>>,
    cx: &mut Context<'_>,
) -> Poll<TryOut<S::Item>> {
    let pulled = match side.as_mut().as_pin_mut() {
        Some(stream) => ready!(stream.poll_next(cx)),
        None => None,
    };
    if pulled.is_none() {
        side.set(None);
    }
    Poll::Ready(pulled.into())
}

impl<X: Stream, Y: Stream> Stream for AsyncLockstep<X, Y> {
    type Item = (TryOut<X::Item>, TryOut<Y::Item>);

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        if this.held_x.is_none() {
            let x = ready!(poll_side(this.x.as_mut(), cx));
            *this.held_x = Some(x);
        }
        let y = ready!(poll_side(this.y.as_mut(), cx));
        let x = this.held_x.take().unwrap_or(TryOut::Failure);
        if x.is_failure() && y.is_failure() {
            return Poll::Ready(None);
        }
        Poll::Ready(Some((x, y)))
    }
}

impl<X: Stream, Y: Stream> FusedStream for AsyncLockstep<X, Y> {
    fn is_terminated(&self) -> bool {
        self.is_released()
    }
}
