//! Adapter from iterators to streams.

use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::stream::{FusedStream, Stream};

/// Stream that yields the items of an iterator, always ready.
///
/// Created by [`iter`].
#[must_use = "streams do nothing unless polled"]
#[derive(Clone, Debug)]
pub struct Iter<I> {
    iter: I,
    done: bool,
}

// The iterator is never pinned.
impl<I> Unpin for Iter<I> {}

/// Turns an iterable into a [`Stream`] so it can be one side of an async
/// dual traversal.
#[inline]
pub fn iter<I: IntoIterator>(iterable: I) -> Iter<I::IntoIter> {
    Iter { iter: iterable.into_iter(), done: false }
}

impl<I: Iterator> Stream for Iter<I> {
    type Item = I::Item;

    #[inline]
    fn poll_next(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.done {
            return Poll::Ready(None);
        }
        let next = self.iter.next();
        if next.is_none() {
            self.done = true;
        }
        Poll::Ready(next)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            self.iter.size_hint()
        }
    }
}

impl<I: Iterator> FusedStream for Iter<I> {
    fn is_terminated(&self) -> bool {
        self.done
    }
}
