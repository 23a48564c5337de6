use core::iter::FusedIterator;

use crate::types::TryOut;

/// Walks two independent iterators side by side.
///
/// Each step pulls once from every side that still has data and yields the
/// pair of presences. A side is dropped as soon as it reports exhaustion and
/// never pulled again; the walk ends when both are gone, so a yielded step
/// always has at least one `Success`.
///
/// # Examples
///
/// ```
/// use guard_rail::dual::Lockstep;
/// use guard_rail::TryOut::{Failure, Success};
///
/// let steps: Vec<_> = Lockstep::new([1, 2], ["a"]).collect();
/// assert_eq!(steps, [(Success(1), Success("a")), (Success(2), Failure)]);
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Lockstep<X, Y> {
    x: Option<X>,
    y: Option<Y>,
}

impl<X: Iterator, Y: Iterator> Lockstep<X, Y> {
    #[inline]
    pub fn new<IX, IY>(x: IX, y: IY) -> Self
    where
        IX: IntoIterator<IntoIter = X>,
        IY: IntoIterator<IntoIter = Y>,
    {
        Self { x: Some(x.into_iter()), y: Some(y.into_iter()) }
    }

    /// Drops both sides; the walk is over afterwards.
    #[inline]
    pub fn release(&mut self) {
        self.x = None;
        self.y = None;
    }

    #[must_use]
    #[inline]
    pub fn is_released(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}

fn pull_side<I: Iterator>(side: &mut Option<I>) -> TryOut<I::Item> {
    match side.as_mut().and_then(Iterator::next) {
        Some(item) => TryOut::Success(item),
        None => {
            *side = None;
            TryOut::Failure
        },
    }
}

impl<X: Iterator, Y: Iterator> Iterator for Lockstep<X, Y> {
    type Item = (TryOut<X::Item>, TryOut<Y::Item>);

    fn next(&mut self) -> Option<Self::Item> {
        let x = pull_side(&mut self.x);
        let y = pull_side(&mut self.y);
        if x.is_failure() && y.is_failure() {
            return None;
        }
        Some((x, y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let hint = |side: Option<(usize, Option<usize>)>| side.unwrap_or((0, Some(0)));
        let (x_low, x_high) = hint(self.x.as_ref().map(Iterator::size_hint));
        let (y_low, y_high) = hint(self.y.as_ref().map(Iterator::size_hint));
        let high = match (x_high, y_high) {
            (Some(a), Some(b)) => Some(a.max(b)),
            _ => None,
        };
        (x_low.max(y_low), high)
    }
}

impl<X: Iterator, Y: Iterator> FusedIterator for Lockstep<X, Y> {}
