use crate::types::{NavigateCommand, PairCommand, TryOut};

/// Per-element callback of a single-sequence traversal.
///
/// Receives the element, its position (every examined element counts) and
/// the number of elements matched before it. Implemented for every matching
/// `FnMut` closure and for [`Accept`].
///
/// # Examples
///
/// ```
/// use guard_rail::traits::Navigator;
/// use guard_rail::NavigateCommand;
///
/// let mut positive = |item: &i32, _index: usize, _matched: usize| {
///     if *item > 0 { Ok(NavigateCommand::CONTINUE) } else { Err("not positive") }
/// };
/// assert_eq!(positive.navigate(&3, 0, 0), Ok(NavigateCommand::CONTINUE));
/// assert_eq!(positive.navigate(&-3, 1, 1), Err("not positive"));
/// ```
pub trait Navigator<T: ?Sized, E> {
    fn navigate(&mut self, item: &T, position: usize, matched: usize)
        -> Result<NavigateCommand, E>;

    /// Returns `true` when the navigator accepts every element without
    /// looking at it, which lets counted sources skip the per-element walk.
    fn accepts_all(&self) -> bool {
        false
    }
}

impl<T: ?Sized, E, F> Navigator<T, E> for F
where
    F: FnMut(&T, usize, usize) -> Result<NavigateCommand, E>,
{
    #[inline]
    fn navigate(&mut self, item: &T, position: usize, matched: usize) -> Result<NavigateCommand, E> {
        self(item, position, matched)
    }
}

/// Per-element callback of an array traversal.
///
/// Like [`Navigator`], with the current dimension-index vector between the
/// flat offset and the matched count.
pub trait ArrayNavigator<T: ?Sized, E> {
    fn navigate(
        &mut self,
        item: &T,
        offset: usize,
        indices: &[isize],
        matched: usize,
    ) -> Result<NavigateCommand, E>;
}

impl<T: ?Sized, E, F> ArrayNavigator<T, E> for F
where
    F: FnMut(&T, usize, &[isize], usize) -> Result<NavigateCommand, E>,
{
    #[inline]
    fn navigate(
        &mut self,
        item: &T,
        offset: usize,
        indices: &[isize],
        matched: usize,
    ) -> Result<NavigateCommand, E> {
        self(item, offset, indices, matched)
    }
}

/// Combined callback of a dual traversal, run on steps where both sides
/// hold an element. Receives the step and the running `(x_count, y_count)`.
pub trait PairNavigator<X: ?Sized, Y: ?Sized, E> {
    fn navigate(&mut self, x: &X, y: &Y, step: usize, counts: (usize, usize))
        -> Result<PairCommand, E>;

    /// Entry point of paired traversal, called on every step with both
    /// presences. The default runs [`navigate`](Self::navigate) only when
    /// both sides hold an element.
    fn navigate_step(
        &mut self,
        x: TryOut<&X>,
        y: TryOut<&Y>,
        step: usize,
        counts: (usize, usize),
    ) -> Result<PairCommand, E> {
        match (x, y) {
            (TryOut::Success(x), TryOut::Success(y)) => self.navigate(x, y, step, counts),
            _ => Ok(PairCommand::CONTINUE),
        }
    }
}

impl<X: ?Sized, Y: ?Sized, E, F> PairNavigator<X, Y, E> for F
where
    F: FnMut(&X, &Y, usize, (usize, usize)) -> Result<PairCommand, E>,
{
    #[inline]
    fn navigate(&mut self, x: &X, y: &Y, step: usize, counts: (usize, usize)) -> Result<PairCommand, E> {
        self(x, y, step, counts)
    }
}

/// Navigator that accepts every element.
///
/// The default when no navigator is attached; it also unlocks the
/// fast-count path of indexed sources.
#[derive(Clone, Copy, Debug, Default)]
pub struct Accept;

impl<T: ?Sized, E> Navigator<T, E> for Accept {
    #[inline]
    fn navigate(&mut self, _: &T, _: usize, _: usize) -> Result<NavigateCommand, E> {
        Ok(NavigateCommand::CONTINUE)
    }

    #[inline]
    fn accepts_all(&self) -> bool {
        true
    }
}

impl<T: ?Sized, E> ArrayNavigator<T, E> for Accept {
    #[inline]
    fn navigate(&mut self, _: &T, _: usize, _: &[isize], _: usize) -> Result<NavigateCommand, E> {
        Ok(NavigateCommand::CONTINUE)
    }
}

impl<X: ?Sized, Y: ?Sized, E> PairNavigator<X, Y, E> for Accept {
    #[inline]
    fn navigate(&mut self, _: &X, _: &Y, _: usize, _: (usize, usize)) -> Result<PairCommand, E> {
        Ok(PairCommand::CONTINUE)
    }
}
