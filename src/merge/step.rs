use crate::merge::MergeNavigator;
use crate::traits::PairNavigator;
use crate::types::{PairCommand, TryOut};

/// Runs a [`MergeNavigator`] as the combined navigator of a dual engine.
///
/// Under [`Paired`](crate::dual::Paired) it sees every step, one-sided ones
/// included; under [`Coupled`](crate::dual::Coupled) it sees matched pairs
/// only, since an early end is an imbalance there. Only the stop facet of the
/// merge command is forwarded, so counts grow for every present element.
///
/// Wrap `&mut navigator` to read the verdict after the walk.
///
/// # Examples
///
/// ```
/// use guard_rail::dual::Coupled;
/// use guard_rail::merge::{EqualityMerge, MergeStep};
/// use guard_rail::DualSummary;
///
/// let mut equality = EqualityMerge::new();
/// let summary = Coupled::<_, _, _, _, ()>::new([1, 2, 3], [1, 2, 3])
///     .with_navigator(MergeStep::new(&mut equality))
///     .run()
///     .unwrap();
///
/// assert_eq!(summary, DualSummary::new(3, 3, 3, false));
/// assert!(equality.outcome().is_equal());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MergeStep<M> {
    navigator: M,
}

impl<M> MergeStep<M> {
    #[inline]
    pub fn new(navigator: M) -> Self {
        Self { navigator }
    }

    #[inline]
    pub fn into_inner(self) -> M {
        self.navigator
    }
}

impl<X: ?Sized, Y: ?Sized, E, M> PairNavigator<X, Y, E> for MergeStep<M>
where
    M: MergeNavigator<X, Y>,
{
    #[inline]
    fn navigate(&mut self, x: &X, y: &Y, step: usize, counts: (usize, usize)) -> Result<PairCommand, E> {
        self.navigate_step(TryOut::Success(x), TryOut::Success(y), step, counts)
    }

    fn navigate_step(
        &mut self,
        x: TryOut<&X>,
        y: TryOut<&Y>,
        step: usize,
        _: (usize, usize),
    ) -> Result<PairCommand, E> {
        let cmd = self.navigator.step(step, x, y);
        if cmd.is_stop() {
            guard_event!(trace, step, "merge scan concluded");
            return Ok(PairCommand::STOP);
        }
        Ok(PairCommand::CONTINUE)
    }
}
