/// Callback run exactly once when a traversal ends, with its aggregate
/// facts `S` ([`TraversalSummary`](crate::TraversalSummary) or
/// [`DualSummary`](crate::DualSummary)).
///
/// Taking `self` by value means a validator cannot be invoked twice.
///
/// # Examples
///
/// ```
/// use guard_rail::traits::TotalValidator;
/// use guard_rail::TraversalSummary;
///
/// let at_least_two = |s: TraversalSummary| if s.matched >= 2 { Ok(()) } else { Err("too few") };
/// assert_eq!(at_least_two.validate(TraversalSummary::counted(1)), Err("too few"));
/// ```
pub trait TotalValidator<S, E> {
    fn validate(self, summary: S) -> Result<(), E>;
}

impl<S, E, F> TotalValidator<S, E> for F
where
    F: FnOnce(S) -> Result<(), E>,
{
    #[inline]
    fn validate(self, summary: S) -> Result<(), E> {
        self(summary)
    }
}

/// Total validator that accepts any summary.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTotal;

impl<S, E> TotalValidator<S, E> for NoTotal {
    #[inline]
    fn validate(self, _: S) -> Result<(), E> {
        Ok(())
    }
}
