//! Equality and ordering checks built on the dual-sequence walk.
//!
//! A [`MergeNavigator`] looks at one lockstep step at a time and decides
//! whether to keep scanning. [`EqualityMerge`] stops at the first difference,
//! [`OrderMerge`] at the first step that decides the lexicographic order.
//! [`merge`] drives a navigator over two iterables as a paired traversal
//! and returns its verdict; [`MergeStep`] plugs a navigator into
//! [`Paired`](crate::dual::Paired) or [`Coupled`](crate::dual::Coupled)
//! directly, next to a total validator.
//!
//! The `ensure_*` functions turn a verdict into a pass/fail check. The
//! predicate is combined with [`MergeOptions::negate`] as
//! `predicate ^ negate`, so "must equal" and "must differ" share the same
//! scan. A failed check calls the caller's error factory and is reported as
//! [`Violation::Aggregate`].
//!
//! # Examples
//!
//! ```
//! use guard_rail::merge::{self, MergeOptions};
//! use guard_rail::Violation;
//!
//! let checked = merge::ensure_equal([1, 2, 3], [1, 2, 3], MergeOptions::default(), |_| "differs");
//! assert!(checked.is_ok());
//!
//! let must_differ = MergeOptions::default().negate(true);
//! let checked = merge::ensure_equal([1, 2, 3], [1, 2, 3], must_differ, |_| "identical");
//! assert_eq!(checked, Err(Violation::Aggregate("identical")));
//! ```

pub mod equality;
pub mod options;
pub mod order;
pub mod step;

use core::cmp::Ordering;
use core::convert::Infallible;

pub use equality::{ElementEq, Equal, Equality, EqualityMerge, Finding};
pub use options::{AbsentOrdering, MergeOptions};
pub use order::{Comparison, ElementCmp, Natural, OrderMerge};
pub use step::MergeStep;

use crate::dual::Paired;
use crate::types::{NavigateCommand, TryOut, Violation};

/// Per-step decision maker of a merge scan.
///
/// `step` sees borrowed views of both sides and answers with a
/// [`NavigateCommand`](crate::NavigateCommand); only its stop facet is
/// meaningful. `verdict` reports what the scan concluded so far.
pub trait MergeNavigator<X: ?Sized, Y: ?Sized> {
    type Verdict;

    fn step(
        &mut self,
        position: usize,
        x: TryOut<&X>,
        y: TryOut<&Y>,
    ) -> NavigateCommand;

    fn verdict(&self) -> Self::Verdict;
}

impl<X: ?Sized, Y: ?Sized, M> MergeNavigator<X, Y> for &mut M
where
    M: MergeNavigator<X, Y> + ?Sized,
{
    type Verdict = M::Verdict;

    #[inline]
    fn step(
        &mut self,
        position: usize,
        x: TryOut<&X>,
        y: TryOut<&Y>,
    ) -> NavigateCommand {
        (**self).step(position, x, y)
    }

    #[inline]
    fn verdict(&self) -> Self::Verdict {
        (**self).verdict()
    }
}

/// Walks `x` and `y` as a [`Paired`] traversal until the navigator stops or
/// both are exhausted, then returns its verdict.
///
/// To also see the [`DualSummary`](crate::DualSummary) or attach a total
/// validator, drive the walk yourself with [`MergeStep`].
pub fn merge<IX, IY, M>(x: IX, y: IY, mut navigator: M) -> M::Verdict
where
    IX: IntoIterator,
    IY: IntoIterator,
    M: MergeNavigator<IX::Item, IY::Item>,
{
    let walked = Paired::<_, _, _, _, _, _, Infallible>::new(x, y)
        .with_both(MergeStep::new(&mut navigator))
        .run();
    // No total is attached and merge steps never fail.
    debug_assert!(walked.is_ok());
    navigator.verdict()
}

/// `true` when both sequences have the same length and equal elements.
///
/// # Examples
///
/// ```
/// use guard_rail::merge;
///
/// assert!(merge::sequence_eq(vec![1, 2], [1, 2]));
/// assert!(!merge::sequence_eq([1, 2], [1]));
/// ```
#[inline]
pub fn sequence_eq<IX, IY>(x: IX, y: IY) -> bool
where
    IX: IntoIterator,
    IY: IntoIterator,
    IX::Item: PartialEq<IY::Item>,
{
    merge(x, y, EqualityMerge::new()).is_equal()
}

/// Lexicographic comparison with the shorter sequence sorting first.
#[inline]
pub fn sequence_cmp<I, J, T>(x: I, y: J) -> Ordering
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    T: Ord,
{
    merge(x, y, OrderMerge::new(AbsentOrdering::Lower)).ordering
}

/// Checks a navigator's verdict against `predicate ^ options.negate`.
///
/// On failure `error` builds the caller error from the verdict.
pub fn ensure<IX, IY, M, P, F, E>(
    x: IX,
    y: IY,
    navigator: M,
    options: MergeOptions,
    predicate: P,
    error: F,
) -> Result<M::Verdict, Violation<E>>
where
    IX: IntoIterator,
    IY: IntoIterator,
    M: MergeNavigator<IX::Item, IY::Item>,
    P: FnOnce(&M::Verdict) -> bool,
    F: FnOnce(&M::Verdict) -> E,
{
    conclude(merge(x, y, navigator), options, predicate, error)
}

/// Requires equal sequences, or distinct ones when negated.
pub fn ensure_equal<IX, IY, F, E>(
    x: IX,
    y: IY,
    options: MergeOptions,
    error: F,
) -> Result<Equality, Violation<E>>
where
    IX: IntoIterator,
    IY: IntoIterator,
    IX::Item: PartialEq<IY::Item>,
    F: FnOnce(&Equality) -> E,
{
    ensure(x, y, EqualityMerge::new(), options, Equality::is_equal, error)
}

/// Requires the lexicographic ordering of `x` against `y` to satisfy
/// `predicate`, or to violate it when negated. Absent elements sort per
/// `options.absent`.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use guard_rail::merge::{self, MergeOptions};
///
/// let strictly_before = |ordering: Ordering| ordering == Ordering::Less;
/// let ok = merge::ensure_order([1, 2], [1, 3], MergeOptions::default(), strictly_before, |c| c.position);
/// assert!(ok.is_ok());
///
/// let err = merge::ensure_order([1, 4], [1, 3], MergeOptions::default(), strictly_before, |c| c.position);
/// assert_eq!(err.unwrap_err().into_error(), Some(Some(1)));
/// ```
pub fn ensure_order<I, J, T, P, F, E>(
    x: I,
    y: J,
    options: MergeOptions,
    predicate: P,
    error: F,
) -> Result<Comparison, Violation<E>>
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    T: Ord,
    P: FnOnce(Ordering) -> bool,
    F: FnOnce(&Comparison) -> E,
{
    let navigator = OrderMerge::new(options.absent);
    ensure(x, y, navigator, options, |c: &Comparison| predicate(c.ordering), error)
}

pub(crate) fn conclude<V, P, F, E>(
    verdict: V,
    options: MergeOptions,
    predicate: P,
    error: F,
) -> Result<V, Violation<E>>
where
    P: FnOnce(&V) -> bool,
    F: FnOnce(&V) -> E,
{
    if options.holds(predicate(&verdict)) {
        Ok(verdict)
    } else {
        guard_event!(debug, negate = options.negate, "merge check failed");
        Err(Violation::Aggregate(error(&verdict)))
    }
}
