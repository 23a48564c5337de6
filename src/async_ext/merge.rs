//! Merge checks over two streams.

use core::cmp::Ordering;
use core::convert::Infallible;

use futures_core::stream::Stream;

use crate::async_ext::cancel::Cancellation;
use crate::async_ext::paired::AsyncPaired;
use crate::merge::{
    conclude, Comparison, Equality, EqualityMerge, MergeNavigator, MergeOptions, MergeStep, OrderMerge,
};
use crate::types::Violation;

/// Walks two streams as an [`AsyncPaired`] traversal until the navigator
/// stops or both are exhausted, then returns its verdict.
///
/// `cancel` is checked before every pull; once it fires the scan ends with
/// [`Violation::Cancelled`].
///
/// # Examples
///
/// ```
/// use guard_rail::async_ext::{self, merge, Never};
/// use guard_rail::merge::EqualityMerge;
///
/// # tokio_test();
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn tokio_test() {
/// let x = async_ext::iter(["a", "b"]);
/// let y = async_ext::iter(["a", "b"]);
/// let outcome = merge::merge(x, y, EqualityMerge::new(), Never).await.unwrap();
/// assert!(outcome.is_equal());
/// # }
/// ```
pub async fn merge<X, Y, M, C>(
    x: X,
    y: Y,
    mut navigator: M,
    cancel: C,
) -> Result<M::Verdict, Violation<Infallible>>
where
    X: Stream,
    Y: Stream,
    M: MergeNavigator<X::Item, Y::Item>,
    C: Cancellation,
{
    AsyncPaired::<_, _, _, _, _, _, _, Infallible>::new(x, y)
        .with_both(MergeStep::new(&mut navigator))
        .cancel_on(cancel)
        .run()
        .await?;
    Ok(navigator.verdict())
}

fn lift<E>(violation: Violation<Infallible>) -> Violation<E> {
    violation.map_err(|never| match never {})
}

/// Async [`ensure_equal`](crate::merge::ensure_equal).
pub async fn ensure_equal<X, Y, C, F, E>(
    x: X,
    y: Y,
    options: MergeOptions,
    cancel: C,
    error: F,
) -> Result<Equality, Violation<E>>
where
    X: Stream,
    Y: Stream,
    X::Item: PartialEq<Y::Item>,
    C: Cancellation,
    F: FnOnce(&Equality) -> E,
{
    let verdict = merge(x, y, EqualityMerge::new(), cancel).await.map_err(lift)?;
    conclude(verdict, options, Equality::is_equal, error)
}

/// Async [`ensure_order`](crate::merge::ensure_order).
pub async fn ensure_order<X, Y, T, C, P, F, E>(
    x: X,
    y: Y,
    options: MergeOptions,
    cancel: C,
    predicate: P,
    error: F,
) -> Result<Comparison, Violation<E>>
where
    X: Stream<Item = T>,
    Y: Stream<Item = T>,
    T: Ord,
    C: Cancellation,
    P: FnOnce(Ordering) -> bool,
    F: FnOnce(&Comparison) -> E,
{
    let verdict = merge(x, y, OrderMerge::new(options.absent), cancel).await.map_err(lift)?;
    conclude(verdict, options, |c: &Comparison| predicate(c.ordering), error)
}
