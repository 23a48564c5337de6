use std::cell::Cell;
use std::future::poll_fn;
use std::pin::{pin, Pin};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_core::stream::{FusedStream, Stream};
use guard_rail::async_ext::{self, merge, AsyncCoupled, AsyncLockstep, AsyncPaired, CancelFlag, Never};
use guard_rail::merge::{AbsentOrdering, EqualityMerge, Finding, MergeOptions, OrderMerge};
use guard_rail::TryOut::{Failure, Success};
use guard_rail::{DualSummary, NavigateCommand, PairCommand, Side, Violation};

/// Stream that answers `Pending` before every item.
struct Delayed<I> {
    iter: I,
    ready: bool,
}

fn delayed<I: IntoIterator>(items: I) -> Delayed<I::IntoIter> {
    Delayed { iter: items.into_iter(), ready: false }
}

impl<I: Iterator + Unpin> Stream for Delayed<I> {
    type Item = I::Item;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<I::Item>> {
        if !self.ready {
            self.ready = true;
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }
        self.ready = false;
        Poll::Ready(self.iter.next())
    }
}

async fn drain<S: Stream>(stream: S) -> Vec<S::Item> {
    let mut stream = pin!(stream);
    let mut items = Vec::new();
    while let Some(item) = poll_fn(|cx| stream.as_mut().poll_next(cx)).await {
        items.push(item);
    }
    items
}

#[tokio::test]
async fn lockstep_pairs_items_of_both_streams() {
    let steps = drain(AsyncLockstep::new(async_ext::iter([1, 2, 3]), async_ext::iter(["a"]))).await;
    assert_eq!(steps, [(Success(1), Success("a")), (Success(2), Failure), (Success(3), Failure)]);
}

#[tokio::test]
async fn lockstep_holds_x_while_y_is_pending() {
    let steps = drain(AsyncLockstep::new(async_ext::iter([1, 2]), delayed([10, 20, 30]))).await;
    assert_eq!(steps, [(Success(1), Success(10)), (Success(2), Success(20)), (Failure, Success(30))]);
}

#[tokio::test]
async fn lockstep_is_terminated_after_both_sides_end() {
    let mut steps = pin!(AsyncLockstep::new(async_ext::iter([1]), async_ext::iter([2])));
    assert!(!steps.is_terminated());
    while poll_fn(|cx| steps.as_mut().poll_next(cx)).await.is_some() {}
    assert!(steps.is_terminated());
}

#[tokio::test]
async fn coupled_runs_like_the_sync_engine() {
    let summary = AsyncCoupled::new(delayed([1, 2, 3]), async_ext::iter([1, 2, 3]))
        .navigate(|x: &i32, y: &i32, _, _| Ok::<_, ()>(PairCommand::new(x == &2, false, false)))
        .total(|summary| if summary.steps == 3 { Ok(()) } else { Err(()) })
        .run()
        .await
        .unwrap();

    assert_eq!(summary, DualSummary::new(3, 2, 3, false));
}

#[tokio::test]
async fn coupled_reports_imbalance_and_skips_total() {
    let total_ran = Cell::new(false);
    let result = AsyncCoupled::new(async_ext::iter([1, 2]), delayed([1]))
        .total(|_| {
            total_ran.set(true);
            Ok::<_, &str>(())
        })
        .run()
        .await;

    assert_eq!(result, Err(Violation::Imbalance { position: 1, present: Side::X }));
    assert!(!total_ran.get());
}

#[tokio::test]
async fn coupled_collects_pairs() {
    let pairs = AsyncCoupled::<_, _, _, _, _, ()>::new(async_ext::iter("ab".chars()), async_ext::iter([1, 2]))
        .collect_checked()
        .await
        .unwrap();
    assert_eq!(pairs, [('a', 1), ('b', 2)]);
}

#[tokio::test]
async fn cancellation_mid_walk_yields_cancelled_once() {
    let flag = CancelFlag::new();
    let trigger = flag.clone();
    let total_ran = Cell::new(false);

    let coupled = AsyncCoupled::new(async_ext::iter(0..10), async_ext::iter(0..10))
        .navigate(move |x: &i32, _: &i32, _, _| {
            if *x == 1 {
                trigger.cancel();
            }
            Ok::<_, ()>(PairCommand::CONTINUE)
        })
        .total(|_| {
            total_ran.set(true);
            Ok(())
        })
        .cancel_on(flag);

    let steps = drain(coupled).await;
    assert_eq!(steps, [Ok((0, 0)), Ok((1, 1)), Err(Violation::Cancelled { position: 2 })]);
    assert!(!total_ran.get());
}

#[tokio::test]
async fn cancellation_accepts_shared_atomics() {
    let flag = Arc::new(AtomicBool::new(true));
    let result = AsyncCoupled::<_, _, _, _, _, ()>::new(async_ext::iter([1]), async_ext::iter([1]))
        .cancel_on(Arc::clone(&flag))
        .run()
        .await;
    assert!(result.unwrap_err().is_cancelled());
}

#[tokio::test]
async fn paired_runs_side_validators() {
    let summary = AsyncPaired::new(async_ext::iter([1, 2, 3]), delayed([5]))
        .navigate_x(|x: &i32, _, _| Ok::<_, &str>(NavigateCommand::skip_if(*x == 3)))
        .navigate_y(|y: &i32, _, _| if *y > 0 { Ok(NavigateCommand::CONTINUE) } else { Err("negative") })
        .navigate_both(|x: &i32, y: &i32, _, _| Ok(PairCommand::new(false, false, x + y > 100)))
        .run()
        .await
        .unwrap();

    assert_eq!(summary, DualSummary::new(3, 2, 1, false));
}

#[tokio::test]
async fn paired_stop_ends_before_exhaustion() {
    let pulled = Cell::new(0);
    let x = async_ext::iter((0..100).inspect(|_| pulled.set(pulled.get() + 1)));
    let summary = AsyncPaired::new(x, async_ext::iter(Vec::<i32>::new()))
        .navigate_x(|x: &i32, _, _| Ok::<_, ()>(NavigateCommand::stop_if(*x == 4)))
        .run()
        .await
        .unwrap();

    assert_eq!(summary, DualSummary::new(5, 5, 0, true));
    assert_eq!(pulled.get(), 5);
}

#[tokio::test]
async fn paired_cancel_before_start() {
    let flag = CancelFlag::new();
    flag.cancel();

    let mut paired = pin!(AsyncPaired::<_, _, _, _, _, _, _, ()>::new(
        async_ext::iter([1]),
        async_ext::iter([2])
    )
    .cancel_on(flag));

    let first = poll_fn(|cx| paired.as_mut().poll_next(cx)).await;
    assert_eq!(first, Some(Err(Violation::Cancelled { position: 0 })));
    assert!(paired.is_terminated());
    assert_eq!(poll_fn(|cx| paired.as_mut().poll_next(cx)).await, None);
}

#[tokio::test]
async fn async_merge_matches_sync_verdicts() {
    let outcome = merge::merge(async_ext::iter([1, 2, 3]), delayed([1, 4]), EqualityMerge::new(), Never)
        .await
        .unwrap();
    assert_eq!(outcome.finding, Some(Finding::Mismatch { position: 1 }));

    let outcome =
        merge::merge(delayed([1]), async_ext::iter([1, 2]), OrderMerge::new(AbsentOrdering::Higher), Never)
            .await
            .unwrap();
    assert_eq!(outcome.ordering, std::cmp::Ordering::Greater);
}

#[tokio::test]
async fn async_ensure_equal_lifts_errors() {
    let err = merge::ensure_equal(
        async_ext::iter([1, 2]),
        async_ext::iter([1, 2, 3]),
        MergeOptions::default(),
        Never,
        |eq| eq.finding,
    )
    .await
    .unwrap_err();
    assert_eq!(err, Violation::Aggregate(Some(Finding::Imbalance { position: 2, present: Side::Y })));

    let flag = CancelFlag::new();
    flag.cancel();
    let err = merge::ensure_equal(async_ext::iter([1]), async_ext::iter([1]), MergeOptions::default(), flag, |_| ())
        .await
        .unwrap_err();
    assert_eq!(err, Violation::Cancelled { position: 0 });
}

#[tokio::test]
async fn async_ensure_order_honours_negate() {
    let before = |ordering: std::cmp::Ordering| ordering.is_lt();
    let options = MergeOptions::default().negate(true);

    let ok = merge::ensure_order(async_ext::iter([2]), async_ext::iter([1]), options, Never, before, |_| ()).await;
    assert!(ok.is_ok());

    let err = merge::ensure_order(async_ext::iter([1]), async_ext::iter([2]), options, Never, before, |c| c.position)
        .await;
    assert_eq!(err, Err(Violation::Aggregate(Some(0))));
}

#[tokio::test]
async fn coupled_cancellation_releases_both_sides() {
    let (x_dropped, y_dropped) = (Cell::new(false), Cell::new(false));
    let flag = CancelFlag::new();
    let trigger = flag.clone();

    let coupled = AsyncCoupled::new(
        async_ext::iter(crate::dual::Tracked::new(0..10, &x_dropped)),
        async_ext::iter(crate::dual::Tracked::new(0..10, &y_dropped)),
    )
    .navigate(move |_: &i32, _: &i32, _, _| {
        trigger.cancel();
        Ok::<_, ()>(PairCommand::CONTINUE)
    })
    .cancel_on(flag);
    let mut coupled = pin!(coupled);

    assert_eq!(poll_fn(|cx| coupled.as_mut().poll_next(cx)).await, Some(Ok((0, 0))));
    assert!(!x_dropped.get() && !y_dropped.get());
    assert_eq!(
        poll_fn(|cx| coupled.as_mut().poll_next(cx)).await,
        Some(Err(Violation::Cancelled { position: 1 }))
    );
    assert!(x_dropped.get());
    assert!(y_dropped.get());
}

#[tokio::test]
async fn paired_cancellation_releases_both_sides() {
    let (x_dropped, y_dropped) = (Cell::new(false), Cell::new(false));
    let flag = CancelFlag::new();
    let trigger = flag.clone();

    let paired = AsyncPaired::new(
        async_ext::iter(crate::dual::Tracked::new(0..10, &x_dropped)),
        delayed(crate::dual::Tracked::new(0..10, &y_dropped)),
    )
    .navigate_y(move |y: &i32, _, _| {
        if *y == 1 {
            trigger.cancel();
        }
        Ok::<_, ()>(NavigateCommand::CONTINUE)
    })
    .cancel_on(flag);
    let mut paired = pin!(paired);

    for expected in 0..2 {
        let step = poll_fn(|cx| paired.as_mut().poll_next(cx)).await;
        assert_eq!(step, Some(Ok((Success(expected), Success(expected)))));
    }
    assert!(!x_dropped.get() && !y_dropped.get());

    let cancelled = poll_fn(|cx| paired.as_mut().poll_next(cx)).await;
    assert_eq!(cancelled, Some(Err(Violation::Cancelled { position: 2 })));
    assert!(x_dropped.get());
    assert!(y_dropped.get());
}
