use std::cell::Cell;
use std::cmp::Ordering;

use guard_rail::dual::{Coupled, Paired};
use guard_rail::merge::{
    self, AbsentOrdering, Comparison, Equality, EqualityMerge, Finding, MergeNavigator, MergeOptions,
    MergeStep, OrderMerge,
};
use guard_rail::{DualSummary, NavigateCommand, Side, TryOut, Violation};

#[test]
fn equal_sequences_scan_every_step() {
    let outcome = merge::merge(vec![1, 2, 3], [1, 2, 3], EqualityMerge::new());
    assert_eq!(outcome, Equality { steps: 3, finding: None });
    assert!(outcome.is_equal());
}

#[test]
fn first_mismatch_ends_the_scan() {
    let pulled = Cell::new(0);
    let x = [1, 2, 3, 4].into_iter().inspect(|_| pulled.set(pulled.get() + 1));

    let outcome = merge::merge(x, [1, 9, 3, 4], EqualityMerge::new());
    assert_eq!(outcome.finding, Some(Finding::Mismatch { position: 1 }));
    assert_eq!(outcome.steps, 2);
    assert_eq!(pulled.get(), 2);
}

#[test]
fn length_difference_is_an_imbalance_finding() {
    let outcome = merge::merge([1, 2], [1, 2, 3], EqualityMerge::new());
    assert_eq!(outcome.finding, Some(Finding::Imbalance { position: 2, present: Side::Y }));

    let outcome = merge::merge("abc".chars(), "ab".chars(), EqualityMerge::new());
    assert_eq!(outcome.finding, Some(Finding::Imbalance { position: 2, present: Side::X }));
    assert_eq!(outcome.to_string(), "only x has an element at position 2");
}

#[test]
fn empty_sequences_are_equal() {
    let outcome = merge::merge(Vec::<u8>::new(), Vec::<u8>::new(), EqualityMerge::new());
    assert_eq!(outcome, Equality::default());
    assert!(merge::sequence_eq::<Vec<u8>, [u8; 0]>(Vec::<u8>::new(), []));
}

#[test]
fn custom_equality_compares_across_types() {
    let by_len = EqualityMerge::by(|word: &&str, len: &usize| word.len() == *len);
    assert!(merge::merge(["a", "bcd"], [1usize, 3], by_len).is_equal());
}

#[test]
fn order_decided_by_first_difference() {
    let outcome = merge::merge([1, 2, 5], [1, 3, 0], OrderMerge::default());
    assert_eq!(outcome, Comparison { ordering: Ordering::Less, position: Some(1) });

    assert_eq!(merge::sequence_cmp([2, 0], [1, 9]), Ordering::Greater);
    assert_eq!(merge::sequence_cmp([1, 2], [1, 2]), Ordering::Equal);
}

#[test]
fn absent_ordering_places_the_shorter_side() {
    let lower = merge::merge([1], [1, 2], OrderMerge::new(AbsentOrdering::Lower));
    assert_eq!(lower, Comparison { ordering: Ordering::Less, position: Some(1) });

    let higher = merge::merge([1], [1, 2], OrderMerge::new(AbsentOrdering::Higher));
    assert_eq!(higher, Comparison { ordering: Ordering::Greater, position: Some(1) });

    let higher = merge::merge([1, 2], [1], OrderMerge::new(AbsentOrdering::Higher));
    assert_eq!(higher.ordering, Ordering::Less);
}

#[test]
fn sequence_cmp_agrees_with_slice_ordering() {
    let cases: [(&[i32], &[i32]); 5] =
        [(&[], &[]), (&[], &[1]), (&[1, 2], &[1]), (&[3], &[1, 4]), (&[1, 2, 3], &[1, 2, 4])];
    for (x, y) in cases {
        assert_eq!(merge::sequence_cmp(x, y), x.cmp(y), "{x:?} vs {y:?}");
    }
}

#[test]
fn custom_comparator_orders_by_key() {
    let reversed = OrderMerge::by(|a: &i32, b: &i32| b.cmp(a), AbsentOrdering::Lower);
    let outcome = merge::merge([3, 1], [3, 2], reversed);
    assert_eq!(outcome.ordering, Ordering::Greater);
    assert_eq!(outcome.to_string(), "x sorts after y, decided at position 1");
}

#[test]
fn ensure_equal_builds_aggregate_errors() {
    let err = merge::ensure_equal([1, 2], [1, 3], MergeOptions::default(), |eq| eq.to_string()).unwrap_err();
    assert_eq!(err, Violation::Aggregate("elements differ at position 1".to_owned()));

    let ok = merge::ensure_equal([1, 2], [1, 2], MergeOptions::default(), |_| "unused").unwrap();
    assert_eq!(ok.steps, 2);
}

#[test]
fn negate_flips_the_equality_check() {
    let must_differ = MergeOptions::new().negate(true);

    let ok = merge::ensure_equal([1, 2], [1, 2, 3], must_differ, |_| "identical");
    assert!(ok.is_ok());

    let err = merge::ensure_equal([1, 2], [1, 2], must_differ, |_| "identical");
    assert_eq!(err, Err(Violation::Aggregate("identical")));
}

#[test]
fn error_factory_only_runs_on_failure() {
    let called = Cell::new(false);
    let result = merge::ensure_equal("ab".chars(), "ab".chars(), MergeOptions::default(), |_| {
        called.set(true);
    });
    assert!(result.is_ok());
    assert!(!called.get());
}

#[test]
fn ensure_order_applies_predicate_and_options() {
    let at_most = |ordering: Ordering| ordering != Ordering::Greater;

    assert!(merge::ensure_order([1, 2], [1, 2], MergeOptions::default(), at_most, |_| ()).is_ok());
    assert!(merge::ensure_order([1], [1, 2], MergeOptions::default(), at_most, |_| ()).is_ok());

    let higher = MergeOptions::default().absent(AbsentOrdering::Higher);
    let err = merge::ensure_order([1], [1, 2], higher, at_most, |c| *c).unwrap_err();
    assert_eq!(err, Violation::Aggregate(Comparison { ordering: Ordering::Greater, position: Some(1) }));

    let not_at_most = MergeOptions::default().negate(true);
    assert!(merge::ensure_order([5], [4], not_at_most, at_most, |_| ()).is_ok());
}

#[test]
fn ensure_accepts_any_navigator() {
    let checked = merge::ensure(
        [1, 2, 3],
        [1, 2, 3],
        EqualityMerge::new(),
        MergeOptions::default(),
        |eq: &Equality| eq.steps == 3,
        |_| "short",
    );
    assert!(checked.is_ok());
}

/// Counts steps where both sides are present and never stops early.
#[derive(Default)]
struct Overlap(usize);

impl<X, Y> MergeNavigator<X, Y> for Overlap {
    type Verdict = usize;

    fn step(&mut self, _: usize, x: TryOut<&X>, y: TryOut<&Y>) -> NavigateCommand {
        if x.is_success() && y.is_success() {
            self.0 += 1;
        }
        NavigateCommand::CONTINUE
    }

    fn verdict(&self) -> usize {
        self.0
    }
}

#[test]
fn custom_navigator_sees_every_step() {
    assert_eq!(merge::merge([1, 2, 3, 4], ['a', 'b'], Overlap::default()), 2);

    let mut reused = Overlap::default();
    merge::merge([1], [2], &mut reused);
    merge::merge([1, 2], [3, 4], &mut reused);
    assert_eq!(reused.0, 3);
}

#[test]
fn coupled_equality_merge_reports_full_counts() {
    let data = [4, 8, 15, 16];
    let mut equality = EqualityMerge::new();
    let mut seen = None;

    let summary = Coupled::new(data, data)
        .with_navigator(MergeStep::new(&mut equality))
        .total(|summary| {
            seen = Some(summary);
            Ok::<_, ()>(())
        })
        .run()
        .unwrap();

    assert_eq!(summary, DualSummary::new(4, 4, 4, false));
    assert_eq!(seen, Some(summary));
    assert_eq!(equality.outcome(), Equality { steps: 4, finding: None });
}

#[test]
fn coupled_equality_merge_stops_at_mismatch() {
    let mut equality = EqualityMerge::new();
    let summary = Coupled::<_, _, _, _, ()>::new([1, 2, 3], [1, 7, 3])
        .with_navigator(MergeStep::new(&mut equality))
        .run()
        .unwrap();

    assert_eq!(summary, DualSummary::new(2, 2, 2, true));
    assert_eq!(equality.outcome().finding, Some(Finding::Mismatch { position: 1 }));
}

#[test]
fn paired_merge_step_sees_one_sided_steps() {
    let mut order = OrderMerge::new(AbsentOrdering::Higher);
    let result = Paired::new([1, 2], [1, 2, 3])
        .with_both(MergeStep::new(&mut order))
        .total(|summary: DualSummary| if summary.counts_equal() { Ok(()) } else { Err(summary) })
        .run();

    assert_eq!(result, Err(Violation::Aggregate(DualSummary::new(3, 2, 3, true))));
    assert_eq!(order.outcome(), Comparison { ordering: Ordering::Greater, position: Some(2) });
}

#[test]
fn paired_closure_still_skips_one_sided_steps() {
    let calls = Cell::new(0);
    Paired::new([1, 2, 3], [1])
        .navigate_both(|_: &i32, _: &i32, _, _| {
            calls.set(calls.get() + 1);
            Ok::<_, ()>(guard_rail::PairCommand::CONTINUE)
        })
        .run()
        .unwrap();
    assert_eq!(calls.get(), 1);
}
