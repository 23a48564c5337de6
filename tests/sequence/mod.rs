use std::cell::Cell;
use std::collections::VecDeque;

use guard_rail::sequence::{self, Forward, Indexed, Positional, Pull, Traverse};
use guard_rail::{Location, NavigateCommand, TraversalSummary, Violation};

fn no_adjacent_duplicates() -> impl FnMut(&i32, usize, usize) -> Result<NavigateCommand, &'static str> {
    let mut previous = None;
    move |item: &i32, _, _| {
        let duplicate = previous == Some(*item);
        previous = Some(*item);
        Ok(NavigateCommand::new(duplicate, duplicate))
    }
}

#[test]
fn continue_everywhere_matches_length() {
    for data in [vec![], vec![1], vec![1, 2, 3, 4, 5]] {
        let len = data.len();
        let summary = Traverse::new(data)
            .navigate(|_: &i32, _, _| Ok::<_, ()>(NavigateCommand::CONTINUE))
            .run()
            .unwrap();
        assert_eq!(summary, TraversalSummary::new(len, len, false));
    }
}

#[test]
fn positions_and_matched_counts_advance() {
    let mut calls = Vec::new();
    Traverse::new(["a", "b", "c", "d"])
        .navigate(|item: &&str, position, matched| {
            calls.push((*item, position, matched));
            Ok::<_, ()>(NavigateCommand::skip_if(*item == "b"))
        })
        .run()
        .unwrap();

    assert_eq!(calls, [("a", 0, 0), ("b", 1, 1), ("c", 2, 1), ("d", 3, 2)]);
}

#[test]
fn stop_on_duplicate_yields_up_to_the_duplicate() {
    let total = Cell::new(None);
    let kept: Vec<i32> = Traverse::new([1, 2, 2, 3])
        .navigate(no_adjacent_duplicates())
        .total(|summary| {
            total.set(Some(summary));
            Ok(())
        })
        .collect_checked()
        .unwrap();

    assert_eq!(kept, [1, 2, 2]);
    assert_eq!(total.get(), Some(TraversalSummary::new(3, 2, true)));
}

#[test]
fn stop_at_step_k_yields_k_plus_one_elements() {
    for k in 0..5 {
        let mut summary = None;
        let yielded = Traverse::new(0..10)
            .navigate(|_: &i32, position, _| Ok::<_, ()>(NavigateCommand::stop_if(position == k)))
            .total(|s| {
                summary = Some(s);
                Ok(())
            })
            .collect_checked::<Vec<_>>()
            .unwrap();

        assert_eq!(yielded.len(), k + 1);
        assert_eq!(summary, Some(TraversalSummary::new(k + 1, k + 1, true)));
    }
}

#[test]
fn navigator_error_ends_traversal_and_skips_total() {
    let mut total_ran = false;
    let mut traversal = Traverse::new([1, -2, 3])
        .navigate(|item: &i32, _, _| if *item >= 0 { Ok(NavigateCommand::CONTINUE) } else { Err("negative") })
        .total(|_| {
            total_ran = true;
            Ok(())
        });

    assert_eq!(traversal.next(), Some(Ok(1)));
    assert_eq!(
        traversal.next(),
        Some(Err(Violation::Element { location: Location::Index(1), error: "negative" }))
    );
    assert_eq!(traversal.next(), None);
    assert!(traversal.is_finished());
    drop(traversal);
    assert!(!total_ran);
}

#[test]
fn total_rejection_is_the_final_item() {
    let mut traversal = Traverse::new([1, 2]).total(|s: TraversalSummary| {
        if s.total >= 3 {
            Ok(())
        } else {
            Err("too few")
        }
    });

    assert_eq!(traversal.next(), Some(Ok(1)));
    assert_eq!(traversal.next(), Some(Ok(2)));
    assert_eq!(traversal.next(), Some(Err(Violation::Aggregate("too few"))));
    assert_eq!(traversal.next(), None);
}

#[test]
fn lazy_traversal_never_runs_total_when_abandoned() {
    let ran = Cell::new(false);
    {
        let mut traversal = Traverse::new([1, 2, 3]).total(|_| {
            ran.set(true);
            Ok::<_, ()>(())
        });
        assert_eq!(traversal.next(), Some(Ok(1)));
    }
    assert!(!ran.get());
}

#[test]
fn empty_source_runs_total_once_with_zeroes() {
    let mut calls = 0;
    let summary = Traverse::new(Vec::<i32>::new())
        .navigate(|_: &i32, _, _| -> Result<NavigateCommand, ()> { panic!("no elements to visit") })
        .total(|s| {
            calls += 1;
            assert_eq!(s, TraversalSummary::default());
            Ok(())
        })
        .run()
        .unwrap();

    assert_eq!(calls, 1);
    assert_eq!(summary, TraversalSummary::default());
}

#[test]
fn indexed_sources_walk_by_position() {
    let vec = vec![10, 20, 30];
    let deque: VecDeque<i32> = vec.iter().copied().collect();
    let array = [10, 20, 30];

    let from_vec: Vec<&i32> = Traverse::<_, _, _, ()>::indexed(&vec).collect_checked().unwrap();
    let from_deque: Vec<&i32> = Traverse::<_, _, _, ()>::indexed(&deque).map(Result::unwrap).collect();
    let from_array = Traverse::<_, _, _, ()>::indexed(&array).run().unwrap();

    assert_eq!(from_vec, [&10, &20, &30]);
    assert_eq!(from_deque, [&10, &20, &30]);
    assert_eq!(from_array, TraversalSummary::counted(3));
}

#[test]
fn fast_count_agrees_with_full_walk() {
    let data = vec![3, 1, 4, 1, 5];
    let at_most_four = |s: TraversalSummary| if s.total <= 4 { Ok(()) } else { Err("too long") };

    let fast = Traverse::indexed(&data).total(at_most_four).run();
    let walked = Traverse::indexed(&data)
        .navigate(|_, _, _| Ok(NavigateCommand::CONTINUE))
        .total(at_most_four)
        .run();
    let counted = sequence::validate_count(&data, at_most_four).map(|_| ());

    assert_eq!(fast, Err(Violation::Aggregate("too long")));
    assert_eq!(fast, walked);
    assert_eq!(counted, Err(Violation::Aggregate("too long")));
}

#[test]
fn fast_count_reports_full_match() {
    let data = [1u8; 16];
    let summary = Traverse::<_, _, _, ()>::indexed(&data).run().unwrap();
    assert_eq!(summary, TraversalSummary::counted(16));
}

#[test]
fn check_count_agrees_with_a_full_walk() {
    let data = vec![5, 6, 7];
    let seen = Cell::new(None);
    let walked = Traverse::new(data.iter())
        .total(|s: TraversalSummary| {
            seen.set(Some(s));
            Ok::<_, ()>(())
        })
        .run()
        .unwrap();

    let counted = Traverse::indexed(&data)
        .total(|s: TraversalSummary| if s == walked { Ok(()) } else { Err(s) })
        .check_count()
        .unwrap();
    assert!(std::ptr::eq(counted, &data));
    assert_eq!(seen.get(), Some(TraversalSummary::new(3, 3, false)));

    let err = Traverse::indexed(&data)
        .total(|s: TraversalSummary| if s.total < 3 { Ok(()) } else { Err(s.total) })
        .check_count()
        .unwrap_err();
    assert_eq!(err, Violation::Aggregate(3));
}

#[test]
fn check_hands_the_source_back() {
    let data = vec![2, 4, 6];
    let checked = Traverse::indexed(&data)
        .navigate(|item, _, _| if **item % 2 == 0 { Ok(NavigateCommand::CONTINUE) } else { Err(**item) })
        .check()
        .unwrap();
    assert!(std::ptr::eq(checked, &data));

    let odd = vec![2, 3];
    let err = Traverse::indexed(&odd)
        .navigate(|item, _, _| if **item % 2 == 0 { Ok(NavigateCommand::CONTINUE) } else { Err(**item) })
        .check()
        .unwrap_err();
    assert_eq!(err, Violation::Element { location: Location::Index(1), error: 3 });
}

#[test]
fn validate_count_returns_source_on_success() {
    let data = [1, 2, 3];
    let source = sequence::validate_count(&data[..], |s: TraversalSummary| {
        if s.matched == 3 {
            Ok(())
        } else {
            Err(())
        }
    })
    .unwrap();
    assert_eq!(Indexed::len(&source), 3);
}

#[test]
fn forward_source_is_released_on_stop() {
    struct Tracked<'a> {
        inner: std::ops::Range<i32>,
        dropped: &'a Cell<bool>,
    }

    impl Iterator for Tracked<'_> {
        type Item = i32;

        fn next(&mut self) -> Option<i32> {
            self.inner.next()
        }
    }

    impl Drop for Tracked<'_> {
        fn drop(&mut self) {
            self.dropped.set(true);
        }
    }

    let dropped = Cell::new(false);
    let mut traversal = Traverse::new(Tracked { inner: 0..100, dropped: &dropped })
        .navigate(|_: &i32, position, _| Ok::<_, ()>(NavigateCommand::stop_if(position == 1)));

    assert_eq!(traversal.next(), Some(Ok(0)));
    assert_eq!(traversal.next(), Some(Ok(1)));
    assert!(!dropped.get());
    assert_eq!(traversal.next(), None);
    assert!(dropped.get());
}

#[test]
fn forward_source_is_released_on_navigator_error() {
    let dropped = Cell::new(false);
    let mut traversal = Traverse::new(crate::dual::Tracked::new(0..100, &dropped))
        .navigate(|item: &i32, _, _| if *item < 2 { Ok(NavigateCommand::CONTINUE) } else { Err(*item) });

    assert_eq!(traversal.next(), Some(Ok(0)));
    assert_eq!(traversal.next(), Some(Ok(1)));
    assert!(!dropped.get());
    assert_eq!(traversal.next(), Some(Err(Violation::Element { location: Location::Index(2), error: 2 })));
    assert!(dropped.get());
    assert_eq!(traversal.next(), None);
}

#[test]
fn pull_sources_release_explicitly() {
    let mut forward = Forward::new([1, 2, 3]);
    assert_eq!(forward.pull(), Some(1));
    forward.release();
    assert!(forward.is_released());
    assert_eq!(forward.pull(), None);

    let data = [1, 2, 3];
    let mut positional = Positional::new(&data);
    assert_eq!(positional.remaining(), Some(3));
    assert_eq!(positional.pull(), Some(&1));
    assert_eq!(positional.remaining(), Some(2));
    positional.release();
    assert_eq!(positional.pull(), None);
    assert_eq!(positional.remaining(), Some(0));
}

#[test]
fn traverse_shorthand_starts_forward_walk() {
    let summary = sequence::traverse::<_, ()>("abc".chars())
        .navigate(|c: &char, _, _| Ok(NavigateCommand::skip_if(*c == 'b')))
        .run()
        .unwrap();
    assert_eq!(summary, TraversalSummary::new(3, 2, false));
}

#[test]
fn size_hint_bounds_remaining_items() {
    let data = [1, 2, 3];
    let traversal = Traverse::<_, _, _, ()>::indexed(&data);
    assert_eq!(traversal.size_hint(), (0, Some(4)));
}
