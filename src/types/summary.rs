//! Aggregate facts handed to total validators.
use crate::types::navigate::{NavigateCommand, PairCommand};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What a single-sequence or array traversal saw.
///
/// * `total` - elements examined, skipped or not
/// * `matched` - elements whose verdict did not skip them
/// * `stopped` - a navigator requested an early stop
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct TraversalSummary {
    pub total: usize,
    pub matched: usize,
    pub stopped: bool,
}

impl TraversalSummary {
    #[inline]
    pub const fn new(total: usize, matched: usize, stopped: bool) -> Self {
        Self { total, matched, stopped }
    }

    /// Summary of a complete walk where every element matched.
    ///
    /// This is what the fast-count path reports for a source of `len` elements.
    #[inline]
    pub const fn counted(len: usize) -> Self {
        Self { total: len, matched: len, stopped: false }
    }

    /// Number of examined elements that were skipped.
    #[must_use]
    #[inline]
    pub const fn skipped(&self) -> usize {
        self.total.saturating_sub(self.matched)
    }
}

/// What a dual-sequence traversal saw.
///
/// `x_count` and `y_count` only grow on steps where that side held a value
/// and was not skipped, so unequal-length inputs produce unequal counts.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct DualSummary {
    pub steps: usize,
    pub x_count: usize,
    pub y_count: usize,
    pub stopped: bool,
}

impl DualSummary {
    #[inline]
    pub const fn new(steps: usize, x_count: usize, y_count: usize, stopped: bool) -> Self {
        Self { steps, x_count, y_count, stopped }
    }

    /// The pair `(x_count, y_count)`.
    #[must_use]
    #[inline]
    pub const fn counts(&self) -> (usize, usize) {
        (self.x_count, self.y_count)
    }

    #[must_use]
    #[inline]
    pub const fn counts_equal(&self) -> bool {
        self.x_count == self.y_count
    }
}

/// Running counters of a single-sequence walk.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    examined: usize,
    matched: usize,
    stopped: bool,
}

impl Tally {
    /// Index the next element will be examined at.
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.examined
    }

    #[inline]
    pub(crate) fn matched(&self) -> usize {
        self.matched
    }

    #[inline]
    pub(crate) fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[inline]
    pub(crate) fn record(&mut self, cmd: NavigateCommand) {
        self.examined += 1;
        if !cmd.is_skip() {
            self.matched += 1;
        }
        self.stopped |= cmd.is_stop();
    }

    /// Counts `n` elements as examined and matched without visiting them.
    #[inline]
    pub(crate) fn advance_matched(&mut self, n: usize) {
        self.examined += n;
        self.matched += n;
    }

    #[inline]
    pub(crate) fn summary(&self) -> TraversalSummary {
        TraversalSummary::new(self.examined, self.matched, self.stopped)
    }
}

/// Running counters of a dual-sequence walk.
#[derive(Debug, Default)]
pub(crate) struct DualTally {
    steps: usize,
    x_count: usize,
    y_count: usize,
    stopped: bool,
}

impl DualTally {
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.steps
    }

    #[inline]
    pub(crate) fn counts(&self) -> (usize, usize) {
        (self.x_count, self.y_count)
    }

    #[inline]
    pub(crate) fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[inline]
    pub(crate) fn record(&mut self, has_x: bool, has_y: bool, cmd: PairCommand) {
        self.steps += 1;
        if has_x && !cmd.is_skip_x() {
            self.x_count += 1;
        }
        if has_y && !cmd.is_skip_y() {
            self.y_count += 1;
        }
        self.stopped |= cmd.is_stop();
    }

    #[inline]
    pub(crate) fn summary(&self) -> DualSummary {
        DualSummary::new(self.steps, self.x_count, self.y_count, self.stopped)
    }
}
