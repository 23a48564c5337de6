//! Per-element verdicts returned by navigators.
//!
//! A [`NavigateCommand`] carries two independent facets:
//!
//! - *skip*: the element is examined but not counted as matched
//! - *stop*: the traversal ends right after this element
//!
//! Both facets combine freely, so a navigator can skip the element that
//! made it stop.
//!
//! # Examples
//!
//! ```
//! use guard_rail::NavigateCommand;
//!
//! let cmd = NavigateCommand::SKIP | NavigateCommand::STOP;
//! assert!(cmd.is_skip());
//! assert!(cmd.is_stop());
//! assert_eq!(cmd, NavigateCommand::SKIP_STOP);
//! ```
use core::ops::{BitOr, BitOrAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Verdict a navigator returns for a single element.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct NavigateCommand {
    skip: bool,
    stop: bool,
}

impl NavigateCommand {
    /// Count the element as matched and keep going.
    pub const CONTINUE: Self = Self { skip: false, stop: false };
    /// Leave the element out of the matched count and keep going.
    pub const SKIP: Self = Self { skip: true, stop: false };
    /// Count the element as matched, then stop.
    pub const STOP: Self = Self { skip: false, stop: true };
    /// Leave the element out of the matched count, then stop.
    pub const SKIP_STOP: Self = Self { skip: true, stop: true };

    /// Creates a command from its two facets.
    #[inline]
    pub const fn new(skip: bool, stop: bool) -> Self {
        Self { skip, stop }
    }

    /// Returns [`SKIP`](Self::SKIP) when `condition` holds, otherwise [`CONTINUE`](Self::CONTINUE).
    #[inline]
    pub const fn skip_if(condition: bool) -> Self {
        Self { skip: condition, stop: false }
    }

    /// Returns [`STOP`](Self::STOP) when `condition` holds, otherwise [`CONTINUE`](Self::CONTINUE).
    #[inline]
    pub const fn stop_if(condition: bool) -> Self {
        Self { skip: false, stop: condition }
    }

    #[must_use]
    #[inline]
    pub const fn is_skip(self) -> bool {
        self.skip
    }

    #[must_use]
    #[inline]
    pub const fn is_stop(self) -> bool {
        self.stop
    }

    /// Returns the same command with the skip facet set.
    #[inline]
    pub const fn with_skip(self) -> Self {
        Self { skip: true, stop: self.stop }
    }

    /// Returns the same command with the stop facet set.
    #[inline]
    pub const fn with_stop(self) -> Self {
        Self { skip: self.skip, stop: true }
    }
}

impl BitOr for NavigateCommand {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self { skip: self.skip || rhs.skip, stop: self.stop || rhs.stop }
    }
}

impl BitOrAssign for NavigateCommand {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

/// Verdict for one step of a dual-sequence traversal.
///
/// Skip applies per side: `skip_x` keeps the step out of the X count and
/// `skip_y` out of the Y count. Stop ends the whole walk after this step.
///
/// A [`NavigateCommand`] converts into a `PairCommand` whose skip covers both
/// sides.
///
/// # Examples
///
/// ```
/// use guard_rail::{NavigateCommand, PairCommand};
///
/// let cmd: PairCommand = NavigateCommand::SKIP.into();
/// assert!(cmd.is_skip_x() && cmd.is_skip_y());
/// assert!(!cmd.is_stop());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct PairCommand {
    skip_x: bool,
    skip_y: bool,
    stop: bool,
}

impl PairCommand {
    pub const CONTINUE: Self = Self { skip_x: false, skip_y: false, stop: false };
    pub const STOP: Self = Self { skip_x: false, skip_y: false, stop: true };

    #[inline]
    pub const fn new(skip_x: bool, skip_y: bool, stop: bool) -> Self {
        Self { skip_x, skip_y, stop }
    }

    /// Skips only the X side of this step.
    #[inline]
    pub const fn skip_x() -> Self {
        Self { skip_x: true, skip_y: false, stop: false }
    }

    /// Skips only the Y side of this step.
    #[inline]
    pub const fn skip_y() -> Self {
        Self { skip_x: false, skip_y: true, stop: false }
    }

    #[must_use]
    #[inline]
    pub const fn is_skip_x(self) -> bool {
        self.skip_x
    }

    #[must_use]
    #[inline]
    pub const fn is_skip_y(self) -> bool {
        self.skip_y
    }

    #[must_use]
    #[inline]
    pub const fn is_stop(self) -> bool {
        self.stop
    }

    #[inline]
    pub const fn with_stop(self) -> Self {
        Self { skip_x: self.skip_x, skip_y: self.skip_y, stop: true }
    }

    /// Applies a side-only verdict to the X side.
    #[inline]
    pub(crate) fn merge_x(&mut self, cmd: NavigateCommand) {
        self.skip_x |= cmd.is_skip();
        self.stop |= cmd.is_stop();
    }

    /// Applies a side-only verdict to the Y side.
    #[inline]
    pub(crate) fn merge_y(&mut self, cmd: NavigateCommand) {
        self.skip_y |= cmd.is_skip();
        self.stop |= cmd.is_stop();
    }
}

impl From<NavigateCommand> for PairCommand {
    #[inline]
    fn from(cmd: NavigateCommand) -> Self {
        Self { skip_x: cmd.is_skip(), skip_y: cmd.is_skip(), stop: cmd.is_stop() }
    }
}

impl BitOr for PairCommand {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self {
            skip_x: self.skip_x || rhs.skip_x,
            skip_y: self.skip_y || rhs.skip_y,
            stop: self.stop || rhs.stop,
        }
    }
}

impl BitOrAssign for PairCommand {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}
