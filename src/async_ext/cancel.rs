//! Cancellation tokens checked by the async engines before every pull.

use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Source of a cancellation request.
///
/// The async engines ask the token before each pull. Once it reports
/// `true`, both sides are dropped, the engine yields
/// [`Violation::Cancelled`](crate::Violation::Cancelled) once, and the total
/// validator never runs.
pub trait Cancellation {
    fn is_cancelled(&self) -> bool;
}

/// Token that never cancels; the default of every async engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct Never;

impl Cancellation for Never {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl Cancellation for AtomicBool {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Acquire)
    }
}

impl<C: Cancellation + ?Sized> Cancellation for &C {
    #[inline]
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

impl<C: Cancellation + ?Sized> Cancellation for Arc<C> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

/// Shareable cancellation flag.
///
/// Clones observe the same flag, so one clone can be handed to an engine
/// while another stays with the code that decides to cancel.
///
/// # Examples
///
/// ```
/// use guard_rail::async_ext::{CancelFlag, Cancellation};
///
/// let flag = CancelFlag::new();
/// let observer = flag.clone();
/// assert!(!observer.is_cancelled());
///
/// flag.cancel();
/// assert!(observer.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancelFlag {
    inner: Arc<AtomicBool>,
}

impl CancelFlag {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::Release);
    }
}

impl Cancellation for CancelFlag {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Acquire)
    }
}
