//! Internal logging macros.
//!
//! [`guard_event!`] forwards to the matching `tracing` macro under the
//! `guard_rail` target when the `tracing` feature is enabled, and expands to
//! nothing otherwise, so engines can log unconditionally.
//!
//! ```ignore
//! guard_event!(debug, ?summary, "traversal finished");
//! ```

#[cfg(feature = "tracing")]
macro_rules! guard_event {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!(target: "guard_rail", $($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! guard_event {
    ($level:ident, $($arg:tt)+) => {};
}
