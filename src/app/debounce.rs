//! Trailing-edge debounce utility.
//!
//! Collapses a rapid sequence of submissions into one delayed trailing value:
//! each new submission replaces the pending value and resets the quiet-window
//! timer, and the value is released only once the window elapses without
//! another submission. There is no cancellation API beyond being superseded by
//! the next submission.
//!
//! Time is passed in explicitly as [`Instant`]s so callers drive the clock:
//! interactive hosts call [`Debouncer::submit`]/[`Debouncer::poll`], tests use
//! the `_at` variants with fabricated instants and never sleep.

use std::time::{Duration, Instant};

/// Debouncer holding at most one pending value and its release deadline.
///
/// # Examples
///
/// ```
/// use contactdesk::app::Debouncer;
/// use std::time::{Duration, Instant};
///
/// let mut debouncer = Debouncer::new(Duration::from_millis(300));
/// let start = Instant::now();
///
/// debouncer.submit_at("al".to_string(), start);
/// debouncer.submit_at("ali".to_string(), start + Duration::from_millis(100));
///
/// // Still inside the quiet window of the second submission.
/// assert_eq!(debouncer.poll_at(start + Duration::from_millis(350)), None);
/// // The trailing value carries the most recent submission.
/// assert_eq!(
///     debouncer.poll_at(start + Duration::from_millis(400)),
///     Some("ali".to_string())
/// );
/// ```
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    /// Creates a debouncer with the given quiet window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Submits a value at the current time.
    pub fn submit(&mut self, value: T) {
        self.submit_at(value, Instant::now());
    }

    /// Submits a value at an explicit time, replacing any pending value and
    /// resetting the deadline.
    pub fn submit_at(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.window));
    }

    /// Polls at the current time.
    pub fn poll(&mut self) -> Option<T> {
        self.poll_at(Instant::now())
    }

    /// Releases the pending value if its quiet window has elapsed by `now`.
    ///
    /// Returns the value at most once; subsequent polls yield `None` until the
    /// next submission.
    pub fn poll_at(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if *deadline <= now => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Returns `true` while a value is waiting for its window to elapse.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
