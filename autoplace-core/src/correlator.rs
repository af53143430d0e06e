//! Matches a launched process with the window it eventually maps.
//!
//! Windows appear asynchronously after their process starts, and applications started through
//! wrappers often tag their window with a different pid than the one we spawned. The correlator
//! therefore polls a bounded number of times and, when no window carries the pid, falls back to
//! the most recently listed window.
//!
//! The fallback is a best-effort heuristic: under load it can pick an unrelated window that
//! already existed before the launch.
use crate::errors::{PlaceError, Result};
use crate::models::ResolvedWindow;
use crate::utils::clock::Clock;
use crate::window_manager::WindowManager;
use std::time::Duration;

pub const DEFAULT_ATTEMPTS: u32 = 10;
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Correlator {
    pub attempts: u32,
    pub poll_interval: Duration,
}

impl Default for Correlator {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl Correlator {
    #[must_use]
    pub const fn new(attempts: u32, poll_interval: Duration) -> Self {
        Self {
            attempts,
            poll_interval,
        }
    }

    /// Polls the window list until a window owned by `pid` shows up.
    ///
    /// Returns the last matching window with `matched: true` as soon as one is listed.
    /// After `attempts` polls without a match, returns the last window of the final listing
    /// with `matched: false`.
    ///
    /// # Errors
    ///
    /// Errors if the window list cannot be read, if the clock is interrupted, or if the final
    /// listing is empty so there is nothing to fall back to.
    pub fn resolve<W, C>(&self, wm: &W, clock: &mut C, pid: u32) -> Result<ResolvedWindow>
    where
        W: WindowManager + ?Sized,
        C: Clock + ?Sized,
    {
        let attempts = self.attempts.max(1);
        let mut listing = Vec::new();

        for attempt in 1..=attempts {
            listing = wm.list_windows()?;
            if let Some(record) = listing.iter().rev().find(|w| w.owner_pid == pid) {
                tracing::debug!(
                    "Window {} ({:?}) belongs to pid {} (attempt {}/{})",
                    record.window_id,
                    record.title,
                    pid,
                    attempt,
                    attempts
                );
                return Ok(ResolvedWindow {
                    window_id: record.window_id,
                    matched: true,
                });
            }
            if attempt < attempts {
                clock.sleep(self.poll_interval)?;
            }
        }

        let last = listing.last().ok_or(PlaceError::NoWindow { pid })?;
        tracing::warn!(
            "No window for pid {} after {} attempts, falling back to the last listed window {} ({:?})",
            pid,
            attempts,
            last.window_id,
            last.title
        );
        Ok(ResolvedWindow {
            window_id: last.window_id,
            matched: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{ManualClock, MockWindowManager};
    use crate::models::{WindowId, WindowRecord};

    fn record(id: u32, pid: u32) -> WindowRecord {
        WindowRecord::new(WindowId(id), pid, format!("window {id}"))
    }

    #[test]
    fn match_on_first_poll_does_not_sleep() {
        let wm = MockWindowManager::default();
        wm.push_listing(vec![record(1, 10), record(2, 42)]);
        let mut clock = ManualClock::default();

        let resolved = Correlator::default().resolve(&wm, &mut clock, 42).unwrap();

        assert_eq!(
            resolved,
            ResolvedWindow {
                window_id: WindowId(2),
                matched: true
            }
        );
        assert_eq!(wm.list_count(), 1);
        assert!(clock.sleeps.is_empty());
    }

    #[test]
    fn match_on_attempt_k_uses_k_polls() {
        let wm = MockWindowManager::default();
        wm.push_listing(vec![record(1, 10)]);
        wm.push_listing(vec![record(1, 10)]);
        wm.push_listing(vec![record(1, 10)]);
        wm.push_listing(vec![record(1, 10), record(7, 42)]);
        let mut clock = ManualClock::default();

        let resolved = Correlator::default().resolve(&wm, &mut clock, 42).unwrap();

        assert_eq!(resolved.window_id, WindowId(7));
        assert!(resolved.matched);
        assert_eq!(wm.list_count(), 4);
        assert_eq!(clock.sleeps, vec![DEFAULT_POLL_INTERVAL; 3]);
    }

    #[test]
    fn last_matching_window_wins() {
        let wm = MockWindowManager::default();
        wm.push_listing(vec![record(3, 42), record(4, 10), record(5, 42), record(6, 11)]);
        let mut clock = ManualClock::default();

        let resolved = Correlator::default().resolve(&wm, &mut clock, 42).unwrap();

        assert_eq!(resolved.window_id, WindowId(5));
        assert!(resolved.matched);
    }

    #[test]
    fn exhausted_budget_falls_back_to_last_window_of_final_listing() {
        let wm = MockWindowManager::default();
        wm.push_listing(vec![record(1, 10)]);
        wm.push_listing(vec![record(1, 10), record(2, 11)]);
        wm.push_listing(vec![record(1, 10), record(2, 11), record(9, 12)]);
        let mut clock = ManualClock::default();

        let resolved = Correlator::new(3, Duration::from_millis(100))
            .resolve(&wm, &mut clock, 42)
            .unwrap();

        assert_eq!(
            resolved,
            ResolvedWindow {
                window_id: WindowId(9),
                matched: false
            }
        );
        assert_eq!(wm.list_count(), 3);
        assert_eq!(clock.elapsed(), Duration::from_millis(200));
    }

    #[test]
    fn default_budget_waits_about_five_seconds() {
        let wm = MockWindowManager::default();
        wm.push_listing(vec![record(1, 10)]);
        let mut clock = ManualClock::default();

        let resolved = Correlator::default().resolve(&wm, &mut clock, 42).unwrap();

        assert!(!resolved.matched);
        assert_eq!(wm.list_count(), 10);
        assert_eq!(clock.elapsed(), Duration::from_millis(4500));
    }

    #[test]
    fn empty_final_listing_is_fatal() {
        let wm = MockWindowManager::default();
        let mut clock = ManualClock::default();

        let result = Correlator::new(2, Duration::ZERO).resolve(&wm, &mut clock, 42);

        assert!(matches!(result, Err(PlaceError::NoWindow { pid: 42 })));
    }

    #[test]
    fn zero_attempts_still_polls_once() {
        let wm = MockWindowManager::default();
        wm.push_listing(vec![record(8, 42)]);
        let mut clock = ManualClock::default();

        let resolved = Correlator::new(0, Duration::ZERO)
            .resolve(&wm, &mut clock, 42)
            .unwrap();

        assert!(resolved.matched);
        assert_eq!(wm.list_count(), 1);
    }
}
