//! In-memory stand-ins for the window manager, the launcher, the clock and the notifier.
use crate::errors::{PlaceError, Result};
use crate::models::{Geometry, LaunchResult, ScreenResolution, WindowId, WindowRecord};
use crate::notifier::{Notifier, Urgency};
use crate::utils::child_process::Launcher;
use crate::utils::clock::Clock;
use crate::window_manager::WindowManager;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

/// A control request received by [`MockWindowManager`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WmCall {
    ListWindows,
    MoveResize(WindowId, Geometry),
    MoveViewport(u32, u32),
}

/// Replays scripted window listings and records every control call.
///
/// Each `list_windows` consumes the next scripted listing; the last one repeats forever.
#[derive(Debug)]
pub struct MockWindowManager {
    pub screen: ScreenResolution,
    listings: RefCell<VecDeque<Vec<WindowRecord>>>,
    last_listing: RefCell<Vec<WindowRecord>>,
    calls: RefCell<Vec<WmCall>>,
    fail_controls: Cell<bool>,
}

impl Default for MockWindowManager {
    fn default() -> Self {
        Self::new(ScreenResolution::new(1920, 1080))
    }
}

impl MockWindowManager {
    #[must_use]
    pub fn new(screen: ScreenResolution) -> Self {
        Self {
            screen,
            listings: RefCell::default(),
            last_listing: RefCell::default(),
            calls: RefCell::default(),
            fail_controls: Cell::new(false),
        }
    }

    /// Queues a listing to be returned by a later `list_windows`.
    pub fn push_listing(&self, listing: Vec<WindowRecord>) {
        self.listings.borrow_mut().push_back(listing);
    }

    /// Makes every move request fail.
    pub fn fail_controls(&self) {
        self.fail_controls.set(true);
    }

    #[must_use]
    pub fn calls(&self) -> Vec<WmCall> {
        self.calls.borrow().clone()
    }

    #[must_use]
    pub fn list_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| **c == WmCall::ListWindows)
            .count()
    }

    fn control(&self, call: WmCall) -> Result<()> {
        self.calls.borrow_mut().push(call);
        if self.fail_controls.get() {
            return Err(PlaceError::Backend("mock failure".to_string()));
        }
        Ok(())
    }
}

impl WindowManager for MockWindowManager {
    fn list_windows(&self) -> Result<Vec<WindowRecord>> {
        self.calls.borrow_mut().push(WmCall::ListWindows);
        if let Some(next) = self.listings.borrow_mut().pop_front() {
            *self.last_listing.borrow_mut() = next;
        }
        Ok(self.last_listing.borrow().clone())
    }

    fn screen_resolution(&self) -> Result<ScreenResolution> {
        Ok(self.screen)
    }

    fn move_resize_window(&self, window: WindowId, geometry: Geometry) -> Result<()> {
        self.control(WmCall::MoveResize(window, geometry))
    }

    fn move_viewport(&self, x: u32, y: u32) -> Result<()> {
        self.control(WmCall::MoveViewport(x, y))
    }
}

/// Hands out increasing pids starting at `next_pid` and remembers what it launched.
#[derive(Debug)]
pub struct MockLauncher {
    pub next_pid: u32,
    pub launched: Vec<Vec<String>>,
}

impl Default for MockLauncher {
    fn default() -> Self {
        Self {
            next_pid: 1000,
            launched: vec![],
        }
    }
}

impl Launcher for MockLauncher {
    fn launch(&mut self, command_line: &[String]) -> Result<LaunchResult> {
        if command_line.is_empty() {
            return Err(PlaceError::EmptyCommand);
        }
        let pid = self.next_pid;
        self.next_pid += 1;
        self.launched.push(command_line.to_vec());
        Ok(LaunchResult {
            pid,
            command_line: command_line.to_vec(),
        })
    }
}

/// Records requested sleeps instead of sleeping.
#[derive(Debug, Default)]
pub struct ManualClock {
    pub sleeps: Vec<Duration>,
}

impl ManualClock {
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.sleeps.iter().sum()
    }
}

impl Clock for ManualClock {
    fn sleep(&mut self, duration: Duration) -> Result<()> {
        self.sleeps.push(duration);
        Ok(())
    }
}

/// Keeps every notification it receives.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub sent: RefCell<Vec<(Urgency, String, String)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, urgency: Urgency, summary: &str, body: &str) {
        self.sent
            .borrow_mut()
            .push((urgency, summary.to_string(), body.to_string()));
    }
}
