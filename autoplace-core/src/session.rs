//! Runs a per-resolution step list against the window manager.
use crate::correlator::Correlator;
use crate::errors::{PlaceError, Result};
use crate::models::{Geometry, ResolvedWindow, ScreenResolution, WindowId, WorkspaceGrid};
use crate::placement::Placement;
use crate::utils::child_process::Launcher;
use crate::utils::clock::Clock;
use crate::window_manager::WindowManager;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One instruction of a layout.
///
/// In `config.ron`:
///
/// ```ron
/// "1920x1080": [
///     RunApp(["xterm", "-title", "main"]),
///     Place(0, 0, 960, 1080),
///     ToWorkspace(1),
/// ]
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Launch a program and make its window the current one.
    RunApp(Vec<String>),
    /// Move and resize the current window: x, y, width, height.
    Place(i32, i32, u32, u32),
    /// Move the viewport to a workspace index of the grid.
    ToWorkspace(u32),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub launched: usize,
    /// Launches whose window was found by pid rather than by fallback.
    pub matched: usize,
    pub placed: usize,
    pub workspace_moves: usize,
}

/// Holds the only mutable state of a run: the window of the most recent launch.
pub struct Session<W, L, C> {
    wm: W,
    launcher: L,
    clock: C,
    screen: ScreenResolution,
    grid: WorkspaceGrid,
    pub correlator: Correlator,
    pub placement: Placement,
    current_window: Option<WindowId>,
    interrupted: Arc<AtomicBool>,
    summary: SessionSummary,
}

impl<W, L, C> Session<W, L, C>
where
    W: WindowManager,
    L: Launcher,
    C: Clock,
{
    pub fn new(wm: W, launcher: L, clock: C, screen: ScreenResolution, grid: WorkspaceGrid) -> Self {
        Self {
            wm,
            launcher,
            clock,
            screen,
            grid,
            correlator: Correlator::default(),
            placement: Placement::default(),
            current_window: None,
            interrupted: Arc::default(),
            summary: SessionSummary::default(),
        }
    }

    #[must_use]
    pub fn with_interrupt_flag(mut self, interrupted: Arc<AtomicBool>) -> Self {
        self.interrupted = interrupted;
        self
    }

    #[must_use]
    pub const fn current_window(&self) -> Option<WindowId> {
        self.current_window
    }

    #[must_use]
    pub const fn summary(&self) -> SessionSummary {
        self.summary
    }

    pub fn window_manager(&self) -> &W {
        &self.wm
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Launches `command_line` and makes its window the current window, whether it was
    /// matched by pid or picked by the fallback.
    ///
    /// # Errors
    ///
    /// Errors if the launch fails or no window can be resolved.
    pub fn run_app(&mut self, command_line: &[String]) -> Result<ResolvedWindow> {
        tracing::info!("Launching {:?}", command_line);
        let launched = self.launcher.launch(command_line)?;
        self.summary.launched += 1;

        let resolved = self
            .correlator
            .resolve(&self.wm, &mut self.clock, launched.pid)?;
        if resolved.matched {
            self.summary.matched += 1;
        }
        self.current_window = Some(resolved.window_id);
        Ok(resolved)
    }

    /// Places the current window.
    ///
    /// # Errors
    ///
    /// Errors with `NoWindowResolved` when called before any `run_app`, or if the window
    /// manager rejects the request.
    pub fn place(&mut self, geometry: Geometry) -> Result<()> {
        let window = self.current_window.ok_or(PlaceError::NoWindowResolved)?;
        self.placement
            .place_window(&self.wm, &mut self.clock, window, geometry)?;
        self.summary.placed += 1;
        Ok(())
    }

    /// Moves the viewport to workspace `index`.
    ///
    /// # Errors
    ///
    /// Errors if the window manager rejects the request.
    pub fn to_workspace(&mut self, index: u32) -> Result<()> {
        self.placement
            .move_workspace_origin(&self.wm, index, self.grid, self.screen)?;
        self.summary.workspace_moves += 1;
        Ok(())
    }

    /// Executes `steps` in order, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's error, or `Interrupted` if a shutdown was requested.
    pub fn run(&mut self, steps: &[Step]) -> Result<SessionSummary> {
        for (n, step) in steps.iter().enumerate() {
            if self.interrupted.load(Ordering::SeqCst) {
                return Err(PlaceError::Interrupted);
            }
            tracing::debug!("Step {}/{}: {:?}", n + 1, steps.len(), step);
            match step {
                Step::RunApp(command_line) => {
                    self.run_app(command_line)?;
                }
                Step::Place(x, y, w, h) => self.place(Geometry::new(*x, *y, *w, *h))?,
                Step::ToWorkspace(index) => self.to_workspace(*index)?,
            }
        }
        Ok(self.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{ManualClock, MockLauncher, MockWindowManager, WmCall};
    use crate::models::WindowRecord;
    use std::time::Duration;

    type MockSession = Session<MockWindowManager, MockLauncher, ManualClock>;

    fn session(columns: u32, rows: u32) -> MockSession {
        Session::new(
            MockWindowManager::default(),
            MockLauncher::default(),
            ManualClock::default(),
            ScreenResolution::new(1920, 1080),
            WorkspaceGrid::new(columns, rows),
        )
    }

    fn cmd(s: &str) -> Vec<String> {
        s.split(' ').map(String::from).collect()
    }

    #[test]
    fn place_before_run_app_is_fatal() {
        let mut s = session(2, 1);
        let result = s.place(Geometry::new(0, 0, 100, 100));
        assert!(matches!(result, Err(PlaceError::NoWindowResolved)));
        assert!(s.window_manager().calls().is_empty());
    }

    #[test]
    fn place_uses_most_recent_window() {
        let mut s = session(2, 1);
        s.window_manager()
            .push_listing(vec![WindowRecord::new(WindowId(1), 1000, "first")]);
        s.run_app(&cmd("first")).unwrap();
        s.window_manager().push_listing(vec![
            WindowRecord::new(WindowId(1), 1000, "first"),
            WindowRecord::new(WindowId(2), 1001, "second"),
        ]);
        s.run_app(&cmd("second")).unwrap();

        let geometry = Geometry::new(10, 20, 300, 400);
        s.place(geometry).unwrap();

        assert_eq!(s.current_window(), Some(WindowId(2)));
        assert_eq!(
            s.window_manager().calls().last(),
            Some(&WmCall::MoveResize(WindowId(2), geometry))
        );
    }

    #[test]
    fn fallback_window_still_becomes_current() {
        let mut s = session(2, 1);
        s.correlator = Correlator::new(2, Duration::from_millis(10));
        s.window_manager()
            .push_listing(vec![WindowRecord::new(WindowId(77), 4, "unrelated")]);

        let resolved = s.run_app(&cmd("wrapper-script")).unwrap();

        assert!(!resolved.matched);
        assert_eq!(s.current_window(), Some(WindowId(77)));
        assert_eq!(s.summary().matched, 0);
    }

    #[test]
    fn to_workspace_ignores_current_window() {
        let mut s = session(2, 1);
        s.to_workspace(1).unwrap();
        assert_eq!(s.window_manager().calls(), vec![WmCall::MoveViewport(1920, 1080)]);
        assert_eq!(s.current_window(), None);
    }

    #[test]
    fn xterm_layout_end_to_end() {
        let mut s = session(2, 1);
        s.window_manager().push_listing(vec![]);
        s.window_manager().push_listing(vec![
            WindowRecord::new(WindowId(0x0100_0001), 1, "panel"),
            WindowRecord::new(WindowId(0x0340_0022), 1000, "xterm"),
        ]);
        let steps = vec![Step::RunApp(cmd("xterm")), Step::Place(0, 0, 960, 1080)];

        let summary = s.run(&steps).unwrap();

        assert_eq!(s.launcher().launched, vec![cmd("xterm")]);
        assert_eq!(
            s.window_manager().calls(),
            vec![
                WmCall::ListWindows,
                WmCall::ListWindows,
                WmCall::MoveResize(WindowId(0x0340_0022), Geometry::new(0, 0, 960, 1080)),
            ]
        );
        assert_eq!(
            summary,
            SessionSummary {
                launched: 1,
                matched: 1,
                placed: 1,
                workspace_moves: 0
            }
        );
        assert!(s.clock().elapsed() <= Duration::from_secs(5));
    }

    #[test]
    fn run_stops_at_first_error() {
        let mut s = session(2, 1);
        let steps = vec![Step::Place(0, 0, 1, 1), Step::ToWorkspace(1)];
        assert!(matches!(s.run(&steps), Err(PlaceError::NoWindowResolved)));
        assert!(s.window_manager().calls().is_empty());
    }

    #[test]
    fn interrupted_session_runs_no_steps() {
        let flag = Arc::new(AtomicBool::new(true));
        let mut s = session(2, 1).with_interrupt_flag(flag);
        let result = s.run(&[Step::RunApp(cmd("xterm"))]);
        assert!(matches!(result, Err(PlaceError::Interrupted)));
        assert!(s.launcher().launched.is_empty());
    }
}
