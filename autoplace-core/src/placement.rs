//! Moves windows and the viewport.
use crate::errors::Result;
use crate::models::{Geometry, ScreenResolution, WindowId, WorkspaceGrid};
use crate::utils::clock::Clock;
use crate::window_manager::WindowManager;
use std::time::Duration;

pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Absolute offset of a workspace on the virtual desktop.
///
/// The column comes from `index % columns`, the row from `index / rows`. Using `rows` as the
/// divisor is intentional and decides where the viewport lands for non-square grids.
#[must_use]
pub fn workspace_origin(index: u32, grid: WorkspaceGrid, screen: ScreenResolution) -> (u32, u32) {
    let columns = grid.columns.max(1);
    let rows = grid.rows.max(1);
    let x = (index % columns).saturating_mul(screen.width);
    let y = (index / rows).saturating_mul(screen.height);
    (x, y)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Pause after a geometry change so the window manager applies it before the next step.
    pub settle_delay: Duration,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

impl Placement {
    #[must_use]
    pub const fn new(settle_delay: Duration) -> Self {
        Self { settle_delay }
    }

    /// Switches the viewport to the workspace at `index`.
    ///
    /// # Errors
    ///
    /// Errors if the window manager rejects the request.
    pub fn move_workspace_origin<W>(
        &self,
        wm: &W,
        index: u32,
        grid: WorkspaceGrid,
        screen: ScreenResolution,
    ) -> Result<()>
    where
        W: WindowManager + ?Sized,
    {
        let (x, y) = workspace_origin(index, grid, screen);
        tracing::info!("Moving viewport to workspace {} at {},{}", index, x, y);
        wm.move_viewport(x, y)
    }

    /// Sets the geometry of `window`, then waits for the settle delay.
    ///
    /// # Errors
    ///
    /// Errors if the window manager rejects the request or the wait is interrupted.
    pub fn place_window<W, C>(
        &self,
        wm: &W,
        clock: &mut C,
        window: WindowId,
        geometry: Geometry,
    ) -> Result<()>
    where
        W: WindowManager + ?Sized,
        C: Clock + ?Sized,
    {
        tracing::info!("Placing window {} at {}", window, geometry);
        wm.move_resize_window(window, geometry)?;
        clock.sleep(self.settle_delay)
    }
}
