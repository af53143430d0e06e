use crate::errors::Result;
use crate::models::{Geometry, ScreenResolution, WindowId, WindowRecord};

/// The window manager control protocol, one method per action.
///
/// Implementations live in `display-servers/*`; `mocks::MockWindowManager` is the test double.
pub trait WindowManager {
    /// Lists the managed client windows, oldest first. Never cached.
    ///
    /// # Errors
    ///
    /// Errors only when the window manager cannot be queried at all.
    fn list_windows(&self) -> Result<Vec<WindowRecord>>;

    /// Returns the size of the screen.
    ///
    /// # Errors
    ///
    /// Errors if the screen size cannot be determined.
    fn screen_resolution(&self) -> Result<ScreenResolution>;

    /// Moves and resizes a window, leaving its desktop and state flags untouched.
    ///
    /// # Errors
    ///
    /// Errors if the request cannot be delivered.
    fn move_resize_window(&self, window: WindowId, geometry: Geometry) -> Result<()>;

    /// Moves the active viewport to an absolute offset on the virtual desktop.
    ///
    /// # Errors
    ///
    /// Errors if the request cannot be delivered.
    fn move_viewport(&self, x: u32, y: u32) -> Result<()>;
}

impl<T: WindowManager + ?Sized> WindowManager for &T {
    fn list_windows(&self) -> Result<Vec<WindowRecord>> {
        (**self).list_windows()
    }

    fn screen_resolution(&self) -> Result<ScreenResolution> {
        (**self).screen_resolution()
    }

    fn move_resize_window(&self, window: WindowId, geometry: Geometry) -> Result<()> {
        (**self).move_resize_window(window, geometry)
    }

    fn move_viewport(&self, x: u32, y: u32) -> Result<()> {
        (**self).move_viewport(x, y)
    }
}
