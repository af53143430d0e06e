//! x11rb backend for autoplace.
//!
//! Talks EWMH directly to the X server: reads `_NET_CLIENT_LIST` and moves windows and the
//! viewport with client messages to the root window, so the running window manager applies them.

use autoplace_core::{
    Geometry, Result, ScreenResolution, WindowId, WindowManager, WindowRecord,
};

use crate::xwrap::XWrap;

mod error;
mod xatom;
mod xwrap;

pub use error::Error;

pub struct X11rbDisplayServer {
    xw: XWrap,
}

impl X11rbDisplayServer {
    /// Connects to the display named by `$DISPLAY`.
    ///
    /// # Errors
    ///
    /// Errors if the X server cannot be reached or does not answer the atom requests.
    pub fn connect() -> std::result::Result<Self, Error> {
        Ok(Self { xw: XWrap::new()? })
    }
}

impl WindowManager for X11rbDisplayServer {
    fn list_windows(&self) -> Result<Vec<WindowRecord>> {
        let mut records = Vec::new();
        for window in self.xw.get_client_list()? {
            match self.xw.get_window_record(window) {
                Ok(record) => records.push(record),
                // The window can be destroyed between listing and querying it.
                Err(e) => tracing::trace!("Skipping window {}: {}", WindowId(window), e),
            }
        }
        Ok(records)
    }

    fn screen_resolution(&self) -> Result<ScreenResolution> {
        Ok(self.xw.get_screen_resolution()?)
    }

    fn move_resize_window(&self, window: WindowId, geometry: Geometry) -> Result<()> {
        tracing::trace!("_NET_MOVERESIZE_WINDOW {} {:?}", window, geometry);
        Ok(self.xw.move_resize_window(window.0, geometry)?)
    }

    fn move_viewport(&self, x: u32, y: u32) -> Result<()> {
        tracing::trace!("_NET_DESKTOP_VIEWPORT {},{}", x, y);
        Ok(self.xw.set_desktop_viewport(x, y)?)
    }
}
