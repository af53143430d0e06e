use autoplace_core::Geometry;
use x11rb::protocol::xproto;

use crate::error::Result;

use super::XWrap;

/// `_NET_MOVERESIZE_WINDOW` flags: x, y, width and height present.
const MOVERESIZE_XYWH: u32 = 0xF << 8;
/// `_NET_MOVERESIZE_WINDOW` source indication: pager (direct user action).
const SOURCE_PAGER: u32 = 2 << 12;
/// Use the window's own gravity.
const GRAVITY_DEFAULT: u32 = 0;

impl XWrap {
    /// Asks the window manager to move and resize a window.
    // https://specifications.freedesktop.org/wm-spec/latest/ar01s04.html#id-1.5.5
    pub fn move_resize_window(&self, window: xproto::Window, geometry: Geometry) -> Result<()> {
        let data = [
            GRAVITY_DEFAULT | MOVERESIZE_XYWH | SOURCE_PAGER,
            geometry.x as u32,
            geometry.y as u32,
            geometry.width,
            geometry.height,
        ];
        self.send_root_message(window, self.atoms.NetMoveResizeWindow, data)
    }

    /// Asks the window manager to move the viewport of the current desktop.
    pub fn set_desktop_viewport(&self, x: u32, y: u32) -> Result<()> {
        self.send_root_message(self.root, self.atoms.NetDesktopViewport, [x, y, 0, 0, 0])
    }
}
