use autoplace_core::{ScreenResolution, WindowId, WindowRecord};
use x11rb::{connection::Connection, protocol::xproto};

use crate::error::{Error, Result};

use super::{XWrap, MAX_PROPERTY_VALUE_LEN};

/// Length, in 32 bit units, of list property reads. The server returns what exists, so the
/// whole `_NET_CLIENT_LIST` arrives however many clients are mapped.
const LIST_PROPERTY_LEN: u32 = u32::MAX;

impl XWrap {
    /// Returns `_NET_CLIENT_LIST` of the root, oldest client first.
    pub fn get_client_list(&self) -> Result<Vec<xproto::Window>> {
        self.get_property(
            self.root,
            self.atoms.NetClientList,
            xproto::AtomEnum::WINDOW.into(),
        )
    }

    /// Returns the directory entry of a window.
    pub fn get_window_record(&self, window: xproto::Window) -> Result<WindowRecord> {
        Ok(WindowRecord {
            window_id: WindowId(window),
            owner_pid: self.get_window_pid(window)?,
            title: self.get_window_name(window)?,
        })
    }

    /// Returns a windows `_NET_WM_PID`, `0` when unset.
    pub fn get_window_pid(&self, window: xproto::Window) -> Result<u32> {
        let prop = self.get_property(
            window,
            self.atoms.NetWMPid,
            xproto::AtomEnum::CARDINAL.into(),
        )?;
        Ok(prop.first().copied().unwrap_or(x11rb::NONE))
    }

    /// Returns a windows name.
    pub fn get_window_name(&self, window: xproto::Window) -> Result<String> {
        let name = self.get_text_prop(window, self.atoms.NetWMName)?;
        if !name.is_empty() {
            return Ok(name);
        }
        // fallback to legacy name
        self.get_text_prop(window, xproto::AtomEnum::WM_NAME.into())
    }

    /// Returns the size of the screen we are connected to.
    pub fn get_screen_resolution(&self) -> Result<ScreenResolution> {
        let screen = self
            .conn
            .setup()
            .roots
            .get(self.screen_num)
            .ok_or(Error::NoScreen(self.screen_num))?;
        Ok(ScreenResolution::new(
            screen.width_in_pixels.into(),
            screen.height_in_pixels.into(),
        ))
    }

    // Internal functions.

    /// Returns a 32 bit list property of a window.
    fn get_property(
        &self,
        window: xproto::Window,
        property: xproto::Atom,
        r#type: xproto::Atom,
    ) -> Result<Vec<u32>> {
        let res = xproto::get_property(
            &self.conn,
            false,
            window,
            property,
            r#type,
            0,
            LIST_PROPERTY_LEN,
        )?
        .reply()?;

        Ok(res.value32().map(Iterator::collect).unwrap_or_default())
    }

    /// Returns a text property for a window, empty if unset.
    // `XGetTextProperty`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XGetTextProperty.html
    fn get_text_prop(&self, window: xproto::Window, atom: xproto::Atom) -> Result<String> {
        let prop = xproto::get_property(
            &self.conn,
            false,
            window,
            atom,
            xproto::AtomEnum::ANY,
            0,
            MAX_PROPERTY_VALUE_LEN,
        )?
        .reply()?;
        Ok(String::from_utf8_lossy(&prop.value).into_owned())
    }
}
