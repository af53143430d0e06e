use x11rb::{
    connection::Connection,
    protocol::xproto::{self, ConnectionExt as _},
    rust_connection::RustConnection,
};

use crate::error::Result;
use crate::xatom::AtomCollection;

mod getters;
mod setters;

const MAX_PROPERTY_VALUE_LEN: u32 = 4096;

/// Mask under which EWMH requests to the window manager are delivered.
#[inline]
pub fn root_request_mask() -> xproto::EventMask {
    xproto::EventMask::SUBSTRUCTURE_REDIRECT | xproto::EventMask::SUBSTRUCTURE_NOTIFY
}

/// Contains Xserver information and origins.
pub(crate) struct XWrap {
    conn: RustConnection,
    screen_num: usize,
    root: xproto::Window,
    pub atoms: AtomCollection,
}

impl XWrap {
    pub fn new() -> Result<Self> {
        let (conn, screen_num) = x11rb::connect(None)?;
        let atoms = AtomCollection::new(&conn)?.reply()?;
        let root = conn
            .setup()
            .roots
            .get(screen_num)
            .ok_or(crate::Error::NoScreen(screen_num))?
            .root;
        tracing::debug!("Connected to X screen {} (root {:#x})", screen_num, root);

        Ok(Self {
            conn,
            screen_num,
            root,
            atoms,
        })
    }

    /// Send a client message to the root window, where the window manager picks it up.
    // `XSendEvent`: https://tronche.com/gui/x/xlib/event-handling/XSendEvent.html
    fn send_root_message(
        &self,
        window: xproto::Window,
        r#type: xproto::Atom,
        data: [u32; 5],
    ) -> Result<()> {
        let msg = xproto::ClientMessageEvent::new(32, window, r#type, data);
        self.conn
            .send_event(false, self.root, root_request_mask(), msg)?
            .check()?;
        self.flush()
    }

    /// Flush the xserver.
    // `XFlush`: https://tronche.com/gui/x/xlib/event-handling/XFlush.html
    pub fn flush(&self) -> Result<()> {
        self.conn.flush()?;
        Ok(())
    }
}
