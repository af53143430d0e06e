use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// An X11 window id. Printed the way `wmctrl` prints and accepts it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u32);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

impl FromStr for WindowId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let hex = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        u32::from_str_radix(hex, 16).map(WindowId)
    }
}

/// One entry of the window manager's client list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub window_id: WindowId,
    /// `_NET_WM_PID`, `0` when the client does not set it.
    pub owner_pid: u32,
    pub title: String,
}

impl WindowRecord {
    pub fn new(window_id: WindowId, owner_pid: u32, title: impl Into<String>) -> Self {
        Self {
            window_id,
            owner_pid,
            title: title.into(),
        }
    }
}

/// The window a launched process was correlated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedWindow {
    pub window_id: WindowId,
    /// `true` when found by pid, `false` when the last listed window was taken instead.
    pub matched: bool,
}
