use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Size of the X screen. Its `WxH` form selects the layout to run.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenResolution {
    pub width: u32,
    pub height: u32,
}

impl ScreenResolution {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for ScreenResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("\"{0}\" is not a resolution of the form WIDTHxHEIGHT")]
pub struct ParseResolutionError(pub String);

impl FromStr for ScreenResolution {
    type Err = ParseResolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseResolutionError(s.to_string());
        let (width, height) = s.trim().split_once('x').ok_or_else(err)?;
        Ok(Self {
            width: width.parse().map_err(|_| err())?,
            height: height.parse().map_err(|_| err())?,
        })
    }
}

/// How the virtual desktop is tiled into workspaces.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkspaceGrid {
    pub columns: u32,
    pub rows: u32,
}

impl WorkspaceGrid {
    #[must_use]
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.columns > 0 && self.rows > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_round_trips_through_its_key() {
        let res: ScreenResolution = "1920x1080".parse().unwrap();
        assert_eq!(res, ScreenResolution::new(1920, 1080));
        assert_eq!(res.to_string(), "1920x1080");
    }

    #[test]
    fn malformed_resolutions_are_rejected() {
        for bad in ["1920", "x1080", "1920x", "1920 by 1080", "axb"] {
            assert!(bad.parse::<ScreenResolution>().is_err(), "{bad}");
        }
    }

    #[test]
    fn grid_needs_at_least_one_row_and_column() {
        assert!(WorkspaceGrid::new(2, 1).is_valid());
        assert!(!WorkspaceGrid::new(0, 1).is_valid());
        assert!(!WorkspaceGrid::new(2, 0).is_valid());
    }
}
