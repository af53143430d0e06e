//! wmctrl backend for autoplace.
//!
//! Every control action is one invocation of `wmctrl`; the screen size comes from `xdpyinfo`.
use autoplace_core::{
    Geometry, Result, ScreenResolution, WindowId, WindowManager, WindowRecord,
};
use std::process::Command;

mod error;
mod parse;

pub use error::Error;

const WMCTRL: &str = "wmctrl";
const XDPYINFO: &str = "xdpyinfo";

#[derive(Debug, Default, Clone, Copy)]
pub struct WmctrlDisplayServer;

impl WmctrlDisplayServer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Runs `program` and returns its stdout, failing on a non-zero exit status.
fn run(program: &'static str, args: &[&str]) -> error::Result<String> {
    tracing::trace!("Running {} {:?}", program, args);
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| Error::Spawn { program, source })?;
    if !output.status.success() {
        return Err(Error::Failed {
            command: format!("{program} {}", args.join(" ")),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

impl WindowManager for WmctrlDisplayServer {
    fn list_windows(&self) -> Result<Vec<WindowRecord>> {
        let output = run(WMCTRL, &["-l", "-p"])?;
        Ok(parse::parse_window_list(&output))
    }

    fn screen_resolution(&self) -> Result<ScreenResolution> {
        let output = run(XDPYINFO, &[])?;
        Ok(parse::parse_dimensions(&output).ok_or(Error::NoDimensions)?)
    }

    fn move_resize_window(&self, window: WindowId, geometry: Geometry) -> Result<()> {
        let id = window.to_string();
        let mvarg = format!(
            "0,{},{},{},{}",
            geometry.x, geometry.y, geometry.width, geometry.height
        );
        run(WMCTRL, &["-i", "-r", &id, "-e", &mvarg])?;
        Ok(())
    }

    fn move_viewport(&self, x: u32, y: u32) -> Result<()> {
        run(WMCTRL, &["-o", &format!("{x},{y}")])?;
        Ok(())
    }
}
