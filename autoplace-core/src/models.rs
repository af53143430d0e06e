//! Objects passed between the launcher, the correlator and the placement engine.
mod geometry;
mod launch_result;
mod screen;
mod window;

pub use geometry::Geometry;
pub use launch_result::LaunchResult;
pub use screen::{ParseResolutionError, ScreenResolution, WorkspaceGrid};
pub use window::{ResolvedWindow, WindowId, WindowRecord};
