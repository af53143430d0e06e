//! Window acquisition and placement for autoplace.
//!
//! Launches an application, correlates it with the window it creates and moves that window
//! (or the viewport) to a configured place.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
#![warn(clippy::pedantic)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
pub mod correlator;
pub mod errors;
#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
pub mod models;
pub mod notifier;
pub mod placement;
pub mod session;
pub mod utils;
mod window_manager;

pub use correlator::Correlator;
pub use errors::{PlaceError, Result};
pub use models::{
    Geometry, LaunchResult, ResolvedWindow, ScreenResolution, WindowId, WindowRecord,
    WorkspaceGrid,
};
pub use notifier::{Notifier, Urgency};
pub use placement::Placement;
pub use session::{Session, SessionSummary, Step};
pub use utils::child_process::{DetachedLauncher, Launcher};
pub use utils::clock::{Clock, SystemClock};
pub use window_manager::WindowManager;
