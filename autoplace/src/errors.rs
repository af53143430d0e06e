use autoplace_core::PlaceError;
use thiserror::Error;

/// Exit code of every fatal error.
pub const FATAL_EXIT_CODE: i32 = 244;
/// Exit code after SIGINT/SIGTERM/SIGHUP.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Anything that ends the session early.
#[derive(Debug, Error)]
pub enum Fatal {
    #[error("Unable to load configuration: {0:#}")]
    Config(anyhow::Error),
    #[error("Unable to reach the window manager: {0}")]
    Backend(String),
    #[error(transparent)]
    Session(#[from] PlaceError),
}

impl Fatal {
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Session(PlaceError::Interrupted) => INTERRUPTED_EXIT_CODE,
            _ => FATAL_EXIT_CODE,
        }
    }
}
