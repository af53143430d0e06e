use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlaceError>;

/// Every error here is fatal for the session. The correlation fallback is not an error.
#[derive(Debug, Error)]
pub enum PlaceError {
    #[error("Unable to launch {command:?}: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Refusing to launch an empty command line")]
    EmptyCommand,
    #[error("Window manager error: {0}")]
    Backend(String),
    #[error("No window to place for pid {pid}: the window list is empty")]
    NoWindow { pid: u32 },
    #[error("Place requested before any application window was resolved")]
    NoWindowResolved,
    #[error("No layout defined for resolution \"{resolution}\"")]
    MissingLayout { resolution: String },
    #[error("Interrupted")]
    Interrupted,
}
