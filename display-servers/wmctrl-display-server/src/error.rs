use autoplace_core::PlaceError;
use thiserror::Error;

pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to run {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` failed with {status}: {stderr}")]
    Failed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("No screen dimensions in xdpyinfo output")]
    NoDimensions,
}

impl From<Error> for PlaceError {
    fn from(err: Error) -> Self {
        PlaceError::Backend(err.to_string())
    }
}
