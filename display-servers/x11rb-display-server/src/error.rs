//! Error handling and reporting for this backend

use autoplace_core::PlaceError;
use thiserror::Error;
use x11rb::errors::{ConnectError, ConnectionError, ReplyError};

pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to connect to the X server: {0}")]
    Connect(#[from] ConnectError),

    #[error("Connection error occured: {0}")]
    Connection(#[from] ConnectionError),

    #[error("Unable to parse reply: {0}")]
    Reply(#[from] ReplyError),

    #[error("Screen {0} does not exist")]
    NoScreen(usize),
}

impl From<Error> for PlaceError {
    fn from(err: Error) -> Self {
        PlaceError::Backend(err.to_string())
    }
}
