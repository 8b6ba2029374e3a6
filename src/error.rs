use std::error;
use std::fmt;
use std::result;

/// Errors raised by the priority queues and search trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The structure was empty when a minimum or maximum was requested.
    Underflow,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Underflow => write!(f, "structure is empty"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
