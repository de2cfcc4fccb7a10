//! Errors reported by [`AvlTreeMap`](crate::AvlTreeMap).

use std::collections::TryReserveError;
use std::error;
use std::fmt;

/// Failure of a map operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The requested key is not in the map.
    KeyNotFound,
    /// Memory for a new node could not be reserved. The map is unchanged.
    Alloc(TryReserveError),
    /// The map already holds as many nodes as it can address. The map is unchanged.
    CapacityExceeded,
}

/// Result type of fallible map operations.
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeyNotFound => f.write_str("key not found in map"),
            Error::Alloc(_) => f.write_str("failed to allocate a map node"),
            Error::CapacityExceeded => f.write_str("map is at its maximum number of nodes"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::KeyNotFound | Error::CapacityExceeded => None,
            Error::Alloc(err) => Some(err),
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(err: TryReserveError) -> Self {
        Error::Alloc(err)
    }
}
