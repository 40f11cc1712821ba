use std::error;
use std::fmt;
use std::io;
use std::result;

/// Errors surfaced by the store and the code driving it.
#[derive(Debug)]
pub enum KvsError {
    /// `put` was called with an empty key. The store is left untouched.
    EmptyKey,
    Io(io::Error),
    Serde(serde_json::Error),
    ThreadPool(String),
    InvalidConfig(String),
}

impl fmt::Display for KvsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKey => write!(f, "key cannot be empty"),
            Self::Io(err) => write!(f, "IO: {}", err),
            Self::Serde(err) => write!(f, "Serde: {}", err),
            Self::ThreadPool(msg) => write!(f, "Thread pool: {}", msg),
            Self::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl error::Error for KvsError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(source) => Some(source),
            Self::Serde(source) => Some(source),
            Self::EmptyKey | Self::ThreadPool(_) | Self::InvalidConfig(_) => None,
        }
    }
}

impl From<io::Error> for KvsError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for KvsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e)
    }
}

pub type Result<T> = result::Result<T, KvsError>;
