// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    /// A selector or tour was built from an empty focus point list.
    EmptyFocusPoints,
    /// A focus point index outside `0..len` was requested.
    FocusIndexOutOfRange { index: usize, len: usize },
    /// No async runtime was available to schedule ticks on.
    Runtime(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::EmptyFocusPoints => write!(f, "Focus point list is empty"),
            Error::FocusIndexOutOfRange { index, len } => {
                write!(f, "Focus point index {} out of range (0..{})", index, len)
            }
            Error::Runtime(e) => write!(f, "Runtime Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<tokio::runtime::TryCurrentError> for Error {
    fn from(err: tokio::runtime::TryCurrentError) -> Self {
        Error::Runtime(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
