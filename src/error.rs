// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Manifest(String),
    Image(String),
    Relay(RelayError),
}

/// Specific error types for the registration relay.
///
/// The relay is fire-and-forget: these errors are logged, never surfaced as
/// a blocking failure to the registration flow.
#[derive(Debug, Clone)]
pub enum RelayError {
    /// Building the HTTP client failed.
    ClientBuild(String),
    /// The request could not be sent (DNS, connect, timeout).
    Network(String),
    /// The endpoint answered with a non-success status.
    HttpStatus(u16),
    /// All retry attempts were exhausted.
    RetriesExhausted { attempts: u32 },
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::ClientBuild(msg) => write!(f, "HTTP client build failed: {}", msg),
            RelayError::Network(msg) => write!(f, "Network error: {}", msg),
            RelayError::HttpStatus(code) => write!(f, "HTTP status: {}", code),
            RelayError::RetriesExhausted { attempts } => {
                write!(f, "Gave up after {} attempts", attempts)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Manifest(e) => write!(f, "Manifest Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Relay(e) => write!(f, "Relay Error: {}", e),
        }
    }
}

impl From<RelayError> for Error {
    fn from(err: RelayError) -> Self {
        Error::Relay(err)
    }
}

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

pub type Result<T> = std::result::Result<T, Error>;
