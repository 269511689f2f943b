//! Closed error kinds, one enumeration per operation.
//!
//! Every fatal condition the client can hit is an explicit variant here;
//! anything genuinely unexpected surfaces through the catch-all variant of
//! its operation (`Unreadable`, `Io`, ...) rather than a bare string. All of
//! these terminate the process after being printed once at the top of
//! `main`.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures while locating or loading the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file does not exist: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied while reading configuration file: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("failed to read configuration file {}: {source}", .path.display())]
    Unreadable { path: PathBuf, source: io::Error },

    #[error("malformed configuration file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The directory holding the executable could not be determined.
    #[error("could not locate the configuration directory: {0}")]
    Location(io::Error),
}

/// Failures while talking to the instance.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The instance answered with a non-2xx status.
    #[error("HTTP error: {status}")]
    Status { status: reqwest::StatusCode },

    /// DNS, connection, or TLS failure below the HTTP layer.
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("malformed response from instance: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failures while reading an input file or writing an output file.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("file does not exist: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("file error on {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl FileError {
    /// Sorts an I/O failure on `path` into one of the closed kinds.
    pub fn classify(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

/// Failures while resolving the text to translate.
#[derive(Debug, Error)]
pub enum InputError {
    /// The resolved text was empty or whitespace-only. Detected before any
    /// network traffic.
    #[error("cannot translate empty text")]
    Empty,

    #[error("failed to read from standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("interactive prompt failed: {0}")]
    Prompt(#[source] inquire::InquireError),

    #[error("input is not valid UTF-8")]
    NotUtf8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_not_found() {
        let err = FileError::classify(
            Path::new("missing.txt"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, FileError::NotFound { .. }));
        assert_eq!(err.to_string(), "file does not exist: missing.txt");
    }

    #[test]
    fn classify_permission_denied() {
        let err = FileError::classify(
            Path::new("locked.txt"),
            io::Error::new(io::ErrorKind::PermissionDenied, "no"),
        );
        assert!(matches!(err, FileError::PermissionDenied { .. }));
    }

    #[test]
    fn classify_other_is_io() {
        let err = FileError::classify(
            Path::new("odd.txt"),
            io::Error::new(io::ErrorKind::Interrupted, "odd"),
        );
        assert!(matches!(err, FileError::Io { .. }));
    }

    #[test]
    fn empty_input_message() {
        assert_eq!(InputError::Empty.to_string(), "cannot translate empty text");
    }
}
