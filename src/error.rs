use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the caller of a check or of the upload/download boundary.
#[derive(Error, Debug)]
pub enum CheckError {
    /// Nothing to work on: blank email text, blank URL or no uploaded file.
    #[error("No {what} provided")]
    InputMissing { what: &'static str },

    /// Read or write failure while handling an uploaded or generated file.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CheckError {
    pub fn input_missing(what: &'static str) -> Self {
        CheckError::InputMissing { what }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CheckError::Io {
            path: path.into(),
            source,
        }
    }

    /// Input warnings are shown to the user but do not abort the session.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CheckError::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_missing_is_not_fatal() {
        let err = CheckError::input_missing("email content");
        assert!(!err.is_fatal());
        assert_eq!(err.to_string(), "No email content provided");
    }

    #[test]
    fn test_io_error_forwards_message() {
        let err = CheckError::io(
            "uploads/a.c",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.is_fatal());
        let msg = err.to_string();
        assert!(msg.contains("uploads/a.c"));
        assert!(msg.contains("denied"));
    }
}
