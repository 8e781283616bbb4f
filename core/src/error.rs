use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LseError>;

#[derive(Error, Debug)]
pub enum LseError {
    /// A noise-word file, document list or listed document is missing.
    #[error("file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("document unreadable: {}: {source}", path.display())]
    DocumentUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed query: {0}")]
    MalformedQuery(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl LseError {
    /// Maps a failure opening a listed document.
    pub(crate) fn from_document_open(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        if err.kind() == io::ErrorKind::NotFound {
            LseError::InputNotFound { path }
        } else {
            LseError::DocumentUnreadable { path, source: err }
        }
    }

    /// Maps a failure opening the noise-word file or the document list.
    pub(crate) fn from_input_open(path: impl Into<PathBuf>, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            LseError::InputNotFound { path: path.into() }
        } else {
            LseError::Io(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_files_that_cannot_be_opened_are_io_errors() {
        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        assert!(matches!(LseError::from_input_open("noise.txt", denied), LseError::Io(_)));
        let missing = io::Error::from(io::ErrorKind::NotFound);
        assert!(matches!(LseError::from_input_open("noise.txt", missing), LseError::InputNotFound { .. }));
    }

    #[test]
    fn documents_that_cannot_be_opened_are_unreadable() {
        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        assert!(matches!(LseError::from_document_open("d1", denied), LseError::DocumentUnreadable { .. }));
        let missing = io::Error::from(io::ErrorKind::NotFound);
        assert!(matches!(LseError::from_document_open("d1", missing), LseError::InputNotFound { .. }));
    }
}
