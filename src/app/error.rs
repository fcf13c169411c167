use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeError {
    #[error("no such file: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("malformed resume document {}: {}", .path.display(), .source)]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {}: {}", .path.display(), .source)]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("index {index} out of range for section of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no destination path set; save_as or open a file first")]
    NoDestination,

    #[error("failed to write {}: {}", .path.display(), .source)]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results with ResumeError
pub type Result<T> = std::result::Result<T, ResumeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ResumeError::NotFound {
            path: PathBuf::from("/tmp/missing.json"),
        };
        assert_eq!(err.to_string(), "no such file: /tmp/missing.json");
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = ResumeError::IndexOutOfRange { index: 5, len: 2 };
        assert_eq!(
            err.to_string(),
            "index 5 out of range for section of length 2"
        );
    }

    #[test]
    fn test_malformed_document_keeps_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ResumeError::MalformedDocument {
            path: PathBuf::from("resume.json"),
            source: json_err,
        };
        assert!(err.to_string().starts_with("malformed resume document"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_no_destination_display() {
        let err = ResumeError::NoDestination;
        assert!(err.to_string().contains("no destination path"));
    }
}
