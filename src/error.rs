//! Error types for the record store, the file codec and input parsing.
//!
//! Interactive flows recover from every `StoreError` and `TransformError` by
//! re-prompting. `CodecError::Malformed` is the one failure that must stop
//! startup, since it means the data file is corrupt.

use std::path::PathBuf;

/// Rejections raised by `Store` mutations and lookups.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// Another record already uses this name
    #[error("a record named '{0}' already exists")]
    DuplicateName(String),

    /// Name is empty or contains the field delimiter
    #[error("invalid name '{0}': must be non-empty and must not contain '{delim}'", delim = crate::config::DELIMITER)]
    InvalidName(String),

    /// Numeric field outside its valid range
    #[error("{field} {value} is out of range")]
    OutOfRange { field: &'static str, value: f64 },

    /// 1-based index outside `[1, count]`
    #[error("index {index} is out of range (1..={count})")]
    IndexOutOfRange { index: usize, count: usize },

    /// Record to replace or delete is not in the store
    #[error("no record named '{0}'")]
    NotFound(String),
}

/// Failures while reading or writing a record file.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record at {path}:{line}: {reason}")]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

/// Why a raw input line could not be converted into a field value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransformError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("missing hemisphere letter (expected one of {expected})")]
    MissingHemisphere { expected: &'static str },

    #[error("'{0}' carries a sign; use the hemisphere letter instead")]
    SignedMagnitude(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StoreError::DuplicateName("Car".into());
        assert_eq!(err.to_string(), "a record named 'Car' already exists");

        let err = StoreError::InvalidName("a?b".into());
        assert_eq!(
            err.to_string(),
            "invalid name 'a?b': must be non-empty and must not contain '?'"
        );

        let err = StoreError::IndexOutOfRange { index: 4, count: 3 };
        assert_eq!(err.to_string(), "index 4 is out of range (1..=3)");

        let err = StoreError::OutOfRange {
            field: "latitude",
            value: 91.0,
        };
        assert_eq!(err.to_string(), "latitude 91 is out of range");

        let err = CodecError::Malformed {
            path: PathBuf::from("TransportData.txt"),
            line: 2,
            reason: "expected 2 fields, found 1".into(),
        };
        assert_eq!(
            err.to_string(),
            "malformed record at TransportData.txt:2: expected 2 fields, found 1"
        );

        let err = TransformError::MissingHemisphere { expected: "N or S" };
        assert!(err.to_string().contains("N or S"));
    }
}
