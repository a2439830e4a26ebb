//! Fatal errors for a rollup run.
//!
//! Row-level problems never surface here; bad rows are dropped by the parser.

use thiserror::Error;

pub type RollupResult<T> = Result<T, RollupError>;

#[derive(Error, Debug)]
pub enum RollupError {
    /// Input missing, unreadable or permission-denied.
    #[error("Failed to open input file")]
    OpenInput(#[source] std::io::Error),

    /// I/O failure while streaming an input that opened fine.
    #[error("Failed to read input file")]
    ReadInput(#[source] std::io::Error),

    /// Create, write or flush of the output failed. The file may be partial.
    #[error("Failed to write output file")]
    WriteOutput(#[source] csv::Error),

    /// A core area's population total does not fit in an `i128`.
    #[error("Population total overflows for core area {code} \"{title}\"")]
    PopulationOverflow { code: i64, title: String },
}

impl RollupError {
    pub(crate) fn write_io(err: std::io::Error) -> Self {
        RollupError::WriteOutput(csv::Error::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_messages() {
        let open = RollupError::OpenInput(io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(open.to_string(), "Failed to open input file");

        let write = RollupError::write_io(io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(write.to_string(), "Failed to write output file");
    }

    #[test]
    fn test_source_is_kept() {
        let err = RollupError::ReadInput(io::Error::other("disk gone"));
        assert_eq!(err.to_string(), "Failed to read input file");
        assert_eq!(err.source().unwrap().to_string(), "disk gone");
    }
}
