//! Error types for fixture generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use zip::result::ZipError;

/// Main error type for fixture generation.
#[derive(Debug, Error)]
pub enum Error {
    /// The running executable could not be located
    #[error("Cannot locate executable: {source}")]
    LocateExecutable {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Output path has no containing directory
    #[error("{}: Cannot determine output directory", path.display())]
    InvalidOutputPath {
        /// Requested output path
        path: PathBuf,
    },

    /// Failed to create the staging file next to the output
    #[error("{}: {source}", path.display())]
    CreateOutput {
        /// Directory or file that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing an entry failed, either in the archive writer or in the sink
    #[error("{name}: Write failed: {source}")]
    WriteEntry {
        /// Name of the rejected entry
        name: String,
        /// Error reported by the archive writer
        #[source]
        source: ZipError,
    },

    /// Writing the central directory failed
    #[error("{}: Cannot finalize archive: {source}", path.display())]
    Finalize {
        /// Archive being finalized
        path: PathBuf,
        /// Error reported by the archive writer
        #[source]
        source: ZipError,
    },

    /// Replacing the output with the finished archive failed
    #[error("{}: {source}", path.display())]
    Persist {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The archive could not be reopened for reading
    #[error("{}: Cannot read archive: {source}", path.display())]
    ReadArchive {
        /// Archive path
        path: PathBuf,
        /// Error reported by the archive reader
        #[source]
        source: ZipError,
    },

    /// Wrong number of entries in the archive
    #[error("Archive holds {found} entries, expected {expected}")]
    EntryCount {
        /// Required number of entries
        expected: usize,
        /// Number of entries found
        found: usize,
    },

    /// An entry holds the wrong body
    #[error("{name}: Content mismatch: expected {expected:?}, found {found:?}")]
    EntryMismatch {
        /// Entry name
        name: String,
        /// Required body
        expected: String,
        /// Body found in the archive
        found: String,
    },

    /// An entry does not belong to the fixture or is out of order
    #[error("{name}: Unexpected entry")]
    UnexpectedEntry {
        /// Entry name
        name: String,
    },
}

/// Specialized `Result` type for fixture generation.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` for failures of the archive format layer.
    ///
    /// Sink failures surfacing through the archive writer or reader
    /// (`ZipError::Io`) count as I/O failures.
    pub fn is_format_error(&self) -> bool {
        match self {
            Error::LocateExecutable { .. }
            | Error::InvalidOutputPath { .. }
            | Error::CreateOutput { .. }
            | Error::Persist { .. } => false,
            Error::WriteEntry { source, .. }
            | Error::Finalize { source, .. }
            | Error::ReadArchive { source, .. } => !matches!(source, ZipError::Io(_)),
            Error::EntryCount { .. }
            | Error::EntryMismatch { .. }
            | Error::UnexpectedEntry { .. } => true,
        }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match &err {
            Error::InvalidOutputPath { .. } => io::Error::new(io::ErrorKind::InvalidInput, err),
            Error::LocateExecutable { source }
            | Error::CreateOutput { source, .. }
            | Error::Persist { source, .. } => {
                // Preserve the original error kind
                io::Error::new(source.kind(), err)
            }
            Error::WriteEntry { source, .. }
            | Error::Finalize { source, .. }
            | Error::ReadArchive { source, .. } => match source {
                ZipError::Io(inner) => io::Error::new(inner.kind(), err),
                _ => io::Error::new(io::ErrorKind::InvalidData, err),
            },
            Error::EntryCount { .. }
            | Error::EntryMismatch { .. }
            | Error::UnexpectedEntry { .. } => io::Error::new(io::ErrorKind::InvalidData, err),
        }
    }
}
