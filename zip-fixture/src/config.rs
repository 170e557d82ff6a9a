//! Configuration types and constants for fixture generation.

use std::path::PathBuf;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime};

/// Number of entries written into the fixture archive
pub const ENTRY_COUNT: u32 = 100;

/// Zero-padded width of the index in entry names and contents
pub const INDEX_WIDTH: usize = 3;

/// Prefix of every entry name
pub const NAME_PREFIX: &str = "answer";

/// Suffix of every entry name
pub const NAME_SUFFIX: &str = ".txt";

/// Prefix of every entry body
pub const CONTENT_PREFIX: &str = "question";

/// File name of the generated archive
pub const OUTPUT_FILE_NAME: &str = "test.zip";

/// Unix mode requested for the generated archive, before the umask
pub const OUTPUT_MODE: u32 = 0o644;

/// Storage method applied to every entry
pub const COMPRESSION_METHOD: CompressionMethod = CompressionMethod::Stored;

/// Options used for every entry written into the archive.
///
/// Entries are stored uncompressed and stamped with the ZIP epoch
/// (1980-01-01 00:00:00), so two runs produce byte-identical archives.
pub fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(COMPRESSION_METHOD)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644)
}

/// Configuration for a generation run
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Destination of the finished archive
    pub output: PathBuf,
    /// Report progress on stderr
    pub verbose: bool,
}

impl GenConfig {
    /// Creates a quiet configuration writing to `output`.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            verbose: false,
        }
    }
}
