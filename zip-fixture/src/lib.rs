//! Generator for the deterministic `test.zip` fixture.
//!
//! The archive holds 100 stored entries `answer000.txt` ..= `answer099.txt`,
//! each containing `question000` ..= `question099` with no trailing newline.

mod config;
mod entry;
mod error;
mod io;
mod operations;
mod process;
mod verify;


pub use config::{
    entry_options, GenConfig, COMPRESSION_METHOD, CONTENT_PREFIX, ENTRY_COUNT, INDEX_WIDTH,
    NAME_PREFIX, NAME_SUFFIX, OUTPUT_FILE_NAME, OUTPUT_MODE,
};
pub use entry::{
    entry_content, entry_name, fixture_entries, parse_content_index, parse_name_index, Entry,
};
pub use error::{Error, Result};
pub use io::{commit, create_staging, output_dir, resolve_output_path};
pub use operations::write_archive;
pub use process::{generate_fixture, run_cli};
pub use verify::verify_archive;
