//! High-level fixture generation and CLI orchestration.

use std::io::{self, BufWriter, Seek, SeekFrom};
use std::path::PathBuf;

use crate::config::GenConfig;
use crate::entry::fixture_entries;
use crate::error::{Error, Result};
use crate::io::{commit, create_staging};
use crate::operations::write_archive;
use crate::verify::verify_archive;

/// Generates the fixture archive at `config.output`.
///
/// This is the main entry point of the generator. The workflow is:
///
/// 1. Creates a staging file in the output directory
/// 2. Writes all fixture entries in ascending index order
/// 3. Finalizes the archive and flushes it to disk
/// 4. Reads the staged archive back and checks the entry set
/// 5. Atomically replaces the output with the staged archive
///
/// A failure at any step drops the staging file, which deletes it. A previous
/// archive at `config.output` is only replaced once step 4 has passed.
///
/// # Returns
///
/// Returns the path of the written archive.
///
/// # Errors
///
/// Returns an error in these cases:
///
/// - The output directory is missing or not writable
/// - The archive writer rejects an entry or cannot finalize the archive
/// - The staged archive fails validation
/// - The output cannot be replaced
pub fn generate_fixture(config: &GenConfig) -> Result<PathBuf> {
    let output = config.output.clone();
    let mut staging = create_staging(&output)?;
    let staged_path = staging.path().to_path_buf();

    let io_err = |source: io::Error| Error::CreateOutput {
        path: staged_path.clone(),
        source,
    };

    let writer = write_archive(
        BufWriter::new(staging.as_file_mut()),
        fixture_entries(),
        config,
    )?;
    let file = writer.into_inner().map_err(|err| io_err(err.into_error()))?;
    file.sync_all().map_err(io_err)?;

    file.seek(SeekFrom::Start(0)).map_err(io_err)?;
    let checked = verify_archive(&mut *file, &output)?;

    commit(staging, &output)?;

    if config.verbose {
        eprintln!("{}: {checked} entries verified", output.display());
    }

    Ok(output)
}

/// Runs the generator with error context.
///
/// # Errors
///
/// Returns an error if generation fails. The message is prefixed with the
/// program name.
pub fn run_cli(config: &GenConfig, program: &str) -> io::Result<()> {
    generate_fixture(config).map_err(|err| {
        let err = io::Error::from(err);
        io::Error::new(err.kind(), format!("{program}: {err}"))
    })?;

    Ok(())
}
