//! Output path resolution and staged file handling.

use std::env;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::OUTPUT_FILE_NAME;
use crate::error::{Error, Result};

/// Returns the fixture path next to the running executable.
///
/// The result does not depend on the current working directory.
pub fn resolve_output_path() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(|source| Error::LocateExecutable { source })?;
    let dir = exe
        .parent()
        .ok_or_else(|| Error::InvalidOutputPath { path: exe.clone() })?;
    Ok(dir.join(OUTPUT_FILE_NAME))
}

/// Returns the directory that will hold `output`.
pub fn output_dir(output: &Path) -> Result<&Path> {
    match output.parent() {
        // A bare file name lives in the current directory
        Some(dir) if dir.as_os_str().is_empty() => Ok(Path::new(".")),
        Some(dir) => Ok(dir),
        None => Err(Error::InvalidOutputPath {
            path: output.to_path_buf(),
        }),
    }
}

/// Creates a staging file in the same directory as `output`.
///
/// The file is removed when dropped unless it is handed to [`commit`]. On unix
/// it is created with mode 0644 (masked by the umask) rather than tempfile's
/// owner-only default, so the committed archive is readable like any file the
/// process creates.
pub fn create_staging(output: &Path) -> Result<NamedTempFile> {
    let dir = output_dir(output)?;
    let mut builder = tempfile::Builder::new();
    builder.prefix(".fixture-").suffix(".zip.tmp");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        use crate::config::OUTPUT_MODE;

        builder.permissions(std::fs::Permissions::from_mode(OUTPUT_MODE));
    }

    builder
        .tempfile_in(dir)
        .map_err(|source| Error::CreateOutput {
            path: dir.to_path_buf(),
            source,
        })
}

/// Atomically replaces `output` with the staged archive.
pub fn commit(staging: NamedTempFile, output: &Path) -> Result<()> {
    staging
        .persist(output)
        .map_err(|err| Error::Persist {
            path: output.to_path_buf(),
            source: err.error,
        })?;
    Ok(())
}
