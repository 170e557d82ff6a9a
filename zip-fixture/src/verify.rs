//! Read-back validation of a generated fixture.

use std::io::{Read, Seek};
use std::path::Path;

use zip::ZipArchive;

use crate::config::ENTRY_COUNT;
use crate::entry::{entry_content, parse_name_index};
use crate::error::{Error, Result};

/// Checks that `reader` holds exactly the fixture entry set.
///
/// Every entry name must decode to an index, indices must appear in ascending
/// order without gaps (so a repeated name is rejected as out of place), and
/// each body must equal the content rendered for the same index. `path` is only used in error messages.
///
/// Returns the number of entries checked.
pub fn verify_archive<R: Read + Seek>(reader: R, path: &Path) -> Result<usize> {
    let read_err = |source| Error::ReadArchive {
        path: path.to_path_buf(),
        source,
    };

    let mut archive = ZipArchive::new(reader).map_err(read_err)?;
    let expected = ENTRY_COUNT as usize;
    if archive.len() != expected {
        return Err(Error::EntryCount {
            expected,
            found: archive.len(),
        });
    }

    for position in 0..archive.len() {
        let mut file = archive.by_index(position).map_err(read_err)?;
        let name = file.name().to_owned();

        let index = parse_name_index(&name).ok_or_else(|| Error::UnexpectedEntry {
            name: name.clone(),
        })?;
        if index as usize != position {
            return Err(Error::UnexpectedEntry { name });
        }

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|source| read_err(source.into()))?;

        let expected_content = entry_content(index);
        if content != expected_content {
            return Err(Error::EntryMismatch {
                name,
                expected: expected_content,
                found: content,
            });
        }
    }

    Ok(expected)
}
