//! Archive writing for the fixture.

use std::io::{self, Seek, SeekFrom, Write};

use zip::ZipWriter;

use crate::config::{entry_options, GenConfig};
use crate::entry::Entry;
use crate::error::{Error, Result};

/// Sink wrapper that stops forwarding after the first I/O error.
///
/// `ZipWriter` finalizes itself when dropped. Once the sink has failed, writes
/// and seeks only move a logical position, so that drop completes quietly and
/// no central directory reaches the sink after a failure.
struct SessionSink<W> {
    inner: W,
    failed: bool,
    pos: u64,
    end: u64,
}

impl<W> SessionSink<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            failed: false,
            pos: 0,
            end: 0,
        }
    }

    fn into_inner(self) -> W {
        self.inner
    }

    fn advance(&mut self, len: usize) -> usize {
        self.pos = self.pos.saturating_add(len as u64);
        self.end = self.end.max(self.pos);
        len
    }

    fn record<T>(&mut self, result: io::Result<T>) -> io::Result<T> {
        if let Err(err) = &result {
            // Interrupted writes are retried by the caller
            if err.kind() != io::ErrorKind::Interrupted {
                self.failed = true;
            }
        }
        result
    }
}

impl<W: Write> Write for SessionSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.failed {
            return Ok(self.advance(buf.len()));
        }
        let written = self.inner.write(buf);
        self.record(written).map(|len| self.advance(len))
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.failed {
            return Ok(());
        }
        let flushed = self.inner.flush();
        self.record(flushed)
    }
}

impl<W: Seek> Seek for SessionSink<W> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        if self.failed {
            self.pos = match pos {
                SeekFrom::Start(offset) => offset,
                SeekFrom::Current(delta) => self.pos.saturating_add_signed(delta),
                SeekFrom::End(delta) => self.end.saturating_add_signed(delta),
            };
            return Ok(self.pos);
        }
        let sought = self.inner.seek(pos);
        self.record(sought).inspect(|&offset| {
            self.pos = offset;
            self.end = self.end.max(offset);
        })
    }
}

/// Writes `entries` into a new archive on `writer` and finalizes it.
///
/// Entries are written in iteration order with the options from
/// [`entry_options`]. On success the central directory has been written and
/// the underlying writer is returned.
///
/// # Errors
///
/// Returns [`Error::WriteEntry`] if the archive writer rejects an entry or the
/// sink fails mid-entry, and [`Error::Finalize`] if the central directory
/// cannot be written. After a sink failure nothing further is written to
/// `writer`, so the partial output has no central directory.
pub fn write_archive<W, I>(writer: W, entries: I, config: &GenConfig) -> Result<W>
where
    W: Write + Seek,
    I: IntoIterator<Item = Entry>,
{
    let mut zip = ZipWriter::new(SessionSink::new(writer));
    let options = entry_options();
    let mut written = 0usize;

    for entry in entries {
        zip.start_file(entry.name.as_str(), options)
            .map_err(|source| Error::WriteEntry {
                name: entry.name.clone(),
                source,
            })?;
        zip.write_all(entry.content.as_bytes())
            .map_err(|source| Error::WriteEntry {
                name: entry.name.clone(),
                source: source.into(),
            })?;

        if config.verbose {
            eprintln!("Added {} ({} bytes)", entry.name, entry.content.len());
        }
        written += 1;
    }

    let sink = zip.finish().map_err(|source| Error::Finalize {
        path: config.output.clone(),
        source,
    })?;

    if config.verbose {
        eprintln!("Wrote {written} entries");
    }

    Ok(sink.into_inner())
}
