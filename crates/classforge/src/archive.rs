//! Archiving of assembled project trees.
//!
//! The archiver compresses an assembled directory into a single zip whose
//! entries mirror the directory's relative paths. The zip is spooled to a
//! temporary file on disk — never fully buffered in memory — and handed to
//! the caller as a readable [`Archive`]. Dropping the handle removes the
//! spool file; failures during that cleanup are swallowed by design of the
//! temp-file guard.

use std::{
    fs::File,
    io::{self, Read, Seek, SeekFrom},
    path::Path,
};

use log::{debug, info};
use tempfile::NamedTempFile;
use thiserror::Error;
use walkdir::WalkDir;
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

/// Errors that can occur while archiving an assembled project.
///
/// This type is converted into [`ClassforgeError::Archive`] at the crate
/// boundary.
///
/// [`ClassforgeError::Archive`]: crate::ClassforgeError::Archive
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The archive came out empty; an empty archive is never streamed.
    #[error("generated archive is empty")]
    Empty,
}

/// A finished project archive, readable exactly once from the start.
///
/// The archive lives in a temp file that is deleted when this handle is
/// dropped, on every exit path.
#[derive(Debug)]
pub struct Archive {
    spool: NamedTempFile,
    len: u64,
    entries: usize,
}

impl Archive {
    /// Size of the archive in bytes. Guaranteed non-zero.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Always false; empty archives are rejected at construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of file entries in the archive.
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Filename to suggest when offering the archive as a download.
    pub fn suggested_filename(&self) -> &'static str {
        "generated_project.zip"
    }
}

impl Read for Archive {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.spool.as_file_mut().read(buf)
    }
}

/// Compress `dir` into a spooled zip archive.
///
/// Entry names are the paths of regular files relative to `dir`, with `/`
/// separators. Directories contribute no entries of their own, so the
/// entry count equals the number of files under `dir`.
///
/// # Errors
///
/// Returns [`Error::Empty`] when `dir` contains no files, and I/O or zip
/// errors when reading the tree or writing the spool file fails.
pub fn archive_dir(dir: &Path) -> Result<Archive, Error> {
    let mut spool = NamedTempFile::new()?;
    let mut zip = ZipWriter::new(spool.as_file());
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries = 0;
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry.path().strip_prefix(dir).unwrap_or(entry.path());
        let name = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        debug!(entry = name; "Adding archive entry");
        zip.start_file(&name, options)?;
        let mut file = File::open(entry.path())?;
        io::copy(&mut file, &mut zip)?;
        entries += 1;
    }
    zip.finish()?;

    let len = spool.as_file().metadata()?.len();
    if entries == 0 || len == 0 {
        return Err(Error::Empty);
    }
    spool.as_file_mut().seek(SeekFrom::Start(0))?;

    info!(entries, bytes = len; "Archive finished");
    Ok(Archive {
        spool,
        len,
        entries,
    })
}
