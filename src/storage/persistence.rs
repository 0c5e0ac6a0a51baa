//! Saving and loading journals as plain text.
//!
//! The on-disk format is the journal's display form: one entry per line,
//! each line `"{number}: {text}"`, with a trailing newline.

use std::{
    fs::{File, OpenOptions},
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::instrument;

use crate::domain::{journal::entry_number, Journal};

/// Reads and writes journals on the filesystem.
///
/// A [`Journal`] only manages its entries; files are handled here.
#[derive(Debug, Clone, Copy, Default)]
pub struct Persistence;

/// Errors that can occur when saving a journal.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The file exists and overwriting was not allowed.
    #[error("refusing to overwrite existing file {}", .0.display())]
    AlreadyExists(PathBuf),
    /// The file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// Path of the journal file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Errors that can occur when loading a journal.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path of the journal file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A line is not a numbered journal entry.
    #[error("line {line} is not a journal entry: '{content}'")]
    MalformedEntry {
        /// One-based line number.
        line: usize,
        /// The offending line.
        content: String,
    },
}

impl Persistence {
    /// Write `journal` to `path`.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError::AlreadyExists`] if `path` exists and `overwrite` is
    /// `false`; the existing file is left untouched. Returns [`SaveError::Io`]
    /// if the file cannot be written.
    #[instrument(level = "debug", skip(self, journal))]
    pub fn save_to_file(
        &self,
        journal: &Journal,
        path: &Path,
        overwrite: bool,
    ) -> Result<(), SaveError> {
        let io_error = |source| SaveError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        let file = if overwrite {
            File::create(path)
        } else {
            OpenOptions::new().write(true).create_new(true).open(path)
        }
        .map_err(|source| match source.kind() {
            io::ErrorKind::AlreadyExists => SaveError::AlreadyExists(path.to_path_buf()),
            _ => io_error(source),
        })?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{journal}").map_err(io_error)?;
        writer.flush().map_err(io_error)?;

        tracing::debug!("Saved {} entries to {}", journal.len(), path.display());
        Ok(())
    }

    /// Read a journal previously written by [`Persistence::save_to_file`].
    ///
    /// Blank lines are skipped. The journal's counter resumes from the highest
    /// entry number in the file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read, or
    /// [`LoadError::MalformedEntry`] if a line is not of the form
    /// `"{number}: {text}"`.
    #[instrument(level = "debug", skip(self))]
    pub fn load_from_file(&self, path: &Path) -> Result<Journal, LoadError> {
        let io_error = |source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        };

        let reader = BufReader::new(File::open(path).map_err(io_error)?);

        let mut entries = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(io_error)?;
            if line.trim().is_empty() {
                continue;
            }
            if entry_number(&line).is_none() {
                return Err(LoadError::MalformedEntry {
                    line: idx + 1,
                    content: line,
                });
            }
            entries.push(line);
        }

        Ok(Journal::from_entries(entries))
    }
}
