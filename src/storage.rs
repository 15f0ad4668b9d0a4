//! Access to the single flat file that holds all questions.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::StorageError;

/// Line prefix counted by [`Storage::count_records`].
const RECORD_LINE_PREFIX: &str = "Question:";

/// Whole-text operations on the question store.
///
/// Every call opens and releases the underlying resource before returning.
pub trait Storage {
    /// Full text of the store; empty if nothing has been written yet.
    fn read(&self) -> Result<String, StorageError>;

    /// Add `text` at the end, creating the store if needed.
    fn append(&mut self, text: &str) -> Result<(), StorageError>;

    /// Replace the whole content. On failure the old content is untouched.
    fn overwrite(&mut self, text: &str) -> Result<(), StorageError>;

    /// Empty the store.
    fn truncate(&mut self) -> Result<(), StorageError>;

    /// Where the questions live, for messages and logs.
    fn location(&self) -> String;

    /// Number of lines starting with `Question:`.
    fn count_records(&self) -> Result<usize, StorageError> {
        Ok(count_record_lines(&self.read()?))
    }
}

pub fn count_record_lines(text: &str) -> usize {
    text.lines()
        .filter(|line| line.starts_with(RECORD_LINE_PREFIX))
        .count()
}

/// Questions kept in one UTF-8 text file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl Storage for FileStorage {
    fn read(&self) -> Result<String, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "storage file not found, treating as empty");
                Ok(String::new())
            }
            Err(source) => Err(StorageError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn append(&mut self, text: &str) -> Result<(), StorageError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| self.write_error(err))?;
        file.write_all(text.as_bytes())
            .map_err(|err| self.write_error(err))?;
        info!(path = %self.path.display(), bytes = text.len(), "appended to storage");
        Ok(())
    }

    fn overwrite(&mut self, text: &str) -> Result<(), StorageError> {
        // Replace what a symlink points at, not the link itself.
        let target = fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());
        let dir = match target.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => self.parent_dir(),
        };

        let mut staged = NamedTempFile::new_in(dir).map_err(|err| self.write_error(err))?;
        staged
            .write_all(text.as_bytes())
            .and_then(|_| staged.as_file().sync_all())
            .map_err(|err| self.write_error(err))?;
        if let Ok(metadata) = fs::metadata(&target) {
            staged
                .as_file()
                .set_permissions(metadata.permissions())
                .map_err(|err| self.write_error(err))?;
        }
        staged
            .persist(&target)
            .map_err(|err| self.write_error(err.error))?;
        info!(path = %self.path.display(), bytes = text.len(), "overwrote storage");
        Ok(())
    }

    fn truncate(&mut self) -> Result<(), StorageError> {
        File::create(&self.path).map_err(|err| self.write_error(err))?;
        info!(path = %self.path.display(), "cleared storage");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory store, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    text: String,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }
}

impl Storage for MemoryStorage {
    fn read(&self) -> Result<String, StorageError> {
        Ok(self.text.clone())
    }

    fn append(&mut self, text: &str) -> Result<(), StorageError> {
        self.text.push_str(text);
        Ok(())
    }

    fn overwrite(&mut self, text: &str) -> Result<(), StorageError> {
        self.text = text.to_string();
        Ok(())
    }

    fn truncate(&mut self) -> Result<(), StorageError> {
        self.text.clear();
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
