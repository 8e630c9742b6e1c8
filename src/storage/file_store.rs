//! Flat text file with one serialized entry per line.

use super::{EntryStore, ensure_single_line, filter_by_utc_day, take_last};
use crate::errors::AppResult;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file (and its directory) if it doesn't exist yet.
    pub fn create_if_missing(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        Ok(())
    }

    /// All non-blank lines in file order. A missing file is an empty store.
    fn read_lines(&self) -> AppResult<Vec<String>> {
        debug!("Reading entries from {:?}", self.path);
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(e.into()),
        };

        Ok(content
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.trim().is_empty())
            .map(str::to_string)
            .collect())
    }
}

impl EntryStore for FileStore {
    fn append_entry(&self, line: &str) -> AppResult<()> {
        ensure_single_line(line)?;
        self.create_if_missing()?;

        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        writeln!(file, "{line}")?;
        file.flush()?;
        debug!("Appended entry to {:?}", self.path);
        Ok(())
    }

    fn get_last_entry(&self) -> AppResult<Option<String>> {
        Ok(self.read_lines()?.pop())
    }

    fn get_entries(&self, count: Option<usize>) -> AppResult<Vec<String>> {
        Ok(take_last(self.read_lines()?, count))
    }

    fn get_entries_by_utc_date(&self, utc_date: &str) -> AppResult<Vec<String>> {
        filter_by_utc_day(self.read_lines()?, utc_date)
    }
}
