use super::{EntryStore, ensure_single_line, filter_by_utc_day, take_last};
use crate::errors::AppResult;
use std::cell::RefCell;

/// Vector-backed store with the same semantics as [`super::FileStore`].
#[derive(Default)]
pub struct MemoryStore {
    lines: RefCell<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with raw lines, in the given storage order.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: RefCell::new(lines.into_iter().map(Into::into).collect()),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl EntryStore for MemoryStore {
    fn append_entry(&self, line: &str) -> AppResult<()> {
        ensure_single_line(line)?;
        self.lines.borrow_mut().push(line.to_string());
        Ok(())
    }

    fn get_last_entry(&self) -> AppResult<Option<String>> {
        Ok(self.lines.borrow().last().cloned())
    }

    fn get_entries(&self, count: Option<usize>) -> AppResult<Vec<String>> {
        Ok(take_last(self.lines(), count))
    }

    fn get_entries_by_utc_date(&self, utc_date: &str) -> AppResult<Vec<String>> {
        filter_by_utc_day(self.lines(), utc_date)
    }
}
