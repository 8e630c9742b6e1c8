//! Line-oriented, append-only persistence for entries.

pub mod file_store;
pub mod line_format;
pub mod memory;

pub use file_store::FileStore;
pub use memory::MemoryStore;

use crate::errors::{AppError, AppResult};
use crate::utils::date::utc_day;

/// Interface for abstracting storage of raw entry lines.
///
/// Lines are opaque to the store except for the date field, which
/// [`EntryStore::get_entries_by_utc_date`] matches on.
pub trait EntryStore {
    /// Appends one raw serialized line.
    fn append_entry(&self, line: &str) -> AppResult<()>;

    /// The most recently appended line, `None` when the store is empty.
    fn get_last_entry(&self) -> AppResult<Option<String>>;

    /// Up to `count` most recent lines in storage order, all lines when `None`.
    fn get_entries(&self, count: Option<usize>) -> AppResult<Vec<String>>;

    /// Lines whose date falls on the same UTC day as `utc_date`, in storage order.
    fn get_entries_by_utc_date(&self, utc_date: &str) -> AppResult<Vec<String>>;
}

impl<S: EntryStore + ?Sized> EntryStore for &S {
    fn append_entry(&self, line: &str) -> AppResult<()> {
        (**self).append_entry(line)
    }

    fn get_last_entry(&self) -> AppResult<Option<String>> {
        (**self).get_last_entry()
    }

    fn get_entries(&self, count: Option<usize>) -> AppResult<Vec<String>> {
        (**self).get_entries(count)
    }

    fn get_entries_by_utc_date(&self, utc_date: &str) -> AppResult<Vec<String>> {
        (**self).get_entries_by_utc_date(utc_date)
    }
}

pub(crate) fn ensure_single_line(line: &str) -> AppResult<()> {
    if line.contains('\n') || line.contains('\r') {
        return Err(AppError::Storage(format!(
            "refusing to append a multi-line record: {line:?}"
        )));
    }
    Ok(())
}

pub(crate) fn take_last(mut lines: Vec<String>, count: Option<usize>) -> Vec<String> {
    if let Some(n) = count {
        let keep_from = lines.len().saturating_sub(n);
        lines.drain(..keep_from);
    }
    lines
}

/// Keep the lines whose date field shares the day of `utc_date`.
pub(crate) fn filter_by_utc_day(lines: Vec<String>, utc_date: &str) -> AppResult<Vec<String>> {
    let day = utc_day(utc_date).ok_or_else(|| AppError::InvalidDate(utc_date.to_string()))?;

    Ok(lines
        .into_iter()
        .filter(|line| {
            line_format::date_field(line)
                .and_then(utc_day)
                .is_some_and(|d| d == day)
        })
        .collect())
}
