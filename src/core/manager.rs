//! Entry manager: translates between [`Entry`] values and stored lines and
//! derives worked time / overtime from the most recent entries.
//!
//! Two failure tiers:
//! - a line or date that cannot be parsed is reported to the [`ErrorLog`]
//!   and treated as absent,
//! - anything the store returns as an error is propagated unchanged.

use crate::errors::{AppError, AppResult};
use crate::logging::ErrorLog;
use crate::models::Entry;
use crate::storage::{EntryStore, line_format};
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::date::{same_local_day, to_utc_string};
use crate::utils::formatting;
use chrono::{DateTime, Local, TimeZone};

/// How many recent entries the derived metrics look at.
pub const RECENT_WINDOW: usize = 10;

pub struct EntryManager<S, L> {
    store: S,
    log: L,
    clock: Box<dyn Clock>,
}

impl<S: EntryStore, L: ErrorLog> EntryManager<S, L> {
    pub fn new(store: S, log: L) -> Self {
        Self {
            store,
            log,
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    pub fn append_entry(&self, entry: &Entry) -> AppResult<()> {
        self.store.append_entry(&line_format::encode(entry))
    }

    /// `None` (after logging) when the string is not a date.
    pub fn convert_to_human_date(&self, date_string: &str) -> Option<String> {
        match formatting::human_date(date_string) {
            Ok(d) => Some(d),
            Err(e) => {
                self.log.error(&e.to_string(), "convert_to_human_date");
                None
            }
        }
    }

    pub fn parse_overtime(&self, over_time: i64) -> String {
        formatting::parse_overtime(over_time)
    }

    pub fn get_last_entry(&self) -> AppResult<Option<Entry>> {
        let raw = self.store.get_last_entry()?;
        Ok(self.parse_db_entry(raw.as_deref()))
    }

    /// Overtime carried by the last entry, `0` when there is none.
    pub fn get_last_overtime(&self) -> AppResult<i64> {
        Ok(self
            .get_last_entry()?
            .and_then(|e| e.over_time)
            .unwrap_or(0))
    }

    /// Best-effort parse of a stored line. Empty input and malformed lines
    /// both give `None`; only the latter is logged.
    pub fn parse_db_entry(&self, db_entry: Option<&str>) -> Option<Entry> {
        let line = db_entry.filter(|l| !l.trim().is_empty())?;

        match line_format::decode(line) {
            Ok(entry) => Some(entry),
            Err(e) => {
                self.log
                    .error(&format!("Could not parse entry: {line}"), &e.to_string());
                None
            }
        }
    }

    /// Up to `count` most recent entries, oldest first. Lines that fail to
    /// parse are dropped; equal dates keep their storage order.
    pub fn get_entries(&self, count: Option<usize>) -> AppResult<Vec<Entry>> {
        let mut entries: Vec<Entry> = self
            .store
            .get_entries(count)?
            .iter()
            .filter_map(|line| self.parse_db_entry(Some(line.as_str())))
            .collect();

        entries.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(entries)
    }

    /// Entries stored on the UTC day of `date`, in storage order.
    pub fn get_entries_by_date<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> AppResult<Vec<Entry>> {
        let lines = self.store.get_entries_by_utc_date(&to_utc_string(date))?;
        Ok(lines
            .iter()
            .filter_map(|line| self.parse_db_entry(Some(line.as_str())))
            .collect())
    }

    /// Minutes between `end_date` and the most recent `start` among the
    /// last entries whose normalized date is on the same local day.
    /// `0` when there is no such start.
    pub fn calculate_work_for_end_date(&self, end_date: DateTime<Local>) -> AppResult<i64> {
        let entries = self.get_entries(Some(RECENT_WINDOW))?;

        for entry in entries.iter().rev() {
            if !entry.entry_type.is_start() {
                continue;
            }

            let start = match normalized_date(entry) {
                Ok(d) => d,
                Err(e) => {
                    self.log.error(&e.to_string(), &format!("entry {}", entry.id));
                    continue;
                }
            };

            if same_local_day(&start, &end_date) {
                return Ok((end_date - start).num_minutes());
            }
        }

        Ok(0)
    }

    /// Looks at the *oldest* of the last entries (index 0 after sorting):
    /// `false` when it is dated today, `true` otherwise or when empty.
    pub fn is_first_entry_of_today(&self) -> AppResult<bool> {
        let entries = self.get_entries(Some(RECENT_WINDOW))?;

        if let Some(first) = entries.first()
            && same_local_day(&first.date, &self.now())
        {
            return Ok(false);
        }
        Ok(true)
    }
}

/// The entry's local calendar day at the hour/minute of its `entry_time`.
pub fn normalized_date(entry: &Entry) -> AppResult<DateTime<Local>> {
    let day = entry.local_date().date_naive();
    let time = entry
        .entry_time
        .to_naive_time()
        .ok_or_else(|| AppError::InvalidTime(entry.entry_time.to_string()))?;

    Local
        .from_local_datetime(&day.and_time(time))
        .earliest()
        .ok_or_else(|| AppError::InvalidDate(format!("{day} {}", entry.time_str())))
}
