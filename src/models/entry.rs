use super::entry_type::EntryType;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveTime, Timelike, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Time of day as an integer-like `HHMM` value (`0830` is 08:30).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct EntryTime(u16);

impl EntryTime {
    pub fn new(hour: u32, minute: u32) -> AppResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(AppError::InvalidTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self((hour * 100 + minute) as u16))
    }

    pub fn from_naive_time(t: NaiveTime) -> Self {
        // hour/minute from NaiveTime are always in range
        Self((t.hour() * 100 + t.minute()) as u16)
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.0 / 100)
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.0 % 100)
    }

    /// The raw `HHMM` number, e.g. 830 for 08:30.
    pub fn value(&self) -> i64 {
        i64::from(self.0)
    }

    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0)
    }
}

impl FromStr for EntryTime {
    type Err = AppError;

    /// Accepts `HHMM` (leading zeros optional) and `HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || AppError::InvalidTime(s.to_string());

        if let Some((h, m)) = s.split_once(':') {
            let hour = h.parse::<u32>().map_err(|_| invalid())?;
            let minute = m.parse::<u32>().map_err(|_| invalid())?;
            return Self::new(hour, minute).map_err(|_| invalid());
        }

        if s.is_empty() || s.len() > 4 || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let raw = s.parse::<u32>().map_err(|_| invalid())?;
        Self::new(raw / 100, raw % 100).map_err(|_| invalid())
    }
}

impl fmt::Display for EntryTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A single clock event as stored in the entry log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub id: String,
    pub date: DateTime<Utc>,
    pub entry_time: EntryTime,
    pub entry_type: EntryType,
    pub worked_time: Option<i64>,
    pub over_time: Option<i64>,
}

impl Entry {
    /// Builds a fresh entry with a random id. `date` carries the full
    /// timestamp, `entry_time` its local time of day.
    pub fn new(date: DateTime<Local>, entry_type: EntryType, over_time: Option<i64>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date: date.with_timezone(&Utc),
            entry_time: EntryTime::from_naive_time(date.time()),
            entry_type,
            worked_time: None,
            over_time,
        }
    }

    pub fn local_date(&self) -> DateTime<Local> {
        self.date.with_timezone(&Local)
    }

    pub fn time_str(&self) -> String {
        format!("{:02}:{:02}", self.entry_time.hour(), self.entry_time.minute())
    }
}
