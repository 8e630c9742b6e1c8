//! Time utilities: parsing HH:MM, daily target durations, minute formatting.

use crate::errors::{AppError, AppResult};
use crate::models::EntryTime;
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<EntryTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(EntryTime::from_naive_time(t)))
    } else {
        Ok(None)
    }
}

/// Parse a duration such as `8h`, `7h30m`, `45m` or a bare number of minutes.
pub fn parse_duration_to_minutes(s: &str) -> AppResult<i64> {
    let s = s.trim().to_lowercase();
    let invalid = || AppError::Config(format!("invalid duration '{s}'"));

    if s.is_empty() {
        return Err(invalid());
    }
    if let Ok(mins) = s.parse::<i64>() {
        return Ok(mins);
    }

    let (hours, rest) = match s.split_once('h') {
        Some((h, rest)) => (h.trim().parse::<i64>().map_err(|_| invalid())?, rest.trim()),
        None => (0, s.as_str()),
    };

    let minutes = if rest.is_empty() {
        0
    } else {
        rest.strip_suffix('m')
            .ok_or_else(invalid)?
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid())?
    };

    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(invalid)
}
