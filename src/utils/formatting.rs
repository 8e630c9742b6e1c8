//! Formatting utilities used for CLI output.

use super::date::{HUMAN_DATE_FORMAT, parse_utc_string};
use crate::errors::{AppError, AppResult};
use chrono::Local;

/// `"{hours}h {minutes}m"`. Hours use floor division, minutes the
/// truncated remainder, so -5 renders as `-1h -5m`.
pub fn parse_overtime(over_time: i64) -> String {
    let hours = over_time.div_euclid(60);
    let mins = over_time % 60;
    format!("{}h {}m", hours, mins)
}

/// Format a stored date string as a German locale date in local time.
pub fn human_date(date_string: &str) -> AppResult<String> {
    let date = parse_utc_string(date_string)
        .ok_or_else(|| AppError::InvalidDate(date_string.to_string()))?;
    Ok(date
        .with_timezone(&Local)
        .format(HUMAN_DATE_FORMAT)
        .to_string())
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Worked minutes as `HH:MM`, with a sign for negative values.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
