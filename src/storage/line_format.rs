//! The stored line layout:
//!
//! ```text
//! id;UTCDateString;HHMM;HHMM,entryType;overTime;
//! ```
//!
//! The fourth `;` segment holds two fields joined by a comma, so once that
//! segment is split the logical fields are
//! `[id, date, entryTime, workedTime, entryType, overTime]`. `workedTime`
//! is written as a copy of `entryTime`; existing files depend on these
//! offsets, so the layout must not change.

use crate::errors::{AppError, AppResult};
use crate::models::{Entry, EntryTime, EntryType};
use crate::utils::date::{parse_utc_string, to_utc_string};

const FIELD_SEPARATOR: char = ';';
const JOINED_SEPARATOR: char = ',';
const JOINED_SEGMENT: usize = 3;
const FIELD_COUNT: usize = 6;

pub fn encode(entry: &Entry) -> String {
    let over_time = entry.over_time.map(|v| v.to_string()).unwrap_or_default();

    format!(
        "{id};{date};{time};{time},{kind};{over_time};",
        id = entry.id,
        date = to_utc_string(&entry.date),
        time = entry.entry_time,
        kind = entry.entry_type.to_db_str(),
    )
}

/// Fixed-offset split into logical fields. Not CSV: only the fourth
/// segment is split on its first comma.
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields = Vec::with_capacity(FIELD_COUNT + 1);

    for (i, segment) in line.split(FIELD_SEPARATOR).enumerate() {
        if i == JOINED_SEGMENT {
            match segment.split_once(JOINED_SEPARATOR) {
                Some((a, b)) => {
                    fields.push(a);
                    fields.push(b);
                }
                None => fields.push(segment),
            }
        } else {
            fields.push(segment);
        }
    }

    fields
}

pub fn date_field(line: &str) -> Option<&str> {
    line.split(FIELD_SEPARATOR).nth(1)
}

pub fn decode(line: &str) -> AppResult<Entry> {
    let fields = split_fields(line.trim_end());
    if fields.len() < FIELD_COUNT {
        return Err(AppError::MalformedLine(format!(
            "expected {FIELD_COUNT} fields, found {}",
            fields.len()
        )));
    }

    let id = fields[0].trim();
    if id.is_empty() {
        return Err(AppError::MalformedLine("empty id".into()));
    }

    let date = parse_utc_string(fields[1]).ok_or_else(|| AppError::InvalidDate(fields[1].into()))?;
    let entry_type = EntryType::from_db_str(fields[4].trim())
        .ok_or_else(|| AppError::InvalidEntryType(fields[4].into()))?;
    let worked_time = parse_optional_int(fields[3])?;
    let entry_time = fields[2].parse::<EntryTime>()?;
    let over_time = parse_optional_int(fields[5])?;

    Ok(Entry {
        id: id.to_string(),
        date,
        entry_time,
        entry_type,
        worked_time,
        over_time,
    })
}

fn parse_optional_int(s: &str) -> AppResult<Option<i64>> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    s.parse::<i64>()
        .map(Some)
        .map_err(|_| AppError::InvalidNumber(s.to_string()))
}
