//! Date utilities: the UTC string used in the entry log, local calendar
//! helpers and human readable dates.

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Utc};

/// Layout of the date field in stored lines, e.g. `Wed, 14 Oct 2026 08:30:00 GMT`.
pub const UTC_STRING_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Layout of a German locale date, e.g. `14.10.2026`.
pub const HUMAN_DATE_FORMAT: &str = "%-d.%-m.%Y";

pub fn to_utc_string<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    date.with_timezone(&Utc).format(UTC_STRING_FORMAT).to_string()
}

/// Parse a stored date. RFC 2822 is the stored layout; RFC 3339 is accepted
/// too so that hand-edited files keep working.
pub fn parse_utc_string(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    DateTime::parse_from_rfc2822(s)
        .or_else(|_| DateTime::parse_from_rfc3339(s))
        .map(|d| d.with_timezone(&Utc))
        .ok()
}

/// The UTC calendar day of a stored date, used to match entries by day.
pub fn utc_day(s: &str) -> Option<NaiveDate> {
    parse_utc_string(s).map(|d| d.date_naive())
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// True when both instants fall on the same local calendar day.
pub fn same_local_day<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> bool {
    let a = a.with_timezone(&Local);
    let b = b.with_timezone(&Local);
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}
