use chrono::{TimeZone, Utc};
use timekeeper::errors::AppError;
use timekeeper::models::{Entry, EntryTime, EntryType};
use timekeeper::storage::line_format::{decode, encode, split_fields};

fn sample_entry() -> Entry {
    Entry {
        id: "a1b2".to_string(),
        date: Utc.with_ymd_and_hms(2026, 10, 14, 7, 30, 0).unwrap(),
        entry_time: "0930".parse().unwrap(),
        entry_type: EntryType::Start,
        worked_time: None,
        over_time: Some(125),
    }
}

#[test]
fn test_encode_duplicates_entry_time_before_type() {
    assert_eq!(
        encode(&sample_entry()),
        "a1b2;Wed, 14 Oct 2026 07:30:00 GMT;0930;0930,start;125;"
    );
}

#[test]
fn test_encode_missing_overtime_is_empty_field() {
    let mut entry = sample_entry();
    entry.over_time = None;
    entry.entry_type = EntryType::End;

    assert_eq!(
        encode(&entry),
        "a1b2;Wed, 14 Oct 2026 07:30:00 GMT;0930;0930,end;;"
    );
}

#[test]
fn test_split_fields_only_splits_the_joined_segment() {
    let fields = split_fields("id;Wed, 14 Oct 2026 07:30:00 GMT;0930;0930,start;125;");
    assert_eq!(
        fields,
        vec![
            "id",
            "Wed, 14 Oct 2026 07:30:00 GMT",
            "0930",
            "0930",
            "start",
            "125",
            ""
        ]
    );
}

#[test]
fn test_round_trip_keeps_identity_fields() {
    let original = sample_entry();
    let parsed = decode(&encode(&original)).expect("decode");

    assert_eq!(parsed.id, original.id);
    assert_eq!(parsed.date, original.date);
    assert_eq!(parsed.entry_type, original.entry_type);
    assert_eq!(parsed.over_time, original.over_time);
    assert_eq!(parsed.entry_time, original.entry_time);
}

#[test]
fn test_round_trip_worked_time_is_raw_entry_time() {
    // the worked-time field holds the duplicated HHMM value
    let parsed = decode(&encode(&sample_entry())).expect("decode");
    assert_eq!(parsed.worked_time, Some(930));
}

#[test]
fn test_decode_negative_overtime() {
    let parsed = decode("x;Mon, 12 Oct 2026 16:00:00 GMT;1800;1800,end;-45;").expect("decode");
    assert_eq!(parsed.over_time, Some(-45));
    assert_eq!(parsed.entry_type, EntryType::End);
    assert_eq!(parsed.entry_time.hour(), 18);
}

#[test]
fn test_decode_accepts_colon_time() {
    let parsed = decode("x;Mon, 12 Oct 2026 16:00:00 GMT;08:15;0815,start;0;").expect("decode");
    assert_eq!(parsed.entry_time, EntryTime::new(8, 15).unwrap());
}

#[test]
fn test_decode_rejects_unknown_type() {
    let err = decode("x;Mon, 12 Oct 2026 16:00:00 GMT;0800;0800,lunch;0;").unwrap_err();
    assert!(matches!(err, AppError::InvalidEntryType(_)));
}

#[test]
fn test_decode_rejects_bad_date() {
    let err = decode("x;yesterday-ish;0800;0800,start;0;").unwrap_err();
    assert!(matches!(err, AppError::InvalidDate(_)));
}

#[test]
fn test_decode_rejects_short_line() {
    let err = decode("x;Mon, 12 Oct 2026 16:00:00 GMT;0800").unwrap_err();
    assert!(matches!(err, AppError::MalformedLine(_)));
}

#[test]
fn test_decode_rejects_garbage_overtime() {
    let err = decode("x;Mon, 12 Oct 2026 16:00:00 GMT;0800;0800,start;lots;").unwrap_err();
    assert!(matches!(err, AppError::InvalidNumber(_)));
}

#[test]
fn test_entry_time_parsing() {
    assert_eq!("0830".parse::<EntryTime>().unwrap().to_string(), "0830");
    assert_eq!("830".parse::<EntryTime>().unwrap().to_string(), "0830");
    assert_eq!("23:59".parse::<EntryTime>().unwrap().value(), 2359);
    assert!("2460".parse::<EntryTime>().is_err());
    assert!("0875".parse::<EntryTime>().is_err());
    assert!("12345".parse::<EntryTime>().is_err());
    assert!("".parse::<EntryTime>().is_err());
    assert!("ab:cd".parse::<EntryTime>().is_err());
}
