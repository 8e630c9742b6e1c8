use crate::core::manager::{EntryManager, RECENT_WINDOW};
use crate::errors::{AppError, AppResult};
use crate::logging::ErrorLog;
use crate::models::{Entry, EntryTime, EntryType};
use crate::storage::EntryStore;
use crate::utils::date::same_local_day;
use chrono::{DateTime, Local, TimeZone};
use tracing::{debug, info};

#[derive(Debug)]
pub struct StartOutcome {
    pub entry: Entry,
    pub first_of_today: bool,
}

#[derive(Debug)]
pub struct EndOutcome {
    pub entry: Entry,
    pub worked_minutes: i64,
    /// Whether the daily target was charged by this punch.
    pub target_applied: bool,
}

#[derive(Debug)]
pub struct Status {
    pub last: Option<Entry>,
    pub over_time: i64,
    /// Minutes since the last start, only while a start is open.
    pub worked_so_far: Option<i64>,
}

/// High-level business logic for the punch commands.
pub struct PunchLogic;

impl PunchLogic {
    /// Appends a `start` entry carrying the current overtime forward.
    pub fn start<S: EntryStore, L: ErrorLog>(
        manager: &EntryManager<S, L>,
        at: Option<EntryTime>,
    ) -> AppResult<StartOutcome> {
        let date = timestamp_today(manager.now(), at)?;
        let first_of_today = manager.is_first_entry_of_today()?;
        let over_time = manager.get_last_overtime()?;

        let entry = Entry::new(date, EntryType::Start, Some(over_time));
        manager.append_entry(&entry)?;
        info!(id = %entry.id, time = %entry.entry_time, "start punched");

        Ok(StartOutcome {
            entry,
            first_of_today,
        })
    }

    /// Appends an `end` entry. The daily target is subtracted by the first
    /// end punch of the day only.
    pub fn end<S: EntryStore, L: ErrorLog>(
        manager: &EntryManager<S, L>,
        at: Option<EntryTime>,
        daily_target: i64,
    ) -> AppResult<EndOutcome> {
        let date = timestamp_today(manager.now(), at)?;
        let worked_minutes = manager.calculate_work_for_end_date(date)?;

        let already_ended_today = manager
            .get_entries(Some(RECENT_WINDOW))?
            .iter()
            .any(|e| e.entry_type.is_end() && same_local_day(&e.date, &date));
        let target_applied = !already_ended_today;
        let target = if target_applied { daily_target } else { 0 };

        let over_time = add_minutes(manager.get_last_overtime()?, worked_minutes)?
            .checked_sub(target)
            .ok_or_else(|| AppError::InvalidNumber(format!("overtime minus target {target} overflows")))?;
        debug!(worked_minutes, target, over_time, "computed overtime");

        let mut entry = Entry::new(date, EntryType::End, Some(over_time));
        entry.worked_time = Some(worked_minutes);
        manager.append_entry(&entry)?;
        info!(id = %entry.id, time = %entry.entry_time, "end punched");

        Ok(EndOutcome {
            entry,
            worked_minutes,
            target_applied,
        })
    }

    /// Manual correction: adds `minutes` (may be negative) to the overtime.
    pub fn overtime<S: EntryStore, L: ErrorLog>(
        manager: &EntryManager<S, L>,
        minutes: i64,
    ) -> AppResult<Entry> {
        let over_time = add_minutes(manager.get_last_overtime()?, minutes)?;
        let entry = Entry::new(manager.now(), EntryType::Overtime, Some(over_time));
        manager.append_entry(&entry)?;
        info!(id = %entry.id, minutes, over_time, "overtime corrected");
        Ok(entry)
    }

    pub fn status<S: EntryStore, L: ErrorLog>(manager: &EntryManager<S, L>) -> AppResult<Status> {
        let last = manager.get_last_entry()?;
        let over_time = manager.get_last_overtime()?;

        let worked_so_far = match &last {
            Some(e) if e.entry_type.is_start() => {
                Some(manager.calculate_work_for_end_date(manager.now())?)
            }
            _ => None,
        };

        Ok(Status {
            last,
            over_time,
            worked_so_far,
        })
    }
}

fn add_minutes(balance: i64, minutes: i64) -> AppResult<i64> {
    balance
        .checked_add(minutes)
        .ok_or_else(|| AppError::InvalidNumber(format!("overtime {balance} + {minutes} overflows")))
}

/// Today (per `now`) at `at`, or `now` itself truncated to the minute.
fn timestamp_today(now: DateTime<Local>, at: Option<EntryTime>) -> AppResult<DateTime<Local>> {
    let time = at.unwrap_or_else(|| EntryTime::from_naive_time(now.time()));
    let naive_time = time
        .to_naive_time()
        .ok_or_else(|| AppError::InvalidTime(time.to_string()))?;

    Local
        .from_local_datetime(&now.date_naive().and_time(naive_time))
        .earliest()
        .ok_or_else(|| AppError::InvalidTime(format!("{} does not exist today", time)))
}
