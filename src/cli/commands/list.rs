use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::EntryManager;
use crate::errors::{AppError, AppResult};
use crate::logging::ErrorLog;
use crate::models::Entry;
use crate::storage::EntryStore;
use crate::ui::messages::{header, info};
use crate::utils::date::{parse_date, to_utc_string};
use crate::utils::formatting::pad_right;
use chrono::{NaiveTime, TimeZone, Utc};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { count, date } = cmd {
        let manager = super::open_manager(cfg);

        let entries = match date {
            Some(d) => {
                // the entry log is keyed by UTC day
                let day = parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
                let midnight = Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN));
                header(format!("Entries for {d}"));
                manager.get_entries_by_date(&midnight)?
            }
            None => {
                header("Entries");
                manager.get_entries(*count)?
            }
        };

        if entries.is_empty() {
            info("No entries found");
            return Ok(());
        }

        for entry in &entries {
            print_entry(&manager, entry);
        }
    }
    Ok(())
}

fn print_entry<S: EntryStore, L: ErrorLog>(manager: &EntryManager<S, L>, entry: &Entry) {
    let day = manager
        .convert_to_human_date(&to_utc_string(&entry.date))
        .unwrap_or_else(|| "--".into());
    let over_time = entry
        .over_time
        .map(|m| manager.parse_overtime(m))
        .unwrap_or_default();

    println!(
        "{} {} {} {}",
        pad_right(&day, 10),
        entry.time_str(),
        pad_right(entry.entry_type.to_db_str(), 8),
        over_time
    );
}
