use crate::config::Config;
use crate::core::PunchLogic;
use crate::errors::AppResult;
use crate::ui::messages::{colour_overtime, info};
use crate::utils::date::to_utc_string;
use crate::utils::formatting::format_minutes;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let manager = super::open_manager(cfg);
    let status = PunchLogic::status(&manager)?;

    match &status.last {
        Some(entry) => {
            let day = manager
                .convert_to_human_date(&to_utc_string(&entry.date))
                .unwrap_or_else(|| "--".into());
            println!(
                "Last entry : {} at {} on {}",
                entry.entry_type,
                entry.time_str(),
                day
            );
        }
        None => info("No entries yet"),
    }

    println!(
        "Overtime   : {}",
        colour_overtime(status.over_time, &manager.parse_overtime(status.over_time))
    );

    if let Some(worked) = status.worked_so_far {
        println!("Worked     : {}", format_minutes(worked));
    }
    Ok(())
}
