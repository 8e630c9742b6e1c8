use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::PunchLogic;
use crate::errors::AppResult;
use crate::ui::messages::{colour_overtime, info, success, warning};
use crate::utils::formatting::format_minutes;
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::End { at } = cmd {
        let at = parse_optional_time(at.as_ref())?;
        let target = cfg.daily_target_minutes()?;
        let manager = super::open_manager(cfg);

        let outcome = PunchLogic::end(&manager, at, target)?;

        if outcome.worked_minutes == 0 {
            warning("No start punch found for today, nothing worked was booked");
        }
        success(format!(
            "Ended at {}, worked {}",
            outcome.entry.time_str(),
            format_minutes(outcome.worked_minutes)
        ));

        let over_time = outcome.entry.over_time.unwrap_or(0);
        info(format!(
            "Overtime: {}",
            colour_overtime(over_time, &manager.parse_overtime(over_time))
        ));
    }
    Ok(())
}
