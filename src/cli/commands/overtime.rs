use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::PunchLogic;
use crate::errors::AppResult;
use crate::ui::messages::{colour_overtime, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Overtime { minutes } = cmd {
        let manager = super::open_manager(cfg);
        let entry = PunchLogic::overtime(&manager, *minutes)?;

        let over_time = entry.over_time.unwrap_or(0);
        success(format!(
            "Overtime is now {}",
            colour_overtime(over_time, &manager.parse_overtime(over_time))
        ));
    }
    Ok(())
}
