use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::PunchLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { at } = cmd {
        let at = parse_optional_time(at.as_ref())?;
        let manager = super::open_manager(cfg);

        let outcome = PunchLogic::start(&manager, at)?;

        success(format!("Started at {}", outcome.entry.time_str()));
        if outcome.first_of_today {
            info("First punch of today");
        }
    }
    Ok(())
}
