pub mod manager;
pub mod punch;

pub use manager::EntryManager;
pub use punch::PunchLogic;
