pub mod config;
pub mod end;
pub mod init;
pub mod list;
pub mod overtime;
pub mod start;
pub mod status;

use crate::config::Config;
use crate::core::EntryManager;
use crate::logging::TracingLog;
use crate::storage::FileStore;

/// The manager every entry command works with.
pub(crate) fn open_manager(cfg: &Config) -> EntryManager<FileStore, TracingLog> {
    EntryManager::new(FileStore::new(cfg.store_path()), TracingLog)
}
