pub mod entry;
pub mod entry_type;

pub use entry::{Entry, EntryTime};
pub use entry_type::EntryType;
