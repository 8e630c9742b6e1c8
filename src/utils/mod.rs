pub mod clock;
pub mod date;
pub mod formatting;
pub mod path;
pub mod time;
