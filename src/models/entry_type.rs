use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Start,
    End,
    Overtime,
}

impl EntryType {
    /// Convert enum → stored string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EntryType::Start => "start",
            EntryType::End => "end",
            EntryType::Overtime => "overtime",
        }
    }

    /// Convert stored string → enum. Stored values are always lowercase.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "start" => Some(EntryType::Start),
            "end" => Some(EntryType::End),
            "overtime" => Some(EntryType::Overtime),
            _ => None,
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, EntryType::Start)
    }

    pub fn is_end(&self) -> bool {
        matches!(self, EntryType::End)
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}
