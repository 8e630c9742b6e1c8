#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use std::cell::RefCell;
use std::path::PathBuf;
use tempfile::TempDir;
use timekeeper::errors::{AppError, AppResult};
use timekeeper::logging::ErrorLog;
use timekeeper::models::{Entry, EntryType};
use timekeeper::storage::{EntryStore, line_format};

/// Binary under test, isolated from the real home directory.
pub fn tk(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("timekeeper");
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

/// A fresh home directory and the entry file path inside it.
pub fn setup_home() -> (TempDir, String) {
    let home = tempfile::tempdir().expect("create temp home");
    let store: PathBuf = home.path().join("entries.db");
    (home, store.to_string_lossy().to_string())
}

pub fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .earliest()
        .expect("valid local time")
}

pub fn entry_at(date: DateTime<Local>, entry_type: EntryType, over_time: Option<i64>) -> Entry {
    Entry::new(date, entry_type, over_time)
}

pub fn line_at(date: DateTime<Local>, entry_type: EntryType, over_time: Option<i64>) -> String {
    line_format::encode(&entry_at(date, entry_type, over_time))
}

/// Collects every `error(message, context)` call.
#[derive(Default)]
pub struct RecordingLog {
    pub calls: RefCell<Vec<(String, String)>>,
}

impl RecordingLog {
    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl ErrorLog for RecordingLog {
    fn error(&self, message: &str, context: &str) {
        self.calls
            .borrow_mut()
            .push((message.to_string(), context.to_string()));
    }
}

/// A store whose every call fails like a broken disk would.
pub struct FailingStore;

impl EntryStore for FailingStore {
    fn append_entry(&self, _line: &str) -> AppResult<()> {
        Err(AppError::Storage("disk on fire".into()))
    }

    fn get_last_entry(&self) -> AppResult<Option<String>> {
        Err(AppError::Storage("disk on fire".into()))
    }

    fn get_entries(&self, _count: Option<usize>) -> AppResult<Vec<String>> {
        Err(AppError::Storage("disk on fire".into()))
    }

    fn get_entries_by_utc_date(&self, _utc_date: &str) -> AppResult<Vec<String>> {
        Err(AppError::Storage("disk on fire".into()))
    }
}
