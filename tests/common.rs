#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use offwork::models::record::Record;
use offwork::utils::time::ClockTime;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn ow() -> Command {
    cargo_bin_cmd!("offwork")
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn t(s: &str) -> ClockTime {
    s.parse().expect("valid test time")
}

pub fn rec(date: &str, time: &str) -> Record {
    Record::new(d(date), t(time), None)
}

pub fn rec_note(date: &str, time: &str, note: &str) -> Record {
    Record::new(d(date), t(time), Some(note.to_string()))
}

/// Isolated HOME and data directory for one CLI test.
pub struct Sandbox {
    pub home: TempDir,
    pub data: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("temp home"),
            data: TempDir::new().expect("temp data dir"),
        }
    }

    pub fn data_dir(&self) -> String {
        self.data.path().to_string_lossy().to_string()
    }

    pub fn records_file(&self) -> PathBuf {
        self.data.path().join("offWorkRecords.json")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.data.path().join("settings.json")
    }

    /// Absolute path of an output file inside the data directory.
    pub fn out(&self, name: &str) -> String {
        self.data.path().join(name).to_string_lossy().to_string()
    }

    /// Command with HOME, data dir, test mode and a fixed "today".
    pub fn cmd(&self, today: &str) -> Command {
        let mut c = ow();
        c.env("HOME", self.home.path())
            .env("APPDATA", self.home.path())
            .env_remove("RUST_LOG")
            .args(["--data-dir", &self.data_dir(), "--test", "--today", today]);
        c
    }

    /// Write the records document directly, bypassing the CLI.
    pub fn seed(&self, records: &[(&str, &str)]) {
        let raw: Vec<serde_json::Value> = records
            .iter()
            .map(|(date, time)| serde_json::json!({ "date": date, "time": time }))
            .collect();
        fs::write(
            self.records_file(),
            serde_json::to_string_pretty(&raw).expect("serialize seed"),
        )
        .expect("write seed records");
    }

    pub fn seed_settings(&self, json: &str) {
        fs::write(self.settings_file(), json).expect("write seed settings");
    }
}
