#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rworktime::models::direction::Direction;
use rworktime::models::log_entry::LogEntry;
use rworktime::models::month::YearMonth;
use rworktime::models::shift::ShiftDefaults;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a scratch directory so the
/// user's real configuration is never read or written.
pub fn rwt() -> Command {
    rwt_home("shared")
}

pub fn rwt_home(name: &str) -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("rworktime_home_{}", name));
    fs::create_dir_all(&home).expect("create test home");

    let mut cmd = cargo_bin_cmd!("rworktime");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// `init --test` on a fresh database, then import `log`.
pub fn init_with_log(name: &str, log: &str) -> String {
    let db_path = setup_test_db(name);
    rwt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let file = write_log_file(name, log);
    rwt()
        .args(["--db", &db_path, "import", &file])
        .assert()
        .success();

    db_path
}

/// `init_with_log` followed by generating February 2024 with a 08:00-17:00 shift.
pub fn init_feb_2024(name: &str) -> String {
    let db_path = init_with_log(name, FEB_2024_LOG);
    rwt()
        .args([
            "--db", &db_path, "generate", "--month", "2024-02", "--force", "--start", "08:00",
            "--end", "17:00",
        ])
        .assert()
        .success();
    db_path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworktime.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a temp log file and return its path
pub fn write_log_file(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_badge.log", name));
    fs::write(&path, content).expect("write log file");
    path.to_string_lossy().to_string()
}

/// Badge log for February 2024 (plus one March punch that must be ignored).
///
/// - E001 on 02-05: IN 07:55, OUT 12:00, IN 12:30, OUT 17:10
/// - E001 on 02-06: only OUT 17:45
/// - E002 on 02-05: IN 08:02, OUT 16:45
pub const FEB_2024_LOG: &str = "\
E002\t2024-02-05 08:02:11\tDoor1\t0
E002\t2024-02-05 16:45:00\tDoor1\t1
E001\t2024-02-05 07:55:00\tDoor1\t0
E001\t2024-02-05 12:00:00\tDoor2\t1
E001\t2024-02-05 12:30:00\tDoor2\t0
E001\t2024-02-05 17:10:00\tDoor1\t1
E001\t2024-02-06 17:45:00\tDoor1\t1
E001\t2024-03-01 08:00:00\tDoor1\t0
";

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid test timestamp")
}

pub fn hm(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid test time")
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn month(s: &str) -> YearMonth {
    s.parse().expect("valid test month")
}

pub fn punch(employee: &str, when: &str, direction: Direction) -> LogEntry {
    LogEntry::new(employee, ts(when), direction)
}

pub fn office_hours() -> ShiftDefaults {
    ShiftDefaults::new(hm("08:00"), hm("17:00"))
}
