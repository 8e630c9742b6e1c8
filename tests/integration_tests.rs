use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{setup_home, tk};

#[test]
fn test_init_creates_empty_store() {
    let (home, store) = setup_home();

    tk(&home)
        .args(["--store", &store, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("timekeeper initialized"));

    assert_eq!(fs::read_to_string(&store).unwrap(), "");
}

#[test]
fn test_init_writes_config_file() {
    let (home, store) = setup_home();

    tk(&home).args(["--store", &store, "init"]).assert().success();

    let conf = home.path().join(".timekeeper").join("timekeeper.conf");
    let content = fs::read_to_string(conf).expect("config written");
    assert!(content.contains("daily_target: 8h"));
    assert!(content.contains(&store));
}

#[test]
fn test_start_end_books_a_full_day() {
    let (home, store) = setup_home();

    tk(&home)
        .args(["--store", &store, "start", "--at", "09:00"])
        .assert()
        .success()
        .stdout(contains("Started at 09:00"))
        .stdout(contains("First punch of today"));

    tk(&home)
        .args(["--store", &store, "end", "--at", "17:30"])
        .assert()
        .success()
        .stdout(contains("Ended at 17:30, worked 08:30"))
        .stdout(contains("0h 30m"));

    let content = fs::read_to_string(&store).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(";0900;0900,start;0;"));
    assert!(lines[1].ends_with(";1730;1730,end;30;"));
}

#[test]
fn test_overtime_correction_and_status() {
    let (home, store) = setup_home();

    tk(&home)
        .args(["--store", &store, "overtime", "125"])
        .assert()
        .success()
        .stdout(contains("2h 5m"));

    tk(&home)
        .args(["--store", &store, "overtime", "-155"])
        .assert()
        .success()
        .stdout(contains("-1h -30m"));

    tk(&home)
        .args(["--store", &store, "status"])
        .assert()
        .success()
        .stdout(contains("Last entry : overtime"))
        .stdout(contains("-1h -30m"))
        .stdout(contains("Worked").not());
}

#[test]
fn test_status_on_empty_store() {
    let (home, store) = setup_home();

    tk(&home)
        .args(["--store", &store, "status"])
        .assert()
        .success()
        .stdout(contains("No entries yet"))
        .stdout(contains("0h 0m"));
}

#[test]
fn test_list_shows_entries_and_skips_corrupt_lines() {
    let (home, store) = setup_home();

    tk(&home)
        .args(["--store", &store, "start", "--at", "08:00"])
        .assert()
        .success();

    let mut content = fs::read_to_string(&store).unwrap();
    content.push_str("this line is not an entry\n");
    fs::write(&store, content).unwrap();

    tk(&home)
        .args(["--store", &store, "end", "--at", "12:00"])
        .assert()
        .success();

    tk(&home)
        .args(["--store", &store, "list"])
        .assert()
        .success()
        .stdout(contains("08:00 start"))
        .stdout(contains("12:00 end"))
        .stdout(contains("not an entry").not());

    tk(&home)
        .args(["--store", &store, "list", "--count", "1"])
        .assert()
        .success()
        .stdout(contains("12:00 end"))
        .stdout(contains("08:00 start").not());
}

#[test]
fn test_list_by_date_without_matches() {
    let (home, store) = setup_home();

    tk(&home)
        .args(["--store", &store, "list", "--date", "1999-01-01"])
        .assert()
        .success()
        .stdout(contains("No entries found"));
}

#[test]
fn test_list_by_date_prints_that_day() {
    let (home, store) = setup_home();
    let old = "old;Mon, 12 Oct 2026 08:00:00 GMT;0800;0800,start;0;\n";
    let day = "d1;Wed, 14 Oct 2026 07:15:00 GMT;0715;0715,start;0;\n\
               d2;Wed, 14 Oct 2026 15:45:00 GMT;1545;1545,end;-30;\n";
    fs::write(&store, format!("{old}{day}")).unwrap();

    tk(&home)
        .args(["--store", &store, "list", "--date", "2026-10-14"])
        .assert()
        .success()
        .stdout(contains("Entries for 2026-10-14"))
        .stdout(contains("07:15 start"))
        .stdout(contains("15:45 end"))
        .stdout(contains("-1h -30m"))
        .stdout(contains("08:00 start").not())
        .stdout(contains("No entries found").not());
}

#[test]
fn test_invalid_time_is_rejected() {
    let (home, store) = setup_home();

    tk(&home)
        .args(["--store", &store, "start", "--at", "25:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: 25:00"));

    assert!(fs::metadata(&store).is_err(), "nothing was written");
}

#[test]
fn test_invalid_config_is_reported() {
    let (home, store) = setup_home();
    let dir = home.path().join(".timekeeper");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("timekeeper.conf"), "daily_target: [not, a, string").unwrap();

    tk(&home)
        .args(["--store", &store, "status"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_daily_target_from_config() {
    let (home, store) = setup_home();
    let dir = home.path().join(".timekeeper");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("timekeeper.conf"), "daily_target: 4h\n").unwrap();

    tk(&home)
        .args(["--store", &store, "start", "--at", "08:00"])
        .assert()
        .success();

    tk(&home)
        .args(["--store", &store, "end", "--at", "13:00"])
        .assert()
        .success()
        .stdout(contains("1h 0m"));
}
