mod common;
use common::{FEB_2024_LOG, ts};
use rworktime::core::parser::{SkipReason, parse_log, parse_timestamp};
use chrono::{DateTime, Local};
use rworktime::errors::AppError;
use rworktime::models::direction::Direction;

#[test]
fn test_parse_valid_log_keeps_input_order() {
    let outcome = parse_log(FEB_2024_LOG).expect("parse");

    assert_eq!(outcome.entries.len(), 8);
    assert_eq!(outcome.skipped_lines, 0);
    assert!(outcome.warnings.is_empty());

    let first = &outcome.entries[0];
    assert_eq!(first.employee_id, "E002");
    assert_eq!(first.timestamp, ts("2024-02-05 08:02:11"));
    assert_eq!(first.direction, Direction::In);

    assert_eq!(outcome.entries[1].direction, Direction::Out);
    assert_eq!(outcome.entries[2].employee_id, "E001");
}

#[test]
fn test_parse_skips_malformed_lines_and_cites_them() {
    let input = "\
E1\t2024-05-02 08:00:00\tD\t0
E1\t2024-05-02 17:00:00\tD\t1
E2\t2024-05-02 08:00:00
E2\t2024-05-02 08:10:00\tD\t0
E2\t2024-05-02 17:10:00\tD\t7
E2\t2024-05-02 17:20:00\tD\t1
";
    let outcome = parse_log(input).expect("parse");

    assert_eq!(outcome.entries.len(), 4);
    assert_eq!(outcome.skipped_lines, 2);
    assert_eq!(outcome.warnings.len(), 2);

    assert_eq!(outcome.warnings[0].line, 3);
    assert_eq!(outcome.warnings[0].reason, SkipReason::TooFewFields(2));
    assert!(outcome.warnings[0].to_string().starts_with("Line 3:"));

    assert_eq!(outcome.warnings[1].line, 5);
    assert_eq!(
        outcome.warnings[1].reason,
        SkipReason::InvalidDirection("7".to_string())
    );
    assert!(outcome.warnings[1].to_string().contains("Line 5"));
}

#[test]
fn test_parse_ignores_blank_lines_without_counting_them() {
    let input = "\nE1\t2024-05-02 08:00:00\tD\t0\n   \n\nE1\t2024-05-02 17:00:00\tD\t1\n";
    let outcome = parse_log(input).expect("parse");

    assert_eq!(outcome.entries.len(), 2);
    assert_eq!(outcome.skipped_lines, 0);
    assert!(outcome.warnings.is_empty());
}

#[test]
fn test_parse_reports_empty_employee_and_bad_timestamp() {
    let input = "\
\t2024-05-02 08:00:00\tD\t0
E1\tyesterday morning\tD\t0
E1\t2024-05-02 09:00:00\tD\t0
";
    let outcome = parse_log(input).expect("parse");

    assert_eq!(outcome.entries.len(), 1);
    assert_eq!(outcome.warnings[0].reason, SkipReason::EmptyEmployeeId);
    assert_eq!(outcome.warnings[0].line, 1);
    assert_eq!(
        outcome.warnings[1].reason,
        SkipReason::InvalidTimestamp("yesterday morning".to_string())
    );
    assert_eq!(outcome.warnings[1].line, 2);
}

#[test]
fn test_parse_trims_employee_id_and_direction() {
    let outcome = parse_log("  E7 \t2024-05-02 08:00:00\tD\t 1 \textra\tcolumns").expect("parse");

    assert_eq!(outcome.entries[0].employee_id, "E7");
    assert_eq!(outcome.entries[0].direction, Direction::Out);
}

#[test]
fn test_parse_handles_crlf_line_endings() {
    let outcome =
        parse_log("E1\t2024-05-02 08:00:00\tD\t0\r\nE1\t2024-05-02 17:00:00\tD\t1\r\n").expect("parse");

    assert_eq!(outcome.entries.len(), 2);
    assert_eq!(outcome.entries[1].direction, Direction::Out);
}

#[test]
fn test_parse_fails_when_nothing_is_usable() {
    assert!(matches!(parse_log(""), Err(AppError::NoValidEntries)));
    assert!(matches!(parse_log("\n \n"), Err(AppError::NoValidEntries)));

    let err = parse_log("garbage\nE1\tnot a date\tD\t0\n").unwrap_err();
    assert!(matches!(err, AppError::NoValidEntries));
    assert!(err.to_string().contains("no valid entries"));
}

#[test]
fn test_parse_timestamp_accepts_common_layouts() {
    let expected = ts("2024-05-02 08:15:00");

    for raw in [
        "2024-05-02 08:15:00",
        "2024-05-02 08:15",
        "2024-05-02T08:15:00",
        "2024-05-02T08:15",
        "2024/05/02 08:15:00",
        "2024.05.02 08:15",
        "2024.05.02. 08:15:00",
        "05/02/2024 08:15:00",
        "05/02/2024 08:15",
    ] {
        assert_eq!(parse_timestamp(raw), Some(expected), "layout {raw}");
    }

    assert_eq!(
        parse_timestamp("2024-05-02 08:15:00.250").map(|t| t.format("%H:%M").to_string()),
        Some("08:15".to_string())
    );
    assert_eq!(parse_timestamp("02/05/2024"), None);
    assert_eq!(parse_timestamp(""), None);
}

#[test]
fn test_parse_timestamp_with_offset_and_no_seconds() {
    let local = |rfc: &str| {
        DateTime::parse_from_rfc3339(rfc)
            .expect("valid rfc3339")
            .with_timezone(&Local)
            .naive_local()
    };

    assert_eq!(
        parse_timestamp("2024-02-05T08:00Z"),
        Some(local("2024-02-05T08:00:00Z"))
    );
    assert_eq!(
        parse_timestamp("2024-02-05T08:00+01:00"),
        Some(local("2024-02-05T08:00:00+01:00"))
    );
    assert_eq!(
        parse_timestamp("2024-02-05T08:00:00.000Z"),
        Some(local("2024-02-05T08:00:00Z"))
    );

    for raw in ["2024-02-05T08:00Z", "02/05/2024 08:00:00"] {
        let outcome = parse_log(&format!("E1\t{raw}\tD\t0\n")).expect("usable line");
        assert_eq!(outcome.entries.len(), 1, "layout {raw}");
        assert_eq!(outcome.skipped_lines, 0);
    }
}
