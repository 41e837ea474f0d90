mod common;
use common::{FEB_2024_LOG, day, hm, month, office_hours};
use rworktime::core::generator::generate_monthly_records;
use rworktime::core::parser::parse_log;
use rworktime::core::reconcile::TimeEdit;
use rworktime::export::{ExportFormat, render_csv, render_json};
use rworktime::models::record::MonthlyRecord;
use rworktime::ui::report::{employee_title, render_record};
use rworktime::utils::format_hours;
use rworktime::utils::table::strip_ansi;
use std::path::Path;

fn feb_records() -> Vec<MonthlyRecord> {
    let entries = parse_log(FEB_2024_LOG).expect("parse").entries;
    generate_monthly_records(&entries, month("2024-02"), &office_hours())
}

const FEB_2024_CSV: &str = "\
Employee ID,Date,Arrival,Departure,Worked Hours,Warnings
E001,2024-02-05,07:55,17:10,9:15,Multiple logs
E001,2024-02-06,08:00,17:45,9:45,Missing IN
E001,TOTAL,,,19:00,

E002,2024-02-05,08:02,16:45,8:43,
E002,TOTAL,,,8:43,

";

#[test]
fn test_format_hours() {
    assert_eq!(format_hours(0), "0:00");
    assert_eq!(format_hours(45), "0:45");
    assert_eq!(format_hours(90), "1:30");
    assert_eq!(format_hours(125), "2:05");
    assert_eq!(format_hours(600), "10:00");
    assert_eq!(format_hours(24 * 60 * 3 + 7), "72:07");
}

#[test]
fn test_csv_layout() {
    let csv = render_csv(&feb_records()).expect("render");
    assert_eq!(csv, FEB_2024_CSV);
}

#[test]
fn test_csv_empty_input_is_header_only() {
    let csv = render_csv(&[]).expect("render");
    assert_eq!(
        csv,
        "Employee ID,Date,Arrival,Departure,Worked Hours,Warnings\n"
    );
}

#[test]
fn test_csv_joins_warnings_in_fixed_order() {
    let mut records = feb_records();
    records[0]
        .apply_edit(day("2024-02-06"), TimeEdit::Departure(Some(hm("18:00"))))
        .expect("edit");

    let csv = render_csv(&records).expect("render");
    assert!(
        csv.contains("E001,2024-02-06,08:00,18:00,10:00,Missing IN; Manually edited\n"),
        "{csv}"
    );
    assert!(csv.contains("E001,TOTAL,,,19:15,\n"), "{csv}");
}

#[test]
fn test_csv_keeps_day_with_only_one_time() {
    let mut records = feb_records();
    records[1]
        .apply_edit(day("2024-02-07"), TimeEdit::Arrival(Some(hm("09:00"))))
        .expect("edit");

    let csv = render_csv(&records).expect("render");
    assert!(
        csv.contains("E002,2024-02-07,09:00,,0:00,Manually edited\n"),
        "{csv}"
    );
}

#[test]
fn test_csv_quotes_fields_with_commas() {
    let entries = parse_log("ACME,01\t2024-02-05 08:00:00\tD\t0\nACME,01\t2024-02-05 16:00:00\tD\t1\n")
        .expect("parse")
        .entries;
    let records = generate_monthly_records(&entries, month("2024-02"), &office_hours());

    let csv = render_csv(&records).expect("render");
    assert!(csv.contains("\"ACME,01\",2024-02-05,08:00,16:00,8:00,\n"), "{csv}");
    assert!(csv.contains("\"ACME,01\",TOTAL,,,8:00,\n"), "{csv}");
}

#[test]
fn test_json_export_lists_days_with_data() {
    let json = render_json(&feb_records()).expect("render");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    let employees = value.as_array().expect("array");
    assert_eq!(employees.len(), 2);

    let e1 = &employees[0];
    assert_eq!(e1["employee_id"], "E001");
    assert_eq!(e1["month"], "2024-02");
    assert_eq!(e1["total_minutes"], 1140);
    assert_eq!(e1["total_hours"], "19:00");

    let days = e1["days"].as_array().expect("days");
    assert_eq!(days.len(), 2);
    assert_eq!(days[1]["date"], "2024-02-06");
    assert_eq!(days[1]["arrival"], "08:00");
    assert_eq!(days[1]["warnings"][0], "Missing IN");
}

#[test]
fn test_export_format_from_extension() {
    assert!(matches!(
        ExportFormat::from_path(Path::new("/tmp/a.json")),
        ExportFormat::Json
    ));
    assert!(matches!(
        ExportFormat::from_path(Path::new("/tmp/a.JSON")),
        ExportFormat::Json
    ));
    assert!(matches!(
        ExportFormat::from_path(Path::new("/tmp/a.csv")),
        ExportFormat::Csv
    ));
    assert!(matches!(
        ExportFormat::from_path(Path::new("/tmp/noext")),
        ExportFormat::Csv
    ));
}

#[test]
fn test_report_lists_only_days_with_data() {
    let records = feb_records();
    let text = strip_ansi(&render_record(&records[0], Some("Ada Lovelace")));

    assert!(text.starts_with("Ada Lovelace (ID: E001)\nFebruary 2024\n"), "{text}");
    assert!(text.contains("2024-02-05"));
    assert!(text.contains("2024-02-06"));
    assert!(!text.contains("2024-02-07"));
    assert!(text.contains("No IN"));
    assert!(text.contains("Multiple logs"));
    assert!(text.contains("19:00"));
}

#[test]
fn test_report_title_without_name() {
    let records = feb_records();
    assert_eq!(employee_title(&records[1], None), "Employee E002");
}
