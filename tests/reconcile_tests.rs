mod common;
use common::{FEB_2024_LOG, day, hm, month, office_hours};
use rworktime::core::generator::generate_monthly_records;
use rworktime::core::parser::parse_log;
use rworktime::core::reconcile::{TimeEdit, apply_edit};
use rworktime::errors::AppError;
use rworktime::models::record::{DailyRecord, MonthlyRecord};

fn feb_records() -> Vec<MonthlyRecord> {
    let entries = parse_log(FEB_2024_LOG).expect("parse").entries;
    generate_monthly_records(&entries, month("2024-02"), &office_hours())
}

fn worked_day(date: &str, arrival: &str, departure: &str) -> DailyRecord {
    let mut d = DailyRecord::empty(day(date));
    d.arrival = Some(hm(arrival));
    d.departure = Some(hm(departure));
    d
}

#[test]
fn test_edit_across_midnight() {
    let base = worked_day("2024-02-10", "23:30", "23:45");
    let edited = apply_edit(&base, TimeEdit::Departure(Some(hm("00:15"))));

    assert_eq!(edited.worked_minutes, 45);
    assert!(edited.manually_edited);
    assert_eq!(edited.arrival, Some(hm("23:30")));
    assert_eq!(edited.departure, Some(hm("00:15")));
}

#[test]
fn test_edit_equal_times_is_zero() {
    let base = worked_day("2024-02-10", "08:00", "17:00");
    let edited = apply_edit(&base, TimeEdit::Departure(Some(hm("08:00"))));
    assert_eq!(edited.worked_minutes, 0);
}

#[test]
fn test_edit_keeps_original_flags() {
    let mut base = worked_day("2024-02-10", "08:00", "17:00");
    base.missing_in = true;
    base.has_multiple_logs = true;

    let edited = apply_edit(&base, TimeEdit::Arrival(Some(hm("07:30"))));

    assert!(edited.missing_in);
    assert!(!edited.missing_out);
    assert!(edited.has_multiple_logs);
    assert!(edited.manually_edited);
    assert_eq!(edited.worked_minutes, 570);
    assert_eq!(
        edited.warning_labels(),
        ["Missing IN", "Multiple logs", "Manually edited"]
    );
}

#[test]
fn test_edit_does_not_touch_the_input() {
    let base = worked_day("2024-02-10", "08:00", "17:00");
    let _ = apply_edit(&base, TimeEdit::Arrival(Some(hm("09:00"))));

    assert_eq!(base.arrival, Some(hm("08:00")));
    assert!(!base.manually_edited);
    assert_eq!(base.worked_minutes, 0);
}

#[test]
fn test_clearing_a_time_zeroes_the_day() {
    let base = worked_day("2024-02-10", "08:00", "17:00");
    let edited = apply_edit(&base, TimeEdit::Arrival(None));

    assert_eq!(edited.arrival, None);
    assert_eq!(edited.departure, Some(hm("17:00")));
    assert_eq!(edited.worked_minutes, 0);
    assert!(edited.has_data());
}

#[test]
fn test_edit_empty_day_fills_it() {
    let base = DailyRecord::empty(day("2024-02-10"));
    let step = apply_edit(&base, TimeEdit::Arrival(Some(hm("22:00"))));
    assert_eq!(step.worked_minutes, 0);

    let done = apply_edit(&step, TimeEdit::Departure(Some(hm("06:00"))));
    assert_eq!(done.worked_minutes, 480);
    assert!(done.manually_edited);
}

#[test]
fn test_monthly_edit_refreshes_total() {
    let mut records = feb_records();
    let e1 = &mut records[0];
    assert_eq!(e1.total_minutes, 1140);

    let d = e1
        .apply_edit(day("2024-02-06"), TimeEdit::Arrival(Some(hm("09:00"))))
        .expect("edit")
        .clone();

    assert_eq!(d.worked_minutes, 525);
    assert!(d.manually_edited);
    assert!(d.missing_in);
    assert_eq!(e1.total_minutes, 555 + 525);

    let sum: i64 = e1.daily_records.iter().map(|d| d.worked_minutes).sum();
    assert_eq!(e1.total_minutes, sum);
}

#[test]
fn test_monthly_edit_on_empty_day_adds_it_to_the_export_set() {
    let mut records = feb_records();
    let e2 = &mut records[1];
    assert_eq!(e2.days_with_data().count(), 1);

    e2.apply_edit(day("2024-02-20"), TimeEdit::Arrival(Some(hm("08:00"))))
        .expect("edit arrival");
    e2.apply_edit(day("2024-02-20"), TimeEdit::Departure(Some(hm("12:00"))))
        .expect("edit departure");

    assert_eq!(e2.days_with_data().count(), 2);
    assert_eq!(e2.total_minutes, 523 + 240);
}

#[test]
fn test_monthly_edit_rejects_date_outside_month() {
    let mut records = feb_records();
    let err = records[0]
        .apply_edit(day("2024-03-01"), TimeEdit::Arrival(Some(hm("08:00"))))
        .unwrap_err();

    assert!(matches!(err, AppError::DateOutsideMonth { .. }));
    assert_eq!(records[0].total_minutes, 1140);
}
