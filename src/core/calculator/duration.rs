use crate::utils::time::{MINUTES_PER_DAY, minute_of_day};
use chrono::NaiveTime;

/// Worked minutes between two same-day wall-clock times.
///
/// When the departure's hour/minute is strictly earlier than the arrival's
/// the shift is taken to cross midnight and the departure moves to the next
/// day. Equal times yield zero. Missing either side yields zero.
pub fn worked_minutes(arrival: Option<NaiveTime>, departure: Option<NaiveTime>) -> i64 {
    let (Some(arrival), Some(departure)) = (arrival, departure) else {
        return 0;
    };

    let start = minute_of_day(arrival);
    let mut end = minute_of_day(departure);

    if end < start {
        end += MINUTES_PER_DAY;
    }

    end - start
}

