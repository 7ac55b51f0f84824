//! Calendar stepping for future sample dates.
//!
//! Month arithmetic here *rolls over* instead of clamping: adding months to
//! the 31st lands in the following month when the target month is shorter
//! (Nov 30 + 3 months = Mar 2). Quarterly sample spacing is therefore uneven
//! in days, and the sample dates can drift off the anchor's day-of-month.

use chrono::{Datelike, Days, NaiveDate};

/// `date` advanced by `months` calendar months, overflowing into the next
/// month when the day does not exist. `None` only outside chrono's range.
pub fn add_months_rolling(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    let month0 = date.month0().checked_add(months)?;
    let year = date.year() + i32::try_from(month0 / 12).ok()?;
    let first = NaiveDate::from_ymd_opt(year, month0 % 12 + 1, 1)?;
    first.checked_add_days(Days::new(u64::from(date.day() - 1)))
}

/// `date` advanced by `years`, with the same overflow rule (Feb 29 → Mar 1).
pub fn add_years_rolling(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    add_months_rolling(date, years.checked_mul(12)?)
}

/// Sample dates: step `step_months` at a time from `start` while the current
/// date is before `start + years`. The final step may land on or past the end.
pub fn sample_dates(start: NaiveDate, step_months: u32, years: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let Some(end) = add_years_rolling(start, years) else {
        return out;
    };
    if step_months == 0 {
        return out;
    }

    let mut current = start;
    while current < end {
        let Some(next) = add_months_rolling(current, step_months) else {
            break;
        };
        current = next;
        out.push(current);
    }
    out
}
