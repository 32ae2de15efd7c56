//! Calendar arithmetic shared by the report builders and the recurrence
//! projector.

use chrono::{Datelike, Duration, NaiveDate};

/// Sortable `YYYY-MM` bucket key for a date.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Exact (year, month) equality.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// The (year, month) of the calendar month before the one containing `date`.
pub fn previous_month(date: NaiveDate) -> (i32, u32) {
    if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    // day 1 exists in every month
    date.with_day(1).unwrap()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap();
    (first_next - Duration::days(1)).day()
}

/// The date `year-month-day` with `day` clamped to the month's last day.
pub fn clamped_date(year: i32, month: u32, day: u32) -> NaiveDate {
    let day = day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Snaps `date` backward to the Sunday starting its week.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as i64;
    date - Duration::days(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_key_pads_components() {
        assert_eq!(month_key(date(2024, 3, 7)), "2024-03");
        assert_eq!(month_key(date(999, 12, 31)), "0999-12");
    }

    #[test]
    fn previous_month_wraps_january() {
        assert_eq!(previous_month(date(2024, 1, 15)), (2023, 12));
        assert_eq!(previous_month(date(2024, 7, 1)), (2024, 6));
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn clamped_date_shortens_long_anchors() {
        assert_eq!(clamped_date(2024, 2, 31), date(2024, 2, 29));
        assert_eq!(clamped_date(2024, 4, 31), date(2024, 4, 30));
        assert_eq!(clamped_date(2024, 1, 31), date(2024, 1, 31));
    }

    #[test]
    fn week_start_snaps_to_sunday() {
        // 2024-06-12 is a Wednesday; the week began Sunday 2024-06-09.
        assert_eq!(week_start(date(2024, 6, 12)), date(2024, 6, 9));
        // A Sunday snaps to itself.
        assert_eq!(week_start(date(2024, 6, 9)), date(2024, 6, 9));
    }
}
