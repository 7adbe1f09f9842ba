//! Calendar placement of the heatmap window: which date each cell stands for.

use api::CommitWeek;
use time::{macros::format_description, Date, Duration, Month, OffsetDateTime};

use super::series::DAYS_IN_SERIES;

/// Last day of a synthetic window (UTC).
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Saturday closing the most recent reported week. Each week starts on a
/// Sunday and its `days` run Sunday to Saturday.
pub fn window_end(weeks: &[CommitWeek]) -> Option<Date> {
    let start = OffsetDateTime::from_unix_timestamp(weeks.last()?.week).ok()?;
    Some(start.date() + Duration::days(6))
}

pub fn first_day(last: Date) -> Date {
    last - Duration::days(DAYS_IN_SERIES as i64 - 1)
}

/// Date shown by the cell at `index` (0 = oldest).
pub fn day_at(last: Date, index: usize) -> Date {
    first_day(last) + Duration::days(index as i64)
}

/// Months touched by the window, oldest first, each listed once.
pub fn months_covered(last: Date) -> Vec<Month> {
    let mut months: Vec<Month> = Vec::with_capacity(13);
    for index in 0..DAYS_IN_SERIES {
        let month = day_at(last, index).month();
        if months.last() != Some(&month) {
            months.push(month);
        }
    }
    months
}

pub fn format_day(date: Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| "—".to_string())
}
