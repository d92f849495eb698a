//! Calendar helpers: month segmentation of a day-by-day plan and the date
//! labels used in display output and playlist file names.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Display label substituted for Sunday's weekday abbreviation.
pub const LORDS_DAY_LABEL: &str = "L.D.";
/// File-name token substituted for Sunday.
pub const LORDS_DAY_TOKEN: &str = "LD";

/// Start of a calendar month within a sequence of dated rows.
///
/// The trailing sentinel has no label and sits at the total row count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBoundary {
    pub label: Option<String>,
    pub index: usize,
}

impl MonthBoundary {
    pub fn is_sentinel(&self) -> bool {
        self.label.is_none()
    }
}

/// A labeled, half-open range of row indices sharing one calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSegment {
    pub label: String,
    pub rows: Range<usize>,
}

impl MonthSegment {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// "January 2023".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Scans dates in order and records the index where each month begins, then
/// appends a sentinel at `dates.len()`.
pub fn month_boundaries<I>(dates: I) -> Vec<MonthBoundary>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut boundaries = Vec::new();
    let mut previous: Option<(i32, u32)> = None;
    let mut count = 0;
    for (index, date) in dates.into_iter().enumerate() {
        let key = (date.year(), date.month());
        if previous != Some(key) {
            boundaries.push(MonthBoundary {
                label: Some(month_label(date)),
                index,
            });
        }
        previous = Some(key);
        count = index + 1;
    }
    boundaries.push(MonthBoundary {
        label: None,
        index: count,
    });
    boundaries
}

/// Pairs consecutive boundaries into month segments.
pub fn month_segments(boundaries: &[MonthBoundary]) -> Vec<MonthSegment> {
    boundaries
        .windows(2)
        .filter_map(|pair| {
            pair[0].label.as_ref().map(|label| MonthSegment {
                label: label.clone(),
                rows: pair[0].index..pair[1].index,
            })
        })
        .collect()
}

/// Weekday abbreviation with Sunday replaced by [`LORDS_DAY_LABEL`], followed
/// by month/day without leading zeros, e.g. "L.D. 1/1" or "Mon 10/2".
pub fn format_date(date: NaiveDate) -> String {
    format!("{} {}/{}", weekday_label(date), date.month(), date.day())
}

pub fn weekday_label(date: NaiveDate) -> String {
    match date.weekday() {
        Weekday::Sun => LORDS_DAY_LABEL.to_string(),
        _ => date.format("%a").to_string(),
    }
}

/// `YYYYMMDD-ddd` lowercased, Sunday rendered as [`LORDS_DAY_TOKEN`].
pub fn playlist_token(date: NaiveDate) -> String {
    let day = match date.weekday() {
        Weekday::Sun => LORDS_DAY_TOKEN.to_string(),
        _ => date.format("%a").to_string().to_lowercase(),
    };
    format!("{}-{}", date.format("%Y%m%d"), day)
}

/// Long form used in playlist headers, e.g. "Sunday, 1 January 2023".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %-d %B %Y").to_string()
}

/// Every date from `start` through `end`, inclusive. Empty when `end < start`.
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |date| *date <= end)
}
