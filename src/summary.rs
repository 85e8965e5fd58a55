//! Pure aggregation of a trip's items into per-day summaries.

use crate::{item::DayItem, trip::TripDays};

/// One day of a trip: its items, in the order they were fetched, and their
/// combined expense total.
#[derive(Clone, Debug, PartialEq)]
pub struct DaySummary {
    /// The day number, from 1 to the trip's day count.
    pub day_number: i64,
    /// The day's items; empty for days with nothing planned yet.
    pub items: Vec<DayItem>,
    /// The sum of the day's expense amounts.
    pub total: f64,
}

/// Group `items` into one [DaySummary] per day from 1 to `days` inclusive.
///
/// Days with no items get an empty summary with a zero total. The relative
/// order of a day's items is preserved. Items whose day number falls outside
/// `1..=days` (possible when a trip was edited down to fewer days) are left
/// out of the day views; the trip-wide total is aggregated separately in SQL
/// and still includes them.
pub fn build_day_summaries(days: TripDays, items: Vec<DayItem>) -> Vec<DaySummary> {
    let mut summaries: Vec<DaySummary> = (1..=days.as_i64())
        .map(|day_number| DaySummary {
            day_number,
            items: Vec::new(),
            total: 0.0,
        })
        .collect();

    for item in items {
        let day_number = item.day_number.as_i64();

        if day_number < 1 || day_number > days.as_i64() {
            continue;
        }

        let summary = &mut summaries[(day_number - 1) as usize];
        summary.total += item.expense_amount;
        summary.items.push(item);
    }

    summaries
}
