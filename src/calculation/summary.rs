//! Monthly summary aggregation.
//!
//! Buckets a month's persisted records by day type and leave status. Leave
//! records land in the `Leave` bucket with absolute hours regardless of
//! their day type; everything else follows the day-type snapshot stored on
//! the record.

use rust_decimal::Decimal;

use crate::models::{DayType, MonthlySummary, OvertimeRecord};

/// Aggregates a month's records into the five fixed buckets.
///
/// `records` are assumed pre-filtered to one month (the store's `monthly`
/// query does this); `month` is echoed into the result. An empty slice
/// yields the explicit empty-month marker, never an error.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::summarize;
///
/// let summary = summarize("2026-02", &[]);
/// assert!(summary.empty);
/// ```
pub fn summarize(month: &str, records: &[OvertimeRecord]) -> MonthlySummary {
    if records.is_empty() {
        return MonthlySummary::empty_month(month);
    }

    let mut summary = MonthlySummary {
        month: month.to_string(),
        total_hours: Decimal::ZERO,
        buckets: Default::default(),
        empty: false,
    };

    for record in records {
        let bucket = if record.is_leave() {
            Some(&mut summary.buckets.leave)
        } else {
            match record.day_type {
                DayType::Workday => Some(&mut summary.buckets.workday),
                DayType::RestDay => Some(&mut summary.buckets.rest_day),
                DayType::Holiday => Some(&mut summary.buckets.holiday),
                DayType::CompensatoryWorkday => Some(&mut summary.buckets.compensatory_workday),
                DayType::Unknown => None,
            }
        };

        let Some(bucket) = bucket else {
            continue;
        };

        let hours = if record.is_leave() {
            record.work_hours.abs()
        } else {
            record.work_hours
        };

        bucket.hours += hours;
        bucket.count += 1;
    }

    summary.total_hours = summary.buckets.workday.hours
        + summary.buckets.rest_day.hours
        + summary.buckets.holiday.hours
        + summary.buckets.compensatory_workday.hours
        + summary.buckets.leave.hours;

    summary
}
