//! Monthly summary models.
//!
//! A summary buckets a month's records into five fixed categories. The
//! `Leave` bucket absorbs every record that carries a leave type, using the
//! absolute value of its hours; the other four follow the record's day
//! type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours and record count for one summary bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketTotals {
    /// Total hours in this bucket (always a magnitude for `Leave`).
    pub hours: Decimal,
    /// Number of records in this bucket.
    pub count: u32,
}

/// The five fixed summary buckets.
///
/// Fixed fields rather than a map, so a summary always carries all five
/// keys even when a bucket is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryBuckets {
    /// Ordinary workday overtime.
    pub workday: BucketTotals,
    /// Rest-day overtime.
    pub rest_day: BucketTotals,
    /// Statutory-holiday overtime.
    pub holiday: BucketTotals,
    /// Compensatory-workday overtime.
    pub compensatory_workday: BucketTotals,
    /// Leave records of any kind (absolute hours).
    pub leave: BucketTotals,
}

/// Aggregated totals for one month of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// The `YYYY-MM` month this summary covers.
    pub month: String,
    /// Sum of hours across all five buckets.
    pub total_hours: Decimal,
    /// Per-bucket totals.
    pub buckets: SummaryBuckets,
    /// True when the month had no records at all.
    pub empty: bool,
}

impl MonthlySummary {
    /// The explicit empty-month marker: all buckets zero, `empty` set.
    pub fn empty_month(month: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            total_hours: Decimal::ZERO,
            buckets: SummaryBuckets::default(),
            empty: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_month_marker() {
        let summary = MonthlySummary::empty_month("2026-02");
        assert!(summary.empty);
        assert_eq!(summary.total_hours, Decimal::ZERO);
        assert_eq!(summary.buckets.workday.count, 0);
        assert_eq!(summary.buckets.leave.hours, Decimal::ZERO);
    }

    #[test]
    fn test_serialization_carries_all_buckets() {
        let summary = MonthlySummary::empty_month("2026-02");
        let json = serde_json::to_string(&summary).unwrap();
        for key in [
            "workday",
            "rest_day",
            "holiday",
            "compensatory_workday",
            "leave",
        ] {
            assert!(json.contains(key), "missing bucket key {}", key);
        }
    }
}
