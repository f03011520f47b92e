//! Overtime record model.
//!
//! An [`OvertimeRecord`] is the finished output of the submission pipeline.
//! The log is append-only: once written a record is never mutated in place,
//! and corrections are new records.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DayType;

/// A single persisted work/leave entry.
///
/// `day_type` is a snapshot taken at submission time and is never
/// re-derived later, even if the holiday table changes.
///
/// Sign convention: `work_hours` is signed and a negative value marks a
/// rest-day deduction; every derived quantity (pay, summary totals) is a
/// magnitude.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeRecord {
    /// The calendar date the record is for.
    pub date: NaiveDate,
    /// The submitting user.
    pub user: String,
    /// Day-type classification at submission time.
    pub day_type: DayType,
    /// Signed worked hours; negative encodes a leave deduction.
    pub work_hours: Decimal,
    /// The leave type, or `None` for a plain work record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<String>,
    /// Leave duration in hours (0 for non-leave records).
    pub leave_hours: Decimal,
    /// When the record was submitted.
    pub submitted_at: NaiveDateTime,
    /// Computed pay amount; always a non-negative magnitude.
    pub pay_amount: Decimal,
}

impl OvertimeRecord {
    /// Returns true when this record carries a leave type.
    pub fn is_leave(&self) -> bool {
        self.leave_type.is_some()
    }

    /// Returns the `YYYY-MM` key used for monthly grouping.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use overtime_engine::models::{DayType, OvertimeRecord};
    /// use rust_decimal::Decimal;
    ///
    /// let record = OvertimeRecord {
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
    ///     user: "张三".to_string(),
    ///     day_type: DayType::Workday,
    ///     work_hours: Decimal::new(8, 0),
    ///     leave_type: None,
    ///     leave_hours: Decimal::ZERO,
    ///     submitted_at: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap().and_hms_opt(18, 30, 0).unwrap(),
    ///     pay_amount: Decimal::ZERO,
    /// };
    /// assert_eq!(record.month_key(), "2026-01");
    /// ```
    pub fn month_key(&self) -> String {
        format!("{:04}-{:02}", self.date.year(), self.date.month())
    }
}
