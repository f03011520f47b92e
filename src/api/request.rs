//! Request types for the overtime engine API.
//!
//! This module defines the JSON request and query structures consumed by
//! the HTTP handlers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::SubmissionInput;
use crate::models::DayType;
use crate::store::RecordFilter;

/// Request body for `POST /records`.
///
/// Mirrors the raw form contract: the same fields arrive whether the
/// submission came from the desktop form or the web form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRecordRequest {
    /// The calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// The submitting user.
    pub user: String,
    /// The user-chosen day type.
    #[serde(default)]
    pub day_type: Option<DayType>,
    /// Whether this is a leave submission.
    #[serde(default)]
    pub is_leave: bool,
    /// The leave type, for leave submissions.
    #[serde(default)]
    pub leave_type: Option<String>,
    /// Leave duration in hours (negative), when chosen.
    #[serde(default)]
    pub leave_hours: Option<Decimal>,
    /// Worked overtime hours, for non-leave submissions.
    #[serde(default)]
    pub work_hours: Option<Decimal>,
}

impl From<SubmitRecordRequest> for SubmissionInput {
    fn from(req: SubmitRecordRequest) -> Self {
        SubmissionInput {
            date: req.date,
            user: req.user,
            day_type: req.day_type,
            is_leave: req.is_leave,
            leave_type: req.leave_type,
            leave_hours: req.leave_hours,
            work_hours: req.work_hours,
        }
    }
}

/// Query parameters for `GET /records`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordsQuery {
    /// Restrict to a `YYYY-MM` month.
    #[serde(default)]
    pub month: Option<String>,
    /// Substring match on the user name.
    #[serde(default)]
    pub user: Option<String>,
    /// Earliest date, inclusive.
    #[serde(default)]
    pub from: Option<NaiveDate>,
    /// Latest date, inclusive.
    #[serde(default)]
    pub to: Option<NaiveDate>,
    /// Exact day-type match.
    #[serde(default)]
    pub day_type: Option<DayType>,
}

impl RecordsQuery {
    /// Converts the non-month criteria into a store filter.
    pub fn to_filter(&self) -> RecordFilter {
        RecordFilter {
            user: self.user.clone(),
            date_start: self.from,
            date_end: self.to,
            day_type: self.day_type,
        }
    }
}

/// Query parameters for `GET /summary`.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryQuery {
    /// The `YYYY-MM` month to summarize; defaults to the current month.
    #[serde(default)]
    pub month: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_request_minimal_json() {
        let json = r#"{"date": "2026-01-13", "user": "张三", "day_type": "workday"}"#;
        let req: SubmitRecordRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.date, "2026-01-13");
        assert!(!req.is_leave);
        assert_eq!(req.day_type, Some(DayType::Workday));
        assert_eq!(req.work_hours, None);
    }

    #[test]
    fn test_submit_request_leave_fields() {
        let json = r#"{
            "date": "2026-01-13",
            "user": "张三",
            "day_type": "workday",
            "is_leave": true,
            "leave_type": "事假",
            "leave_hours": "-8"
        }"#;
        let req: SubmitRecordRequest = serde_json::from_str(json).unwrap();

        assert!(req.is_leave);
        assert_eq!(req.leave_type.as_deref(), Some("事假"));
        assert_eq!(req.leave_hours, Some(Decimal::new(-8, 0)));

        let input: SubmissionInput = req.into();
        assert_eq!(input.leave_type.as_deref(), Some("事假"));
    }

    #[test]
    fn test_records_query_to_filter() {
        let query = RecordsQuery {
            month: None,
            user: Some("张".to_string()),
            from: NaiveDate::from_ymd_opt(2026, 1, 1),
            to: NaiveDate::from_ymd_opt(2026, 1, 31),
            day_type: Some(DayType::RestDay),
        };

        let filter = query.to_filter();
        assert_eq!(filter.user.as_deref(), Some("张"));
        assert_eq!(filter.day_type, Some(DayType::RestDay));
    }
}
