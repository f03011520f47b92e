//! Submission pipeline.
//!
//! Turns a raw form submission into a finished [`OvertimeRecord`]:
//! validates fields, auto-detects the day type, routes leave requests
//! through the deduction policy, and computes the pay amount. Persistence
//! and webhook delivery stay outside; the caller appends the record and
//! reports failures upward.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::calendar::CalendarResolver;
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{DayType, OvertimeRecord};

use super::compensation::calculate;
use super::leave::{process_leave, LeaveRequest};

/// Raw submission fields as supplied by a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionInput {
    /// The calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// The submitting user.
    pub user: String,
    /// The user-chosen day type.
    pub day_type: Option<DayType>,
    /// Whether this submission records leave instead of overtime.
    pub is_leave: bool,
    /// The leave type, when `is_leave` is set.
    pub leave_type: Option<String>,
    /// The leave duration in hours (negative), when given.
    pub leave_hours: Option<Decimal>,
    /// Worked overtime hours, for non-leave submissions.
    pub work_hours: Option<Decimal>,
}

/// A soft warning: the auto-detected day type disagrees with the choice.
///
/// Requires confirmation in the caller's UI; it never blocks the
/// submission here. Leave submissions suppress it because leave overrides
/// detection intentionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTypeMismatch {
    /// What the calendar sources detected.
    pub detected: DayType,
    /// The detection reason.
    pub reason: String,
}

/// A finished submission: the record to persist plus any soft warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// The record ready for the persistence collaborator.
    pub record: OvertimeRecord,
    /// Present when detection disagreed with the user's choice.
    pub mismatch: Option<DayTypeMismatch>,
}

/// Builds a finished record from raw submission fields.
///
/// The day type persisted is the user's choice (adjusted by the leave
/// policy), snapshotted at submission time — it is never re-derived later.
/// Pay for a deducted leave uses the magnitude of the negative hours at
/// the rest-day rate; a non-deducted leave always pays 0.
pub fn build_submission(
    input: &SubmissionInput,
    resolver: &CalendarResolver,
    config: &EngineConfig,
    submitted_at: NaiveDateTime,
) -> EngineResult<Submission> {
    if input.user.trim().is_empty() {
        return Err(EngineError::MissingRequiredField {
            field: "user".to_string(),
        });
    }
    if input.date.trim().is_empty() {
        return Err(EngineError::MissingRequiredField {
            field: "date".to_string(),
        });
    }
    let chosen = input.day_type.ok_or_else(|| EngineError::MissingRequiredField {
        field: "day_type".to_string(),
    })?;

    let date = NaiveDate::parse_from_str(input.date.trim(), "%Y-%m-%d").map_err(|_| {
        EngineError::InvalidDateFormat {
            value: input.date.clone(),
        }
    })?;

    let (detected, reason) = resolver.classify_date(date);
    let mismatch = if !input.is_leave && detected != chosen && detected != DayType::Unknown {
        Some(DayTypeMismatch { detected, reason })
    } else {
        None
    };

    let pay = &config.overtime_pay;

    let record = if input.is_leave {
        let adjustment = process_leave(
            &LeaveRequest {
                leave_type: input.leave_type.clone(),
                leave_hours: input.leave_hours,
                day_type: chosen,
            },
            config,
        )?;

        // Deducted leave consumes rest-day hours and is paid as such;
        // anything else is bookkeeping only.
        let pay_amount = if adjustment.work_hours < Decimal::ZERO {
            calculate(adjustment.work_hours.abs(), adjustment.day_type, pay)
        } else {
            Decimal::ZERO
        };

        OvertimeRecord {
            date,
            user: input.user.trim().to_string(),
            day_type: adjustment.day_type,
            work_hours: adjustment.work_hours,
            leave_type: Some(adjustment.leave_type),
            leave_hours: adjustment.leave_hours,
            submitted_at,
            pay_amount,
        }
    } else {
        let work_hours = input.work_hours.unwrap_or(Decimal::ZERO);
        let pay_amount = calculate(work_hours, chosen, pay);

        OvertimeRecord {
            date,
            user: input.user.trim().to_string(),
            day_type: chosen,
            work_hours,
            leave_type: None,
            leave_hours: Decimal::ZERO,
            submitted_at,
            pay_amount,
        }
    };

    Ok(Submission { record, mismatch })
}
