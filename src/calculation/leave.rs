//! Leave request processing.
//!
//! Applies the configured deduction policy to a leave request and returns
//! the adjusted day type and hours that go into the persisted record.

use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::DayType;

/// The leave category that requires an explicit duration.
pub const PERSONAL_LEAVE: &str = "事假";

/// Half-day deduction in hours.
pub fn half_day() -> Decimal {
    Decimal::new(-4, 0)
}

/// Full-day deduction in hours.
pub fn full_day() -> Decimal {
    Decimal::new(-8, 0)
}

/// A leave request as it arrives from a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveRequest {
    /// The requested leave type; `None` or empty is a validation error.
    pub leave_type: Option<String>,
    /// The requested duration in hours (negative), when given.
    pub leave_hours: Option<Decimal>,
    /// The day type the user selected for the date.
    pub day_type: DayType,
}

/// The adjusted fields a validated leave request produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveAdjustment {
    /// The day type to persist.
    pub day_type: DayType,
    /// The signed work hours to persist; negative marks a deduction, 0
    /// records the leave without affecting compensation.
    pub work_hours: Decimal,
    /// The validated leave type.
    pub leave_type: String,
    /// The leave duration to persist.
    pub leave_hours: Decimal,
}

/// Validates a leave request and applies the deduction policy.
///
/// Rules:
/// - the leave type must be present and configured, else
///   `MissingRequiredField` / `InvalidLeaveType`;
/// - personal leave must carry a duration of exactly -4 or -8, else
///   `MissingLeaveDuration`;
/// - a leave type in `deduct_types` turns the day into a rest day and
///   consumes hours (the chosen duration for personal leave, a fixed half
///   day for any other deducted type);
/// - any other leave type keeps the user-selected day type and forces
///   `work_hours` to 0.
pub fn process_leave(
    request: &LeaveRequest,
    config: &EngineConfig,
) -> EngineResult<LeaveAdjustment> {
    let leave_type = match request.leave_type.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err(EngineError::MissingRequiredField {
                field: "leave_type".to_string(),
            });
        }
    };

    if !config.is_known_leave_type(leave_type) {
        return Err(EngineError::InvalidLeaveType {
            name: leave_type.to_string(),
        });
    }

    let should_deduct = config.overtime_pay.deducts(leave_type);

    if leave_type == PERSONAL_LEAVE {
        let duration = match request.leave_hours {
            Some(hours) if hours == half_day() || hours == full_day() => hours,
            _ => return Err(EngineError::MissingLeaveDuration),
        };

        if should_deduct {
            return Ok(LeaveAdjustment {
                day_type: DayType::RestDay,
                work_hours: duration,
                leave_type: leave_type.to_string(),
                leave_hours: duration,
            });
        }

        return Ok(LeaveAdjustment {
            day_type: request.day_type,
            work_hours: Decimal::ZERO,
            leave_type: leave_type.to_string(),
            leave_hours: duration,
        });
    }

    let leave_hours = request.leave_hours.unwrap_or(Decimal::ZERO);

    if should_deduct {
        Ok(LeaveAdjustment {
            day_type: DayType::RestDay,
            work_hours: half_day(),
            leave_type: leave_type.to_string(),
            leave_hours,
        })
    } else {
        Ok(LeaveAdjustment {
            day_type: request.day_type,
            work_hours: Decimal::ZERO,
            leave_type: leave_type.to_string(),
            leave_hours,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_request(
        leave_type: Option<&str>,
        leave_hours: Option<Decimal>,
        day_type: DayType,
    ) -> LeaveRequest {
        LeaveRequest {
            leave_type: leave_type.map(String::from),
            leave_hours,
            day_type,
        }
    }

    #[test]
    fn test_missing_leave_type() {
        let config = EngineConfig::default();
        let request = make_request(None, None, DayType::Workday);

        match process_leave(&request, &config) {
            Err(EngineError::MissingRequiredField { field }) => assert_eq!(field, "leave_type"),
            other => panic!("Expected MissingRequiredField, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_leave_type_is_missing() {
        let config = EngineConfig::default();
        let request = make_request(Some(""), None, DayType::Workday);
        assert!(matches!(
            process_leave(&request, &config),
            Err(EngineError::MissingRequiredField { .. })
        ));
    }

    #[test]
    fn test_unknown_leave_type() {
        let config = EngineConfig::default();
        let request = make_request(Some("调岗假"), None, DayType::Workday);

        match process_leave(&request, &config) {
            Err(EngineError::InvalidLeaveType { name }) => assert_eq!(name, "调岗假"),
            other => panic!("Expected InvalidLeaveType, got {:?}", other),
        }
    }

    #[test]
    fn test_personal_leave_requires_duration() {
        let config = EngineConfig::default();
        let request = make_request(Some("事假"), None, DayType::Workday);

        assert!(matches!(
            process_leave(&request, &config),
            Err(EngineError::MissingLeaveDuration)
        ));
    }

    #[test]
    fn test_personal_leave_rejects_odd_duration() {
        let config = EngineConfig::default();
        for bad in ["-2", "-6", "4", "8", "0"] {
            let request = make_request(
                Some("事假"),
                Some(bad.parse().unwrap()),
                DayType::Workday,
            );
            assert!(
                matches!(
                    process_leave(&request, &config),
                    Err(EngineError::MissingLeaveDuration)
                ),
                "duration {} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_personal_leave_full_day_deducts() {
        let config = EngineConfig::default();
        let request = make_request(Some("事假"), Some(full_day()), DayType::Workday);

        let adjustment = process_leave(&request, &config).unwrap();
        assert_eq!(adjustment.day_type, DayType::RestDay);
        assert_eq!(adjustment.work_hours, full_day());
        assert_eq!(adjustment.leave_hours, full_day());
        assert_eq!(adjustment.leave_type, "事假");
    }

    #[test]
    fn test_personal_leave_half_day_deducts() {
        let config = EngineConfig::default();
        let request = make_request(Some("事假"), Some(half_day()), DayType::Holiday);

        let adjustment = process_leave(&request, &config).unwrap();
        assert_eq!(adjustment.day_type, DayType::RestDay);
        assert_eq!(adjustment.work_hours, half_day());
    }

    #[test]
    fn test_personal_leave_without_deduction_keeps_day_type() {
        let mut config = EngineConfig::default();
        config.overtime_pay.deduct_types.clear();

        let request = make_request(Some("事假"), Some(full_day()), DayType::Workday);
        let adjustment = process_leave(&request, &config).unwrap();

        assert_eq!(adjustment.day_type, DayType::Workday);
        assert_eq!(adjustment.work_hours, Decimal::ZERO);
        assert_eq!(adjustment.leave_hours, full_day());
    }

    #[test]
    fn test_other_deducted_type_defaults_to_half_day() {
        let mut config = EngineConfig::default();
        config.overtime_pay.deduct_types.push("病假".to_string());

        let request = make_request(Some("病假"), None, DayType::Workday);
        let adjustment = process_leave(&request, &config).unwrap();

        assert_eq!(adjustment.day_type, DayType::RestDay);
        assert_eq!(adjustment.work_hours, half_day());
        assert_eq!(adjustment.leave_hours, Decimal::ZERO);
    }

    #[test]
    fn test_non_deducted_type_records_without_hours() {
        let config = EngineConfig::default();
        let request = make_request(Some("年假"), None, DayType::Workday);

        let adjustment = process_leave(&request, &config).unwrap();
        assert_eq!(adjustment.day_type, DayType::Workday);
        assert_eq!(adjustment.work_hours, Decimal::ZERO);
        assert_eq!(adjustment.leave_type, "年假");
    }
}
