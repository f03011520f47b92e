//! Overtime pay calculation.
//!
//! Pay is `hourly_wage x hours x rate`, where the rate comes from the
//! configured table indexed by day type. The compensatory-workday rate is
//! a fixed 1.5 and ignores configuration entirely. Amounts are rounded to
//! 2 decimal places and are always non-negative magnitudes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::OvertimePayConfig;
use crate::models::{DayType, OvertimeRecord};

/// The fixed rate multiplier for compensatory workdays.
pub fn compensatory_rate() -> Decimal {
    Decimal::new(15, 1)
}

/// Looks up the rate multiplier for a day type.
///
/// `Unknown` maps to 0: an unclassifiable day is non-compensable.
pub fn rate_for(day_type: DayType, pay: &OvertimePayConfig) -> Decimal {
    match day_type {
        DayType::Workday => pay.weekday_rate,
        DayType::RestDay => pay.weekend_rate,
        DayType::Holiday => pay.holiday_rate,
        DayType::CompensatoryWorkday => compensatory_rate(),
        DayType::Unknown => Decimal::ZERO,
    }
}

/// Calculates the pay amount for a number of overtime hours.
///
/// Returns 0 when the feature is disabled or `hours <= 0`. Callers that
/// pay out deducted leave pass the magnitude of the (negative) leave
/// hours; this function never sees a negative value it should pay for.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::calculate;
/// use overtime_engine::config::OvertimePayConfig;
/// use overtime_engine::models::DayType;
/// use rust_decimal::Decimal;
///
/// let pay = OvertimePayConfig {
///     enabled: true,
///     ..OvertimePayConfig::default()
/// };
///
/// // 8 hours on a compensatory workday: 50 x 8 x 1.5 = 600.00
/// let amount = calculate(Decimal::new(8, 0), DayType::CompensatoryWorkday, &pay);
/// assert_eq!(amount, Decimal::new(60000, 2));
/// ```
pub fn calculate(hours: Decimal, day_type: DayType, pay: &OvertimePayConfig) -> Decimal {
    if !pay.enabled || hours <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let rate = rate_for(day_type, pay);
    let mut amount = (pay.hourly_wage * hours.abs() * rate).round_dp(2);
    // Canonical 2-decimal scale, so 600 serializes as "600.00".
    amount.rescale(2);
    amount
}

/// One line of a batch calculation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayDetail {
    /// The record's date.
    pub date: NaiveDate,
    /// The record's day type.
    pub day_type: DayType,
    /// The hours the amount was computed from (a magnitude).
    pub hours: Decimal,
    /// The computed amount.
    pub amount: Decimal,
}

/// Calculates total pay across a batch of records.
///
/// Records whose leave type is set but not in `deduct_types` were recorded
/// for bookkeeping only and are skipped. Deducted-leave records contribute
/// the magnitude of their (negative) hours; anything that still computes
/// to 0 produces no detail line.
pub fn calculate_batch(
    records: &[OvertimeRecord],
    pay: &OvertimePayConfig,
) -> (Decimal, Vec<PayDetail>) {
    if !pay.enabled {
        return (Decimal::ZERO, Vec::new());
    }

    let mut total = Decimal::ZERO;
    let mut details = Vec::new();

    for record in records {
        if let Some(leave_type) = &record.leave_type {
            if !pay.deducts(leave_type) {
                continue;
            }
        }

        let hours = if record.is_leave() {
            record.work_hours.abs()
        } else {
            record.work_hours
        };

        let amount = calculate(hours, record.day_type, pay);
        if amount > Decimal::ZERO {
            total += amount;
            details.push(PayDetail {
                date: record.date,
                day_type: record.day_type,
                hours,
                amount,
            });
        }
    }

    (total, details)
}
