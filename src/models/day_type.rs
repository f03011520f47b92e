//! Day-type classification enum.
//!
//! This module defines the closed set of calendar-day classifications used
//! for compensation. Replacing the stringly-typed labels with an enum means
//! a typo can no longer silently select a 0 rate.

use serde::{Deserialize, Serialize};

/// Classification of a calendar date for compensation purposes.
///
/// Every classification result is exactly one of these five values;
/// [`DayType::Unknown`] appears only when the date itself could not be
/// parsed.
///
/// Serialized as snake_case tokens for the API. The [`std::fmt::Display`]
/// impl renders the operator-facing labels used in the record log and in
/// classification reasons.
///
/// # Example
///
/// ```
/// use overtime_engine::models::DayType;
///
/// assert_eq!(DayType::Holiday.to_string(), "节假日");
/// assert_eq!(DayType::from_label("调休日"), Some(DayType::CompensatoryWorkday));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Ordinary working day (Monday through Friday, unless overridden).
    Workday,
    /// Weekend or ordinary holiday, paid at the weekend rate.
    RestDay,
    /// Premium statutory holiday, paid at the holiday rate.
    Holiday,
    /// A weekend day designated as a working day in exchange for a weekday
    /// off; paid at a fixed 1.5x rate regardless of configuration.
    CompensatoryWorkday,
    /// The date could not be classified (unparseable input).
    Unknown,
}

impl DayType {
    /// Parses an operator-facing label back into a day type.
    ///
    /// Returns `None` for unrecognised labels; callers decide whether to
    /// skip the row or fall back to [`DayType::Unknown`].
    pub fn from_label(label: &str) -> Option<DayType> {
        match label {
            "工作日" => Some(DayType::Workday),
            "休息日" => Some(DayType::RestDay),
            "节假日" => Some(DayType::Holiday),
            "调休日" => Some(DayType::CompensatoryWorkday),
            "未知" => Some(DayType::Unknown),
            _ => None,
        }
    }

    /// Returns the operator-facing label for this day type.
    pub fn label(&self) -> &'static str {
        match self {
            DayType::Workday => "工作日",
            DayType::RestDay => "休息日",
            DayType::Holiday => "节假日",
            DayType::CompensatoryWorkday => "调休日",
            DayType::Unknown => "未知",
        }
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
