//! Holiday fact and day-detail models.
//!
//! A [`HolidayFact`] is one entry of the holiday table, keyed elsewhere by
//! `(year, "MM-DD")`. The field names mirror the imported API payload
//! (`type` / `detailsType` / `typeDes`), so the same struct deserializes
//! both accepted import shapes.

use serde::{Deserialize, Serialize};

use super::DayType;

/// Origin code marking an in-lieu (compensatory working) day.
pub const KIND_IN_LIEU: u8 = 3;

/// `details_type` value for an ordinary working day.
pub const DETAILS_WORKDAY: u8 = 0;
/// `details_type` value for a rest day.
pub const DETAILS_REST_DAY: u8 = 1;
/// `details_type` value for an ordinary holiday, paid as a rest day.
pub const DETAILS_ORDINARY_HOLIDAY: u8 = 2;
/// `details_type` value for a premium statutory holiday.
pub const DETAILS_STATUTORY_HOLIDAY: u8 = 3;

/// One holiday-table entry for a single calendar date.
///
/// Immutable once loaded for a session. The enrichment fields are
/// decorative and not required for correctness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayFact {
    /// Numeric origin code 0-3; [`KIND_IN_LIEU`] marks a compensatory
    /// working day.
    #[serde(rename = "type")]
    pub kind: u8,
    /// Refinement of the classification: 0 workday, 1 rest day, 2 ordinary
    /// holiday (paid as rest day), 3 premium statutory holiday.
    #[serde(rename = "detailsType")]
    pub details_type: u8,
    /// Human-readable description, e.g. `元旦` or `春节调休`.
    #[serde(rename = "typeDes")]
    pub description: String,
    /// Lunar calendar date, when the source provides one.
    #[serde(rename = "lunarDate", default, skip_serializing_if = "Option::is_none")]
    pub lunar_date: Option<String>,
    /// Chinese zodiac for the year, when the source provides one.
    #[serde(rename = "chineseZodiac", default, skip_serializing_if = "Option::is_none")]
    pub zodiac: Option<String>,
}

impl HolidayFact {
    /// Creates a fact with no enrichment fields.
    pub fn new(kind: u8, details_type: u8, description: impl Into<String>) -> Self {
        Self {
            kind,
            details_type,
            description: description.into(),
            lunar_date: None,
            zodiac: None,
        }
    }

    /// Maps this fact to its [`DayType`].
    ///
    /// An in-lieu origin wins over the details refinement: those days are
    /// worked and paid at the fixed compensatory rate.
    pub fn day_type(&self) -> DayType {
        if self.kind == KIND_IN_LIEU {
            return DayType::CompensatoryWorkday;
        }
        match self.details_type {
            DETAILS_WORKDAY => DayType::Workday,
            DETAILS_REST_DAY | DETAILS_ORDINARY_HOLIDAY => DayType::RestDay,
            _ => DayType::Holiday,
        }
    }

    /// Builds the classification reason shown to the operator.
    pub fn reason(&self) -> String {
        if self.kind == KIND_IN_LIEU {
            return self.description.clone();
        }
        match self.details_type {
            DETAILS_STATUTORY_HOLIDAY => format!("{}(三倍)", self.description),
            DETAILS_ORDINARY_HOLIDAY => format!("{}(普通节假日)", self.description),
            _ => self.description.clone(),
        }
    }
}

/// The richer output of `describe()`: classification plus table details and
/// the informational workday ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayDetail {
    /// The resolved day type.
    pub day_type: DayType,
    /// Human-readable reason for the classification.
    pub reason: String,
    /// Origin code of the underlying fact (synthesized for non-table hits).
    pub kind: u8,
    /// Details refinement of the underlying fact.
    pub details_type: u8,
    /// Description of the underlying fact.
    pub description: String,
    /// 1-indexed ordinal of this date among the month's workdays; 0 when
    /// the month has no workday up to this date. Informational only, never
    /// used in compensation math.
    pub index_workday_of_month: u32,
    /// Lunar calendar date, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunar_date: Option<String>,
    /// Chinese zodiac, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zodiac: Option<String>,
}
