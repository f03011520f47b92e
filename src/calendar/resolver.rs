//! Day-type resolution over ordered calendar sources.
//!
//! The resolver answers "what kind of day is this date" by consulting, in
//! fixed priority order: the holiday table (built-in and/or imported), the
//! optional external calendar provider, and finally the weekday rule.
//! Classification is total: every input produces one of the five canonical
//! day types, and an unparseable date yields `Unknown` rather than an
//! error.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::EngineConfig;
use crate::models::{
    DayDetail, DayType, DETAILS_REST_DAY, DETAILS_STATUTORY_HOLIDAY, DETAILS_WORKDAY, KIND_IN_LIEU,
};

use super::{builtin_table, CalendarProvider, HolidayTable};

/// Reason string returned for an unparseable date.
pub const REASON_UNPARSEABLE: &str = "判断失败";

/// Classifies dates against the configured calendar sources.
///
/// # Example
///
/// ```
/// use overtime_engine::calendar::CalendarResolver;
/// use overtime_engine::models::DayType;
///
/// let resolver = CalendarResolver::with_builtin();
///
/// let (day_type, reason) = resolver.classify("2026-01-01");
/// assert_eq!(day_type, DayType::Holiday);
/// assert_eq!(reason, "元旦(三倍)");
///
/// // 2026-01-13 is an ordinary Tuesday.
/// assert_eq!(resolver.classify("2026-01-13").0, DayType::Workday);
/// ```
pub struct CalendarResolver {
    table: HolidayTable,
    provider: Option<Box<dyn CalendarProvider>>,
}

impl CalendarResolver {
    /// Creates a resolver over an explicit holiday table.
    pub fn new(table: HolidayTable) -> Self {
        Self {
            table,
            provider: None,
        }
    }

    /// Creates a resolver backed by the built-in holiday table.
    pub fn with_builtin() -> Self {
        Self::new(builtin_table())
    }

    /// Creates a resolver according to configuration: the built-in table
    /// when `use_builtin_holiday` is set, otherwise an empty table.
    pub fn from_config(config: &EngineConfig) -> Self {
        if config.use_builtin_holiday {
            Self::with_builtin()
        } else {
            Self::new(HolidayTable::new())
        }
    }

    /// Attaches an external calendar provider as the second-priority source.
    pub fn with_provider(mut self, provider: Box<dyn CalendarProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Overlays an imported table onto the resolver's table.
    pub fn import(&mut self, imported: HolidayTable) {
        self.table.merge(imported);
    }

    /// Returns the years covered by the holiday table.
    pub fn covered_years(&self) -> Vec<i32> {
        self.table.years()
    }

    /// Classifies a `YYYY-MM-DD` date string.
    ///
    /// Never fails: an unparseable date yields
    /// `(DayType::Unknown, "判断失败")`.
    pub fn classify(&self, date_str: &str) -> (DayType, String) {
        match NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d") {
            Ok(date) => self.classify_date(date),
            Err(_) => (DayType::Unknown, REASON_UNPARSEABLE.to_string()),
        }
    }

    /// Classifies an already-parsed date.
    pub fn classify_date(&self, date: NaiveDate) -> (DayType, String) {
        // Source 1: explicit table entry always wins.
        if let Some(fact) = self.table.get(date) {
            return (fact.day_type(), fact.reason());
        }

        // Source 2: external calendar capability, when configured.
        // In-lieu is checked first: those days also answer true to
        // is_workday.
        if let Some(provider) = &self.provider {
            if provider.is_in_lieu(date) {
                return (DayType::CompensatoryWorkday, "调休日".to_string());
            }
            if provider.is_holiday(date) {
                let reason = provider
                    .holiday_name(date)
                    .unwrap_or_else(|| "节假日".to_string());
                return (DayType::Holiday, reason);
            }
            if provider.is_workday(date) {
                return (DayType::Workday, "工作日".to_string());
            }
        }

        // Source 3: weekday rule.
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => (DayType::RestDay, "周末".to_string()),
            _ => (DayType::Workday, "工作日".to_string()),
        }
    }

    /// Produces the full detail view for a date: classification, table
    /// fields, and the informational workday ordinal.
    pub fn describe(&self, date_str: &str) -> DayDetail {
        let date = match NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                return DayDetail {
                    day_type: DayType::Unknown,
                    reason: REASON_UNPARSEABLE.to_string(),
                    kind: 0,
                    details_type: DETAILS_WORKDAY,
                    description: DayType::Unknown.label().to_string(),
                    index_workday_of_month: 0,
                    lunar_date: None,
                    zodiac: None,
                };
            }
        };

        let index_workday_of_month = self.workday_ordinal(date);

        if let Some(fact) = self.table.get(date) {
            return DayDetail {
                day_type: fact.day_type(),
                reason: fact.reason(),
                kind: fact.kind,
                details_type: fact.details_type,
                description: fact.description.clone(),
                index_workday_of_month,
                lunar_date: fact.lunar_date.clone(),
                zodiac: fact.zodiac.clone(),
            };
        }

        let (day_type, reason) = self.classify_date(date);
        let (kind, details_type) = match day_type {
            DayType::Workday => (0, DETAILS_WORKDAY),
            DayType::RestDay => (1, DETAILS_REST_DAY),
            DayType::Holiday => (2, DETAILS_STATUTORY_HOLIDAY),
            DayType::CompensatoryWorkday => (KIND_IN_LIEU, DETAILS_WORKDAY),
            DayType::Unknown => (0, DETAILS_WORKDAY),
        };

        DayDetail {
            day_type,
            reason: reason.clone(),
            kind,
            details_type,
            description: reason,
            index_workday_of_month,
            lunar_date: None,
            zodiac: None,
        }
    }

    /// Counts the workdays in the date's month up to and including the
    /// date itself. 1-indexed ordinal when the date is a workday, the
    /// running count otherwise.
    fn workday_ordinal(&self, date: NaiveDate) -> u32 {
        (1..=date.day())
            .filter_map(|day| NaiveDate::from_ymd_opt(date.year(), date.month(), day))
            .filter(|d| self.classify_date(*d).0 == DayType::Workday)
            .count() as u32
    }
}
