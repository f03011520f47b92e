//! External calendar capability.
//!
//! An optional second-priority classification source, consulted only when
//! the holiday table has no entry for a date. Implementations wrap an
//! external calendar library or service; the engine only depends on this
//! trait.

use chrono::NaiveDate;

/// Calendar queries the engine can delegate to an external source.
///
/// All three predicates may be false for the same date, in which case the
/// resolver falls through to the weekday rule.
pub trait CalendarProvider: Send + Sync {
    /// Returns true when the date is a statutory holiday.
    fn is_holiday(&self, date: NaiveDate) -> bool;

    /// Returns true when the date is an ordinary working day.
    fn is_workday(&self, date: NaiveDate) -> bool;

    /// Returns true when the date is an in-lieu (compensatory) working day.
    fn is_in_lieu(&self, date: NaiveDate) -> bool;

    /// Returns the holiday name for the date, when the source knows one.
    fn holiday_name(&self, date: NaiveDate) -> Option<String> {
        let _ = date;
        None
    }
}
