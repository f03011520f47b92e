//! Record persistence for the overtime engine.
//!
//! The engine hands finished records to a [`RecordStore`] and reads them
//! back for batch calculation and monthly summaries. The store is
//! append-only; corrections are new records.

mod csv_store;

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{DayType, OvertimeRecord};

pub use csv_store::CsvStore;

/// Filter criteria for record queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Substring match on the user name.
    pub user: Option<String>,
    /// Earliest date, inclusive.
    pub date_start: Option<NaiveDate>,
    /// Latest date, inclusive.
    pub date_end: Option<NaiveDate>,
    /// Exact day-type match.
    pub day_type: Option<DayType>,
}

impl RecordFilter {
    /// Returns true when the record passes every set criterion.
    pub fn matches(&self, record: &OvertimeRecord) -> bool {
        if let Some(user) = &self.user {
            if !record.user.contains(user.as_str()) {
                return false;
            }
        }
        if let Some(start) = self.date_start {
            if record.date < start {
                return false;
            }
        }
        if let Some(end) = self.date_end {
            if record.date > end {
                return false;
            }
        }
        if let Some(day_type) = self.day_type {
            if record.day_type != day_type {
                return false;
            }
        }
        true
    }
}

/// Persistence collaborator contract.
///
/// Failures are reported as errors to the caller layer; the engine never
/// retries internally.
pub trait RecordStore: Send + Sync {
    /// Appends one record to the log.
    fn append(&self, record: &OvertimeRecord) -> EngineResult<()>;

    /// Returns every stored record in insertion order.
    fn all(&self) -> EngineResult<Vec<OvertimeRecord>>;

    /// Returns the records for a `YYYY-MM` month.
    fn monthly(&self, month: &str) -> EngineResult<Vec<OvertimeRecord>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|r| r.month_key() == month)
            .collect())
    }

    /// Returns the records passing a filter.
    fn filtered(&self, filter: &RecordFilter) -> EngineResult<Vec<OvertimeRecord>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect())
    }
}
