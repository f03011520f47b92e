//! Core data models for the overtime engine.
//!
//! This module contains all the domain models used throughout the engine.

mod day_type;
mod holiday;
mod record;
mod summary;

pub use day_type::DayType;
pub use holiday::{
    DayDetail, HolidayFact, DETAILS_ORDINARY_HOLIDAY, DETAILS_REST_DAY, DETAILS_STATUTORY_HOLIDAY,
    DETAILS_WORKDAY, KIND_IN_LIEU,
};
pub use record::OvertimeRecord;
pub use summary::{BucketTotals, MonthlySummary, SummaryBuckets};
