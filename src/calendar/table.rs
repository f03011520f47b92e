//! Holiday table keyed by year and month-day.
//!
//! The table is the highest-priority classification source. It can be
//! populated from the built-in data set, from an imported JSON payload, or
//! both (imported entries override built-in ones on merge).
//!
//! Two import shapes are accepted and flattened into the same per-day map:
//!
//! - flat: `{"2026": {"01-01": {"type": 2, "detailsType": 3, "typeDes": "元旦"}}}`
//! - API-style: `{"data": [{"year": 2026, "days": [{"date": "2026-01-01", ...}]}]}`

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::HolidayFact;

/// Per-day holiday facts, keyed `(year, "MM-DD")`.
///
/// Immutable once handed to a resolver; building and merging happen before
/// the session starts serving classifications.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HolidayTable {
    entries: HashMap<i32, HashMap<String, HolidayFact>>,
}

/// API-style import payload: a list of month blocks.
#[derive(Debug, Deserialize)]
struct ApiPayload {
    data: Vec<ApiBlock>,
}

#[derive(Debug, Deserialize)]
struct ApiBlock {
    #[allow(dead_code)]
    year: i32,
    days: Vec<ApiDay>,
}

#[derive(Debug, Deserialize)]
struct ApiDay {
    date: String,
    #[serde(flatten)]
    fact: HolidayFact,
}

impl HolidayTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a fact for `(year, "MM-DD")`, replacing any existing entry.
    pub fn insert(&mut self, year: i32, month_day: &str, fact: HolidayFact) {
        self.entries
            .entry(year)
            .or_default()
            .insert(month_day.to_string(), fact);
    }

    /// Looks up the fact for a date, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&HolidayFact> {
        let month_day = format!("{:02}-{:02}", date.month(), date.day());
        self.entries.get(&date.year())?.get(&month_day)
    }

    /// Returns the covered years, sorted ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.entries.keys().copied().collect();
        years.sort_unstable();
        years
    }

    /// Returns true when the table has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overlays `other` onto this table; `other`'s entries win on conflict.
    pub fn merge(&mut self, other: HolidayTable) {
        for (year, days) in other.entries {
            let target = self.entries.entry(year).or_default();
            for (month_day, fact) in days {
                target.insert(month_day, fact);
            }
        }
    }

    /// Parses an imported JSON payload in either accepted shape.
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| EngineError::HolidayDataError {
                message: format!("invalid JSON: {}", e),
            })?;

        let mut table = Self::new();

        if value.get("data").is_some() {
            let payload: ApiPayload =
                serde_json::from_value(value).map_err(|e| EngineError::HolidayDataError {
                    message: format!("unrecognised API payload: {}", e),
                })?;

            for block in payload.data {
                for day in block.days {
                    let date = NaiveDate::parse_from_str(&day.date, "%Y-%m-%d").map_err(|_| {
                        EngineError::HolidayDataError {
                            message: format!("invalid date in payload: {}", day.date),
                        }
                    })?;
                    validate_fact(&day.fact, &day.date)?;
                    let month_day = format!("{:02}-{:02}", date.month(), date.day());
                    table.insert(date.year(), &month_day, day.fact);
                }
            }
        } else {
            let flat: HashMap<String, HashMap<String, HolidayFact>> =
                serde_json::from_value(value).map_err(|e| EngineError::HolidayDataError {
                    message: format!("unrecognised flat payload: {}", e),
                })?;

            for (year_str, days) in flat {
                let year: i32 =
                    year_str
                        .parse()
                        .map_err(|_| EngineError::HolidayDataError {
                            message: format!("invalid year key: {}", year_str),
                        })?;
                for (month_day, fact) in days {
                    validate_fact(&fact, &format!("{}-{}", year_str, month_day))?;
                    table.insert(year, &month_day, fact);
                }
            }
        }

        Ok(table)
    }
}

fn validate_fact(fact: &HolidayFact, context: &str) -> EngineResult<()> {
    if fact.kind > 3 || fact.details_type > 3 {
        return Err(EngineError::HolidayDataError {
            message: format!(
                "out-of-range codes for {}: type={} detailsType={}",
                context, fact.kind, fact.details_type
            ),
        });
    }
    Ok(())
}
