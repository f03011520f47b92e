//! Built-in holiday data.
//!
//! Statutory holiday and in-lieu working-day entries shipped with the
//! engine, used whenever `use_builtin_holiday` is set and no imported
//! table overrides them. Years outside this set fall through to the
//! external provider or the weekday rule.

use crate::models::{HolidayFact, DETAILS_STATUTORY_HOLIDAY, DETAILS_WORKDAY, KIND_IN_LIEU};

use super::HolidayTable;

fn statutory(description: &str) -> HolidayFact {
    HolidayFact::new(2, DETAILS_STATUTORY_HOLIDAY, description)
}

fn in_lieu(description: &str) -> HolidayFact {
    HolidayFact::new(KIND_IN_LIEU, DETAILS_WORKDAY, description)
}

/// Builds the built-in holiday table (2024 and 2026).
pub fn builtin_table() -> HolidayTable {
    let mut table = HolidayTable::new();

    let year_2024 = [
        ("01-01", statutory("元旦")),
        ("02-10", statutory("春节")),
        ("02-11", statutory("春节")),
        ("02-12", statutory("春节")),
        ("04-04", statutory("清明节")),
        ("05-01", statutory("劳动节")),
        ("06-10", statutory("端午节")),
        ("09-17", statutory("中秋节")),
        ("10-01", statutory("国庆节")),
        ("10-02", statutory("国庆节")),
        ("10-03", statutory("国庆节")),
        ("01-04", in_lieu("元旦调休")),
        ("02-04", in_lieu("春节调休")),
        ("02-18", in_lieu("春节调休")),
        ("04-07", in_lieu("清明调休")),
        ("05-02", in_lieu("劳动节调休")),
        ("06-11", in_lieu("端午调休")),
        ("09-18", in_lieu("中秋调休")),
        ("10-07", in_lieu("国庆调休")),
    ];

    let year_2026 = [
        ("01-01", statutory("元旦")),
        ("02-17", statutory("春节")),
        ("02-18", statutory("春节")),
        ("02-19", statutory("春节")),
        ("04-05", statutory("清明节")),
        ("05-01", statutory("劳动节")),
        ("06-19", statutory("端午节")),
        ("10-01", statutory("国庆节")),
        ("10-02", statutory("国庆节")),
        ("10-03", statutory("国庆节")),
        ("01-04", in_lieu("元旦调休")),
        ("02-15", in_lieu("春节调休")),
        ("02-22", in_lieu("春节调休")),
        ("05-02", in_lieu("劳动节调休")),
        ("10-08", in_lieu("国庆调休")),
        ("10-09", in_lieu("国庆调休")),
    ];

    for (month_day, fact) in year_2024 {
        table.insert(2024, month_day, fact);
    }
    for (month_day, fact) in year_2026 {
        table.insert(2026, month_day, fact);
    }

    table
}
