//! Calendar source resolution for the overtime engine.
//!
//! This module unifies the three holiday-data source variants behind one
//! resolver with a fixed priority order: explicit table entries (built-in
//! or imported), the optional external calendar capability, and the
//! weekday fallback rule.

mod builtin;
mod provider;
mod resolver;
mod table;

pub use builtin::builtin_table;
pub use provider::CalendarProvider;
pub use resolver::{CalendarResolver, REASON_UNPARSEABLE};
pub use table::HolidayTable;
