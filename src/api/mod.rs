//! HTTP API module for the overtime engine.
//!
//! This module provides the JSON endpoints a second execution context
//! (the embedded web form) uses to classify dates, submit records, and
//! read summaries. HTML rendering lives entirely outside the engine.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{RecordsQuery, SubmitRecordRequest, SummaryQuery};
pub use response::{ApiError, MismatchWarning, SubmitRecordResponse};
pub use state::AppState;
