//! Configuration loading and management for the overtime engine.
//!
//! This module provides the typed configuration structures and the
//! snapshot-consistent [`ConfigStore`] service.
//!
//! # Example
//!
//! ```no_run
//! use overtime_engine::config::ConfigStore;
//!
//! let store = ConfigStore::load("./config.json").unwrap();
//! let config = store.snapshot();
//! println!("pay enabled: {}", config.overtime_pay.enabled);
//! ```

mod store;
mod types;

pub use store::ConfigStore;
pub use types::{EngineConfig, OvertimePayConfig};
