//! Application state for the overtime engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calendar::CalendarResolver;
use crate::config::ConfigStore;
use crate::store::RecordStore;

/// Shared application state.
///
/// Contains the configuration service, the calendar resolver, and the
/// record store. Handlers take one configuration snapshot per request so a
/// concurrent settings save can never be observed mid-computation.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigStore>,
    resolver: Arc<CalendarResolver>,
    store: Arc<dyn RecordStore>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        config: Arc<ConfigStore>,
        resolver: Arc<CalendarResolver>,
        store: Arc<dyn RecordStore>,
    ) -> Self {
        Self {
            config,
            resolver,
            store,
        }
    }

    /// Returns the configuration service.
    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    /// Returns the calendar resolver.
    pub fn resolver(&self) -> &CalendarResolver {
        &self.resolver
    }

    /// Returns the record store.
    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state.
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
