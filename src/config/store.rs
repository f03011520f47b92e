//! Snapshot-consistent configuration store.
//!
//! The engine's computations are pure functions over their inputs and a
//! configuration snapshot. [`ConfigStore`] guarantees that a submission in
//! progress never observes a configuration save mid-computation: readers
//! take an `Arc` snapshot once and keep using it; writers build a new value
//! and swap it in atomically.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::error::{EngineError, EngineResult};

use super::EngineConfig;

/// Thread-safe configuration service with snapshot reads.
///
/// # Example
///
/// ```
/// use overtime_engine::config::{ConfigStore, EngineConfig};
///
/// let store = ConfigStore::in_memory(EngineConfig::default());
/// let snapshot = store.snapshot();
/// assert!(!snapshot.overtime_pay.enabled);
///
/// store.update(|c| c.overtime_pay.enabled = true).unwrap();
/// // The old snapshot is unaffected; new snapshots see the change.
/// assert!(!snapshot.overtime_pay.enabled);
/// assert!(store.snapshot().overtime_pay.enabled);
/// ```
#[derive(Debug)]
pub struct ConfigStore {
    path: Option<PathBuf>,
    current: RwLock<Arc<EngineConfig>>,
}

impl ConfigStore {
    /// Loads configuration from a JSON file.
    ///
    /// A missing file is not an error: the store starts with defaults and
    /// the file is created on the first save. A present but unparseable
    /// file is an error — silently discarding an operator's settings would
    /// be worse than refusing to start.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref().to_path_buf();
        let config = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    EngineError::ConfigNotFound {
                        path: path.display().to_string(),
                    }
                } else {
                    EngineError::ConfigParseError {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    }
                }
            })?;
            serde_json::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            EngineConfig::default()
        };

        Ok(Self {
            path: Some(path),
            current: RwLock::new(Arc::new(config)),
        })
    }

    /// Creates a store that never touches the filesystem.
    pub fn in_memory(config: EngineConfig) -> Self {
        Self {
            path: None,
            current: RwLock::new(Arc::new(config)),
        }
    }

    /// Returns the current configuration snapshot.
    ///
    /// The snapshot is immutable; later updates do not affect it. Fetch one
    /// snapshot per submission and pass it through the whole computation.
    pub fn snapshot(&self) -> Arc<EngineConfig> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Applies a mutation, persists the result, and swaps it in.
    ///
    /// Returns the new snapshot. Concurrent readers keep whatever snapshot
    /// they already hold.
    pub fn update<F>(&self, mutate: F) -> EngineResult<Arc<EngineConfig>>
    where
        F: FnOnce(&mut EngineConfig),
    {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut next = (**guard).clone();
        mutate(&mut next);
        let next = Arc::new(next);

        if let Some(path) = &self.path {
            let content =
                serde_json::to_string_pretty(&*next).map_err(|e| EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
            fs::write(path, content).map_err(|e| EngineError::PersistenceFailure {
                message: format!("failed to save {}: {}", path.display(), e),
            })?;
        }

        *guard = next.clone();
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_in_memory_snapshot() {
        let store = ConfigStore::in_memory(EngineConfig::default());
        let snapshot = store.snapshot();
        assert_eq!(*snapshot, EngineConfig::default());
    }

    #[test]
    fn test_update_swaps_snapshot() {
        let store = ConfigStore::in_memory(EngineConfig::default());
        let before = store.snapshot();

        store
            .update(|c| {
                c.overtime_pay.enabled = true;
                c.overtime_pay.hourly_wage = Decimal::new(80, 0);
            })
            .unwrap();

        // Snapshot isolation: the earlier snapshot is untouched.
        assert!(!before.overtime_pay.enabled);

        let after = store.snapshot();
        assert!(after.overtime_pay.enabled);
        assert_eq!(after.overtime_pay.hourly_wage, Decimal::new(80, 0));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let store = ConfigStore::load(&path).unwrap();
        assert_eq!(*store.snapshot(), EngineConfig::default());
        // Nothing is written until the first update.
        assert!(!path.exists());
    }

    #[test]
    fn test_update_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let store = ConfigStore::load(&path).unwrap();
        store.update(|c| c.overtime_pay.enabled = true).unwrap();
        assert!(path.exists());

        let reloaded = ConfigStore::load(&path).unwrap();
        assert!(reloaded.snapshot().overtime_pay.enabled);
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        match ConfigStore::load(&path) {
            Err(EngineError::ConfigParseError { .. }) => {}
            other => panic!("Expected ConfigParseError, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_partial_file_merges_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"web_port": 9090}"#).unwrap();

        let store = ConfigStore::load(&path).unwrap();
        let snapshot = store.snapshot();
        assert_eq!(snapshot.web_port, 9090);
        assert_eq!(snapshot.leave_types.len(), 5);
    }
}
