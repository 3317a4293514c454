//! Key-Value Storage
//!
//! The persistence seam for the todo store. The browser implementation
//! talks to `window.localStorage`; tests use an in-memory map.

use crate::error::{TodoError, TodoResult};

/// String-keyed storage the todo store mirrors itself into
pub trait KeyValueStorage {
    /// Read a value. `Ok(None)` means the key was never written.
    fn get_item(&self, key: &str) -> TodoResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set_item(&mut self, key: &str, value: &str) -> TodoResult<()>;
}

/// Handle to the page's `localStorage`
///
/// Zero-sized: the `Storage` object is looked up on every access, which keeps
/// the handle `Send + Sync` for the Leptos arena.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> TodoResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| TodoError::StorageUnavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| TodoError::StorageUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| TodoError::StorageUnavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> TodoResult<Option<String>> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| TodoError::StorageUnavailable(format!("{:?}", e)))
    }

    fn set_item(&mut self, key: &str, value: &str) -> TodoResult<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| TodoError::StorageWrite {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;

#[cfg(test)]
mod memory {
    use std::collections::HashMap;

    use super::KeyValueStorage;
    use crate::error::{TodoError, TodoResult};

    /// In-memory storage with optional write rejection
    #[derive(Clone, Debug, Default)]
    pub struct MemoryStorage {
        entries: HashMap<String, String>,
        /// Number of writes performed so far
        pub writes: usize,
        /// Reject every write from this write index on
        pub fail_from_write: Option<usize>,
    }

    impl MemoryStorage {
        pub fn with_entries(entries: &[(&str, &str)]) -> Self {
            Self {
                entries: entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                ..Default::default()
            }
        }

        /// Storage that rejects every write from write index `n` on
        pub fn failing_from(n: usize) -> Self {
            Self {
                fail_from_write: Some(n),
                ..Default::default()
            }
        }

        pub fn raw(&self, key: &str) -> Option<&str> {
            self.entries.get(key).map(String::as_str)
        }
    }

    impl KeyValueStorage for MemoryStorage {
        fn get_item(&self, key: &str) -> TodoResult<Option<String>> {
            Ok(self.entries.get(key).cloned())
        }

        fn set_item(&mut self, key: &str, value: &str) -> TodoResult<()> {
            if self.fail_from_write.is_some_and(|n| self.writes >= n) {
                return Err(TodoError::StorageWrite {
                    key: key.to_string(),
                    reason: "QuotaExceededError".to_string(),
                });
            }
            self.writes += 1;
            self.entries.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}
