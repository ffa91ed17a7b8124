use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use hotelsense_common::{Hotel, SearchParams};

use crate::kv::KeyValueStore;

pub const LAST_SEARCH_PARAMS_KEY: &str = "last_search_params";
pub const LAST_RESULTS_KEY: &str = "last_search_results";

/// The most recent search and the listings it produced.
pub struct SearchHistory<S> {
    store: S,
}

impl<S: KeyValueStore> SearchHistory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn save_params(&self, params: &SearchParams) -> Result<()> {
        self.write(LAST_SEARCH_PARAMS_KEY, params)
    }

    /// `None` when nothing was saved or the saved value is unreadable.
    pub fn last_params(&self) -> Option<SearchParams> {
        self.read(LAST_SEARCH_PARAMS_KEY)
    }

    pub fn save_results(&self, hotels: &[Hotel]) -> Result<()> {
        self.write(LAST_RESULTS_KEY, &hotels)
    }

    pub fn last_results(&self) -> Vec<Hotel> {
        self.read(LAST_RESULTS_KEY).unwrap_or_default()
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)
            .with_context(|| format!("Failed to serialize {key}"))?;
        self.store
            .set(key, &json)
            .with_context(|| format!("Failed to persist {key}"))
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(key, error = %e, "Failed to read stored value");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "Stored value is corrupt");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    #[test]
    fn last_params_round_trip() {
        let history = SearchHistory::new(MemoryStore::new());
        assert!(history.last_params().is_none());

        let params = SearchParams {
            location: Some("Jaipur".into()),
            guests: Some(3),
            ..SearchParams::from_query("3 people in jaipur")
        };
        history.save_params(&params).unwrap();
        assert_eq!(history.last_params(), Some(params));
    }

    #[test]
    fn corrupt_params_read_as_none() {
        let kv = MemoryStore::new();
        kv.set(LAST_SEARCH_PARAMS_KEY, "null").unwrap();
        let history = SearchHistory::new(kv);
        assert!(history.last_params().is_none());
    }

    #[test]
    fn last_results_default_empty() {
        let history = SearchHistory::new(MemoryStore::new());
        assert!(history.last_results().is_empty());
        history.save_results(&[]).unwrap();
        assert!(history.last_results().is_empty());
    }
}
