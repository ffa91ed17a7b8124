//! Local persistence standing in for browser storage.
//!
//! Every collection is serialized whole under a fixed key, so each write
//! replaces the previous value. Nothing guards against concurrent writers:
//! the last write wins.

pub mod bookings;
pub mod history;
pub mod kv;

pub use bookings::{BookingStore, BOOKINGS_KEY};
pub use history::{SearchHistory, LAST_RESULTS_KEY, LAST_SEARCH_PARAMS_KEY};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
