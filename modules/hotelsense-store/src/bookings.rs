use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use hotelsense_common::{timestamp, Booking};

use crate::kv::KeyValueStore;

pub const BOOKINGS_KEY: &str = "hotel_bookings";

/// Append-only booking list persisted under [`BOOKINGS_KEY`].
pub struct BookingStore<S> {
    store: S,
}

impl<S: KeyValueStore> BookingStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All stored bookings in insertion order.
    ///
    /// A missing key is an empty list. So is an unreadable or corrupt value,
    /// which is logged and otherwise ignored.
    pub fn bookings(&self) -> Vec<Booking> {
        self.load().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to read bookings");
            Vec::new()
        })
    }

    /// Stored bookings for a load-mutate-save cycle. Read failures propagate;
    /// a corrupt value still reads as empty.
    fn load(&self) -> Result<Vec<Booking>> {
        let Some(raw) = self.store.get(BOOKINGS_KEY).context("Failed to read bookings")? else {
            return Ok(Vec::new());
        };

        Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "Stored bookings are corrupt, treating as empty");
            Vec::new()
        }))
    }

    pub fn find(&self, booking_id: &str) -> Option<Booking> {
        self.bookings().into_iter().find(|b| b.id == booking_id)
    }

    /// Append a booking, stamping `booking_date` with the current time.
    pub fn save_booking(&self, booking: Booking) -> Result<Booking> {
        self.save_booking_at(booking, Utc::now())
    }

    pub fn save_booking_at(&self, mut booking: Booking, now: DateTime<Utc>) -> Result<Booking> {
        booking.booking_date = timestamp(now);

        let mut bookings = self.load()?;
        bookings.push(booking.clone());
        self.write(&bookings)?;

        info!(
            booking_id = booking.id.as_str(),
            hotel = booking.hotel_name.as_str(),
            total = booking.price,
            "Booking saved"
        );
        Ok(booking)
    }

    /// Remove every booking with `booking_id`. Returns whether anything was removed.
    pub fn cancel_booking(&self, booking_id: &str) -> Result<bool> {
        let bookings = self.load()?;
        let before = bookings.len();
        let remaining: Vec<Booking> = bookings.into_iter().filter(|b| b.id != booking_id).collect();
        if remaining.len() == before {
            return Ok(false);
        }

        self.write(&remaining)?;
        info!(booking_id, "Booking cancelled");
        Ok(true)
    }

    fn write(&self, bookings: &[Booking]) -> Result<()> {
        let json = serde_json::to_string(bookings).context("Failed to serialize bookings")?;
        self.store
            .set(BOOKINGS_KEY, &json)
            .context("Failed to persist bookings")
    }
}
