use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::info;

use hotelsense_common::pricing::{default_stay, DEFAULT_GUESTS};
use hotelsense_common::{Booking, HotelSenseError};
use hotelsense_search::{SearchOutcome, SearchService};
use hotelsense_store::{BookingStore, KeyValueStore, SearchHistory};

/// Filter overrides given on the command line.
#[derive(Debug, Default, Clone)]
pub struct FilterArgs {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub tags: Vec<String>,
}

#[derive(Debug, Default, Clone)]
pub struct StayArgs {
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: Option<u32>,
}

/// Booking and history views over one shared store.
pub struct Session<S> {
    pub bookings: BookingStore<S>,
    pub history: SearchHistory<S>,
}

impl<S: KeyValueStore + Clone> Session<S> {
    pub fn new(store: S) -> Self {
        Self {
            bookings: BookingStore::new(store.clone()),
            history: SearchHistory::new(store),
        }
    }
}

impl<S: KeyValueStore> Session<S> {
    /// Search and remember both the parameters and the unfiltered listings,
    /// so a later `book` can refer to a hotel by id.
    pub async fn search(
        &self,
        service: &SearchService,
        query: &str,
        args: &FilterArgs,
    ) -> Result<SearchOutcome> {
        let outcome = service
            .search(query, |filter| {
                if let Some(min) = args.min {
                    filter.price_min = min;
                }
                if let Some(max) = args.max {
                    filter.price_max = max;
                }
                for tag in &args.tags {
                    filter.select_tag(tag.as_str());
                }
            })
            .await;

        self.history.save_params(&outcome.params)?;
        self.history.save_results(&outcome.hotels)?;
        Ok(outcome)
    }

    /// Book a hotel from the last search.
    ///
    /// Each of check-in, check-out and guests comes from `stay`, else from
    /// the last search's parameters, else tomorrow, a week from `now`, and
    /// [`DEFAULT_GUESTS`].
    pub fn book(&self, hotel_id: &str, stay: &StayArgs, now: DateTime<Utc>) -> Result<Booking> {
        let hotel = self
            .history
            .last_results()
            .into_iter()
            .find(|h| h.id == hotel_id)
            .ok_or_else(|| HotelSenseError::HotelNotFound(hotel_id.to_string()))?;

        let last = self.history.last_params().unwrap_or_default();
        let (default_in, default_out) = default_stay(now.date_naive());
        let booking = Booking::confirm(
            &hotel,
            stay.check_in.clone().or(last.check_in).unwrap_or(default_in),
            stay.check_out.clone().or(last.check_out).unwrap_or(default_out),
            stay.guests.or(last.guests).unwrap_or(DEFAULT_GUESTS),
            now,
        );
        self.bookings.save_booking_at(booking, now)
    }

    pub fn cancel(&self, booking_id: &str) -> Result<()> {
        if !self.bookings.cancel_booking(booking_id)? {
            return Err(HotelSenseError::BookingNotFound(booking_id.to_string()).into());
        }
        info!(booking_id, "Cancelled");
        Ok(())
    }
}
