use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::pricing::nights_between;

// --- Search ---

/// Structured search parameters. Only `query` is always present; nothing
/// validates date ordering or numeric ranges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guests: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
}

impl SearchParams {
    pub fn from_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Requested amenities, empty when none were given.
    pub fn amenities(&self) -> &[String] {
        self.amenities.as_deref().unwrap_or(&[])
    }
}

// --- Listings ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub location: String,
    pub price: f64,
    /// 0–5, not enforced.
    pub rating: f64,
    pub image: String,
    pub tags: Vec<String>,
    pub description: String,
}

impl Hotel {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

// --- Bookings ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub hotel_id: String,
    pub hotel_name: String,
    pub location: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
    /// Total for the whole stay, not per night.
    pub price: f64,
    pub image: String,
    pub booking_date: String,
}

impl Booking {
    /// Build a confirmed booking for `hotel`. The id is derived from `now`
    /// in milliseconds, so two confirmations in the same millisecond collide.
    pub fn confirm(
        hotel: &Hotel,
        check_in: impl Into<String>,
        check_out: impl Into<String>,
        guests: u32,
        now: DateTime<Utc>,
    ) -> Self {
        let check_in = check_in.into();
        let check_out = check_out.into();
        let nights = nights_between(&check_in, &check_out);

        Self {
            id: booking_id(now),
            hotel_id: hotel.id.clone(),
            hotel_name: hotel.name.clone(),
            location: hotel.location.clone(),
            check_in,
            check_out,
            guests,
            price: hotel.price * f64::from(nights),
            image: hotel.image.clone(),
            booking_date: timestamp(now),
        }
    }
}

pub fn booking_id(now: DateTime<Utc>) -> String {
    format!("booking-{}", now.timestamp_millis())
}

/// RFC 3339 with millisecond precision, e.g. `2026-10-18T09:30:00.000Z`.
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}
