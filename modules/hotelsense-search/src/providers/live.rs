use std::sync::Mutex;

use anyhow::{Context, Result};
use async_trait::async_trait;
use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use hotels_client::{HotelsClient, Property};
use hotelsense_common::{Hotel, HotelSenseError};

use super::{ListingProvider, ListingRequest, DEFAULT_DESCRIPTION, DEFAULT_IMAGE};

pub const MAX_LIVE_RESULTS: usize = 10;
const MAX_TAGS: usize = 5;
const DEFAULT_TAGS: [&str; 2] = ["Free Wi-Fi", "Parking"];
const DEFAULT_NAME: &str = "Luxury Hotel";

/// Live lookup against the hotels-com-provider API: resolve the location to
/// a destination id, then list properties for the stay dates.
pub struct LiveListings {
    client: HotelsClient,
    rng: Mutex<StdRng>,
}

impl LiveListings {
    pub fn new(client: HotelsClient) -> Self {
        Self {
            client,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }
}

#[async_trait]
impl ListingProvider for LiveListings {
    fn name(&self) -> &'static str {
        "live"
    }

    async fn fetch_listings(&self, request: &ListingRequest) -> Result<Vec<Hotel>> {
        info!(location = request.location.as_str(), "Searching for hotels");

        let locations = self
            .client
            .search_locations(&request.location)
            .await
            .context("Location search failed")?;
        let destination_id = locations.destination_id().ok_or_else(|| {
            HotelSenseError::Provider(format!("no destination found for {}", request.location))
        })?;

        let listing = self
            .client
            .list_properties(&destination_id, &request.check_in, &request.check_out)
            .await
            .context("Property list failed")?;
        let results = listing
            .results()
            .ok_or_else(|| HotelSenseError::Provider("no hotel data in property list".into()))?;

        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        Ok(results
            .iter()
            .take(MAX_LIVE_RESULTS)
            .map(|p| hotel_from_property(p, &request.location, &mut *rng))
            .collect())
    }
}

/// Map one vendor property into a [`Hotel`], filling gaps with defaults.
///
/// Missing price and rating are randomized (price in `[5000, 10000)`,
/// rating in `[3, 5)`); a missing vendor id gets a random 8-character suffix.
pub fn hotel_from_property<R: Rng>(property: &Property, fallback_location: &str, rng: &mut R) -> Hotel {
    let id = match property.vendor_id() {
        Some(id) => format!("hotel-{id}"),
        None => {
            let suffix: String = (0..8)
                .map(|_| char::from(rng.sample(Alphanumeric)).to_ascii_lowercase())
                .collect();
            format!("hotel-{suffix}")
        }
    };

    let tags = match &property.amenities {
        Some(amenities) => amenities
            .iter()
            .take(MAX_TAGS)
            .filter_map(|a| a.name.as_deref())
            .filter(|n| !n.is_empty())
            .map(String::from)
            .collect(),
        None => DEFAULT_TAGS.iter().map(|t| t.to_string()).collect(),
    };

    let price = property
        .current_price()
        .and_then(parse_price)
        .unwrap_or_else(|| 5000.0 + f64::from(rng.random_range(0..5000u32)));

    let location = property
        .address
        .as_ref()
        .map(|a| {
            [&a.street_address, &a.locality, &a.region]
                .into_iter()
                .filter_map(|part| part.as_deref().map(str::trim))
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .filter(|loc| !loc.is_empty())
        .unwrap_or_else(|| fallback_location.to_string());

    Hotel {
        id,
        name: property
            .name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_NAME.to_string()),
        location,
        price,
        rating: property
            .star_rating
            .filter(|r| *r > 0.0)
            .unwrap_or_else(|| 3.0 + rng.random::<f64>() * 2.0),
        image: property.thumbnail().unwrap_or(DEFAULT_IMAGE).to_string(),
        tags,
        description: property
            .neighbourhood
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
    }
}

/// Keep digits and dots from a display price (`"$1,299.50"` → 1299.5).
fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    cleaned.parse::<f64>().ok().filter(|p| p.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(raw: &str) -> Property {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn full_property_maps_directly() {
        let p = property(
            r#"{
                "id": 424023,
                "name": "Hotel Nirvana",
                "address": {"streetAddress": "12 Beach Rd", "locality": "Calangute", "region": "Goa"},
                "ratePlan": {"price": {"current": "$1,299.50"}},
                "starRating": 4.0,
                "optimizedThumbUrls": {"srpDesktop": "https://img.example/n.jpg"},
                "amenities": [{"name": "Pool"}, {"name": ""}, {"name": "Spa"}],
                "neighbourhood": "Calangute Beach"
            }"#,
        );
        let mut rng = StdRng::seed_from_u64(0);
        let hotel = hotel_from_property(&p, "Goa", &mut rng);

        assert_eq!(hotel.id, "hotel-424023");
        assert_eq!(hotel.name, "Hotel Nirvana");
        assert_eq!(hotel.location, "12 Beach Rd, Calangute, Goa");
        assert_eq!(hotel.price, 1299.5);
        assert_eq!(hotel.rating, 4.0);
        assert_eq!(hotel.image, "https://img.example/n.jpg");
        assert_eq!(hotel.tags, vec!["Pool", "Spa"]);
        assert_eq!(hotel.description, "Calangute Beach");
    }

    #[test]
    fn empty_property_gets_defaults() {
        let mut rng = StdRng::seed_from_u64(1);
        let hotel = hotel_from_property(&property("{}"), "Goa", &mut rng);

        assert!(hotel.id.starts_with("hotel-"));
        assert_eq!(hotel.id.len(), "hotel-".len() + 8);
        assert_eq!(hotel.name, DEFAULT_NAME);
        assert_eq!(hotel.location, "Goa");
        assert!((5000.0..10000.0).contains(&hotel.price));
        assert_eq!(hotel.price, hotel.price.floor());
        assert!((3.0..5.0).contains(&hotel.rating));
        assert_eq!(hotel.image, DEFAULT_IMAGE);
        assert_eq!(hotel.tags, DEFAULT_TAGS.to_vec());
        assert_eq!(hotel.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn only_first_five_amenities_are_considered() {
        let p = property(
            r#"{"amenities": [{"name": "a"}, {"name": "b"}, {"name": "c"}, {"name": "d"}, {"name": "e"}, {"name": "f"}]}"#,
        );
        let hotel = hotel_from_property(&p, "X", &mut StdRng::seed_from_u64(2));
        assert_eq!(hotel.tags, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn partial_address_skips_blank_parts() {
        let p = property(r#"{"address": {"locality": "Panaji", "region": " "}}"#);
        let hotel = hotel_from_property(&p, "Goa", &mut StdRng::seed_from_u64(3));
        assert_eq!(hotel.location, "Panaji");
    }

    #[test]
    fn parse_price_variants() {
        assert_eq!(parse_price("$120"), Some(120.0));
        assert_eq!(parse_price("₹ 4,500"), Some(4500.0));
        assert_eq!(parse_price("call us"), None);
        assert_eq!(parse_price("1.2.3"), None);
    }
}
