use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use hotelsense_common::{Hotel, SearchParams};

use super::{ListingProvider, ListingRequest, DEFAULT_DESCRIPTION, HOTEL_IMAGES};

pub const MOCK_LISTING_COUNT: usize = 10;

const DEFAULT_PRICE_MIN: f64 = 1500.0;
const DEFAULT_PRICE_MAX: f64 = 10000.0;

const HOTEL_NAMES: [&str; 14] = [
    "The Ritz-Carlton",
    "Four Seasons Hotel",
    "Marriott Hotel",
    "Hilton Garden Inn",
    "Hyatt Regency",
    "Sheraton Grand",
    "InterContinental",
    "Mandarin Oriental",
    "The Peninsula",
    "W Hotel",
    "St. Regis",
    "JW Marriott",
    "Westin",
    "Waldorf Astoria",
];

const LOCATIONS: [&str; 8] = [
    "Goa", "Mumbai", "Delhi", "Bangalore", "Jaipur", "Udaipur", "Chennai", "Kolkata",
];

const TAGS: [&str; 8] = [
    "Free Wi-Fi",
    "Swimming Pool",
    "Breakfast Included",
    "Spa",
    "Gym",
    "Restaurant",
    "Bar",
    "Room Service",
];

/// Last-resort tier: random records drawn from fixed pools.
///
/// Never fails and never returns an empty list.
pub struct MockListings {
    rng: Mutex<StdRng>,
}

impl Default for MockListings {
    fn default() -> Self {
        Self::new()
    }
}

impl MockListings {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Reproducible output for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Ten hotels priced uniformly in the requested band.
    ///
    /// Location comes from the original parameters, not the resolved one;
    /// without it a random city from the pool is used for the whole batch.
    pub fn generate(&self, params: &SearchParams) -> Vec<Hotel> {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());

        let location = match params.location.as_deref() {
            Some(loc) => loc.to_string(),
            None => pick(&mut *rng, &LOCATIONS).to_string(),
        };
        let min = params.price_min.unwrap_or(DEFAULT_PRICE_MIN);
        let max = params.price_max.unwrap_or(DEFAULT_PRICE_MAX);

        (0..MOCK_LISTING_COUNT)
            .map(|i| {
                let tags = random_tags(&mut *rng, params.amenities());
                let price = (min + rng.random::<f64>() * (max - min)).floor();

                Hotel {
                    id: format!("hotel-{i}"),
                    name: pick(&mut *rng, &HOTEL_NAMES).to_string(),
                    location: location.clone(),
                    price,
                    rating: 3.0 + rng.random::<f64>() * 2.0,
                    image: pick(&mut *rng, &HOTEL_IMAGES).to_string(),
                    tags,
                    description: DEFAULT_DESCRIPTION.to_string(),
                }
            })
            .collect()
    }
}

fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

/// Two to four draws from the tag pool (duplicates collapse), then any
/// requested amenities not already present.
fn random_tags<R: Rng>(rng: &mut R, requested: &[String]) -> Vec<String> {
    let draws = rng.random_range(2..=4);
    let mut tags: Vec<String> = Vec::with_capacity(draws + requested.len());
    for _ in 0..draws {
        let tag = pick(&mut *rng, &TAGS);
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    for amenity in requested {
        if !tags.contains(amenity) {
            tags.push(amenity.clone());
        }
    }
    tags
}

#[async_trait]
impl ListingProvider for MockListings {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch_listings(&self, request: &ListingRequest) -> Result<Vec<Hotel>> {
        info!("Falling back to mock hotel data");
        Ok(self.generate(&request.params))
    }
}
