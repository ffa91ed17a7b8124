//! Listing tiers behind one capability interface.

mod ai;
mod chain;
mod live;
mod mock;

pub use ai::{hotels_from_model_text, AiListings};
pub use chain::ProviderChain;
pub use live::{hotel_from_property, LiveListings, MAX_LIVE_RESULTS};
pub use mock::{MockListings, MOCK_LISTING_COUNT};

use anyhow::Result;
use async_trait::async_trait;

use hotelsense_common::{Hotel, SearchParams};

pub const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1566073771259-6a8506099945?auto=format&fit=crop&q=80&w=1000";

pub const DEFAULT_DESCRIPTION: &str =
    "Experience luxury and comfort at our prime location with stunning views and excellent service.";

pub const HOTEL_IMAGES: [&str; 5] = [
    DEFAULT_IMAGE,
    "https://images.unsplash.com/photo-1551882547-ff40c63fe5fa?auto=format&fit=crop&q=80&w=1000",
    "https://images.unsplash.com/photo-1564501049412-61c2a3083791?auto=format&fit=crop&q=80&w=1000",
    "https://images.unsplash.com/photo-1571896349842-33c89424de2d?auto=format&fit=crop&q=80&w=1000",
    "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb?auto=format&fit=crop&q=80&w=1000",
];

/// A search with its location and stay dates already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRequest {
    pub params: SearchParams,
    pub location: String,
    pub check_in: String,
    pub check_out: String,
}

/// One strategy for producing listings.
///
/// An `Err` or an empty `Ok` both mean "nothing here"; the chain moves on.
#[async_trait]
pub trait ListingProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch_listings(&self, request: &ListingRequest) -> Result<Vec<Hotel>>;
}
