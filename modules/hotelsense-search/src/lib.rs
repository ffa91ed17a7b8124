pub mod filter;
pub mod model;
pub mod normalizer;
pub mod prompts;
pub mod providers;
pub mod search;
pub mod suggestions;

pub use filter::{ListingFilter, AMENITY_FILTERS, DEFAULT_PRICE_RANGE};
pub use model::UnavailableModel;
pub use normalizer::{parse_search_params, QueryNormalizer};
pub use providers::{
    AiListings, ListingProvider, ListingRequest, LiveListings, MockListings, ProviderChain,
};
pub use search::{SearchOutcome, SearchService};
pub use suggestions::{text_model, HotelSuggestions, DEFAULT_LOCATION};
