use std::sync::Arc;

use ai_client::{Gemini, TextModel};
use chrono::{NaiveDate, Utc};
use hotels_client::HotelsClient;
use tracing::info;

use hotelsense_common::pricing::default_stay;
use hotelsense_common::{Config, Hotel, SearchParams};

use crate::model::UnavailableModel;
use crate::normalizer::QueryNormalizer;
use crate::providers::{AiListings, ListingRequest, LiveListings, MockListings, ProviderChain};

/// Used when neither the parameters nor the model yield a location.
pub const DEFAULT_LOCATION: &str = "New York";

/// Resolves a search into a [`ListingRequest`] and runs the provider chain.
pub struct HotelSuggestions {
    normalizer: QueryNormalizer,
    chain: ProviderChain,
}

impl HotelSuggestions {
    pub fn new(normalizer: QueryNormalizer, chain: ProviderChain) -> Self {
        Self { normalizer, chain }
    }

    /// Standard tiers from configuration: live (if a RapidAPI key is set),
    /// AI-generated, then mock.
    pub fn from_config(config: &Config) -> Self {
        let model = text_model(config);
        let mut chain = ProviderChain::new();

        if let Some(key) = &config.rapidapi_key {
            chain = chain.tier(LiveListings::new(HotelsClient::new(key, &config.rapidapi_host)));
        }
        chain = chain
            .tier(AiListings::new(Arc::clone(&model)))
            .tier(MockListings::new());

        info!(tiers = ?chain.tier_names(), "Listing chain ready");
        Self::new(QueryNormalizer::new(model), chain)
    }

    pub fn normalizer(&self) -> &QueryNormalizer {
        &self.normalizer
    }

    /// Fill in location and stay dates.
    ///
    /// Location: the parameter, else one extracted from the raw query, else
    /// [`DEFAULT_LOCATION`]. Dates default to tomorrow through a week from `today`.
    pub async fn resolve(&self, params: &SearchParams, today: NaiveDate) -> ListingRequest {
        let mut location = params.location.clone();
        if location.is_none() && !params.query.trim().is_empty() {
            location = self.normalizer.extract_location(&params.query).await;
        }
        let location = location.unwrap_or_else(|| DEFAULT_LOCATION.to_string());

        let (default_in, default_out) = default_stay(today);
        ListingRequest {
            params: params.clone(),
            location,
            check_in: params.check_in.clone().unwrap_or(default_in),
            check_out: params.check_out.clone().unwrap_or(default_out),
        }
    }

    /// Full chain for `params`. Never fails; may be empty if every tier is.
    pub async fn suggest(&self, params: &SearchParams) -> Vec<Hotel> {
        let request = self.resolve(params, Utc::now().date_naive()).await;
        self.chain.run(&request).await
    }
}

/// Gemini when a key is configured, otherwise a model that always fails.
pub fn text_model(config: &Config) -> Arc<dyn TextModel> {
    match &config.gemini_api_key {
        Some(key) => Arc::new(Gemini::new(key, &config.gemini_model)),
        None => Arc::new(UnavailableModel),
    }
}
