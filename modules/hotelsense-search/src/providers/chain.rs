use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

use hotelsense_common::Hotel;

use super::{ListingProvider, ListingRequest};

/// Ordered fallback over listing tiers.
///
/// Tiers run top to bottom; the first one to return a non-empty list wins.
/// No tier is retried and nothing is cached.
#[derive(Clone, Default)]
pub struct ProviderChain {
    tiers: Vec<Arc<dyn ListingProvider>>,
}

impl ProviderChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tier(mut self, provider: impl ListingProvider + 'static) -> Self {
        self.tiers.push(Arc::new(provider));
        self
    }

    pub fn tier_names(&self) -> Vec<&'static str> {
        self.tiers.iter().map(|t| t.name()).collect()
    }

    /// Listings from the first productive tier, or empty if every tier comes up dry.
    pub async fn run(&self, request: &ListingRequest) -> Vec<Hotel> {
        for tier in &self.tiers {
            match tier.fetch_listings(request).await {
                Ok(hotels) if !hotels.is_empty() => {
                    info!(tier = tier.name(), count = hotels.len(), "Listings found");
                    return hotels;
                }
                Ok(_) => {
                    info!(tier = tier.name(), "Tier returned no listings, trying next");
                }
                Err(e) => {
                    warn!(tier = tier.name(), error = %e, "Tier failed, trying next");
                }
            }
        }
        warn!(location = request.location.as_str(), "All listing tiers came up empty");
        Vec::new()
    }
}

#[async_trait]
impl ListingProvider for ProviderChain {
    fn name(&self) -> &'static str {
        "chain"
    }

    async fn fetch_listings(&self, request: &ListingRequest) -> Result<Vec<Hotel>> {
        Ok(self.run(request).await)
    }
}
