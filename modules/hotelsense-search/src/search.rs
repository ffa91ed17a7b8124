use tracing::info;

use hotelsense_common::{Config, Hotel, SearchParams};

use crate::filter::ListingFilter;
use crate::suggestions::HotelSuggestions;

/// Everything a results view needs from one search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub params: SearchParams,
    /// Unfiltered listings in provider order.
    pub hotels: Vec<Hotel>,
    pub filter: ListingFilter,
}

impl SearchOutcome {
    pub fn visible(&self) -> Vec<Hotel> {
        self.filter.apply(&self.hotels)
    }
}

/// Normalize, suggest, filter.
pub struct SearchService {
    suggestions: HotelSuggestions,
}

impl SearchService {
    pub fn new(suggestions: HotelSuggestions) -> Self {
        Self { suggestions }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(HotelSuggestions::from_config(config))
    }

    /// Run a free-text search. `adjust` can tweak the filter the parameters
    /// produced (e.g. tags picked by the user).
    pub async fn search(
        &self,
        query: &str,
        adjust: impl FnOnce(&mut ListingFilter),
    ) -> SearchOutcome {
        let params = self.suggestions.normalizer().normalize(query).await;
        info!(
            location = params.location.as_deref().unwrap_or("-"),
            guests = ?params.guests,
            "Search normalized"
        );

        let hotels = self.suggestions.suggest(&params).await;
        let mut filter = ListingFilter::from_params(&params);
        adjust(&mut filter);

        SearchOutcome {
            params,
            hotels,
            filter,
        }
    }
}
