use hotelsense_common::{Hotel, SearchParams};

/// Amenity tags offered for filtering.
pub const AMENITY_FILTERS: [&str; 5] = ["Free Wi-Fi", "Breakfast Included", "Restaurant", "Gym", "Spa"];

pub const DEFAULT_PRICE_RANGE: (f64, f64) = (1000.0, 10000.0);

/// Client-side price band and amenity filter.
///
/// A hotel passes when its price lies in `[price_min, price_max]` and, if any
/// tags are selected, it carries at least one of them. Order is preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingFilter {
    pub price_min: f64,
    pub price_max: f64,
    pub tags: Vec<String>,
}

impl Default for ListingFilter {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_RANGE.0, DEFAULT_PRICE_RANGE.1)
    }
}

impl ListingFilter {
    pub fn new(price_min: f64, price_max: f64) -> Self {
        Self {
            price_min,
            price_max,
            tags: Vec::new(),
        }
    }

    /// Default band, replaced by the search's own band only when both ends are set.
    pub fn from_params(params: &SearchParams) -> Self {
        match (params.price_min, params.price_max) {
            (Some(min), Some(max)) => Self::new(min, max),
            _ => Self::default(),
        }
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        for tag in tags {
            self.select_tag(tag);
        }
        self
    }

    /// Turn a tag on. Selecting an already selected tag changes nothing.
    pub fn select_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    pub fn matches(&self, hotel: &Hotel) -> bool {
        if hotel.price < self.price_min || hotel.price > self.price_max {
            return false;
        }
        self.tags.is_empty() || self.tags.iter().any(|t| hotel.has_tag(t))
    }

    pub fn apply(&self, hotels: &[Hotel]) -> Vec<Hotel> {
        hotels.iter().filter(|h| self.matches(h)).cloned().collect()
    }
}
