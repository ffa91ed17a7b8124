use serde::{Deserialize, Deserializer};
use serde_json::Value;

// --- Location search (/locations/v2/search) ---

/// Group names that identify a usable destination.
pub const DESTINATION_GROUPS: [&str; 2] = ["CITY_GROUP", "REGION_GROUP"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationSearchResponse {
    #[serde(default)]
    pub suggestions: Vec<LocationSuggestion>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationSuggestion {
    pub group: Option<String>,
    #[serde(default)]
    pub entities: Vec<LocationEntity>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationEntity {
    /// Numeric or string depending on the endpoint version.
    #[serde(rename = "destinationId")]
    pub destination_id: Option<Value>,
    pub name: Option<String>,
}

impl LocationSearchResponse {
    /// Destination id of the first entity in the first city or region group.
    ///
    /// Returns `None` when there are no suggestions, no destination group,
    /// or the matched group has no entities.
    pub fn destination_id(&self) -> Option<String> {
        let suggestion = self.suggestions.iter().find(|s| {
            s.group
                .as_deref()
                .is_some_and(|g| DESTINATION_GROUPS.contains(&g))
        })?;
        let entity = suggestion.entities.first()?;
        value_to_id(entity.destination_id.as_ref()?)
    }
}

// --- Property list (/properties/list) ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyListResponse {
    pub data: Option<PropertyListData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyListData {
    pub body: Option<PropertyListBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyListBody {
    #[serde(rename = "searchResults")]
    pub search_results: Option<SearchResults>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResults {
    pub results: Option<Vec<Property>>,
}

impl PropertyListResponse {
    /// `data.body.searchResults.results`, if every level is present.
    pub fn results(&self) -> Option<&[Property]> {
        self.data
            .as_ref()?
            .body
            .as_ref()?
            .search_results
            .as_ref()?
            .results
            .as_deref()
    }
}

/// One property from the list endpoint. Every field is optional; the vendor
/// schema is undocumented and varies between listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Property {
    pub id: Option<Value>,
    pub name: Option<String>,
    pub address: Option<Address>,
    #[serde(rename = "ratePlan")]
    pub rate_plan: Option<RatePlan>,
    #[serde(rename = "starRating", default, deserialize_with = "lenient_f64")]
    pub star_rating: Option<f64>,
    #[serde(rename = "optimizedThumbUrls")]
    pub optimized_thumb_urls: Option<ThumbUrls>,
    pub amenities: Option<Vec<Amenity>>,
    pub neighbourhood: Option<String>,
}

impl Property {
    pub fn vendor_id(&self) -> Option<String> {
        value_to_id(self.id.as_ref()?)
    }

    /// Raw display price such as `"$1,234"`.
    pub fn current_price(&self) -> Option<&str> {
        self.rate_plan
            .as_ref()?
            .price
            .as_ref()?
            .current
            .as_deref()
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.optimized_thumb_urls.as_ref()?.srp_desktop.as_deref()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Address {
    #[serde(rename = "streetAddress")]
    pub street_address: Option<String>,
    pub locality: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatePlan {
    pub price: Option<RatePrice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatePrice {
    pub current: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThumbUrls {
    #[serde(rename = "srpDesktop")]
    pub srp_desktop: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Amenity {
    pub name: Option<String>,
}

fn value_to_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Accept a JSON number or a numeric string; anything else becomes `None`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
