use std::sync::Arc;

use ai_client::{extract_json_array, TextModel};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use hotelsense_common::{Hotel, HotelSenseError};

use super::{ListingProvider, ListingRequest, DEFAULT_DESCRIPTION, HOTEL_IMAGES};
use crate::prompts;

const DEFAULT_PRICE_MIN: f64 = 1500.0;
const DEFAULT_PRICE_MAX: f64 = 15000.0;
const DEFAULT_RATING: f64 = 3.0;
const DEFAULT_TAGS: [&str; 3] = ["Free Wi-Fi", "Room Service", "Restaurant"];

/// Asks the generative model to invent plausible hotels for the location.
pub struct AiListings {
    model: Arc<dyn TextModel>,
}

impl AiListings {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }
}

#[async_trait]
impl ListingProvider for AiListings {
    fn name(&self) -> &'static str {
        "ai"
    }

    async fn fetch_listings(&self, request: &ListingRequest) -> Result<Vec<Hotel>> {
        info!(location = request.location.as_str(), "Generating AI hotels");

        let prompt = prompts::generate_listings(
            &request.location,
            request.params.price_min.unwrap_or(DEFAULT_PRICE_MIN),
            request.params.price_max.unwrap_or(DEFAULT_PRICE_MAX),
        );
        let text = self
            .model
            .generate(&prompt, prompts::LISTINGS_TEMPERATURE)
            .await
            .context("AI listing generation failed")?;

        hotels_from_model_text(&text, &request.location)
    }
}

/// Parse the first `[...]` span of `text` into hotels.
///
/// Entries that are not objects, or lack a name or a usable price, are
/// skipped. Ids are `hotel-ai-<index>` over the original array positions.
pub fn hotels_from_model_text(text: &str, location: &str) -> Result<Vec<Hotel>> {
    let span = extract_json_array(text)
        .ok_or_else(|| HotelSenseError::Provider("no JSON array in model response".into()))?;
    let entries: Vec<Value> =
        serde_json::from_str(span).context("Model returned an unparseable hotel array")?;

    Ok(entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| hotel_from_entry(index, entry, location))
        .collect())
}

fn hotel_from_entry(index: usize, entry: &Value, location: &str) -> Option<Hotel> {
    let object = entry.as_object()?;
    let name = object.get("name")?.as_str()?.trim();
    if name.is_empty() {
        return None;
    }
    let price = object.get("price").and_then(leading_integer)?;

    let text = |key: &str| {
        object
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    };

    let tags = match object.get("tags").and_then(Value::as_array) {
        Some(values) => values
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect(),
        None => DEFAULT_TAGS.iter().map(|t| t.to_string()).collect(),
    };

    Some(Hotel {
        id: format!("hotel-ai-{index}"),
        name: name.to_string(),
        location: text("location").unwrap_or(location).to_string(),
        price,
        rating: object.get("rating").and_then(float).unwrap_or(DEFAULT_RATING),
        image: HOTEL_IMAGES[index % HOTEL_IMAGES.len()].to_string(),
        tags,
        description: text("description").unwrap_or(DEFAULT_DESCRIPTION).to_string(),
    })
}

/// Integer part of a number, or of the leading digits of a string
/// (`"4500 INR"` → 4500).
fn leading_integer(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()).map(f64::trunc),
        Value::String(s) => {
            let digits: String = s
                .trim()
                .chars()
                .take_while(|c| c.is_ascii_digit() || *c == ',')
                .filter(|c| *c != ',')
                .collect();
            digits.parse().ok()
        }
        _ => None,
    }
}

fn float(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|f| f.is_finite())
}
