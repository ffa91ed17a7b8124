//! Free-text query to [`SearchParams`].
//!
//! The model is asked for a JSON object; whatever span between the first
//! `{` and the last `}` parses is merged over `{query}`. Any failure yields
//! `{query}` alone. No retries.

use std::sync::Arc;

use ai_client::{extract_json_object, TextModel};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use hotelsense_common::SearchParams;

use crate::prompts;

#[derive(Clone)]
pub struct QueryNormalizer {
    model: Arc<dyn TextModel>,
}

impl QueryNormalizer {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    /// Never fails; the result always carries `query` verbatim.
    pub async fn normalize(&self, query: &str) -> SearchParams {
        let prompt = prompts::extract_params(query);
        match self.model.generate(&prompt, prompts::PARAMS_TEMPERATURE).await {
            Ok(text) => parse_search_params(query, &text),
            Err(e) => {
                warn!(error = %e, "Query normalization failed, using raw query");
                SearchParams::from_query(query)
            }
        }
    }

    /// Ask the model for just a location name. `None` on failure, on an
    /// empty answer, or when the model answers `null`.
    pub async fn extract_location(&self, query: &str) -> Option<String> {
        let prompt = prompts::extract_location(query);
        let text = match self.model.generate(&prompt, prompts::LOCATION_TEMPERATURE).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Location extraction failed");
                return None;
            }
        };

        let location = text.trim().trim_matches('"').trim();
        if location.is_empty() || location.eq_ignore_ascii_case("null") {
            None
        } else {
            Some(location.to_string())
        }
    }
}

/// Merge the first JSON object found in `text` over `{query}`.
///
/// Fields are read leniently: numbers may arrive as strings, amenities as a
/// comma-separated string, and a field of the wrong type is dropped without
/// discarding the others. `query` itself is never overwritten.
pub fn parse_search_params(query: &str, text: &str) -> SearchParams {
    let mut params = SearchParams::from_query(query);

    let Some(span) = extract_json_object(text) else {
        debug!("No JSON object in model response");
        return params;
    };
    let object = match serde_json::from_str::<Value>(span) {
        Ok(Value::Object(object)) => object,
        Ok(_) => return params,
        Err(e) => {
            warn!(error = %e, "Model returned unparseable JSON");
            return params;
        }
    };

    params.location = string_field(&object, "location");
    params.check_in = string_field(&object, "checkIn");
    params.check_out = string_field(&object, "checkOut");
    params.guests = number_field(&object, "guests")
        .filter(|n| *n >= 0.0 && *n <= f64::from(u32::MAX))
        .map(|n| n as u32);
    params.price_min = number_field(&object, "priceMin");
    params.price_max = number_field(&object, "priceMax");
    params.amenities = list_field(&object, "amenities");
    params
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

fn number_field(object: &Map<String, Value>, key: &str) -> Option<f64> {
    let number = match object.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn list_field(object: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    let items: Vec<String> = match object.get(key)? {
        Value::Array(values) => values
            .iter()
            .filter_map(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        _ => return None,
    };
    Some(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;

    struct Canned(Result<String, String>);

    #[async_trait]
    impl TextModel for Canned {
        async fn generate(&self, _prompt: &str, _temperature: f32) -> Result<String> {
            self.0.clone().map_err(|e| anyhow!(e))
        }
    }

    fn normalizer(reply: Result<&str, &str>) -> QueryNormalizer {
        let reply = reply.map(String::from).map_err(String::from);
        QueryNormalizer::new(Arc::new(Canned(reply)))
    }

    #[test]
    fn parses_fenced_object() {
        let text = "```json\n{\"location\": \"Goa\", \"guests\": 2, \"priceMin\": 2000, \"priceMax\": 5000, \"amenities\": [\"Spa\", \"Gym\"]}\n```";
        let params = parse_search_params("goa spa for two", text);
        assert_eq!(params.query, "goa spa for two");
        assert_eq!(params.location.as_deref(), Some("Goa"));
        assert_eq!(params.guests, Some(2));
        assert_eq!(params.price_min, Some(2000.0));
        assert_eq!(params.price_max, Some(5000.0));
        assert_eq!(params.amenities, Some(vec!["Spa".to_string(), "Gym".to_string()]));
    }

    #[test]
    fn no_braces_yields_query_only() {
        let params = parse_search_params("anything", "I could not find parameters.");
        assert_eq!(params, SearchParams::from_query("anything"));
    }

    #[test]
    fn broken_json_yields_query_only() {
        let params = parse_search_params("q", "{\"location\": \"Goa\",,}");
        assert_eq!(params, SearchParams::from_query("q"));
    }

    #[test]
    fn model_query_key_never_overrides() {
        let params = parse_search_params("original", r#"{"query": "hijacked", "location": "Delhi"}"#);
        assert_eq!(params.query, "original");
        assert_eq!(params.location.as_deref(), Some("Delhi"));
    }

    #[test]
    fn lenient_numbers_and_amenities() {
        let text = r#"{"guests": "3", "priceMax": "12,000", "priceMin": null, "amenities": "Free Wi-Fi, Pool"}"#;
        let params = parse_search_params("q", text);
        assert_eq!(params.guests, Some(3));
        assert_eq!(params.price_max, Some(12000.0));
        assert_eq!(params.price_min, None);
        assert_eq!(
            params.amenities,
            Some(vec!["Free Wi-Fi".to_string(), "Pool".to_string()])
        );
    }

    #[test]
    fn wrong_types_are_dropped_individually() {
        let text = r#"{"location": 42, "guests": -1, "checkIn": "2026-11-01", "amenities": {"a": 1}}"#;
        let params = parse_search_params("q", text);
        assert_eq!(params.location, None);
        assert_eq!(params.guests, None);
        assert_eq!(params.check_in.as_deref(), Some("2026-11-01"));
        assert_eq!(params.amenities, None);
    }

    #[tokio::test]
    async fn normalize_falls_back_on_model_error() {
        let params = normalizer(Err("503 Service Unavailable"))
            .normalize("hotels near the beach")
            .await;
        assert_eq!(params, SearchParams::from_query("hotels near the beach"));
    }

    #[tokio::test]
    async fn normalize_merges_model_output() {
        let params = normalizer(Ok(r#"Here: {"location": "Mumbai", "checkOut": "2026-12-02"}"#))
            .normalize("mumbai till dec 2")
            .await;
        assert_eq!(params.query, "mumbai till dec 2");
        assert_eq!(params.location.as_deref(), Some("Mumbai"));
        assert_eq!(params.check_out.as_deref(), Some("2026-12-02"));
    }

    #[tokio::test]
    async fn extract_location_handles_null_and_quotes() {
        assert_eq!(normalizer(Ok("null")).extract_location("q").await, None);
        assert_eq!(normalizer(Ok("  \n")).extract_location("q").await, None);
        assert_eq!(
            normalizer(Ok("\"Jaipur\"\n")).extract_location("q").await,
            Some("Jaipur".to_string())
        );
        assert_eq!(normalizer(Err("down")).extract_location("q").await, None);
    }
}
