//! Fixed instruction prompts sent to the generative model.

pub const PARAMS_TEMPERATURE: f32 = 0.2;
pub const LOCATION_TEMPERATURE: f32 = 0.1;
pub const LISTINGS_TEMPERATURE: f32 = 0.7;

/// Number of hotels the model is asked to invent.
pub const AI_LISTING_COUNT: usize = 5;

pub fn extract_params(query: &str) -> String {
    format!(
        r#"Extract search parameters from this hotel search query: "{query}".
Return a JSON object with these fields if present in the query:
location, checkIn (date), checkOut (date), guests (number),
priceMin (number), priceMax (number), amenities (array of strings).
Format in valid JSON with no additional text."#
    )
}

pub fn extract_location(query: &str) -> String {
    format!(
        r#"Extract only the location name from this hotel search query: "{query}".
Return just the location name, nothing else. If no location is found, return "null"."#
    )
}

pub fn generate_listings(location: &str, price_min: f64, price_max: f64) -> String {
    format!(
        r#"Generate {AI_LISTING_COUNT} realistic hotels in {location}.
Return a JSON array with hotels having these properties:
{{
  "name": (real hotel name),
  "location": (detailed address in {location}),
  "price": (realistic price number between {price_min} and {price_max}),
  "rating": (number between 3 and 5),
  "tags": (array of 3-5 realistic amenities),
  "description": (short description of the hotel)
}}
Return just the JSON array without any additional text."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_prompt_quotes_query() {
        let p = extract_params("beach hotel in goa");
        assert!(p.contains("\"beach hotel in goa\""));
        assert!(p.contains("priceMax"));
    }

    #[test]
    fn listings_prompt_carries_band() {
        let p = generate_listings("Goa", 1500.0, 15000.0);
        assert!(p.starts_with("Generate 5 realistic hotels in Goa."));
        assert!(p.contains("between 1500 and 15000"));
    }
}
