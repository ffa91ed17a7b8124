pub mod error;
pub mod types;

pub use error::{HotelsApiError, Result};
pub use types::{
    Address, Amenity, LocationSearchResponse, Property, PropertyListResponse, DESTINATION_GROUPS,
};

use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

pub const DEFAULT_HOST: &str = "hotels-com-provider.p.rapidapi.com";

const LOCALE: &str = "en_US";
const CURRENCY: &str = "USD";

pub struct HotelsClient {
    client: reqwest::Client,
    api_key: String,
    host: String,
    base_url: String,
}

impl HotelsClient {
    pub fn new(api_key: impl Into<String>, host: impl Into<String>) -> Self {
        let host = host.into();
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: format!("https://{host}"),
            host,
        }
    }

    /// Point the client at a different origin while keeping the RapidAPI host header.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert("x-rapidapi-key", HeaderValue::from_str(&self.api_key)?);
        headers.insert("x-rapidapi-host", HeaderValue::from_str(&self.host)?);
        Ok(headers)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .headers(self.headers()?)
            .query(query)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(HotelsApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Resolve free text (e.g. "Goa") to location suggestions.
    pub async fn search_locations(&self, query: &str) -> Result<LocationSearchResponse> {
        tracing::debug!(query, "Searching hotel locations");
        self.get(
            "/locations/v2/search",
            &[("query", query), ("locale", LOCALE), ("currency", CURRENCY)],
        )
        .await
    }

    /// List properties for a destination between two `YYYY-MM-DD` dates.
    pub async fn list_properties(
        &self,
        destination_id: &str,
        check_in: &str,
        check_out: &str,
    ) -> Result<PropertyListResponse> {
        tracing::debug!(destination_id, check_in, check_out, "Listing properties");
        self.get(
            "/properties/list",
            &[
                ("destinationId", destination_id),
                ("checkIn", check_in),
                ("checkOut", check_out),
                ("adults1", "1"),
                ("locale", LOCALE),
                ("currency", CURRENCY),
            ],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_derives_base_url_from_host() {
        let client = HotelsClient::new("key", DEFAULT_HOST);
        assert_eq!(client.base_url, "https://hotels-com-provider.p.rapidapi.com");
        assert_eq!(client.host(), DEFAULT_HOST);
    }

    #[test]
    fn headers_carry_rapidapi_credentials() {
        let client = HotelsClient::new("abc123", DEFAULT_HOST);
        let headers = client.headers().unwrap();
        assert_eq!(headers["x-rapidapi-key"], "abc123");
        assert_eq!(headers["x-rapidapi-host"], DEFAULT_HOST);
    }

    #[test]
    fn invalid_key_is_a_header_error() {
        let client = HotelsClient::new("bad\nkey", DEFAULT_HOST);
        assert!(matches!(client.headers(), Err(HotelsApiError::Header(_))));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let client = HotelsClient::new("key", DEFAULT_HOST).with_base_url("http://127.0.0.1:1");
        let err = client.search_locations("Goa").await.unwrap_err();
        assert!(matches!(err, HotelsApiError::Network(_)));
    }
}
