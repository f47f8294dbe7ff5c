use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde::Deserialize;

use crate::config::GeocodingSettings;

const GEOCODE_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl GeocodeClient {
    pub fn new(settings: &GeocodingSettings) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(GEOCODE_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        })
    }

    /// Look up a free-text place query. `Ok(None)` means the geocoder had
    /// no results for the query, which is a valid outcome rather than an
    /// error.
    pub async fn find_place(&self, query: &str) -> Result<Option<String>> {
        let url = format!("{}/geocode/v1/json", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("q", query), ("key", self.api_key.as_str())])
            .send()
            .await
            .context("Failed to send request to geocoding endpoint")?;

        match response.status() {
            reqwest::StatusCode::OK => {
                let payload = response
                    .json::<GeocodeResponse>()
                    .await
                    .context("Failed to parse geocoding response JSON")?;

                if payload.total_results == 0 {
                    return Ok(None);
                }

                Ok(payload.results.into_iter().next().map(|result| result.formatted))
            }
            reqwest::StatusCode::UNAUTHORIZED => {
                Err(anyhow!("Invalid geocoding API key. Please check your key configuration."))
            }
            reqwest::StatusCode::PAYMENT_REQUIRED => {
                Err(anyhow!("Geocoding quota exceeded for the configured API key."))
            }
            reqwest::StatusCode::TOO_MANY_REQUESTS => {
                Err(anyhow!("Geocoding rate limit exceeded. Please wait before trying again."))
            }
            status => {
                let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
                Err(anyhow!(
                    "Geocoding API error (status {}): {}",
                    status,
                    error_text
                ))
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    total_results: u64,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted: String,
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::GeocodeClient;
    use crate::config::GeocodingSettings;

    fn sample_settings(base_url: String) -> GeocodingSettings {
        GeocodingSettings {
            api_key: "geo-key".to_string(),
            base_url,
        }
    }

    #[tokio::test]
    async fn find_place_returns_formatted_address() {
        let server = MockServer::start_async().await;

        let _mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/geocode/v1/json")
                    .query_param("q", "Paris")
                    .query_param("key", "geo-key");

                then.status(200).json_body(json!({
                    "total_results": 1,
                    "results": [
                        { "formatted": "Paris, France" }
                    ]
                }));
            })
            .await;

        let client = GeocodeClient::new(&sample_settings(server.base_url())).unwrap();
        let location = client.find_place("Paris").await.unwrap();

        assert_eq!(location, Some("Paris, France".to_string()));
        _mock.assert_async().await;
    }

    #[tokio::test]
    async fn find_place_maps_zero_results_to_none() {
        let server = MockServer::start_async().await;

        let _mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/geocode/v1/json")
                    .query_param("q", "Nowhereville");

                then.status(200).json_body(json!({
                    "total_results": 0,
                    "results": []
                }));
            })
            .await;

        let client = GeocodeClient::new(&sample_settings(server.base_url())).unwrap();
        let location = client.find_place("Nowhereville").await.unwrap();

        assert_eq!(location, None);
        _mock.assert_async().await;
    }

    #[tokio::test]
    async fn find_place_errors_on_invalid_key() {
        let server = MockServer::start_async().await;

        let _mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/geocode/v1/json");
                then.status(401);
            })
            .await;

        let client = GeocodeClient::new(&sample_settings(server.base_url())).unwrap();
        let err = client.find_place("Paris").await.unwrap_err();

        assert!(err.to_string().contains("Invalid geocoding API key"));
        _mock.assert_async().await;
    }
}
