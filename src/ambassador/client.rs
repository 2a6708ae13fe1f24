//! HTTP client for the Ambassador admin endpoints

use log::debug;
use reqwest::Client;

use crate::config::Settings;
use crate::environment::Environment;
use crate::error::{AmbError, Result};

use super::models::{PointingMap, UpdateRequest};

/// Client for one Ambassador instance
///
/// Holds the base URL for the current environment; the shell rebuilds the
/// client whenever the operator changes environment.
pub struct AmbassadorClient {
    client: Client,
    base_url: String,
    list_path: String,
    update_path: String,
}

impl AmbassadorClient {
    /// Create a client for the given environment with fixed per-call timeouts
    pub fn new(env: &Environment, settings: &Settings) -> Self {
        let client = Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: env.base_url.trim_end_matches('/').to_string(),
            list_path: settings.list_path.clone(),
            update_path: settings.update_path.clone(),
        }
    }

    /// Create a client pointing straight at a base URL (for mock servers)
    pub fn with_base_url(base_url: &str, settings: &Settings) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            list_path: settings.list_path.clone(),
            update_path: settings.update_path.clone(),
        }
    }

    /// The base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the current service→URL pointing map.
    ///
    /// The body must parse as a JSON object of string values; any other
    /// shape is a parse error for this call. Non-2xx and transport failures
    /// propagate as errors — there are no partial results.
    pub async fn list_pointings(&self) -> Result<PointingMap> {
        let url = format!("{}{}", self.base_url, self.list_path);
        debug!("Fetching pointings from: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(AmbError::Api {
                status: response.status().as_u16(),
                message: "Failed to fetch pointing list".to_string(),
            });
        }

        let body = response.text().await?;
        let value: serde_json::Value = serde_json::from_str(&body)?;
        let map: PointingMap = serde_json::from_value(value)
            .map_err(|e| AmbError::Parse(format!("pointing list is not a string map: {}", e)))?;

        debug!("Fetched {} pointings", map.len());
        Ok(map)
    }

    /// Submit a pointing update and return the raw response body verbatim.
    ///
    /// The body is returned for any HTTP status — the caller treats it as
    /// diagnostic text and determines success by re-fetching the list, not
    /// from this response. Only transport failure produces an error.
    pub async fn update_pointing(&self, service: &str, new_url: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, self.update_path);
        let request = UpdateRequest {
            system: service.to_string(),
            url: new_url.to_string(),
        };
        debug!("Posting update for '{}' to: {}", service, url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        debug!("Update response: status={}, {} bytes", status, body.len());
        Ok(body)
    }
}


#[cfg(test)]
mod http_tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::api;

    fn mock_client(server: &MockServer) -> AmbassadorClient {
        AmbassadorClient::with_base_url(&server.uri(), &Settings::default())
    }

    #[tokio::test]
    async fn test_list_pointings_parses_object() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(api::LIST_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "svc-b": "http://b:9000",
                "svc-a": "http://a:9000"
            })))
            .mount(&server)
            .await;

        let map = mock_client(&server).list_pointings().await.unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["svc-a"], "http://a:9000");
        // BTreeMap keeps display order stable
        assert_eq!(map.keys().next().unwrap(), "svc-a");
    }

    #[tokio::test]
    async fn test_list_pointings_repeatable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(api::LIST_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "svc-a": "http://a:9000"
            })))
            .expect(2)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        // Two reads with no intervening update return identical maps
        let first = client.list_pointings().await.unwrap();
        let second = client.list_pointings().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_list_pointings_rejects_non_object() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(api::LIST_PATH))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!(["not", "a", "map"])),
            )
            .mount(&server)
            .await;

        let err = mock_client(&server).list_pointings().await.unwrap_err();
        match err {
            AmbError::Parse(msg) => assert!(msg.contains("not a string map")),
            other => panic!("Expected AmbError::Parse, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_pointings_rejects_non_string_values() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(api::LIST_PATH))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"svc-a": 42})),
            )
            .mount(&server)
            .await;

        assert!(mock_client(&server).list_pointings().await.is_err());
    }

    #[tokio::test]
    async fn test_list_pointings_non_2xx_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(api::LIST_PATH))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = mock_client(&server).list_pointings().await.unwrap_err();
        match err {
            AmbError::Api { status, .. } => assert_eq!(status, 503),
            other => panic!("Expected AmbError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_pointing_sends_expected_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(api::UPDATE_PATH))
            .and(header("Content-Type", "application/json"))
            .and(body_json(serde_json::json!({
                "system": "svc-a",
                "url": "http://new:9000"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK: svc-a updated"))
            .expect(1)
            .mount(&server)
            .await;

        let body = mock_client(&server)
            .update_pointing("svc-a", "http://new:9000")
            .await
            .unwrap();
        assert_eq!(body, "OK: svc-a updated");
    }

    #[tokio::test]
    async fn test_update_pointing_returns_body_on_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(api::UPDATE_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        // A failed POST is diagnostic text, not an error
        let body = mock_client(&server)
            .update_pointing("svc-a", "http://new:9000")
            .await
            .unwrap();
        assert_eq!(body, "boom");
    }
}
