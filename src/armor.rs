//! Armor health-check GET
//!
//! Unrelated to the Ambassador admin endpoints; the URL is derived from the
//! Ambassador hostname by convention and the operator can point it anywhere.

use log::debug;
use reqwest::Client;

use crate::config::Settings;
use crate::error::{AmbError, Result};

/// Issue a plain GET against a health endpoint and return the body text.
///
/// A non-2xx status is an error carrying the body as the message; the caller
/// decides how to render it.
pub async fn check_health(url: &str, settings: &Settings) -> Result<String> {
    let client = Client::builder()
        .connect_timeout(settings.connect_timeout)
        .timeout(settings.timeout)
        .build()
        .unwrap_or_else(|_| Client::new());

    debug!("Health check GET: {}", url);
    let response = client.get(url).send().await?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if !status.is_success() {
        return Err(AmbError::Api {
            status: status.as_u16(),
            message: if body.is_empty() {
                "health check failed".to_string()
            } else {
                body
            },
        });
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_check_health_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health/check"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "UP"})),
            )
            .mount(&server)
            .await;

        let body = check_health(&format!("{}/health/check", server.uri()), &Settings::default())
            .await
            .unwrap();
        assert!(body.contains("UP"));
    }

    #[tokio::test]
    async fn test_check_health_failure_carries_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health/check"))
            .respond_with(ResponseTemplate::new(503).set_body_string("armor down"))
            .mount(&server)
            .await;

        let err = check_health(&format!("{}/health/check", server.uri()), &Settings::default())
            .await
            .unwrap_err();
        match err {
            AmbError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "armor down");
            }
            other => panic!("Expected AmbError::Api, got {:?}", other),
        }
    }
}
