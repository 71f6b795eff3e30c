//! Image-generation API client.
//!
//! Sends the combined prompt to an OpenAI-compatible
//! `POST /v1/images/generations` endpoint and returns the URL of the first
//! generated image. A single attempt is made; any failure is returned as-is.
//!
//! # Flow
//!
//! 1. Read the credential from the environment ([`ApiKey::from_env`])
//! 2. POST `{prompt, n, size}` with bearer auth ([`request_image`])
//! 3. Read the whole body, then decode it ([`parse_image_response`])

use crate::config::{IMAGE_COUNT, IMAGE_SIZE};
use crate::error::{HeadlineArtError, Result};
use crate::models::{ApiErrorEnvelope, ImageRequest, ImageResponse};
use crate::pipeline::ImageGenerator;
use chrono::DateTime;
use reqwest::Client;
use std::fmt;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// API credential read from the environment.
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        ApiKey(key.into())
    }

    /// Read the credential from `var`.
    ///
    /// # Errors
    ///
    /// [`HeadlineArtError::Config`] if the variable is unset, empty, or not
    /// valid Unicode.
    pub fn from_env(var: &str) -> Result<Self> {
        match std::env::var(var) {
            Ok(key) if !key.is_empty() => Ok(ApiKey::new(key)),
            _ => Err(HeadlineArtError::Config(var.to_string())),
        }
    }

    fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Client for an OpenAI-style image-generation endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiImageClient {
    client: Client,
    endpoint: String,
    api_key_var: String,
}

impl OpenAiImageClient {
    pub fn new(client: Client, endpoint: impl Into<String>, api_key_var: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key_var: api_key_var.into(),
        }
    }
}

impl ImageGenerator for OpenAiImageClient {
    #[instrument(level = "info", skip_all, fields(endpoint = %self.endpoint))]
    async fn generate(&self, prompt: &str) -> Result<String> {
        info!(%prompt, "Sending prompt to image service");
        let key = ApiKey::from_env(&self.api_key_var)?;
        request_image(&self.client, &self.endpoint, &key, prompt).await
    }
}

/// POST `prompt` to `endpoint` and return the first image URL.
#[instrument(level = "info", skip_all, fields(%endpoint))]
pub async fn request_image(
    client: &Client,
    endpoint: &str,
    key: &ApiKey,
    prompt: &str,
) -> Result<String> {
    let request = ImageRequest {
        prompt: prompt.to_string(),
        n: IMAGE_COUNT,
        size: IMAGE_SIZE.to_string(),
    };

    let t0 = Instant::now();
    let response = client
        .post(endpoint)
        .bearer_auth(key.expose())
        .json(&request)
        .send()
        .await?;
    let status = response.status();
    let body = response.text().await?;
    info!(
        %status,
        elapsed_ms = t0.elapsed().as_millis() as u64,
        bytes = body.len(),
        "Image service replied"
    );

    parse_image_response(&body)
}

/// Decode an image-service reply and return its first image URL.
///
/// # Errors
///
/// * [`HeadlineArtError::ResponseFormat`] if the body is not the expected
///   JSON, or the first URL is not an absolute URL
/// * [`HeadlineArtError::EmptyResult`] if `data` is empty
///
/// Both carry the raw body.
pub fn parse_image_response(body: &str) -> Result<String> {
    let response: ImageResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(e) => {
            error!(
                error = %e,
                api_response = %body,
                service_message = ?ApiErrorEnvelope::message_from(body),
                "Failed to decode image service response"
            );
            return Err(HeadlineArtError::ResponseFormat {
                reason: e.to_string(),
                body: body.to_string(),
            });
        }
    };

    match DateTime::from_timestamp(response.created, 0) {
        Some(created) => debug!(created = %created.to_rfc3339(), "Image batch timestamp"),
        None => warn!(created = response.created, "Image batch timestamp out of range"),
    }

    let Some(first) = response.data.into_iter().next() else {
        error!(api_response = %body, "Image service returned no images");
        return Err(HeadlineArtError::EmptyResult {
            body: body.to_string(),
        });
    };

    let parsed = Url::parse(&first.url).map_err(|e| HeadlineArtError::ResponseFormat {
        reason: format!("image URL {:?} is invalid: {}", first.url, e),
        body: body.to_string(),
    })?;
    info!(host = parsed.host_str().unwrap_or_default(), "Image generated");

    Ok(first.url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    const UNSET_VAR: &str = "HEADLINE_ART_TEST_KEY_THAT_IS_NEVER_SET";
    // nothing listens on port 1
    const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

    #[test]
    fn test_parse_first_url() {
        let body = r#"{"created":1700000000,"data":[{"url":"https://img.example/one.png"},{"url":"https://img.example/two.png"}]}"#;
        assert_eq!(parse_image_response(body).unwrap(), "https://img.example/one.png");
    }

    #[test]
    fn test_parse_empty_data_carries_body() {
        let body = r#"{"created":1,"data":[]}"#;
        match parse_image_response(body) {
            Err(e @ HeadlineArtError::EmptyResult { .. }) => {
                assert!(e.to_string().contains(body));
            }
            other => panic!("expected EmptyResult, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_invalid_json_carries_body() {
        let body = "<html>Bad Gateway</html>";
        match parse_image_response(body) {
            Err(HeadlineArtError::ResponseFormat { body: raw, .. }) => assert_eq!(raw, body),
            other => panic!("expected ResponseFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_envelope_is_format_error() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        assert!(matches!(
            parse_image_response(body),
            Err(HeadlineArtError::ResponseFormat { .. })
        ));
    }

    #[test]
    fn test_parse_relative_url_is_format_error() {
        let body = r#"{"created":1,"data":[{"url":"/images/a.png"}]}"#;
        assert!(matches!(
            parse_image_response(body),
            Err(HeadlineArtError::ResponseFormat { .. })
        ));
    }

    #[test]
    fn test_api_key_missing() {
        match ApiKey::from_env(UNSET_VAR) {
            Err(HeadlineArtError::Config(var)) => assert_eq!(var, UNSET_VAR),
            other => panic!("expected Config, got {:?}", other),
        }
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::new("sk-secret");
        assert!(!format!("{:?}", key).contains("sk-secret"));
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let endpoint = format!("{}/v1/images/generations", server.url());

        let client = OpenAiImageClient::new(Client::new(), endpoint, UNSET_VAR);
        let result = client.generate("A calm day").await;

        assert!(matches!(result, Err(HeadlineArtError::Config(_))));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_request_image_sends_expected_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/images/generations")
            .match_header("authorization", "Bearer sk-test")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "prompt": "Markets Rally",
                "n": 1,
                "size": "1024x1024"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"created":1700000000,"data":[{"url":"https://img.example/news.png"}]}"#)
            .create_async()
            .await;
        let endpoint = format!("{}/v1/images/generations", server.url());

        let url = request_image(&Client::new(), &endpoint, &ApiKey::new("sk-test"), "Markets Rally")
            .await
            .unwrap();

        assert_eq!(url, "https://img.example/news.png");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_request_image_empty_result() {
        let reply = r#"{"created":1,"data":[]}"#;
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(reply)
            .create_async()
            .await;

        let result = request_image(&Client::new(), &server.url(), &ApiKey::new("sk-test"), "x").await;
        match result {
            Err(e @ HeadlineArtError::EmptyResult { .. }) => assert!(e.to_string().contains(reply)),
            other => panic!("expected EmptyResult, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_request_image_unauthorized_body() {
        let reply = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .match_header("authorization", "Bearer sk-bad")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(reply)
            .create_async()
            .await;

        let result = request_image(&Client::new(), &server.url(), &ApiKey::new("sk-bad"), "x").await;
        match result {
            Err(HeadlineArtError::ResponseFormat { body, .. }) => assert_eq!(body, reply),
            other => panic!("expected ResponseFormat, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_request_image_network_error() {
        let result = request_image(&Client::new(), UNREACHABLE_URL, &ApiKey::new("sk-test"), "x").await;
        assert!(matches!(result, Err(HeadlineArtError::Network(_))));
    }
}
