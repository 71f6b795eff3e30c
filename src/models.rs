//! Wire types for the image-generation service.
//!
//! - [`ImageRequest`]: body of the `POST /v1/images/generations` call
//! - [`ImageResponse`]: successful reply, of which only the first URL is used
//! - [`ApiErrorEnvelope`]: the service's error shape, used only for logging

use serde::{Deserialize, Serialize};

/// Request body sent to the image service.
///
/// # Fields
///
/// * `prompt` - The combined headline prompt (at most 1000 characters)
/// * `n` - Number of images to generate
/// * `size` - Image dimensions, e.g. `"1024x1024"`
#[derive(Debug, Serialize)]
pub struct ImageRequest {
    pub prompt: String,
    pub n: u32,
    pub size: String,
}

/// Successful reply from the image service.
#[derive(Debug, Deserialize)]
pub struct ImageResponse {
    /// Unix timestamp (seconds) at which the images were created.
    pub created: i64,
    /// Generated images, in service order.
    pub data: Vec<ImageData>,
}

/// One generated image.
#[derive(Debug, Deserialize)]
pub struct ImageData {
    /// Temporary download URL for the image.
    pub url: String,
}

/// Error reply from the image service, e.g. on a bad key or rejected prompt.
#[derive(Debug, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}

impl ApiErrorEnvelope {
    /// Pull the service's error message out of a raw body, if it is one.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorEnvelope>(body)
            .ok()
            .map(|e| e.error.message)
    }
}
