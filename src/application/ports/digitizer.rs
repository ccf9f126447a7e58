//! Document digitizer port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::capture::ImageData;

/// Digitization errors
#[derive(Debug, Clone, Error)]
pub enum DigitizeError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for document digitization via a vision-capable AI endpoint.
#[async_trait]
pub trait Digitizer: Send + Sync {
    /// Transcribe or describe a captured image as resume-relevant text.
    ///
    /// Exactly one round trip per call; no retry, no partial-text
    /// recovery. An endpoint response with no text yields an empty
    /// string, not an error.
    async fn digitize(&self, image: &ImageData) -> Result<String, DigitizeError>;
}

/// Blanket implementation for boxed digitizer types
#[async_trait]
impl Digitizer for Box<dyn Digitizer> {
    async fn digitize(&self, image: &ImageData) -> Result<String, DigitizeError> {
        self.as_ref().digitize(image).await
    }
}
