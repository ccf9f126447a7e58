//! Experience analyzer port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::analysis::AnalysisResult;

/// Analysis errors
#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("No data returned")]
    NoDataReturned,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for structured experience analysis via an AI endpoint.
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Analyze free-form experience text into a structured result.
    ///
    /// One non-streaming round trip declaring the response schema the
    /// endpoint is contractually expected to honor. Numeric ranges in
    /// the parsed result are trusted as returned.
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError>;
}

/// Blanket implementation for boxed analyzer types
#[async_trait]
impl Analyzer for Box<dyn Analyzer> {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        self.as_ref().analyze(text).await
    }
}
