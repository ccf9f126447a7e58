//! Gemini structured-generation analyzer adapter
//!
//! Declares the full analysis response schema on every request; the
//! endpoint is contractually expected to echo a single JSON document
//! conforming to it. The parsed result is trusted as returned — no
//! post-parse range checks happen here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::application::ports::{AnalysisError, Analyzer};
use crate::domain::analysis::{AnalysisPrompt, AnalysisResult};

/// Gemini model to use for structured analysis
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini API base URL
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// Request types for Gemini API

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

// Response types for Gemini API

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// The strict response schema declared to the endpoint: field names,
/// types, and the three-way skill-category enum.
fn response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "vibe": { "type": "STRING" },
            "vibeEmoji": { "type": "STRING" },
            "badges": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "emoji": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "color": { "type": "STRING" }
                    }
                }
            },
            "skills": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "category": { "type": "STRING", "enum": ["Soft Skill", "Hard Skill", "Tool/Tech"] },
                        "score": { "type": "INTEGER" }
                    }
                }
            },
            "elevatorPitch": { "type": "STRING" },
            "resumePoints": { "type": "ARRAY", "items": { "type": "STRING" } },
            "careers": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "matchPercentage": { "type": "INTEGER" },
                        "description": { "type": "STRING" },
                        "avgSalary": { "type": "STRING" },
                        "outlook": { "type": "STRING" }
                    }
                }
            },
            "interviewQuestions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "question": { "type": "STRING" },
                        "tip": { "type": "STRING" }
                    }
                }
            }
        }
    })
}

/// Gemini structured analyzer
pub struct GeminiAnalyzer {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiAnalyzer {
    /// Create a new Gemini analyzer with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: API_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a new Gemini analyzer with a custom model
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::new(api_key)
        }
    }

    /// Override the API base URL (used by tests against a mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the API URL
    fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    /// Build the request body with the declared response schema
    fn build_request(&self, prompt: &AnalysisPrompt) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.content().to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
            },
        }
    }

    /// Extract text from response
    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        let parts: Vec<&str> = response
            .candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(""))
        }
    }
}

#[async_trait]
impl Analyzer for GeminiAnalyzer {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        let url = self.api_url();
        let prompt = AnalysisPrompt::build(text);
        let body = self.build_request(&prompt);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalysisError::RequestFailed(e.to_string()))?;

        let status = response.status();

        // Handle HTTP errors
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AnalysisError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AnalysisError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AnalysisError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        // Parse response envelope
        let response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::ParseError(e.to_string()))?;

        // Check for API error in response body
        if let Some(error) = response.error {
            return Err(AnalysisError::ApiError(error.message));
        }

        // Extract and parse the echoed JSON document
        let json_text = Self::extract_text(&response).ok_or(AnalysisError::NoDataReturned)?;

        if json_text.trim().is_empty() {
            return Err(AnalysisError::NoDataReturned);
        }

        serde_json::from_str(&json_text).map_err(|e| AnalysisError::ParseError(e.to_string()))
    }
}
