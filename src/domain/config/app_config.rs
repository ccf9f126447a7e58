//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Default Gemini model for structured experience analysis
pub const DEFAULT_ANALYSIS_MODEL: &str = "gemini-2.5-flash";

/// Default Gemini model for document digitization (vision)
pub const DEFAULT_VISION_MODEL: &str = "gemini-2.5-flash-image";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub analysis_model: Option<String>,
    pub vision_model: Option<String>,
    pub camera_index: Option<u32>,
    pub clipboard: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            analysis_model: Some(DEFAULT_ANALYSIS_MODEL.to_string()),
            vision_model: Some(DEFAULT_VISION_MODEL.to_string()),
            camera_index: Some(0),
            clipboard: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            analysis_model: other.analysis_model.or(self.analysis_model),
            vision_model: other.vision_model.or(self.vision_model),
            camera_index: other.camera_index.or(self.camera_index),
            clipboard: other.clipboard.or(self.clipboard),
        }
    }

    /// Get the analysis model, or the default if not set
    pub fn analysis_model_or_default(&self) -> &str {
        self.analysis_model.as_deref().unwrap_or(DEFAULT_ANALYSIS_MODEL)
    }

    /// Get the vision model, or the default if not set
    pub fn vision_model_or_default(&self) -> &str {
        self.vision_model.as_deref().unwrap_or(DEFAULT_VISION_MODEL)
    }

    /// Get the camera index, or 0 if not set
    pub fn camera_index_or_default(&self) -> u32 {
        self.camera_index.unwrap_or(0)
    }

    /// Get the clipboard setting, or false if not set
    pub fn clipboard_or_default(&self) -> bool {
        self.clipboard.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert!(config.api_key.is_none());
        assert_eq!(config.analysis_model, Some("gemini-2.5-flash".to_string()));
        assert_eq!(
            config.vision_model,
            Some("gemini-2.5-flash-image".to_string())
        );
        assert_eq!(config.camera_index, Some(0));
        assert_eq!(config.clipboard, Some(false));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.api_key.is_none());
        assert!(config.analysis_model.is_none());
        assert!(config.vision_model.is_none());
        assert!(config.camera_index.is_none());
        assert!(config.clipboard.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            api_key: Some("base_key".to_string()),
            analysis_model: Some("gemini-2.5-flash".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            api_key: Some("other_key".to_string()),
            analysis_model: None, // Should not override
            camera_index: Some(2),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.api_key, Some("other_key".to_string()));
        assert_eq!(merged.analysis_model, Some("gemini-2.5-flash".to_string()));
        assert_eq!(merged.camera_index, Some(2));
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig {
            api_key: Some("key".to_string()),
            clipboard: Some(true),
            ..Default::default()
        };

        let merged = base.merge(AppConfig::empty());

        assert_eq!(merged.api_key, Some("key".to_string()));
        assert_eq!(merged.clipboard, Some(true));
    }

    #[test]
    fn accessor_defaults() {
        let config = AppConfig::empty();
        assert_eq!(config.analysis_model_or_default(), "gemini-2.5-flash");
        assert_eq!(config.vision_model_or_default(), "gemini-2.5-flash-image");
        assert_eq!(config.camera_index_or_default(), 0);
        assert!(!config.clipboard_or_default());
    }

    #[test]
    fn accessor_configured_values() {
        let config = AppConfig {
            analysis_model: Some("gemini-custom".to_string()),
            camera_index: Some(1),
            ..Default::default()
        };
        assert_eq!(config.analysis_model_or_default(), "gemini-custom");
        assert_eq!(config.camera_index_or_default(), 1);
    }
}
