//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    // Validate value based on key type
    validate_config_value(key, value)?;

    // Load existing config
    let mut config = store.load().await?;

    // Update the appropriate field
    match key {
        "api_key" => config.api_key = Some(value.to_string()),
        "analysis_model" => config.analysis_model = Some(value.to_string()),
        "vision_model" => config.vision_model = Some(value.to_string()),
        "camera_index" => {
            config.camera_index = Some(value.parse().map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Expected a non-negative integer".to_string(),
            })?)
        }
        "clipboard" => {
            config.clipboard = Some(parse_bool(key, value)?);
        }
        _ => unreachable!("key validated above"),
    }

    store.save(&config).await?;
    presenter.success(&format!("Set {} = {}", key, display_value(key, value)));
    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load().await?;
    let value = config_value(&config, key);
    presenter.output(&value.unwrap_or_else(|| "(not set)".to_string()));
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = config_value(&config, key);
        let shown = match value {
            Some(v) if *key == "api_key" => mask_secret(&v),
            Some(v) => v,
            None => "(not set)".to_string(),
        };
        presenter.key_value(key, &shown);
    }
    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().display().to_string());
    Ok(())
}

/// Read a config field as a display string
fn config_value(config: &crate::domain::config::AppConfig, key: &str) -> Option<String> {
    match key {
        "api_key" => config.api_key.clone(),
        "analysis_model" => config.analysis_model.clone(),
        "vision_model" => config.vision_model.clone(),
        "camera_index" => config.camera_index.map(|i| i.to_string()),
        "clipboard" => config.clipboard.map(|b| b.to_string()),
        _ => None,
    }
}

/// Validate a value before it is written
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "api_key" | "analysis_model" | "vision_model" => {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must not be empty".to_string(),
                });
            }
            Ok(())
        }
        "camera_index" => value
            .parse::<u32>()
            .map(|_| ())
            .map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Expected a non-negative integer".to_string(),
            }),
        "clipboard" => parse_bool(key, value).map(|_| ()),
        _ => Ok(()),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: "Expected a boolean: true or false".to_string(),
        }),
    }
}

/// Secrets are echoed masked
fn display_value(key: &str, value: &str) -> String {
    if key == "api_key" {
        mask_secret(value)
    } else {
        value.to_string()
    }
}

fn mask_secret(value: &str) -> String {
    if value.len() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", &value[..4])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::AppConfig;
    use crate::infrastructure::XdgConfigStore;

    fn temp_store() -> (tempfile::TempDir, XdgConfigStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        (dir, store)
    }

    #[tokio::test]
    async fn set_and_get_round_trip() {
        let (_dir, store) = temp_store();
        let presenter = Presenter::new();

        handle_config_command(
            ConfigAction::Set {
                key: "camera_index".to_string(),
                value: "2".to_string(),
            },
            &store,
            &presenter,
        )
        .await
        .unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.camera_index, Some(2));
    }

    #[tokio::test]
    async fn set_unknown_key_fails() {
        let (_dir, store) = temp_store();
        let presenter = Presenter::new();

        let result = handle_config_command(
            ConfigAction::Set {
                key: "unknown".to_string(),
                value: "x".to_string(),
            },
            &store,
            &presenter,
        )
        .await;

        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[tokio::test]
    async fn set_invalid_camera_index_fails() {
        let (_dir, store) = temp_store();
        let presenter = Presenter::new();

        let result = handle_config_command(
            ConfigAction::Set {
                key: "camera_index".to_string(),
                value: "not-a-number".to_string(),
            },
            &store,
            &presenter,
        )
        .await;

        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[tokio::test]
    async fn set_invalid_boolean_fails() {
        let (_dir, store) = temp_store();
        let presenter = Presenter::new();

        let result = handle_config_command(
            ConfigAction::Set {
                key: "clipboard".to_string(),
                value: "maybe".to_string(),
            },
            &store,
            &presenter,
        )
        .await;

        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn config_value_reads_all_keys() {
        let config = AppConfig {
            api_key: Some("k".to_string()),
            analysis_model: Some("m".to_string()),
            vision_model: Some("v".to_string()),
            camera_index: Some(1),
            clipboard: Some(true),
        };

        assert_eq!(config_value(&config, "api_key"), Some("k".to_string()));
        assert_eq!(
            config_value(&config, "analysis_model"),
            Some("m".to_string())
        );
        assert_eq!(config_value(&config, "vision_model"), Some("v".to_string()));
        assert_eq!(config_value(&config, "camera_index"), Some("1".to_string()));
        assert_eq!(config_value(&config, "clipboard"), Some("true".to_string()));
    }

    #[test]
    fn mask_secret_hides_tail() {
        assert_eq!(mask_secret("abcdef123456"), "abcd****");
        assert_eq!(mask_secret("ab"), "****");
    }
}
