//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// SkillBridge - turn informal experience into a career profile
#[derive(Parser, Debug)]
#[command(name = "skillbridge")]
#[command(version = "1.0.0")]
#[command(about = "AI-powered experience analyzer using Google Gemini")]
#[command(long_about = None)]
pub struct Cli {
    /// Experience description to analyze ("-" reads from stdin)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Scan a document with the camera and append the digitized text
    #[arg(short = 's', long)]
    pub scan: bool,

    /// Digitize an existing photo instead of using the camera
    #[arg(short = 'i', long, value_name = "PATH", conflicts_with = "scan")]
    pub image: Option<PathBuf>,

    /// Turn the torch on before capturing (if the camera supports it)
    #[arg(long, requires = "scan")]
    pub flash: bool,

    /// Zoom level for capture, clamped to the supported range
    #[arg(long, value_name = "LEVEL", requires = "scan")]
    pub zoom: Option<f64>,

    /// Camera device index
    #[arg(long, value_name = "INDEX")]
    pub camera_index: Option<u32>,

    /// Copy the generated elevator pitch to the clipboard
    #[arg(short = 'c', long)]
    pub clipboard: bool,

    /// Print the raw analysis result as JSON
    #[arg(long)]
    pub json: bool,

    /// Gemini model for experience analysis
    #[arg(long, value_name = "MODEL")]
    pub analysis_model: Option<String>,

    /// Gemini model for document digitization
    #[arg(long, value_name = "MODEL")]
    pub vision_model: Option<String>,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed analyze options (one-shot mode)
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub text: Option<String>,
    pub scan: bool,
    pub image: Option<PathBuf>,
    pub flash: bool,
    pub zoom: Option<f64>,
    pub camera_index: u32,
    pub clipboard: bool,
    pub json: bool,
    pub analysis_model: String,
    pub vision_model: String,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key",
    "analysis_model",
    "vision_model",
    "camera_index",
    "clipboard",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
