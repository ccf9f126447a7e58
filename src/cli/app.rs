//! Main app runner for one-shot mode

use std::env;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use crate::application::ports::{Clipboard, ConfigStore};
use crate::application::{
    CaptureControls, ExperienceSessionUseCase, SessionError, ANALYZING_MESSAGE, SCANNING_MESSAGE,
};
use crate::domain::capture::{ImageData, ImageMimeType};
use crate::domain::config::AppConfig;
use crate::infrastructure::{
    ArboardClipboard, GeminiAnalyzer, GeminiDigitizer, NokhwaCaptureSource, XdgConfigStore,
};

use super::args::AnalyzeOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run the one-shot analyze flow
pub async fn run_analyze(options: AnalyzeOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    // Load API key from config or environment
    let api_key = match get_api_key().await {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Resolve input text ("-" reads stdin)
    let text = match options.text.as_deref() {
        Some("-") => {
            let mut buffer = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
                presenter.error(&format!("Failed to read stdin: {}", e));
                return ExitCode::from(EXIT_ERROR);
            }
            Some(buffer)
        }
        Some(t) => Some(t.to_string()),
        None => None,
    };

    let has_text = text.as_deref().is_some_and(|t| !t.trim().is_empty());
    if !has_text && !options.scan && options.image.is_none() {
        presenter.error("Nothing to analyze. Pass TEXT, --scan, or --image <path>.");
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    // Create adapters
    let capture = NokhwaCaptureSource::new(options.camera_index);
    let digitizer = GeminiDigitizer::with_model(&api_key, &options.vision_model);
    let analyzer = GeminiAnalyzer::with_model(&api_key, &options.analysis_model);

    // Create use case
    let use_case = ExperienceSessionUseCase::new(capture, digitizer, analyzer);

    if let Some(t) = text {
        use_case.set_input_text(t).await;
    }

    // Digitize an existing photo
    if let Some(path) = &options.image {
        presenter.start_spinner(SCANNING_MESSAGE);
        let image = match load_image(path) {
            Ok(image) => image,
            Err(e) => {
                presenter.spinner_fail(&e);
                return ExitCode::from(EXIT_ERROR);
            }
        };
        match use_case.digitize_image(&image).await {
            Ok(_) => presenter.spinner_success("Document digitized"),
            Err(e) => {
                presenter.spinner_fail(&use_case.status_message().await);
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }

    // Capture and digitize from the camera
    if options.scan {
        presenter.start_spinner("Opening camera...");
        let controls = CaptureControls {
            flash: options.flash,
            zoom: options.zoom,
        };
        match use_case.scan_document(controls).await {
            Ok(_) => presenter.spinner_success("Document digitized"),
            Err(e) => {
                presenter.spinner_fail("Scan failed");
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }

    // Analyze
    presenter.start_spinner(ANALYZING_MESSAGE);
    let result = match use_case.analyze().await {
        Ok(result) => {
            presenter.spinner_success("Profile unlocked!");
            result
        }
        Err(SessionError::EmptyInput) => {
            presenter.spinner_fail("Nothing to analyze");
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
        Err(e) => {
            presenter.spinner_fail(&use_case.status_message().await);
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Render
    if options.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => presenter.output(&json),
            Err(e) => {
                presenter.error(&format!("Failed to serialize result: {}", e));
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        presenter.render_result(&result);
    }

    // Copy the elevator pitch (non-fatal)
    if options.clipboard {
        let clipboard = ArboardClipboard::new();
        match clipboard.copy(&result.elevator_pitch).await {
            Ok(()) => presenter.info("Elevator pitch copied to clipboard"),
            Err(e) => presenter.warn(&format!("Clipboard copy failed: {}", e)),
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Get API key from environment or config file
pub async fn get_api_key() -> Result<String, String> {
    // Check environment first
    if let Ok(key) = env::var("GEMINI_API_KEY") {
        if !key.is_empty() {
            return Ok(key);
        }
    }

    // Check config file
    let store = XdgConfigStore::new();
    let config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    config.api_key.ok_or_else(|| {
        "Missing API key. Set GEMINI_API_KEY environment variable or run 'skillbridge config set api_key <key>'".to_string()
    })
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_config = AppConfig {
        api_key: env::var("GEMINI_API_KEY").ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

/// Read an image file for digitization, inferring its MIME type.
/// A text file holding a `data:image/...;base64,` URI (as exported by
/// web tooling) is decoded; anything else is taken as raw image bytes.
fn load_image(path: &Path) -> Result<ImageData, String> {
    let bytes = std::fs::read(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    if bytes.is_empty() {
        return Err(format!("{} is empty", path.display()));
    }

    if bytes.starts_with(b"data:image/") {
        let uri = std::str::from_utf8(&bytes)
            .map_err(|e| format!("{} is not a valid data URI: {}", path.display(), e))?;
        return ImageData::from_data_uri(uri)
            .map_err(|e| format!("{}: {}", path.display(), e));
    }

    Ok(ImageData::new(bytes, image_mime_from_path(path)))
}

/// Infer the image MIME type from a file extension. Unknown extensions
/// fall back to JPEG, matching the capture default.
fn image_mime_from_path(path: &Path) -> ImageMimeType {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("png") => ImageMimeType::Png,
        Some("webp") => ImageMimeType::Webp,
        _ => ImageMimeType::Jpeg,
    }
}
