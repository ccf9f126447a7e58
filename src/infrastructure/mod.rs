//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the camera, Gemini API, etc.

pub mod analysis;
pub mod capture;
pub mod clipboard;
pub mod config;
pub mod digitizing;

// Re-export adapters
pub use analysis::GeminiAnalyzer;
pub use capture::NokhwaCaptureSource;
pub use clipboard::ArboardClipboard;
pub use config::XdgConfigStore;
pub use digitizing::GeminiDigitizer;
