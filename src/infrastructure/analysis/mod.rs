//! Experience analysis adapters

mod gemini;

pub use gemini::GeminiAnalyzer;
