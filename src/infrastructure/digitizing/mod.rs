//! Document digitization adapters

mod gemini;

pub use gemini::GeminiDigitizer;
