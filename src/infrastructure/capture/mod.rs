//! Camera capture adapters

mod nokhwa_source;

pub use nokhwa_source::NokhwaCaptureSource;
