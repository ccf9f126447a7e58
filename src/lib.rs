//! SkillBridge - AI-powered experience analyzer CLI
//!
//! This crate turns informal experience descriptions (hobbies, part-time
//! jobs, gaming, volunteering) into a structured career profile using
//! Google Gemini: skill scores, career matches, resume bullets, and
//! interview prep. Input can be typed text or a photographed document
//! captured from a camera and digitized through Gemini vision.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core business logic, value objects, entities, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (nokhwa, Gemini, clipboard, etc.)
//! - **CLI**: Command-line interface, argument parsing, and result rendering

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
