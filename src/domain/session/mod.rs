//! Session domain module

mod state;

pub use state::{ExperienceSession, InvalidStateTransition, SessionStatus};
