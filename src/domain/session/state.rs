//! Experience session state machine

use std::fmt;
use thiserror::Error;

use crate::domain::analysis::AnalysisResult;

/// Session statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionStatus {
    #[default]
    Idle,
    Scanning,
    Analyzing,
    Success,
    Error,
}

impl SessionStatus {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Scanning => "scanning",
            Self::Analyzing => "analyzing",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Whether a scan or analysis is currently in flight.
    /// The triggering controls are disabled while this is true.
    pub const fn is_busy(&self) -> bool {
        matches!(self, Self::Scanning | Self::Analyzing)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while in {current_status} state")]
pub struct InvalidStateTransition {
    pub current_status: SessionStatus,
    pub action: String,
}

impl InvalidStateTransition {
    fn new(current_status: SessionStatus, action: &str) -> Self {
        Self {
            current_status,
            action: action.to_string(),
        }
    }
}

/// Experience session entity.
/// Holds the current input text and analysis result and drives status
/// transitions for one capture-and-analyze session.
///
/// State machine:
///   IDLE -> SCANNING (begin_scan)
///   SCANNING -> IDLE (complete_scan, digitized text appended)
///   SCANNING -> ERROR (fail_scan)
///   IDLE -> ANALYZING (begin_analysis, requires non-blank input)
///   ANALYZING -> SUCCESS (complete_analysis, result stored)
///   ANALYZING -> ERROR (fail_analysis)
///   ERROR -> IDLE (dismiss_error, fired by the banner timer)
///   SUCCESS -> IDLE (start_new, input and result cleared)
#[derive(Debug, Default)]
pub struct ExperienceSession {
    status: SessionStatus,
    status_message: String,
    input_text: String,
    result: Option<AnalysisResult>,
    celebrating: bool,
}

impl ExperienceSession {
    /// Create a new session in idle state with empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current status
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Get the user-visible status message
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Get the current input text
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    /// Get the stored analysis result
    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Whether the celebration cue is currently raised
    pub fn is_celebrating(&self) -> bool {
        self.celebrating
    }

    /// Replace the input text. Only meaningful while idle; ignored when a
    /// scan or analysis is in flight.
    pub fn set_input_text(&mut self, text: impl Into<String>) {
        if !self.status.is_busy() {
            self.input_text = text.into();
        }
    }

    /// Transition from IDLE to SCANNING
    pub fn begin_scan(&mut self, message: &str) -> Result<(), InvalidStateTransition> {
        if self.status != SessionStatus::Idle {
            return Err(InvalidStateTransition::new(self.status, "start scanning"));
        }
        self.status = SessionStatus::Scanning;
        self.status_message = message.to_string();
        Ok(())
    }

    /// Transition from SCANNING back to IDLE, appending the digitized
    /// text to the existing input. A blank line separates it from prior
    /// input when the input was non-empty.
    pub fn complete_scan(&mut self, digitized: &str) -> Result<(), InvalidStateTransition> {
        if self.status != SessionStatus::Scanning {
            return Err(InvalidStateTransition::new(self.status, "complete scanning"));
        }
        if self.input_text.is_empty() {
            self.input_text = digitized.to_string();
        } else {
            self.input_text.push_str("\n\n");
            self.input_text.push_str(digitized);
        }
        self.status = SessionStatus::Idle;
        self.status_message.clear();
        Ok(())
    }

    /// Transition from SCANNING to ERROR
    pub fn fail_scan(&mut self, message: &str) -> Result<(), InvalidStateTransition> {
        if self.status != SessionStatus::Scanning {
            return Err(InvalidStateTransition::new(self.status, "fail scanning"));
        }
        self.status = SessionStatus::Error;
        self.status_message = message.to_string();
        Ok(())
    }

    /// Transition from IDLE to ANALYZING.
    /// Blank (whitespace-only) input is rejected without any transition.
    pub fn begin_analysis(&mut self, message: &str) -> Result<(), InvalidStateTransition> {
        if self.status != SessionStatus::Idle {
            return Err(InvalidStateTransition::new(self.status, "start analysis"));
        }
        if self.input_text.trim().is_empty() {
            return Err(InvalidStateTransition::new(
                self.status,
                "start analysis with blank input",
            ));
        }
        self.status = SessionStatus::Analyzing;
        self.status_message = message.to_string();
        Ok(())
    }

    /// Transition from ANALYZING to SUCCESS, atomically replacing any
    /// prior result and raising the celebration cue.
    pub fn complete_analysis(
        &mut self,
        result: AnalysisResult,
    ) -> Result<(), InvalidStateTransition> {
        if self.status != SessionStatus::Analyzing {
            return Err(InvalidStateTransition::new(self.status, "complete analysis"));
        }
        self.result = Some(result);
        self.status = SessionStatus::Success;
        self.status_message.clear();
        self.celebrating = true;
        Ok(())
    }

    /// Transition from ANALYZING to ERROR
    pub fn fail_analysis(&mut self, message: &str) -> Result<(), InvalidStateTransition> {
        if self.status != SessionStatus::Analyzing {
            return Err(InvalidStateTransition::new(self.status, "fail analysis"));
        }
        self.status = SessionStatus::Error;
        self.status_message = message.to_string();
        Ok(())
    }

    /// Return from ERROR to IDLE. Fired by the banner timer, which may
    /// race a state change; a stale dismiss is a no-op. Returns whether
    /// the banner was actually dismissed.
    pub fn dismiss_error(&mut self) -> bool {
        if self.status != SessionStatus::Error {
            return false;
        }
        self.status = SessionStatus::Idle;
        self.status_message.clear();
        true
    }

    /// Lower the celebration cue. Runs on its own timer, independent of
    /// the current status.
    pub fn end_celebration(&mut self) {
        self.celebrating = false;
    }

    /// Transition from SUCCESS to IDLE, clearing input and result
    pub fn start_new(&mut self) -> Result<(), InvalidStateTransition> {
        if self.status != SessionStatus::Success {
            return Err(InvalidStateTransition::new(self.status, "start new session"));
        }
        self.status = SessionStatus::Idle;
        self.status_message.clear();
        self.input_text.clear();
        self.result = None;
        Ok(())
    }
}
