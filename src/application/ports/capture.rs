//! Capture source port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::capture::{ImageData, TrackCapabilities};

/// Capture errors
#[derive(Debug, Clone, Error)]
pub enum CaptureError {
    #[error("Unable to access camera. Please allow permissions.")]
    AccessDenied(String),

    #[error("No open capture session")]
    SessionClosed,

    #[error("Failed to capture frame: {0}")]
    CaptureFailed(String),

    #[error("Hardware rejected constraint: {0}")]
    ConstraintRejected(String),
}

/// Port for a capability-aware camera capture source.
///
/// A source owns at most one capture session at a time. Capabilities
/// (torch, zoom range) are probed once when the session opens and never
/// re-queried. The hardware track must be released exactly once on every
/// exit path, with the torch forced off first if it was lit.
#[async_trait]
pub trait CaptureSource: Send {
    /// Open a capture session on an environment-facing camera.
    ///
    /// Probes the track's capability set and initializes the zoom level
    /// to the reported minimum. On permission denial or hardware error,
    /// no session is created and `AccessDenied` is returned; the caller
    /// must retry manually.
    async fn open(&mut self) -> Result<TrackCapabilities, CaptureError>;

    /// Capabilities of the open session, if any
    fn capabilities(&self) -> Option<&TrackCapabilities>;

    /// Invert the torch setting.
    ///
    /// A no-op when the track reports no torch capability or no session
    /// is open. A hardware constraint rejection is absorbed (logged) and
    /// leaves the flash state unchanged. Returns the flash state after
    /// the call.
    async fn toggle_flash(&mut self) -> Result<bool, CaptureError>;

    /// Apply a zoom level, clamped to the discovered range.
    ///
    /// Forwarded to hardware best-effort; a constraint rejection is
    /// absorbed and does not roll back the requested value.
    async fn set_zoom(&mut self, level: f64) -> Result<(), CaptureError>;

    /// Capture a still frame at the video's native dimensions, encoded
    /// as JPEG, then stop the session (torch off first if lit).
    ///
    /// Returns `SessionClosed` when no session is open.
    async fn capture(&mut self) -> Result<ImageData, CaptureError>;

    /// Stop the session without capturing. Idempotent.
    async fn close(&mut self) -> Result<(), CaptureError>;

    /// Whether a session is currently open
    fn is_open(&self) -> bool;

    /// Current flash state. Only true when the track supports torch.
    fn flash_on(&self) -> bool;

    /// Current zoom level. Only meaningful when the track supports zoom.
    fn zoom_level(&self) -> f64;
}
