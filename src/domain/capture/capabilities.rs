//! Camera capability value objects
//!
//! Capabilities are probed once when a capture session opens and never
//! re-queried mid-session.

/// Optical zoom range reported by the hardware track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ZoomRange {
    /// Create a new zoom range
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamp a requested level into this range
    pub fn clamp(&self, level: f64) -> f64 {
        level.clamp(self.min, self.max)
    }

    /// Whether a level lies within the range
    pub fn contains(&self, level: f64) -> bool {
        level >= self.min && level <= self.max
    }
}

impl Default for ZoomRange {
    /// Placeholder range used when the hardware reports no zoom support
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 1.0,
            step: 0.1,
        }
    }
}

/// Optional-capability record for an open hardware track.
/// Resolved once at session open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackCapabilities {
    /// Whether the track supports a torch (flash) control
    pub torch: bool,
    /// Zoom range, when the track supports optical zoom
    pub zoom: Option<ZoomRange>,
}

impl TrackCapabilities {
    /// Whether the track supports zoom
    pub fn has_zoom(&self) -> bool {
        self.zoom.is_some()
    }

    /// The zoom range, or the placeholder range when unsupported
    pub fn zoom_range_or_default(&self) -> ZoomRange {
        self.zoom.unwrap_or_default()
    }

    /// Initial zoom level for a fresh session: the reported minimum
    pub fn initial_zoom(&self) -> f64 {
        self.zoom_range_or_default().min
    }
}
