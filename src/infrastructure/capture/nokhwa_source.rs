//! Camera capture adapter using nokhwa
//!
//! Capabilities are probed once when the session opens. Desktop UVC
//! backends expose no torch control, so torch support is reported
//! absent and `toggle_flash` is a no-op; zoom is mapped from the
//! backend's integer or float control range.

use std::io::Cursor;

use async_trait::async_trait;
use image::codecs::jpeg::JpegEncoder;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{
    CameraFormat, CameraIndex, ControlValueDescription, ControlValueSetter, FrameFormat,
    KnownCameraControl, RequestedFormat, RequestedFormatType, Resolution,
};
use nokhwa::Camera;

use crate::application::ports::{CaptureError, CaptureSource};
use crate::domain::capture::{ImageData, ImageMimeType, TrackCapabilities, ZoomRange};

/// Preferred capture resolution (better OCR on dense documents)
const IDEAL_WIDTH: u32 = 1920;
const IDEAL_HEIGHT: u32 = 1080;

/// JPEG quality for the encoded still (0-100)
const JPEG_QUALITY: u8 = 80;

/// Which setter type the backend's zoom control expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ZoomControlKind {
    Integer,
    Float,
}

/// Map a backend control description to a zoom range
fn zoom_range_from(desc: &ControlValueDescription) -> Option<(ZoomRange, ZoomControlKind)> {
    match desc {
        ControlValueDescription::IntegerRange { min, max, step, .. } => Some((
            ZoomRange::new(*min as f64, *max as f64, (*step).max(1) as f64),
            ZoomControlKind::Integer,
        )),
        ControlValueDescription::FloatRange { min, max, step, .. } => {
            Some((ZoomRange::new(*min, *max, *step), ZoomControlKind::Float))
        }
        _ => None,
    }
}

/// State held for the lifetime of one open camera session
struct OpenSession {
    camera: Camera,
    caps: TrackCapabilities,
    zoom_kind: Option<ZoomControlKind>,
    flash_on: bool,
    zoom_level: f64,
}

impl OpenSession {
    /// Release the hardware track. Torch is forced off first when lit.
    fn release(&mut self) {
        if self.flash_on {
            // No torch control exists on this backend; just lower the flag
            // so the session never ends with a lit torch recorded.
            self.flash_on = false;
        }
        if let Err(e) = self.camera.stop_stream() {
            eprintln!("Warning: failed to stop camera stream: {}", e);
        }
    }
}

/// Camera capture source backed by nokhwa
pub struct NokhwaCaptureSource {
    index: u32,
    session: Option<OpenSession>,
}

impl NokhwaCaptureSource {
    /// Create a capture source for the given camera index
    pub fn new(index: u32) -> Self {
        Self {
            index,
            session: None,
        }
    }
}

#[async_trait]
impl CaptureSource for NokhwaCaptureSource {
    async fn open(&mut self) -> Result<TrackCapabilities, CaptureError> {
        if let Some(session) = &self.session {
            return Ok(session.caps.clone());
        }

        let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(
            CameraFormat::new(
                Resolution::new(IDEAL_WIDTH, IDEAL_HEIGHT),
                FrameFormat::MJPEG,
                30,
            ),
        ));

        let mut camera = Camera::new(CameraIndex::Index(self.index), requested)
            .map_err(|e| CaptureError::AccessDenied(e.to_string()))?;

        camera
            .open_stream()
            .map_err(|e| CaptureError::AccessDenied(e.to_string()))?;

        // Probe the capability set once for this session
        let zoom_probe = camera
            .camera_control(KnownCameraControl::Zoom)
            .ok()
            .and_then(|control| zoom_range_from(&control.description().clone()));

        let (zoom, zoom_kind) = match zoom_probe {
            Some((range, kind)) => (Some(range), Some(kind)),
            None => (None, None),
        };

        let caps = TrackCapabilities { torch: false, zoom };
        let zoom_level = caps.initial_zoom();

        self.session = Some(OpenSession {
            camera,
            caps: caps.clone(),
            zoom_kind,
            flash_on: false,
            zoom_level,
        });

        Ok(caps)
    }

    fn capabilities(&self) -> Option<&TrackCapabilities> {
        self.session.as_ref().map(|s| &s.caps)
    }

    async fn toggle_flash(&mut self) -> Result<bool, CaptureError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(false);
        };
        if !session.caps.torch {
            return Ok(session.flash_on);
        }
        // Unreachable on this backend (torch is always reported absent);
        // kept so the contract reads the same as the port's.
        session.flash_on = !session.flash_on;
        Ok(session.flash_on)
    }

    async fn set_zoom(&mut self, level: f64) -> Result<(), CaptureError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        let Some(range) = session.caps.zoom else {
            return Ok(());
        };

        let clamped = range.clamp(level);
        // The displayed value is updated regardless of whether the
        // hardware accepts the constraint.
        session.zoom_level = clamped;

        let setter = match session.zoom_kind {
            Some(ZoomControlKind::Integer) => ControlValueSetter::Integer(clamped.round() as i64),
            Some(ZoomControlKind::Float) => ControlValueSetter::Float(clamped),
            None => return Ok(()),
        };

        if let Err(e) = session
            .camera
            .set_camera_control(KnownCameraControl::Zoom, setter)
        {
            eprintln!("Warning: failed to set zoom: {}", e);
        }

        Ok(())
    }

    async fn capture(&mut self) -> Result<ImageData, CaptureError> {
        let session = self.session.as_mut().ok_or(CaptureError::SessionClosed)?;

        let frame = session
            .camera
            .frame()
            .map_err(|e| CaptureError::CaptureFailed(e.to_string()))?;

        let decoded = frame
            .decode_image::<RgbFormat>()
            .map_err(|e| CaptureError::CaptureFailed(e.to_string()))?;

        let mut bytes = Vec::new();
        let mut encoder = JpegEncoder::new_with_quality(Cursor::new(&mut bytes), JPEG_QUALITY);
        encoder
            .encode_image(&decoded)
            .map_err(|e| CaptureError::CaptureFailed(e.to_string()))?;

        // A successful capture ends the session
        if let Some(mut session) = self.session.take() {
            session.release();
        }

        Ok(ImageData::new(bytes, ImageMimeType::Jpeg))
    }

    async fn close(&mut self) -> Result<(), CaptureError> {
        if let Some(mut session) = self.session.take() {
            session.release();
        }
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.session.is_some()
    }

    fn flash_on(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.flash_on)
    }

    fn zoom_level(&self) -> f64 {
        self.session.as_ref().map_or(1.0, |s| s.zoom_level)
    }
}
