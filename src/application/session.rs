//! Experience session use case
//!
//! Orchestrates the capture source, digitizer, and analyzer around the
//! session state machine: scan appends digitized text to the input,
//! analyze produces the stored result, failures surface as a transient
//! error banner that auto-dismisses on a fixed timer.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::analysis::AnalysisResult;
use crate::domain::capture::ImageData;
use crate::domain::session::{ExperienceSession, InvalidStateTransition, SessionStatus};

use super::ports::{
    AnalysisError, Analyzer, CaptureError, CaptureSource, DigitizeError, Digitizer,
};

/// Status message shown while a document is being digitized
pub const SCANNING_MESSAGE: &str = "Reading document...";
/// Status message shown while analysis is in flight
pub const ANALYZING_MESSAGE: &str = "Unlocking your potential...";
/// Generic user-facing message for any digitize failure
pub const SCAN_FAILED_MESSAGE: &str = "Could not read document.";
/// Generic user-facing message for any analysis failure
pub const ANALYSIS_FAILED_MESSAGE: &str = "Analysis failed. Please try again.";

/// Errors from the session use case
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0}")]
    Capture(#[from] CaptureError),

    #[error("Digitization failed: {0}")]
    Digitize(#[from] DigitizeError),

    #[error("Analysis failed: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Nothing to analyze. Describe your experience first.")]
    EmptyInput,

    #[error("{0}")]
    InvalidState(#[from] InvalidStateTransition),
}

/// Fixed auto-dismiss delays. The timers run as detached tasks,
/// independent of any pending request.
#[derive(Debug, Clone, Copy)]
pub struct SessionTiming {
    /// How long the error banner stays up before returning to idle
    pub error_banner: Duration,
    /// How long the celebration cue stays raised after a success
    pub celebration: Duration,
}

impl Default for SessionTiming {
    fn default() -> Self {
        Self {
            error_banner: Duration::from_secs(3),
            celebration: Duration::from_secs(5),
        }
    }
}

/// Camera controls requested for one scan
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptureControls {
    /// Turn the torch on before capturing (no-op without torch support)
    pub flash: bool,
    /// Zoom level to apply, clamped to the discovered range
    pub zoom: Option<f64>,
}

/// Experience session use case
pub struct ExperienceSessionUseCase<S, D, A>
where
    S: CaptureSource,
    D: Digitizer,
    A: Analyzer,
{
    capture: Mutex<S>,
    digitizer: D,
    analyzer: A,
    session: Arc<Mutex<ExperienceSession>>,
    timing: SessionTiming,
}

impl<S, D, A> ExperienceSessionUseCase<S, D, A>
where
    S: CaptureSource,
    D: Digitizer,
    A: Analyzer,
{
    /// Create a new use case instance with default timing
    pub fn new(capture: S, digitizer: D, analyzer: A) -> Self {
        Self::with_timing(capture, digitizer, analyzer, SessionTiming::default())
    }

    /// Create a new use case instance with custom timing
    pub fn with_timing(capture: S, digitizer: D, analyzer: A, timing: SessionTiming) -> Self {
        Self {
            capture: Mutex::new(capture),
            digitizer,
            analyzer,
            session: Arc::new(Mutex::new(ExperienceSession::new())),
            timing,
        }
    }

    /// Get the current session status
    pub async fn status(&self) -> SessionStatus {
        self.session.lock().await.status()
    }

    /// Get the user-visible status message
    pub async fn status_message(&self) -> String {
        self.session.lock().await.status_message().to_string()
    }

    /// Get the current input text
    pub async fn input_text(&self) -> String {
        self.session.lock().await.input_text().to_string()
    }

    /// Get a copy of the stored analysis result
    pub async fn result(&self) -> Option<AnalysisResult> {
        self.session.lock().await.result().cloned()
    }

    /// Whether the celebration cue is currently raised
    pub async fn is_celebrating(&self) -> bool {
        self.session.lock().await.is_celebrating()
    }

    /// Replace the input text (ignored while a scan or analysis is active)
    pub async fn set_input_text(&self, text: impl Into<String>) {
        self.session.lock().await.set_input_text(text);
    }

    /// Drive the capture source through one camera session: open, apply
    /// the requested controls, capture a frame.
    ///
    /// Does not touch the state machine; a camera failure here surfaces
    /// in the capture flow, not as an app-level error banner. `capture`
    /// releases the hardware itself on success; on a capture failure the
    /// session is closed before returning.
    pub async fn capture_document(
        &self,
        controls: CaptureControls,
    ) -> Result<ImageData, SessionError> {
        let mut source = self.capture.lock().await;
        let caps = source.open().await?;

        if controls.flash {
            source.toggle_flash().await?;
        }

        if let Some(level) = controls.zoom {
            let clamped = caps.zoom_range_or_default().clamp(level);
            source.set_zoom(clamped).await?;
        }

        match source.capture().await {
            Ok(image) => Ok(image),
            Err(e) => {
                // Release the hardware before surfacing the failure
                let _ = source.close().await;
                Err(e.into())
            }
        }
    }

    /// Digitize a captured image and append the text to the input.
    ///
    /// Drives Idle -> Scanning -> Idle on success, or -> Error with an
    /// auto-dismissing banner on failure. Returns the digitized text.
    pub async fn digitize_image(&self, image: &ImageData) -> Result<String, SessionError> {
        self.session.lock().await.begin_scan(SCANNING_MESSAGE)?;

        match self.digitizer.digitize(image).await {
            Ok(text) => {
                self.session.lock().await.complete_scan(&text)?;
                Ok(text)
            }
            Err(e) => {
                self.session.lock().await.fail_scan(SCAN_FAILED_MESSAGE)?;
                self.schedule_error_dismiss();
                Err(e.into())
            }
        }
    }

    /// Capture a document photo and digitize it (convenience method)
    pub async fn scan_document(&self, controls: CaptureControls) -> Result<String, SessionError> {
        let image = self.capture_document(controls).await?;
        self.digitize_image(&image).await
    }

    /// Analyze the current input text.
    ///
    /// Blank (whitespace-only) input is rejected before any transition
    /// and before any network call. Drives Idle -> Analyzing -> Success
    /// on success (storing the result and raising the celebration cue),
    /// or -> Error with an auto-dismissing banner on failure.
    pub async fn analyze(&self) -> Result<AnalysisResult, SessionError> {
        let input = {
            let mut session = self.session.lock().await;
            if session.input_text().trim().is_empty() {
                return Err(SessionError::EmptyInput);
            }
            session.begin_analysis(ANALYZING_MESSAGE)?;
            session.input_text().to_string()
        };

        match self.analyzer.analyze(&input).await {
            Ok(result) => {
                let offenders = result.out_of_range_scores();
                if !offenders.is_empty() {
                    eprintln!(
                        "Warning: scores outside 0-100 for: {}",
                        offenders.join(", ")
                    );
                }

                self.session
                    .lock()
                    .await
                    .complete_analysis(result.clone())?;
                self.schedule_celebration_end();
                Ok(result)
            }
            Err(e) => {
                self.session
                    .lock()
                    .await
                    .fail_analysis(ANALYSIS_FAILED_MESSAGE)?;
                self.schedule_error_dismiss();
                Err(e.into())
            }
        }
    }

    /// Start a fresh session, clearing input and result
    pub async fn start_new(&self) -> Result<(), SessionError> {
        self.session.lock().await.start_new()?;
        Ok(())
    }

    /// Dismiss the error banner after the fixed delay. The timer runs
    /// detached and is a no-op if the state has already moved on.
    fn schedule_error_dismiss(&self) {
        let session = Arc::clone(&self.session);
        let delay = self.timing.error_banner;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            session.lock().await.dismiss_error();
        });
    }

    /// Lower the celebration cue after the fixed delay, independent of
    /// the session status at that point.
    fn schedule_celebration_end(&self) {
        let session = Arc::clone(&self.session);
        let delay = self.timing.celebration;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            session.lock().await.end_celebration();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::capture::{ImageMimeType, TrackCapabilities, ZoomRange};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;

    /// Scripted capture source that records hardware interactions
    struct MockCaptureSource {
        caps: TrackCapabilities,
        open: bool,
        flash_on: bool,
        zoom_level: f64,
        deny_access: bool,
        release_count: Arc<AtomicUsize>,
        torch_off_before_release: Arc<AtomicBool>,
        events: Arc<StdMutex<Vec<String>>>,
    }

    impl MockCaptureSource {
        fn new(caps: TrackCapabilities) -> Self {
            Self {
                caps,
                open: false,
                flash_on: false,
                zoom_level: 1.0,
                deny_access: false,
                release_count: Arc::new(AtomicUsize::new(0)),
                torch_off_before_release: Arc::new(AtomicBool::new(false)),
                events: Arc::new(StdMutex::new(Vec::new())),
            }
        }

        fn denying() -> Self {
            let mut source = Self::new(TrackCapabilities::default());
            source.deny_access = true;
            source
        }

        fn release(&mut self) {
            if self.flash_on {
                self.torch_off_before_release.store(true, Ordering::SeqCst);
                self.flash_on = false;
                self.events.lock().unwrap().push("torch-off".to_string());
            }
            self.open = false;
            self.release_count.fetch_add(1, Ordering::SeqCst);
            self.events.lock().unwrap().push("release".to_string());
        }
    }

    #[async_trait]
    impl CaptureSource for MockCaptureSource {
        async fn open(&mut self) -> Result<TrackCapabilities, CaptureError> {
            if self.deny_access {
                return Err(CaptureError::AccessDenied("permission denied".to_string()));
            }
            self.open = true;
            self.flash_on = false;
            self.zoom_level = self.caps.initial_zoom();
            Ok(self.caps.clone())
        }

        fn capabilities(&self) -> Option<&TrackCapabilities> {
            self.open.then_some(&self.caps)
        }

        async fn toggle_flash(&mut self) -> Result<bool, CaptureError> {
            if self.open && self.caps.torch {
                self.flash_on = !self.flash_on;
            }
            Ok(self.flash_on)
        }

        async fn set_zoom(&mut self, level: f64) -> Result<(), CaptureError> {
            if self.open && self.caps.has_zoom() {
                self.zoom_level = level;
            }
            Ok(())
        }

        async fn capture(&mut self) -> Result<ImageData, CaptureError> {
            if !self.open {
                return Err(CaptureError::SessionClosed);
            }
            self.release();
            Ok(ImageData::new(vec![0xff, 0xd8, 0xff], ImageMimeType::Jpeg))
        }

        async fn close(&mut self) -> Result<(), CaptureError> {
            if self.open {
                self.release();
            }
            Ok(())
        }

        fn is_open(&self) -> bool {
            self.open
        }

        fn flash_on(&self) -> bool {
            self.flash_on
        }

        fn zoom_level(&self) -> f64 {
            self.zoom_level
        }
    }

    struct MockDigitizer {
        response: Result<String, DigitizeError>,
        calls: Arc<AtomicUsize>,
    }

    impl MockDigitizer {
        fn ok(text: &str) -> Self {
            Self {
                response: Ok(text.to_string()),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn failing() -> Self {
            Self {
                response: Err(DigitizeError::ApiError("HTTP 500".to_string())),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl Digitizer for MockDigitizer {
        async fn digitize(&self, _image: &ImageData) -> Result<String, DigitizeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone()
        }
    }

    struct MockAnalyzer {
        response: Result<AnalysisResult, AnalysisError>,
        calls: Arc<AtomicUsize>,
    }

    impl MockAnalyzer {
        fn ok() -> Self {
            Self {
                response: Ok(sample_result()),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn failing() -> Self {
            Self {
                response: Err(AnalysisError::NoDataReturned),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl Analyzer for MockAnalyzer {
        async fn analyze(&self, _text: &str) -> Result<AnalysisResult, AnalysisError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone()
        }
    }

    fn sample_result() -> AnalysisResult {
        serde_json::from_str(
            r#"{
                "summary": "Community builder with technical chops.",
                "vibe": "Server Sage",
                "vibeEmoji": "🛡️",
                "badges": [],
                "skills": [{"name": "Community Management", "category": "Soft Skill", "score": 82}],
                "elevatorPitch": "I keep 200 people engaged.",
                "resumePoints": ["Operated a Discord community of 200 members"],
                "careers": [{"title": "Community Manager", "matchPercentage": 90, "description": "d", "avgSalary": "$60k", "outlook": "Growing"}],
                "interviewQuestions": []
            }"#,
        )
        .unwrap()
    }

    fn use_case_with(
        capture: MockCaptureSource,
        digitizer: MockDigitizer,
        analyzer: MockAnalyzer,
    ) -> ExperienceSessionUseCase<MockCaptureSource, MockDigitizer, MockAnalyzer> {
        ExperienceSessionUseCase::with_timing(
            capture,
            digitizer,
            analyzer,
            SessionTiming {
                error_banner: Duration::from_millis(50),
                celebration: Duration::from_millis(50),
            },
        )
    }

    #[tokio::test]
    async fn scan_appends_digitized_text() {
        let use_case = use_case_with(
            MockCaptureSource::new(TrackCapabilities::default()),
            MockDigitizer::ok("volunteer shift log"),
            MockAnalyzer::ok(),
        );

        use_case.set_input_text("I build Discord bots").await;
        let text = use_case
            .scan_document(CaptureControls::default())
            .await
            .unwrap();

        assert_eq!(text, "volunteer shift log");
        assert_eq!(use_case.status().await, SessionStatus::Idle);
        assert_eq!(
            use_case.input_text().await,
            "I build Discord bots\n\nvolunteer shift log"
        );
    }

    #[tokio::test]
    async fn capture_releases_track_exactly_once() {
        let capture = MockCaptureSource::new(TrackCapabilities::default());
        let release_count = Arc::clone(&capture.release_count);

        let use_case = use_case_with(capture, MockDigitizer::ok("text"), MockAnalyzer::ok());
        use_case
            .scan_document(CaptureControls::default())
            .await
            .unwrap();

        assert_eq!(release_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn capture_with_flash_turns_torch_off_before_release() {
        let capture = MockCaptureSource::new(TrackCapabilities {
            torch: true,
            zoom: None,
        });
        let torch_off = Arc::clone(&capture.torch_off_before_release);
        let events = Arc::clone(&capture.events);

        let use_case = use_case_with(capture, MockDigitizer::ok("text"), MockAnalyzer::ok());
        use_case
            .scan_document(CaptureControls {
                flash: true,
                zoom: None,
            })
            .await
            .unwrap();

        assert!(torch_off.load(Ordering::SeqCst));
        assert_eq!(
            events.lock().unwrap().as_slice(),
            ["torch-off".to_string(), "release".to_string()]
        );
    }

    #[tokio::test]
    async fn toggle_flash_without_torch_never_changes_state() {
        let mut source = MockCaptureSource::new(TrackCapabilities::default());
        source.open().await.unwrap();

        assert!(!source.toggle_flash().await.unwrap());
        assert!(!source.toggle_flash().await.unwrap());
        assert!(!source.flash_on());
    }

    #[tokio::test]
    async fn close_is_idempotent_after_capture() {
        let mut source = MockCaptureSource::new(TrackCapabilities::default());
        let release_count = Arc::clone(&source.release_count);

        source.open().await.unwrap();
        source.capture().await.unwrap();
        source.close().await.unwrap();
        source.close().await.unwrap();

        // Capture already released the track; the closes add nothing
        assert_eq!(release_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn flash_without_torch_support_stays_off() {
        let capture = MockCaptureSource::new(TrackCapabilities::default());
        let use_case = use_case_with(capture, MockDigitizer::ok("text"), MockAnalyzer::ok());

        use_case
            .scan_document(CaptureControls {
                flash: true,
                zoom: None,
            })
            .await
            .unwrap();

        // The mock only flips flash when torch is supported; the capture
        // path must not have recorded a torch-off attempt.
        assert_eq!(use_case.status().await, SessionStatus::Idle);
    }

    #[tokio::test]
    async fn zoom_is_clamped_to_discovered_range() {
        let capture = MockCaptureSource::new(TrackCapabilities {
            torch: false,
            zoom: Some(ZoomRange::new(1.0, 4.0, 0.5)),
        });
        let use_case = use_case_with(capture, MockDigitizer::ok("text"), MockAnalyzer::ok());

        let image = use_case
            .capture_document(CaptureControls {
                flash: false,
                zoom: Some(10.0),
            })
            .await
            .unwrap();

        assert!(!image.data().is_empty());
        // Level was clamped before the adapter saw it
        assert_eq!(use_case.capture.lock().await.zoom_level(), 4.0);
    }

    #[tokio::test]
    async fn access_denied_does_not_touch_state_machine() {
        let use_case = use_case_with(
            MockCaptureSource::denying(),
            MockDigitizer::ok("text"),
            MockAnalyzer::ok(),
        );

        let err = use_case.scan_document(CaptureControls::default()).await;
        assert!(matches!(
            err,
            Err(SessionError::Capture(CaptureError::AccessDenied(_)))
        ));
        assert_eq!(use_case.status().await, SessionStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn digitize_failure_shows_banner_then_returns_to_idle() {
        let use_case = ExperienceSessionUseCase::new(
            MockCaptureSource::new(TrackCapabilities::default()),
            MockDigitizer::failing(),
            MockAnalyzer::ok(),
        );

        use_case.set_input_text("existing input").await;
        let err = use_case.scan_document(CaptureControls::default()).await;
        assert!(matches!(err, Err(SessionError::Digitize(_))));

        assert_eq!(use_case.status().await, SessionStatus::Error);
        assert_eq!(use_case.status_message().await, SCAN_FAILED_MESSAGE);
        assert_eq!(use_case.input_text().await, "existing input");

        // The banner timer fires after the fixed delay
        tokio::time::sleep(Duration::from_secs(4)).await;
        assert_eq!(use_case.status().await, SessionStatus::Idle);
        assert_eq!(use_case.input_text().await, "existing input");
    }

    #[tokio::test]
    async fn analyze_blank_input_rejected_without_network_call() {
        let analyzer = MockAnalyzer::ok();
        let analyzer_calls = Arc::clone(&analyzer.calls);
        let use_case = use_case_with(
            MockCaptureSource::new(TrackCapabilities::default()),
            MockDigitizer::ok("text"),
            analyzer,
        );

        use_case.set_input_text("   ").await;
        let err = use_case.analyze().await;

        assert!(matches!(err, Err(SessionError::EmptyInput)));
        assert_eq!(use_case.status().await, SessionStatus::Idle);
        assert_eq!(analyzer_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn analyze_success_stores_result() {
        let use_case = use_case_with(
            MockCaptureSource::new(TrackCapabilities::default()),
            MockDigitizer::ok("text"),
            MockAnalyzer::ok(),
        );

        use_case
            .set_input_text("I run a Discord bot for 200 members")
            .await;
        assert!(use_case.result().await.is_none());

        let result = use_case.analyze().await.unwrap();

        assert!(!result.careers.is_empty());
        assert_eq!(use_case.status().await, SessionStatus::Success);
        assert!(use_case.result().await.is_some());
        assert!(use_case.is_celebrating().await);
    }

    #[tokio::test(start_paused = true)]
    async fn celebration_auto_clears_after_delay() {
        let use_case = ExperienceSessionUseCase::new(
            MockCaptureSource::new(TrackCapabilities::default()),
            MockDigitizer::ok("text"),
            MockAnalyzer::ok(),
        );

        use_case.set_input_text("I run a Discord bot").await;
        use_case.analyze().await.unwrap();
        assert!(use_case.is_celebrating().await);

        tokio::time::sleep(Duration::from_secs(6)).await;
        assert!(!use_case.is_celebrating().await);
        // The cue clearing does not disturb the status
        assert_eq!(use_case.status().await, SessionStatus::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn analyze_failure_shows_banner_then_returns_to_idle() {
        let use_case = ExperienceSessionUseCase::new(
            MockCaptureSource::new(TrackCapabilities::default()),
            MockDigitizer::ok("text"),
            MockAnalyzer::failing(),
        );

        use_case.set_input_text("some experience").await;
        let err = use_case.analyze().await;
        assert!(matches!(err, Err(SessionError::Analysis(_))));

        assert_eq!(use_case.status().await, SessionStatus::Error);
        assert_eq!(use_case.status_message().await, ANALYSIS_FAILED_MESSAGE);

        tokio::time::sleep(Duration::from_secs(4)).await;
        assert_eq!(use_case.status().await, SessionStatus::Idle);
        // Input survives a failed analysis
        assert_eq!(use_case.input_text().await, "some experience");
    }

    #[tokio::test]
    async fn start_new_clears_everything() {
        let use_case = use_case_with(
            MockCaptureSource::new(TrackCapabilities::default()),
            MockDigitizer::ok("text"),
            MockAnalyzer::ok(),
        );

        use_case.set_input_text("experience").await;
        use_case.analyze().await.unwrap();
        use_case.start_new().await.unwrap();

        assert_eq!(use_case.status().await, SessionStatus::Idle);
        assert!(use_case.input_text().await.is_empty());
        assert!(use_case.result().await.is_none());
    }
}
