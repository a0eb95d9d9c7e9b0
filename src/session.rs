//! Per-run interaction state.
//!
//! The browser original kept mode, file handles, and panel visibility in
//! module-level globals; here they live in one `Session` value owned by
//! the top-level flow and handed to each orchestrator, so tests can drive
//! the state machine in isolation.

use crate::api::types::SummaryResult;
use crate::error::{DoctransError, Result};
use crate::validate::SelectedFile;

/// Active input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    File,
    Text,
    Pdf,
    Image,
    Ppt,
}

impl Mode {
    pub fn title_key(&self) -> &'static str {
        match self {
            Mode::File => "file_upload",
            Mode::Text => "text_input",
            Mode::Pdf => "pdf_format",
            Mode::Image => "image_translation",
            Mode::Ppt => "ppt_translation",
        }
    }
}

/// Visibility flags for the output regions. Exactly one flow owns them at
/// a time; `switch_mode` returns them to the idle shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panels {
    pub input: bool,
    pub progress: bool,
    pub result: bool,
    pub error: bool,
    pub summary: bool,
}

impl Panels {
    fn idle() -> Self {
        Self {
            input: true,
            progress: false,
            result: false,
            error: false,
            summary: false,
        }
    }
}

#[derive(Debug)]
pub struct Session {
    mode: Mode,
    panels: Panels,
    selected_file: Option<SelectedFile>,
    text_buffer: String,
    preview: Option<String>,
    download_url: Option<String>,
    summary: Option<SummaryResult>,
    error: Option<String>,
    in_flight: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            mode: Mode::File,
            panels: Panels::idle(),
            selected_file: None,
            text_buffer: String::new(),
            preview: None,
            download_url: None,
            summary: None,
            error: None,
            in_flight: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn panels(&self) -> &Panels {
        &self.panels
    }

    /// Activate `mode`: hide every output panel, clear transient result
    /// state, and reset the mode's own input state. Never fails; an
    /// in-flight request is not cancelled, its late completion just finds
    /// the panels reset.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.panels = Panels::idle();
        self.preview = None;
        self.download_url = None;
        self.summary = None;
        self.error = None;
        match mode {
            Mode::Text => self.text_buffer.clear(),
            _ => self.selected_file = None,
        }
    }

    /// Claim the single request slot. Submission paths must call this
    /// before any network activity.
    pub fn begin_request(&mut self) -> Result<()> {
        if self.in_flight {
            return Err(DoctransError::Busy);
        }
        self.in_flight = true;
        self.panels.progress = true;
        self.panels.result = false;
        self.panels.error = false;
        Ok(())
    }

    /// Release the request slot and hide the progress panel.
    pub fn finish_request(&mut self) {
        self.in_flight = false;
        self.panels.progress = false;
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        self.selected_file = Some(file);
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn set_text(&mut self, text: &str) {
        self.text_buffer = text.to_string();
    }

    pub fn text(&self) -> &str {
        &self.text_buffer
    }

    pub fn show_result(&mut self, preview: String, download_url: Option<String>) {
        self.preview = Some(preview);
        self.download_url = download_url;
        self.panels.result = true;
        self.panels.error = false;
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn download_url(&self) -> Option<&str> {
        self.download_url.as_deref()
    }

    pub fn show_summary(&mut self, summary: SummaryResult) {
        self.summary = Some(summary);
        self.panels.summary = true;
    }

    pub fn hide_summary(&mut self) {
        self.summary = None;
        self.panels.summary = false;
    }

    pub fn summary(&self) -> Option<&SummaryResult> {
        self.summary.as_ref()
    }

    /// Record a failure: the error panel replaces progress and result,
    /// leaving the session actionable for another attempt.
    pub fn show_error(&mut self, message: String) {
        self.error = Some(message);
        self.panels.error = true;
        self.panels.progress = false;
        self.panels.result = false;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle_in_file_mode() {
        let session = Session::new();
        assert_eq!(session.mode(), Mode::File);
        assert!(session.panels().input);
        assert!(!session.panels().progress);
        assert!(!session.panels().result);
        assert!(!session.panels().error);
        assert!(!session.is_in_flight());
    }

    #[test]
    fn test_switch_mode_clears_previous_results() {
        let mut session = Session::new();
        session.show_result("preview".to_string(), Some("/api/files/x".to_string()));
        session.show_error("boom".to_string());

        session.switch_mode(Mode::Text);
        assert_eq!(session.mode(), Mode::Text);
        assert!(session.preview().is_none());
        assert!(session.download_url().is_none());
        assert!(session.error().is_none());
        assert_eq!(session.panels(), &super::Panels::idle());
    }

    #[test]
    fn test_switch_mode_resets_mode_specific_input() {
        let mut session = Session::new();
        session.select_file(SelectedFile::new("a.txt", 1, None));
        session.switch_mode(Mode::Pdf);
        assert!(session.selected_file().is_none());

        session.set_text("hello");
        session.switch_mode(Mode::Text);
        assert!(session.text().is_empty());
    }

    #[test]
    fn test_single_request_slot() {
        let mut session = Session::new();
        session.begin_request().unwrap();
        assert!(session.is_in_flight());
        assert!(session.panels().progress);

        let err = session.begin_request().unwrap_err();
        assert!(matches!(err, DoctransError::Busy));

        session.finish_request();
        assert!(!session.is_in_flight());
        assert!(!session.panels().progress);
        session.begin_request().unwrap();
    }

    #[test]
    fn test_show_error_hides_progress_and_result() {
        let mut session = Session::new();
        session.begin_request().unwrap();
        session.show_result("ok".to_string(), None);
        session.show_error("failed".to_string());

        assert!(session.panels().error);
        assert!(!session.panels().progress);
        assert!(!session.panels().result);
        assert_eq!(session.error(), Some("failed"));
    }

    #[test]
    fn test_summary_panel_toggling() {
        let mut session = Session::new();
        session.show_summary(SummaryResult {
            success: true,
            content: Some("synopsis".to_string()),
            error: None,
        });
        assert!(session.panels().summary);

        session.hide_summary();
        assert!(!session.panels().summary);
        assert!(session.summary().is_none());
    }
}
