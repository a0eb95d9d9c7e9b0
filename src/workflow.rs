use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

use crate::api::{HttpTranslationApi, TranslationApi};
use crate::api::types::{DocumentRequest, TextTranslationRequest, UploadResponse};
use crate::config::Config;
use crate::error::{DoctransError, Result};
use crate::i18n::I18n;
use crate::progress::ProgressPresenter;
use crate::session::{Mode, Session};
use crate::validate::{DocumentKind, SelectedFile};
use crate::view;

/// Display-name to language-code table used where the service expects
/// codes. Unknown values pass through unmapped.
pub const LANGUAGE_CODES: &[(&str, &str)] = &[
    ("中文", "zh"),
    ("英文", "en"),
    ("auto", "auto"),
    ("zh", "zh"),
    ("en", "en"),
];

/// Resolve a selector value to a language code: mapped when known, the
/// literal value when not, `fallback` when empty.
pub fn resolve_language_code(value: &str, fallback: &str) -> String {
    let value = value.trim();
    for &(name, code) in LANGUAGE_CODES {
        if name == value {
            return code.to_string();
        }
    }
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn mode_for_kind(kind: DocumentKind) -> Mode {
    match kind {
        DocumentKind::Document => Mode::File,
        DocumentKind::Pdf => Mode::Pdf,
        DocumentKind::Image => Mode::Image,
        DocumentKind::Ppt => Mode::Ppt,
    }
}

pub struct Workflow {
    api: Box<dyn TranslationApi>,
    i18n: I18n,
}

impl Workflow {
    pub fn new(config: &Config, i18n: I18n) -> Result<Self> {
        let api = HttpTranslationApi::new(&config.api.resolve_base_url(), config.api.timeout())?;
        Ok(Self {
            api: Box::new(api),
            i18n,
        })
    }

    /// Build a workflow over any API implementation.
    pub fn with_api(api: Box<dyn TranslationApi>, i18n: I18n) -> Self {
        Self { api, i18n }
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    /// Upload a document (txt, pdf, docx, doc) and render the outcome.
    pub async fn translate_document(
        &self,
        session: &mut Session,
        input: &Path,
        source: &str,
        target: &str,
        output: Option<&Path>,
    ) -> Result<()> {
        self.run_upload(
            session,
            DocumentKind::Document,
            input,
            source,
            target,
            false,
            output,
        )
        .await
    }

    /// Format-preserving flows: pdf, image, ppt.
    pub async fn translate_formatted(
        &self,
        session: &mut Session,
        kind: DocumentKind,
        input: &Path,
        source: &str,
        target: &str,
        enable_summary: bool,
        output: Option<&Path>,
    ) -> Result<()> {
        self.run_upload(session, kind, input, source, target, enable_summary, output)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    async fn run_upload(
        &self,
        session: &mut Session,
        kind: DocumentKind,
        input: &Path,
        source: &str,
        target: &str,
        enable_summary: bool,
        output: Option<&Path>,
    ) -> Result<()> {
        session.switch_mode(mode_for_kind(kind));
        view::render_mode_header(&self.i18n, session.mode());

        let file = match SelectedFile::from_path(input) {
            Ok(file) => file,
            Err(e) => return self.fail(session, e),
        };
        session.select_file(file.clone());

        // Both rejections happen before any network call.
        if let Err(e) = file.validate(kind) {
            return self.fail(session, e);
        }

        let bytes = match fs::read(input).await {
            Ok(bytes) => bytes,
            Err(e) => return self.fail(session, e.into()),
        };

        // The plain upload endpoint takes the selector value verbatim;
        // the format-preserving endpoints expect codes.
        let (source_field, target_field) = match kind {
            DocumentKind::Document => (
                (source != "auto").then(|| source.to_string()),
                target.to_string(),
            ),
            _ => {
                let code = resolve_language_code(source, "auto");
                (
                    (code != "auto").then_some(code),
                    resolve_language_code(target, "zh"),
                )
            }
        };

        let request = DocumentRequest {
            kind,
            file_name: file.name.clone(),
            mime_type: file.mime_type.clone(),
            bytes,
            source_language: source_field,
            target_language: target_field,
            enable_summary,
        };

        session.begin_request()?;
        let mut presenter = ProgressPresenter::new(self.i18n.locale());
        presenter.start();

        info!("Uploading {} for translation", file.name);
        let outcome = self.api.upload_document(&request).await;

        presenter.stop();
        session.finish_request();

        match outcome {
            Ok(response) if response.success => {
                self.finish_upload(session, kind, &response, output).await
            }
            Ok(response) => {
                let message = response
                    .error
                    .clone()
                    .unwrap_or_else(|| self.i18n.t("processing_failed").to_string());
                self.fail(session, DoctransError::Api(message))
            }
            Err(e) => self.fail(session, e),
        }
    }

    /// Post-success handling: best-effort artifact fetch for the inline
    /// preview and the optional local download. A failed fetch degrades
    /// to the placeholder preview, never to an error panel.
    async fn finish_upload(
        &self,
        session: &mut Session,
        kind: DocumentKind,
        response: &UploadResponse,
        output: Option<&Path>,
    ) -> Result<()> {
        let download_url = response.download_url.clone();
        let artifact = match &download_url {
            Some(url) => match self.api.fetch_artifact(url).await {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    warn!("Artifact fetch failed, keeping placeholder preview: {}", e);
                    None
                }
            },
            None => None,
        };

        // Only plain documents render inline; format-preserving outputs
        // are binary.
        let preview = match &artifact {
            Some(bytes) if kind == DocumentKind::Document => {
                view::preview_snippet(&String::from_utf8_lossy(bytes))
            }
            _ => self.i18n.t("preview_fallback").to_string(),
        };

        session.show_result(preview.clone(), download_url.clone());
        view::render_result_panel(&self.i18n, &preview, download_url.as_deref());

        if let Some(summary) = &response.summary {
            session.show_summary(summary.clone());
            view::render_summary_panel(&self.i18n, summary);
        }

        view::render_notification(&view::format_upload_detail(&self.i18n, response));

        if let (Some(path), Some(bytes)) = (output, &artifact) {
            fs::write(path, bytes).await?;
            info!("Translated artifact written to {}", path.display());
            view::render_notification(self.i18n.t("download_success"));
        }

        Ok(())
    }

    /// Translate freeform text and render the outcome.
    pub async fn translate_text(
        &self,
        session: &mut Session,
        text: &str,
        source: &str,
        target: &str,
        enable_summary: bool,
        save_to: Option<&Path>,
    ) -> Result<()> {
        session.switch_mode(Mode::Text);
        view::render_mode_header(&self.i18n, session.mode());

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return self.fail(session, DoctransError::EmptyText);
        }
        session.set_text(trimmed);
        view::render_char_count(&self.i18n, trimmed.chars().count());

        let source_code = resolve_language_code(source, "auto");
        let target_code = resolve_language_code(target, "zh");

        let request = TextTranslationRequest {
            text: trimmed.to_string(),
            target_lang: target_code,
            enable_summary,
            source_lang: (source_code != "auto").then_some(source_code),
        };

        session.begin_request()?;
        let mut presenter = ProgressPresenter::new(self.i18n.locale());
        presenter.start();

        let outcome = self.api.translate_text(&request).await;

        presenter.stop();
        session.finish_request();

        match outcome {
            Ok(response) if response.success => {
                let translated = response.translated_text.clone().unwrap_or_default();
                session.show_result(translated.clone(), None);
                view::render_text_result(&self.i18n, &translated);

                match &response.summary {
                    Some(summary) => {
                        session.show_summary(summary.clone());
                        view::render_summary_panel(&self.i18n, summary);
                    }
                    None => session.hide_summary(),
                }

                view::render_notification(self.i18n.t("translation_success"));

                if let Some(path) = save_to {
                    self.save_text_result(path, &translated).await?;
                }
                Ok(())
            }
            Ok(response) => {
                let message = response
                    .error
                    .clone()
                    .unwrap_or_else(|| self.i18n.t("processing_failed").to_string());
                self.fail(session, DoctransError::Api(message))
            }
            Err(e) => self.fail(session, e),
        }
    }

    async fn save_text_result(&self, path: &Path, translated: &str) -> Result<()> {
        let content = format!("{}:\n{}\n", self.i18n.t("translated_text"), translated);
        fs::write(path, content).await?;
        info!("Translated text written to {}", path.display());
        view::render_notification(self.i18n.t("download_success"));
        Ok(())
    }

    /// Default file name for a saved text translation.
    pub fn default_text_output_name() -> PathBuf {
        let stamp = chrono::Local::now().format("%Y-%m-%d-%H-%M-%S");
        PathBuf::from(format!("trans_result_{}.txt", stamp))
    }

    /// Probe service health; failures are reported, not propagated.
    pub async fn check_health(&self) -> bool {
        match self.api.health().await {
            Ok(()) => true,
            Err(e) => {
                warn!("Health check failed: {}", e);
                false
            }
        }
    }

    /// Record the failure on the session, render the localized error
    /// panel, and propagate the original error. Any previously shown
    /// summary is cleared first.
    fn fail(&self, session: &mut Session, error: DoctransError) -> Result<()> {
        let message = self.error_message(&error);
        session.hide_summary();
        session.show_error(message.clone());
        view::render_error_panel(&self.i18n, &message);
        Err(error)
    }

    fn error_message(&self, error: &DoctransError) -> String {
        match error {
            DoctransError::UnsupportedFormat(_) => self.i18n.t("error_file_type").to_string(),
            DoctransError::FileTooLarge(_) => self.i18n.t("error_file_size").to_string(),
            DoctransError::EmptyText => self.i18n.t("error_no_text").to_string(),
            DoctransError::Http(_) => self.i18n.t("error_network").to_string(),
            DoctransError::Api(message) => message.clone(),
            other => other.to_string(),
        }
    }
}
