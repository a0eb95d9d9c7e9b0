// Translation service HTTP client.
//
// All application-level failures arrive as JSON bodies whose `success`
// flag is authoritative; HTTP status is only meaningful for artifact
// downloads and the health probe.

pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use reqwest::{Client, Url};
use tracing::debug;

pub use types::*;

use crate::error::{DoctransError, Result};
use crate::validate::DocumentKind;

/// Client-side view of the backend translation API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranslationApi: Send + Sync {
    /// Submit a document for translation.
    async fn upload_document(&self, request: &DocumentRequest) -> Result<UploadResponse>;

    /// Translate freeform text.
    async fn translate_text(
        &self,
        request: &TextTranslationRequest,
    ) -> Result<TextTranslationResponse>;

    /// Download a translated artifact by its locator, absolute or
    /// origin-relative.
    async fn fetch_artifact(&self, locator: &str) -> Result<Vec<u8>>;

    /// Probe the service health endpoint.
    async fn health(&self) -> Result<()>;
}

#[derive(Debug)]
pub struct HttpTranslationApi {
    client: Client,
    base_url: String,
    base: Url,
}

impl HttpTranslationApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let trimmed = base_url.trim_end_matches('/').to_string();
        let base = Url::parse(&trimmed).map_err(|e| {
            DoctransError::Config(format!("Invalid API base URL '{}': {}", base_url, e))
        })?;

        Ok(Self {
            client,
            base_url: trimmed,
            base,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `download_url` values come back absolute or origin-relative
    /// (`/api/files/...`); relative ones resolve against the base origin.
    fn resolve_locator(&self, locator: &str) -> Result<Url> {
        if locator.starts_with("http://") || locator.starts_with("https://") {
            Url::parse(locator)
        } else {
            self.base.join(locator)
        }
        .map_err(|e| DoctransError::Api(format!("Invalid download locator '{}': {}", locator, e)))
    }

    fn upload_path(kind: DocumentKind) -> &'static str {
        match kind {
            DocumentKind::Document => "upload",
            DocumentKind::Pdf => "translate/pdf",
            DocumentKind::Image => "translate/image",
            DocumentKind::Ppt => "translate/ppt",
        }
    }

    fn build_form(request: &DocumentRequest) -> Result<multipart::Form> {
        let mut part =
            multipart::Part::bytes(request.bytes.clone()).file_name(request.file_name.clone());
        if let Some(mime) = &request.mime_type {
            part = part.mime_str(mime)?;
        }

        let mut form = multipart::Form::new().part("file", part);
        match request.kind {
            // The plain upload endpoint predates the format-preserving
            // ones and uses the long field names without a summary flag.
            DocumentKind::Document => {
                if let Some(source) = &request.source_language {
                    form = form.text("source_language", source.clone());
                }
                form = form.text("target_language", request.target_language.clone());
            }
            _ => {
                if let Some(source) = &request.source_language {
                    form = form.text("source_lang", source.clone());
                }
                form = form.text("target_lang", request.target_language.clone());
                form = form.text("enable_summary", request.enable_summary.to_string());
            }
        }
        Ok(form)
    }
}

#[async_trait]
impl TranslationApi for HttpTranslationApi {
    async fn upload_document(&self, request: &DocumentRequest) -> Result<UploadResponse> {
        let url = self.endpoint(Self::upload_path(request.kind));
        debug!(
            "Submitting {} ({} bytes) to {}",
            request.file_name,
            request.bytes.len(),
            url
        );

        let form = Self::build_form(request)?;
        let response = self.client.post(&url).multipart(form).send().await?;
        Ok(response.json::<UploadResponse>().await?)
    }

    async fn translate_text(
        &self,
        request: &TextTranslationRequest,
    ) -> Result<TextTranslationResponse> {
        let url = self.endpoint("translate/translate-text");
        debug!(
            "Submitting {} characters to {}",
            request.text.chars().count(),
            url
        );

        let response = self.client.post(&url).json(request).send().await?;
        Ok(response.json::<TextTranslationResponse>().await?)
    }

    async fn fetch_artifact(&self, locator: &str) -> Result<Vec<u8>> {
        let url = self.resolve_locator(locator)?;
        debug!("Fetching artifact from {}", url);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(DoctransError::Api(format!(
                "Artifact fetch failed: HTTP {}",
                response.status()
            )));
        }
        Ok(response.bytes().await?.to_vec())
    }

    async fn health(&self) -> Result<()> {
        let url = self.endpoint("health");
        let response = self.client.get(&url).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(DoctransError::Api(format!(
                "Health check failed: HTTP {}",
                response.status()
            )))
        }
    }
}
