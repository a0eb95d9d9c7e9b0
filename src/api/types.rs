use serde::{Deserialize, Serialize};

use crate::validate::DocumentKind;

/// Outcome of the server-side AI summary, independent of the primary
/// translation: either `success` with `content`, or `error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response to a document upload or format-preserving translation.
/// Error bodies carry `error` and no `success`, so every field defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub processing_time: Option<String>,
    #[serde(default)]
    pub detected_language: Option<String>,
    /// The service reports confidence as either a number or a string.
    #[serde(default)]
    pub language_confidence: Option<serde_json::Value>,
    #[serde(default)]
    pub translation_direction: Option<String>,
    #[serde(default)]
    pub original_length: Option<u64>,
    #[serde(default)]
    pub translated_length: Option<u64>,
    #[serde(default)]
    pub summary: Option<SummaryResult>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextTranslationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub original_text: Option<String>,
    #[serde(default)]
    pub translated_text: Option<String>,
    #[serde(default)]
    pub source_lang: Option<String>,
    #[serde(default)]
    pub target_lang: Option<String>,
    #[serde(default)]
    pub processing_time: Option<String>,
    #[serde(default)]
    pub summary: Option<SummaryResult>,
    #[serde(default)]
    pub error: Option<String>,
}

/// JSON body for the text translation endpoint. `source_lang` is omitted
/// entirely for auto-detection.
#[derive(Debug, Clone, Serialize)]
pub struct TextTranslationRequest {
    pub text: String,
    pub target_lang: String,
    pub enable_summary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<String>,
}

/// Multipart payload for the upload and format-preserving endpoints.
#[derive(Debug, Clone)]
pub struct DocumentRequest {
    pub kind: DocumentKind,
    pub file_name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
    /// None means auto-detect; the form field is omitted
    pub source_language: Option<String>,
    pub target_language: String,
    /// Only sent on the format-preserving endpoints
    pub enable_summary: bool,
}
