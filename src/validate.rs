//! Pre-submission validation of selected files.
//!
//! Validation is permissive on purpose: a file is accepted when EITHER its
//! declared MIME type OR its extension matches the allowed set for the
//! flow, mirroring the service's own intake rules. A mismatch between the
//! two signals is not flagged. The size ceiling is checked after the type.

use std::path::Path;

use crate::error::{DoctransError, Result};

/// Upload size ceiling shared by every flow (16 MiB, strict greater-than).
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

pub const DOCUMENT_MIME_TYPES: &[&str] = &[
    "text/plain",
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/msword",
];
pub const DOCUMENT_EXTENSIONS: &[&str] = &["txt", "pdf", "docx", "doc"];

pub const IMAGE_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/bmp",
    "image/tiff",
    "image/webp",
];
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "webp"];

pub const PPT_MIME_TYPES: &[&str] = &[
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "application/vnd.ms-powerpoint",
];
pub const PPT_EXTENSIONS: &[&str] = &["pptx", "ppt"];

/// Which upload flow a file is being validated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Plain document upload (txt, pdf, docx, doc)
    Document,
    /// Format-preserving PDF translation
    Pdf,
    /// Image translation
    Image,
    /// Presentation translation
    Ppt,
}

impl DocumentKind {
    fn allowed_mime_types(&self) -> &'static [&'static str] {
        match self {
            DocumentKind::Document => DOCUMENT_MIME_TYPES,
            DocumentKind::Pdf => &["application/pdf"],
            DocumentKind::Image => IMAGE_MIME_TYPES,
            DocumentKind::Ppt => PPT_MIME_TYPES,
        }
    }

    fn allowed_extensions(&self) -> &'static [&'static str] {
        match self {
            DocumentKind::Document => DOCUMENT_EXTENSIONS,
            DocumentKind::Pdf => &["pdf"],
            DocumentKind::Image => IMAGE_EXTENSIONS,
            DocumentKind::Ppt => PPT_EXTENSIONS,
        }
    }
}

/// A file the user picked for upload, captured before any network call.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime_type: Option<String>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64, mime_type: Option<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type,
        }
    }

    /// Capture name, size, and a MIME type guessed from the extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)
            .map_err(|_| DoctransError::FileNotFound(path.display().to_string()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let mime_type = extension_of(&name)
            .and_then(|ext| guess_mime_type(&ext))
            .map(|m| m.to_string());

        Ok(Self {
            name,
            size: metadata.len(),
            mime_type,
        })
    }

    /// Lowercased extension without the dot, if any.
    pub fn extension(&self) -> Option<String> {
        extension_of(&self.name)
    }

    /// Type check first, size ceiling second; no network involved.
    pub fn validate(&self, kind: DocumentKind) -> Result<()> {
        let mime_ok = self
            .mime_type
            .as_deref()
            .map(|m| kind.allowed_mime_types().contains(&m))
            .unwrap_or(false);
        let ext_ok = self
            .extension()
            .map(|e| kind.allowed_extensions().contains(&e.as_str()))
            .unwrap_or(false);

        if !mime_ok && !ext_ok {
            return Err(DoctransError::UnsupportedFormat(self.name.clone()));
        }

        if self.size > MAX_UPLOAD_BYTES {
            return Err(DoctransError::FileTooLarge(self.size));
        }

        Ok(())
    }
}

fn extension_of(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

/// Extension to MIME mapping for the formats the service understands.
pub fn guess_mime_type(extension: &str) -> Option<&'static str> {
    match extension {
        "txt" => Some("text/plain"),
        "pdf" => Some("application/pdf"),
        "docx" => {
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
        }
        "doc" => Some("application/msword"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "bmp" => Some("image/bmp"),
        "tiff" => Some("image/tiff"),
        "webp" => Some("image/webp"),
        "pptx" => {
            Some("application/vnd.openxmlformats-officedocument.presentationml.presentation")
        }
        "ppt" => Some("application/vnd.ms-powerpoint"),
        _ => None,
    }
}
