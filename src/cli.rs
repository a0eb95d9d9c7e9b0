use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the backend API base URL
    #[arg(long)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a document for translation (txt, pdf, docx, doc)
    File {
        /// Input document
        #[arg(short, long)]
        input: PathBuf,

        /// Source language ("auto" to detect)
        #[arg(short, long, default_value = "auto")]
        source: String,

        /// Target language
        #[arg(short, long, default_value = "英文")]
        target: String,

        /// Where to write the translated artifact
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Translate freeform text
    Text {
        /// Text to translate; read from stdin when omitted
        text: Option<String>,

        /// Source language name or code ("auto" to detect)
        #[arg(short, long, default_value = "auto")]
        source: String,

        /// Target language name or code
        #[arg(short, long, default_value = "zh")]
        target: String,

        /// Request an AI summary alongside the translation
        #[arg(long)]
        summary: bool,

        /// Save the translated text next to the working directory
        #[arg(long)]
        save: bool,
    },

    /// Translate a PDF while preserving its layout
    Pdf {
        /// Input PDF
        #[arg(short, long)]
        input: PathBuf,

        /// Source language name or code ("auto" to detect)
        #[arg(short, long, default_value = "auto")]
        source: String,

        /// Target language name or code
        #[arg(short, long, default_value = "zh")]
        target: String,

        /// Request an AI summary alongside the translation
        #[arg(long)]
        summary: bool,

        /// Where to write the translated PDF
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Translate the text inside an image
    Image {
        /// Input image (jpg, png, bmp, tiff, webp)
        #[arg(short, long)]
        input: PathBuf,

        /// Source language name or code ("auto" to detect)
        #[arg(short, long, default_value = "auto")]
        source: String,

        /// Target language name or code
        #[arg(short, long, default_value = "zh")]
        target: String,

        /// Request an AI summary alongside the translation
        #[arg(long)]
        summary: bool,

        /// Where to write the translated image
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Translate a presentation (pptx, ppt)
    Ppt {
        /// Input presentation
        #[arg(short, long)]
        input: PathBuf,

        /// Source language name or code ("auto" to detect)
        #[arg(short, long, default_value = "auto")]
        source: String,

        /// Target language name or code
        #[arg(short, long, default_value = "zh")]
        target: String,

        /// Request an AI summary alongside the translation
        #[arg(long)]
        summary: bool,

        /// Where to write the translated presentation
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check backend service health
    Health,

    /// Show or set the preferred interface language
    Lang {
        /// Two-letter locale code (zh or en); prints the current choice when omitted
        code: Option<String>,
    },
}
