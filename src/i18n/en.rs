/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Header
    ("title", "Document Translator"),
    (
        "subtitle",
        "Support PDF, Word, TXT document translation, or direct text input translation",
    ),
    // Translation settings
    ("translation_settings", "Translation Settings"),
    ("source_language", "Source Language:"),
    ("target_language", "Target Language:"),
    ("auto_detect", "Auto Detect"),
    ("chinese", "Chinese"),
    ("english", "English"),
    // Modes
    ("file_upload", "File Upload"),
    ("text_input", "Text Input"),
    ("pdf_format", "PDF Format Translation"),
    ("image_translation", "Image Translation"),
    ("ppt_translation", "PPT Translation"),
    // File upload
    ("upload_title", "Drag files here or click to select files"),
    ("upload_subtitle", "Supported formats: PDF, DOCX, TXT (max 16MB)"),
    ("select_file", "Select File"),
    ("translating", "Translating..."),
    ("start_translate", "Start Translation"),
    // Text input
    ("input_text", "Enter text to translate"),
    ("char_count", "Character count: "),
    (
        "input_hint",
        "Supports automatic language detection, or manually select source and target languages",
    ),
    // Results
    ("translation_complete", "Translation Complete"),
    ("original_text", "Original"),
    ("translated_text", "Translation"),
    ("translation_preview", "Translation Preview:"),
    ("download_file", "Download Translated File"),
    ("translate_new", "Translate New Document"),
    // Progress
    ("translating_progress", "Translation in Progress..."),
    ("processing", "Processing document..."),
    ("uploading", "Uploading document..."),
    ("parsing", "Parsing document content..."),
    ("connecting", "Connecting to translation service..."),
    ("translating_doc", "Translating document..."),
    ("generating", "Generating translation results..."),
    // Errors and status
    ("processing_failed", "Processing Failed"),
    ("checking_status", "Checking system status..."),
    ("system_ok", "System running normally"),
    ("system_error", "Service connection failed"),
    ("error_file_type", "Unsupported file type"),
    ("error_file_size", "File size exceeds limit"),
    ("error_no_text", "Please enter text to translate"),
    ("error_network", "Network connection failed"),
    // Notifications
    ("upload_success", "File uploaded successfully"),
    ("translation_success", "Translation completed"),
    ("download_success", "File downloaded successfully"),
    ("locale_switched", "Switched to English"),
    // Result details
    ("preview_fallback", "Translation complete, download to view the full result"),
    ("unknown", "unknown"),
    ("direction_default", "Chinese → English"),
    ("detail_processing_time", "Processing time: "),
    ("detail_detected_language", "Detected language: "),
    ("detail_confidence", "confidence: "),
    ("detail_direction", "Direction: "),
    ("detail_original_length", "Original length: "),
    ("detail_translated_length", "Translated length: "),
    ("chars_unit", " characters"),
    // Format-preserving flows
    ("pdf_translation_complete", "PDF Translation Complete"),
    ("image_translation_complete", "Image Translation Complete"),
    ("ppt_translation_complete", "PPT Translation Complete"),
    // AI summary
    ("ai_summary", "AI Summary"),
];
