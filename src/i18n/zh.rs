/// Chinese translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Header
    ("title", "文档翻译工具"),
    ("subtitle", "支持PDF、Word、TXT文档翻译，或直接输入文本进行翻译"),
    // Translation settings
    ("translation_settings", "翻译设置"),
    ("source_language", "源语言："),
    ("target_language", "目标语言："),
    ("auto_detect", "自动检测"),
    ("chinese", "中文"),
    ("english", "英文"),
    // Modes
    ("file_upload", "文件上传"),
    ("text_input", "文本输入"),
    ("pdf_format", "PDF格式翻译"),
    ("image_translation", "图片翻译"),
    ("ppt_translation", "PPT翻译"),
    // File upload
    ("upload_title", "拖拽文件到此处或点击选择文件"),
    ("upload_subtitle", "支持格式：PDF、DOCX、TXT（最大16MB）"),
    ("select_file", "选择文件"),
    ("translating", "翻译中..."),
    ("start_translate", "开始翻译"),
    // Text input
    ("input_text", "输入要翻译的文本"),
    ("char_count", "字符数: "),
    ("input_hint", "支持自动检测语言，也可手动选择源语言和目标语言"),
    // Results
    ("translation_complete", "翻译完成"),
    ("original_text", "原文"),
    ("translated_text", "译文"),
    ("translation_preview", "翻译预览："),
    ("download_file", "下载翻译文件"),
    ("translate_new", "翻译新文档"),
    // Progress
    ("translating_progress", "翻译进行中..."),
    ("processing", "正在处理文档..."),
    ("uploading", "正在上传文档..."),
    ("parsing", "正在解析文档内容..."),
    ("connecting", "正在连接翻译服务..."),
    ("translating_doc", "正在翻译文档..."),
    ("generating", "正在生成翻译结果..."),
    // Errors and status
    ("processing_failed", "处理失败"),
    ("checking_status", "检查系统状态..."),
    ("system_ok", "系统运行正常"),
    ("system_error", "服务连接异常"),
    ("error_file_type", "不支持的文件类型"),
    ("error_file_size", "文件大小超出限制"),
    ("error_no_text", "请输入要翻译的文本"),
    ("error_network", "网络连接失败"),
    // Notifications
    ("upload_success", "文件上传成功"),
    ("translation_success", "翻译完成"),
    ("download_success", "文件下载成功"),
    ("locale_switched", "已切换到中文"),
    // Result details
    ("preview_fallback", "翻译完成，点击下载查看完整结果"),
    ("unknown", "未知"),
    ("direction_default", "中文 → 英文"),
    ("detail_processing_time", "处理时间："),
    ("detail_detected_language", "检测语言："),
    ("detail_confidence", "置信度："),
    ("detail_direction", "翻译方向："),
    ("detail_original_length", "原文长度："),
    ("detail_translated_length", "译文长度："),
    ("chars_unit", " 字符"),
    // Format-preserving flows
    ("pdf_translation_complete", "PDF翻译完成"),
    ("image_translation_complete", "图片翻译完成"),
    ("ppt_translation_complete", "PPT翻译完成"),
    // AI summary
    ("ai_summary", "AI 总结"),
];
