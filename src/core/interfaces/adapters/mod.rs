mod clipboard_service;
mod ocr_service;

pub use clipboard_service::ClipboardService;
pub use ocr_service::OcrService;
