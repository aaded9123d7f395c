mod arboard_clipboard_service;
mod google_lens_client;
mod google_lens_ocr_service;

pub use arboard_clipboard_service::ArboardClipboardService;
pub use google_lens_client::GoogleLensClient;
pub use google_lens_ocr_service::GoogleLensOcrService;
