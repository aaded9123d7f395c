mod image_format;
mod image_payload;
mod lens_error;
mod ocr;
mod raw_response;
mod session_token;
mod upload_request;

pub use image_format::ImageFormat;
pub use image_payload::ImagePayload;
pub use lens_error::{LensOcrError, RequestStage};
pub use ocr::OcrResult;
pub use raw_response::RawResponse;
pub use session_token::SessionToken;
pub use upload_request::UploadRequest;
