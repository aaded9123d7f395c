use async_trait::async_trait;

use crate::core::models::{ImagePayload, LensOcrError, OcrResult};

#[async_trait]
pub trait OcrService: Send + Sync {
    async fn extract_text_from_image(&self, image: &ImagePayload)
        -> Result<OcrResult, LensOcrError>;
}
