use async_trait::async_trait;

use super::google_lens_client::GoogleLensClient;
use crate::core::interfaces::adapters::OcrService;
use crate::core::models::{ImagePayload, LensOcrError, OcrResult};
use crate::core::parsing::parse_lens_response;
use crate::global_constants::LOG_TAG_GOOGLE_LENS;

pub struct GoogleLensOcrService {
    client: GoogleLensClient,
}

impl GoogleLensOcrService {
    pub fn new(client: GoogleLensClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OcrService for GoogleLensOcrService {
    async fn extract_text_from_image(
        &self,
        image: &ImagePayload,
    ) -> Result<OcrResult, LensOcrError> {
        log::info!("{} Starting text extraction", LOG_TAG_GOOGLE_LENS);

        let raw_response = self.client.submit(image).await?;
        let result = parse_lens_response(&raw_response)?;

        log::info!(
            "{} Text extraction complete. Extracted {} characters",
            LOG_TAG_GOOGLE_LENS,
            result.full_text.len()
        );
        Ok(result)
    }
}
