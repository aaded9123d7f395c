use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::core::interfaces::adapters::{ClipboardService, OcrService};
use crate::core::models::{ImagePayload, OcrResult};
use crate::global_constants::LOG_TAG_APP;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputDestination {
    Stdout,
    Clipboard,
}

pub struct TextExtractionOrchestrator {
    ocr_service: Arc<dyn OcrService>,
    clipboard_service: Arc<dyn ClipboardService>,
}

impl TextExtractionOrchestrator {
    pub fn build(
        ocr_service: Arc<dyn OcrService>,
        clipboard_service: Arc<dyn ClipboardService>,
    ) -> Self {
        Self {
            ocr_service,
            clipboard_service,
        }
    }

    pub async fn extract_and_deliver<W: Write>(
        &self,
        image: &ImagePayload,
        destination: OutputDestination,
        stdout: &mut W,
    ) -> Result<OcrResult> {
        log::info!(
            "{} Extracting text from {} for {:?}",
            LOG_TAG_APP,
            image.file_name(),
            destination
        );

        let result = match self.ocr_service.extract_text_from_image(image).await {
            Ok(result) => result,
            Err(error) => {
                log::error!("{} OCR failed ({}): {}", LOG_TAG_APP, error.stage_name(), error);
                let stage = error.stage_name();
                return Err(anyhow::Error::new(error)
                    .context(format!("OCR of {} failed at {} stage", image.file_name(), stage)));
            }
        };

        match destination {
            OutputDestination::Stdout => {
                writeln!(stdout, "{}\n", result.full_text).context("Could not write to stdout")?;
                stdout.flush().context("Could not flush stdout")?;
            }
            OutputDestination::Clipboard => {
                self.clipboard_service.copy_text(&result.full_text)?;
            }
        }

        Ok(result)
    }
}
