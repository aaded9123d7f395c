use std::path::Path;

use super::image_format::ImageFormat;
use super::lens_error::LensOcrError;
use crate::global_constants::LOG_TAG_IMAGE;

/// Source image handed to the OCR service. Read once, never modified.
#[derive(Clone)]
pub struct ImagePayload {
    bytes: Vec<u8>,
    file_name: String,
    format: ImageFormat,
}

impl std::fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePayload")
            .field("file_name", &self.file_name)
            .field("format", &self.format)
            .field("size_bytes", &self.bytes.len())
            .finish()
    }
}

impl ImagePayload {
    pub fn build_from_file_contents(path: &Path, bytes: Vec<u8>) -> Result<Self, LensOcrError> {
        if bytes.is_empty() {
            return Err(LensOcrError::InvalidImage(format!(
                "{} is empty",
                path.display()
            )));
        }

        let format = ImageFormat::detect_from_bytes(&bytes)
            .or_else(|| ImageFormat::detect_from_extension(path))
            .unwrap_or_else(|| {
                log::warn!(
                    "{} Could not infer format of {}, declaring it as {}",
                    LOG_TAG_IMAGE,
                    path.display(),
                    ImageFormat::default()
                );
                ImageFormat::default()
            });

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("image.{}", format.file_extension()));

        log::debug!(
            "{} Loaded {} ({} bytes, {})",
            LOG_TAG_IMAGE,
            file_name,
            bytes.len(),
            format
        );

        Self::with_declared_format(file_name, bytes, format)
    }

    pub fn with_declared_format(
        file_name: impl Into<String>,
        bytes: Vec<u8>,
        format: ImageFormat,
    ) -> Result<Self, LensOcrError> {
        let file_name = file_name.into();
        if bytes.is_empty() {
            return Err(LensOcrError::InvalidImage(format!("{} is empty", file_name)));
        }

        Ok(Self {
            bytes,
            file_name,
            format,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}
