use super::image_payload::ImagePayload;
use crate::global_constants;

/// Everything needed to send one upload. Built fresh for every submission.
#[derive(Debug, Clone)]
pub struct UploadRequest<'a> {
    pub url: String,
    pub user_agent: String,
    pub cookie_header: String,
    pub field_name: &'static str,
    pub file_name: String,
    pub image: &'a ImagePayload,
}

impl<'a> UploadRequest<'a> {
    pub fn build(
        upload_url: &str,
        user_agent: &str,
        cookie_header: &str,
        image: &'a ImagePayload,
        timestamp_millis: u128,
    ) -> Self {
        let separator = if upload_url.contains('?') { '&' } else { '?' };
        let url = format!(
            "{}{}{}={}",
            upload_url,
            separator,
            global_constants::LENS_TIMESTAMP_QUERY_KEY,
            timestamp_millis
        );
        let file_name = format!(
            "{}.{}",
            timestamp_millis,
            image.format().file_extension()
        );

        Self {
            url,
            user_agent: user_agent.to_string(),
            cookie_header: cookie_header.to_string(),
            field_name: global_constants::LENS_UPLOAD_FIELD_NAME,
            file_name,
            image,
        }
    }

    pub fn content_type(&self) -> &'static str {
        self.image.mime_type()
    }

    pub fn build_multipart_form(&self) -> reqwest::Result<reqwest::multipart::Form> {
        let part = reqwest::multipart::Part::bytes(self.image.bytes().to_vec())
            .file_name(self.file_name.clone())
            .mime_str(self.content_type())?;

        Ok(reqwest::multipart::Form::new().part(self.field_name, part))
    }
}
