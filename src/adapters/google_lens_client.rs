use anyhow::{Context, Result};
use reqwest::header::{COOKIE, SET_COOKIE, USER_AGENT};

use crate::client_settings::LensClientSettings;
use crate::core::models::{
    ImagePayload, LensOcrError, RawResponse, RequestStage, SessionToken, UploadRequest,
};
use crate::global_constants::LOG_TAG_GOOGLE_LENS;
use crate::utils;

/// Talks to the Lens web uploader the way a mobile browser would.
///
/// Each call to [`GoogleLensClient::submit`] is independent: the optional
/// handshake token is created inside the call and dropped when it returns.
/// Nothing is retried.
pub struct GoogleLensClient {
    http_client: reqwest::Client,
    settings: LensClientSettings,
}

impl GoogleLensClient {
    pub fn build(settings: LensClientSettings) -> Result<Self> {
        log::info!(
            "{} Building client for {} (timeout {:?}, handshake {})",
            LOG_TAG_GOOGLE_LENS,
            settings.upload_url,
            settings.timeout,
            if settings.handshake_enabled { "on" } else { "off" }
        );

        let mut builder = reqwest::Client::builder().timeout(settings.timeout);
        if !settings.use_system_proxy {
            builder = builder.no_proxy();
        }
        let http_client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            settings,
        })
    }

    pub async fn submit(&self, image: &ImagePayload) -> Result<RawResponse, LensOcrError> {
        let session = if self.settings.handshake_enabled {
            Some(self.perform_handshake().await?)
        } else {
            None
        };

        let cookie_header = session
            .as_ref()
            .map(SessionToken::cookie_header)
            .unwrap_or(self.settings.consent_cookie.as_str());

        let request = UploadRequest::build(
            &self.settings.upload_url,
            &self.settings.user_agent,
            cookie_header,
            image,
            utils::get_timestamp_ms(),
        );

        self.send_upload(request).await
    }

    async fn perform_handshake(&self) -> Result<SessionToken, LensOcrError> {
        log::info!(
            "{} Requesting session cookies from {}",
            LOG_TAG_GOOGLE_LENS,
            self.settings.handshake_url
        );

        let response = self
            .http_client
            .get(&self.settings.handshake_url)
            .header(USER_AGENT, &self.settings.user_agent)
            .header(COOKIE, &self.settings.consent_cookie)
            .send()
            .await
            .map_err(|source| LensOcrError::Transport {
                stage: RequestStage::Handshake,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            log::error!(
                "{} Handshake rejected with HTTP {}",
                LOG_TAG_GOOGLE_LENS,
                status
            );
            return Err(LensOcrError::Authentication {
                status: Some(status.as_u16()),
                reason: "handshake request was rejected".to_string(),
            });
        }

        let set_cookie_values: Vec<&str> = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect();

        log::debug!(
            "{} Handshake issued {} cookies",
            LOG_TAG_GOOGLE_LENS,
            set_cookie_values.len()
        );

        SessionToken::from_set_cookie_headers(&self.settings.consent_cookie, set_cookie_values)
            .ok_or_else(|| LensOcrError::Authentication {
                status: None,
                reason: "no session cookie issued".to_string(),
            })
    }

    async fn send_upload(&self, request: UploadRequest<'_>) -> Result<RawResponse, LensOcrError> {
        let form = request
            .build_multipart_form()
            .map_err(|error| LensOcrError::InvalidImage(error.to_string()))?;

        log::info!(
            "{} Uploading {} ({} bytes, {})",
            LOG_TAG_GOOGLE_LENS,
            request.image.file_name(),
            request.image.bytes().len(),
            request.content_type()
        );
        log::debug!("{} Upload URL: {}", LOG_TAG_GOOGLE_LENS, request.url);

        let response = self
            .http_client
            .post(&request.url)
            .header(USER_AGENT, &request.user_agent)
            .header(COOKIE, &request.cookie_header)
            .multipart(form)
            .send()
            .await
            .map_err(|source| LensOcrError::Transport {
                stage: RequestStage::Upload,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .ok()
                .filter(|text| !text.trim().is_empty());
            log::error!("{} Upload rejected with HTTP {}", LOG_TAG_GOOGLE_LENS, status);
            if let Some(text) = &body {
                log::debug!("{} Rejection body: {}", LOG_TAG_GOOGLE_LENS, text);
            }
            return Err(LensOcrError::Service {
                stage: RequestStage::Upload,
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| LensOcrError::Transport {
                stage: RequestStage::Upload,
                source,
            })?;

        log::info!(
            "{} Received {} byte response",
            LOG_TAG_GOOGLE_LENS,
            body.len()
        );

        Ok(RawResponse::new(status.as_u16(), body.to_vec()))
    }
}
