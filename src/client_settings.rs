use std::time::Duration;

use crate::global_constants;

/// How the Lens client disguises itself and where it sends requests.
#[derive(Debug, Clone, PartialEq)]
pub struct LensClientSettings {
    pub upload_url: String,
    pub handshake_url: String,
    pub user_agent: String,
    pub consent_cookie: String,
    pub timeout: Duration,
    pub handshake_enabled: bool,
    pub use_system_proxy: bool,
}

impl Default for LensClientSettings {
    fn default() -> Self {
        Self {
            upload_url: global_constants::LENS_UPLOAD_URL.to_string(),
            handshake_url: global_constants::LENS_HANDSHAKE_URL.to_string(),
            user_agent: global_constants::LENS_USER_AGENT.to_string(),
            consent_cookie: global_constants::LENS_CONSENT_COOKIE.to_string(),
            timeout: Duration::from_secs(global_constants::DEFAULT_REQUEST_TIMEOUT_SECONDS),
            handshake_enabled: false,
            use_system_proxy: true,
        }
    }
}

impl LensClientSettings {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_handshake(mut self, enabled: bool) -> Self {
        self.handshake_enabled = enabled;
        self
    }

    pub fn with_system_proxy(mut self, enabled: bool) -> Self {
        self.use_system_proxy = enabled;
        self
    }

    /// Points both endpoints at another host, keeping the Lens paths.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        self.upload_url = format!("{}/v3/upload", base_url);
        self.handshake_url = format!("{}/", base_url);
        self
    }
}
