/// Cookie header value obtained from the handshake. Lives for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn from_set_cookie_headers<'a>(
        consent_cookie: &str,
        set_cookie_values: impl IntoIterator<Item = &'a str>,
    ) -> Option<Self> {
        let issued_cookies: Vec<&str> = set_cookie_values
            .into_iter()
            .filter_map(|value| value.split(';').next())
            .map(str::trim)
            .filter(|pair| pair.contains('=') && !pair.starts_with('='))
            .collect();

        if issued_cookies.is_empty() {
            return None;
        }

        let mut cookie_header = consent_cookie.to_string();
        for pair in issued_cookies {
            if !cookie_header.is_empty() {
                cookie_header.push_str("; ");
            }
            cookie_header.push_str(pair);
        }

        Some(Self(cookie_header))
    }

    pub fn cookie_header(&self) -> &str {
        &self.0
    }
}
