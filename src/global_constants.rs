pub const APPLICATION_NAME: &str = "lens-ocr";

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_GOOGLE_LENS: &str = "[GOOGLE_LENS]";
pub const LOG_TAG_LENS_PARSER: &str = "[LENS_PARSER]";
pub const LOG_TAG_CLIPBOARD: &str = "[CLIPBOARD]";
pub const LOG_TAG_IMAGE: &str = "[IMAGE]";

pub const LENS_UPLOAD_URL: &str = "https://lens.google.com/v3/upload";
pub const LENS_HANDSHAKE_URL: &str = "https://lens.google.com/";

pub const LENS_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 13; RMX3771) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.6167.144 Mobile Safari/537.36";
pub const LENS_CONSENT_COOKIE: &str = "SOCS=CAESEwgDEgk0ODE3Nzk3MjQaAmVuIAEaBgiA_LyaBg";

pub const LENS_UPLOAD_FIELD_NAME: &str = "encoded_image";
pub const LENS_TIMESTAMP_QUERY_KEY: &str = "stcs";

pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

// Index path inside the `data` array of the `ds:1` callback.
pub const LENS_TEXT_LINES_PATH: [usize; 3] = [3, 4, 0];

pub const ERROR_MISSING_IMAGE_ARGUMENT: &str = "missing file to use OCR with";
pub const ERROR_CONTEXT_READ_IMAGE: &str = "Could not open image";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_tags_are_bracketed_upper_case() {
        for tag in [
            LOG_TAG_APP,
            LOG_TAG_GOOGLE_LENS,
            LOG_TAG_LENS_PARSER,
            LOG_TAG_CLIPBOARD,
            LOG_TAG_IMAGE,
        ] {
            assert!(tag.starts_with('[') && tag.ends_with(']'), "bad tag {}", tag);
            let name = &tag[1..tag.len() - 1];
            assert!(!name.is_empty());
            assert!(name.chars().all(|c| c.is_ascii_uppercase() || c == '_'), "bad tag {}", tag);
        }
    }
}
