use std::sync::OnceLock;

use regex::Regex;

use super::LensDocument;
use crate::core::models::{LensOcrError, OcrResult, RawResponse};
use crate::global_constants;

fn get_callback_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r#"(?s)>AF_initDataCallback\((\{key: 'ds:1'.*?)\);</script>"#)
            .expect("callback pattern is a valid regex")
    })
}

/// Pulls the recognized lines out of a Lens upload result page.
pub fn parse_lens_response(raw: &RawResponse) -> Result<OcrResult, LensOcrError> {
    let page = raw.body_text();
    log::debug!(
        "{} Parsing {} byte response (HTTP {})",
        global_constants::LOG_TAG_LENS_PARSER,
        raw.body.len(),
        raw.status
    );

    let callback = get_callback_regex()
        .captures(&page)
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| {
            LensOcrError::UnrecognizedFormat("ds:1 data callback not found in page".to_string())
        })?;

    let document = LensDocument::from_callback_object(callback.as_str())?;
    let text_nodes = document.array(&global_constants::LENS_TEXT_LINES_PATH)?;

    let Some(lines) = text_nodes.first().and_then(|node| node.as_array()) else {
        log::info!(
            "{} Response contains no text lines",
            global_constants::LOG_TAG_LENS_PARSER
        );
        return Err(LensOcrError::NoTextFound);
    };

    let lines: Vec<String> = lines
        .iter()
        .filter_map(|line| line.as_str())
        .map(str::to_string)
        .collect();

    let result = OcrResult::from_lines(lines);
    if result.is_blank() {
        return Err(LensOcrError::NoTextFound);
    }

    log::info!(
        "{} Extracted {} lines ({} characters)",
        global_constants::LOG_TAG_LENS_PARSER,
        result.line_count(),
        result.full_text.len()
    );
    Ok(result)
}
