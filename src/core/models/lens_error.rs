use std::fmt;

use thiserror::Error;

/// Which network call of a submission failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStage {
    Handshake,
    Upload,
}

impl fmt::Display for RequestStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestStage::Handshake => write!(f, "handshake"),
            RequestStage::Upload => write!(f, "upload"),
        }
    }
}

/// Every way a single OCR invocation can fail. None of these are retried.
#[derive(Error, Debug)]
pub enum LensOcrError {
    #[error("transport failure during {stage}: {source}")]
    Transport {
        stage: RequestStage,
        #[source]
        source: reqwest::Error,
    },

    #[error("{}", describe_authentication_failure(.status, .reason))]
    Authentication { status: Option<u16>, reason: String },

    #[error("{stage} rejected by Google Lens with HTTP {status}")]
    Service {
        stage: RequestStage,
        status: u16,
        body: Option<String>,
    },

    #[error("unrecognized Google Lens response: {0}")]
    UnrecognizedFormat(String),

    #[error("no text found in image")]
    NoTextFound,

    #[error("invalid image: {0}")]
    InvalidImage(String),
}

fn describe_authentication_failure(status: &Option<u16>, reason: &str) -> String {
    match status {
        Some(code) => format!("handshake failed with HTTP {}: {}", code, reason),
        None => format!("handshake failed: {}", reason),
    }
}

impl LensOcrError {
    pub fn stage_name(&self) -> &'static str {
        match self {
            LensOcrError::Transport { .. } => "transport",
            LensOcrError::Authentication { .. } => "authentication",
            LensOcrError::Service { .. } => "service",
            LensOcrError::UnrecognizedFormat(_) => "parse",
            LensOcrError::NoTextFound => "no-text",
            LensOcrError::InvalidImage(_) => "input",
        }
    }

    pub fn response_body(&self) -> Option<&str> {
        match self {
            LensOcrError::Service { body, .. } => body.as_deref(),
            _ => None,
        }
    }
}
