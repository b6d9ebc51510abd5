use crate::types::VideoInfo;

/// The user-facing failure kinds of a summarize request.
///
/// None of these are fatal: the caller reports the message and stays ready
/// for the next request.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or malformed credentials / URL. Raised before any network call.
    #[error("{0}")]
    Input(&'static str),
    /// YouTube specific metadata or video id failure.
    #[error("Failed to fetch YouTube video details: {0}")]
    Extraction(String),
    /// Anything else that went wrong while loading or summarizing. Keeps the
    /// video details when they were fetched before the failure.
    #[error("An error occurred while processing the request: {message}")]
    Processing {
        message: String,
        video: Option<Box<VideoInfo>>,
    },
}

impl Error {
    pub const MISSING_INPUT: &'static str = "Please enter both the GROQ API KEY and a valid URL.";
    pub const INVALID_URL: &'static str = "Invalid URL. Please enter a valid one.";
    pub const UNKNOWN_MODEL: &'static str = "Unknown model. Please select one from the list.";
    pub const MALFORMED_REQUEST: &'static str = "Could not read the submitted fields.";

    pub fn extraction(e: impl std::fmt::Display) -> Self {
        Error::Extraction(e.to_string())
    }

    pub fn processing(e: impl std::fmt::Display) -> Self {
        Error::Processing {
            message: e.to_string(),
            video: None,
        }
    }

    /// Attaches already fetched video details to a processing error.
    pub fn with_video(self, video: Option<VideoInfo>) -> Self {
        match self {
            Error::Processing { message, .. } => Error::Processing {
                message,
                video: video.map(Box::new),
            },
            other => other,
        }
    }

    pub fn video(&self) -> Option<&VideoInfo> {
        match self {
            Error::Processing { video, .. } => video.as_deref(),
            _ => None,
        }
    }

    /// Stable label used by the JSON endpoint and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Input(_) => "input",
            Error::Extraction(_) => "extraction",
            Error::Processing { .. } => "processing",
        }
    }
}

/// Failures while picking apart YouTube pages and caption payloads.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("parse error: {0}")]
    Structure(&'static str),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}
