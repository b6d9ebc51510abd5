pub mod web;

use std::{fmt::Display, future::Future};

use crate::types::Document;

/// Fetches a source and turns it into text documents.
pub trait DocumentLoader {
    type Error: Display + Send;

    fn load(&self, url: &str) -> impl Future<Output = Result<Vec<Document>, Self::Error>> + Send;
}

#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{url} responded with {status}")]
    Status { url: String, status: u16 },
    #[error(transparent)]
    Parse(#[from] crate::error::ParseError),
    #[error("Invalid YouTube URL: {0}")]
    InvalidVideoUrl(String),
    #[error("No transcript available for video {video_id} in {languages:?}")]
    NoTranscript {
        video_id: String,
        languages: Vec<String>,
    },
}
