use reqwest::Client;

use crate::{
    loader::{DocumentLoader, LoaderError},
    parser::{parse_timedtext, YtHtmlDocument},
    types::Document,
    yt::video_id,
};

/// Loads the caption track of a YouTube video as a single document.
#[derive(Debug, Clone)]
pub struct TranscriptLoader {
    client: Client,
    base_url: String,
    languages: Vec<String>,
}

impl Default for TranscriptLoader {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

impl TranscriptLoader {
    pub const BASE_URL: &str = "https://www.youtube.com";

    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: Self::BASE_URL.into(),
            languages: vec!["en".into()],
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Caption languages in order of preference.
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_watch_page(&self, video_id: &str) -> Result<YtHtmlDocument, LoaderError> {
        let url = format!("{}/watch", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[("v", video_id)])
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(LoaderError::Status {
                url,
                status: resp.status().as_u16(),
            });
        }

        Ok(YtHtmlDocument::new(resp.text().await?))
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_timedtext(&self, track_url: &str) -> Result<String, LoaderError> {
        let resp = self.client.get(track_url).send().await?;

        if !resp.status().is_success() {
            return Err(LoaderError::Status {
                url: track_url.to_string(),
                status: resp.status().as_u16(),
            });
        }

        Ok(resp.text().await?)
    }
}

impl DocumentLoader for TranscriptLoader {
    type Error = LoaderError;

    #[tracing::instrument(skip(self))]
    async fn load(&self, url: &str) -> Result<Vec<Document>, Self::Error> {
        let video_id =
            video_id(url).ok_or_else(|| LoaderError::InvalidVideoUrl(url.to_string()))?;

        let player_response = self
            .fetch_watch_page(&video_id)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch watch page"))?
            .player_response()?;

        let languages = self.languages.iter().map(String::as_str).collect::<Vec<_>>();
        let track = player_response
            .find_caption_track(&languages)
            .ok_or_else(|| LoaderError::NoTranscript {
                video_id: video_id.clone(),
                languages: self.languages.clone(),
            })?;

        tracing::debug!(
            language = %track.language_code,
            generated = track.is_generated(),
            "Using caption track"
        );

        let xml = self
            .fetch_timedtext(&track.base_url)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch captions"))?;

        let text = parse_timedtext(&xml);
        if text.is_empty() {
            tracing::warn!(%video_id, "Caption track has no text");
            return Err(LoaderError::NoTranscript {
                video_id,
                languages: self.languages.clone(),
            });
        }

        Ok(vec![Document::new(text, video_id)])
    }
}
