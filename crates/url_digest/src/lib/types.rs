use serde::{Deserialize, Serialize};

use crate::{error::Error, llm::model::Model};

/// What the user submits for a single summarize action.
#[derive(Clone)]
pub struct SessionInput {
    pub api_key: String,
    pub model: Model,
    pub url: String,
}

impl SessionInput {
    pub fn new(api_key: impl Into<String>, model: Model, url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model,
            url: url.into(),
        }
    }
}

// keep the key out of logs
impl std::fmt::Debug for SessionInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionInput")
            .field("api_key", &if self.api_key.is_empty() { "" } else { "***" })
            .field("model", &self.model)
            .field("url", &self.url)
            .finish()
    }
}

/// The fields as posted by the page or the JSON route, before the model id
/// is checked.
#[derive(Clone, Default, Deserialize)]
pub struct SessionForm {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub url: String,
}

impl SessionForm {
    /// The selected model; a missing or blank id picks the default.
    pub fn model(&self) -> Result<Model, Error> {
        match self.model.as_deref().map(str::trim) {
            None | Some("") => Ok(Model::default()),
            Some(id) => id.parse().map_err(|_| Error::Input(Error::UNKNOWN_MODEL)),
        }
    }

    pub fn into_input(self, model: Model) -> SessionInput {
        SessionInput {
            api_key: self.api_key,
            model,
            url: self.url,
        }
    }
}

impl TryFrom<SessionForm> for SessionInput {
    type Error = Error;

    fn try_from(form: SessionForm) -> Result<Self, Self::Error> {
        let model = form.model()?;
        Ok(form.into_input(model))
    }
}

/// A unit of loaded text handed to the summarizer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub page_content: String,
    pub metadata: DocumentMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentMetadata {
    /// The URL for web pages, the video id for transcripts
    pub source: String,
    pub title: Option<String>,
}

impl Document {
    pub fn new(page_content: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            page_content: page_content.into(),
            metadata: DocumentMetadata {
                source: source.into(),
                title: None,
            },
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.metadata.title = Some(title.into());
        self
    }
}

/// Subset of the `yt-dlp --dump-json` output we surface to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoInfo>,
    pub summary: String,
}
