pub mod builder;

use crate::{
    error::Error,
    llm::{
        prompt::PromptTemplate,
        summarizer::{Summarizer, SummaryRequest},
    },
    loader::DocumentLoader,
    types::{Document, SessionInput, SummaryReport, VideoInfo},
    validation::{is_valid_url, is_youtube_url},
    yt::{video_id, VideoInfoExtractor},
};

/// Turns one [`SessionInput`] into a [`SummaryReport`].
///
/// Holds only its collaborators, so a single instance can serve any number
/// of independent requests.
#[derive(Debug)]
pub struct SummarizeHandler<V, T, W, S>
where
    V: VideoInfoExtractor + Send + Sync + 'static,
    T: DocumentLoader + Send + Sync + 'static,
    W: DocumentLoader + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub(crate) video_info: V,
    pub(crate) transcript_loader: T,
    pub(crate) web_loader: W,
    pub(crate) summarizer: S,
    pub(crate) prompt: PromptTemplate,
}

impl<V, T, W, S> SummarizeHandler<V, T, W, S>
where
    V: VideoInfoExtractor + Send + Sync + 'static,
    T: DocumentLoader + Send + Sync + 'static,
    W: DocumentLoader + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    /// Validates the input before anything touches the network.
    fn validate(input: &SessionInput) -> Result<(), Error> {
        if input.api_key.is_empty() || input.url.trim().is_empty() {
            return Err(Error::Input(Error::MISSING_INPUT));
        }

        if !is_valid_url(&input.url) {
            return Err(Error::Input(Error::INVALID_URL));
        }

        Ok(())
    }

    /// Video details first, then the transcript. Only the details step maps
    /// to [`Error::Extraction`]; a transcript failure keeps the details.
    #[tracing::instrument(skip(self))]
    async fn load_youtube(&self, url: &str) -> Result<(VideoInfo, Vec<Document>), Error> {
        let video = self
            .video_info
            .extract(url)
            .await
            .map_err(Error::extraction)?;

        if video_id(url).is_none() {
            return Err(Error::extraction(format!("Could not find a video id in {url}")));
        }

        match self.transcript_loader.load(url).await {
            Ok(documents) => Ok((video, documents)),
            Err(e) => Err(Error::processing(e).with_video(Some(video))),
        }
    }

    #[tracing::instrument(skip(self, input), fields(url = %input.url, model = %input.model))]
    pub async fn handle(&self, input: SessionInput) -> Result<SummaryReport, Error> {
        Self::validate(&input).inspect_err(|e| tracing::info!(error = %e, "Rejected input"))?;

        let url = input.url.trim();

        let (video, documents) = if is_youtube_url(url) {
            let (video, documents) = self
                .load_youtube(url)
                .await
                .inspect_err(|e| tracing::error!(error = %e, "Failed to load YouTube video"))?;
            (Some(video), documents)
        } else {
            let documents = self
                .web_loader
                .load(url)
                .await
                .map_err(Error::processing)
                .inspect_err(|e| tracing::error!(error = %e, "Failed to load web page"))?;
            (None, documents)
        };

        tracing::info!(documents = documents.len(), "Loaded documents");

        let request = SummaryRequest {
            api_key: &input.api_key,
            model: input.model,
            prompt: self.prompt.format(&documents),
        };

        let summary = match self.summarizer.summarize(request).await {
            Ok(summary) => summary,
            Err(e) => {
                let error = Error::processing(e).with_video(video);
                tracing::error!(error = %error, "Failed to summarize content");
                return Err(error);
            }
        };

        Ok(SummaryReport {
            video,
            summary: summary.summary,
        })
    }
}
