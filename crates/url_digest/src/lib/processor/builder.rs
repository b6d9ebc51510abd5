use crate::{
    llm::{prompt::PromptTemplate, summarizer::Summarizer},
    loader::DocumentLoader,
    yt::VideoInfoExtractor,
    SummarizeHandler,
};

pub struct SummarizeHandlerBuilder<V = (), T = (), W = (), S = ()> {
    video_info: V,
    transcript_loader: T,
    web_loader: W,
    summarizer: S,
    prompt: PromptTemplate,
}

impl Default for SummarizeHandlerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SummarizeHandlerBuilder {
    pub fn new() -> Self {
        Self {
            video_info: (),
            transcript_loader: (),
            web_loader: (),
            summarizer: (),
            prompt: PromptTemplate::default(),
        }
    }
}

impl<V, T, W, S> SummarizeHandlerBuilder<V, T, W, S> {
    pub fn video_info<V2: VideoInfoExtractor + Send + Sync + 'static>(
        self,
        video_info: V2,
    ) -> SummarizeHandlerBuilder<V2, T, W, S> {
        SummarizeHandlerBuilder {
            video_info,
            transcript_loader: self.transcript_loader,
            web_loader: self.web_loader,
            summarizer: self.summarizer,
            prompt: self.prompt,
        }
    }

    pub fn transcript_loader<T2: DocumentLoader + Send + Sync + 'static>(
        self,
        transcript_loader: T2,
    ) -> SummarizeHandlerBuilder<V, T2, W, S> {
        SummarizeHandlerBuilder {
            video_info: self.video_info,
            transcript_loader,
            web_loader: self.web_loader,
            summarizer: self.summarizer,
            prompt: self.prompt,
        }
    }

    pub fn web_loader<W2: DocumentLoader + Send + Sync + 'static>(
        self,
        web_loader: W2,
    ) -> SummarizeHandlerBuilder<V, T, W2, S> {
        SummarizeHandlerBuilder {
            video_info: self.video_info,
            transcript_loader: self.transcript_loader,
            web_loader,
            summarizer: self.summarizer,
            prompt: self.prompt,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> SummarizeHandlerBuilder<V, T, W, S2> {
        SummarizeHandlerBuilder {
            video_info: self.video_info,
            transcript_loader: self.transcript_loader,
            web_loader: self.web_loader,
            summarizer,
            prompt: self.prompt,
        }
    }

    pub fn prompt(mut self, prompt: PromptTemplate) -> Self {
        self.prompt = prompt;
        self
    }
}

impl<V, T, W, S> SummarizeHandlerBuilder<V, T, W, S>
where
    V: VideoInfoExtractor + Send + Sync + 'static,
    T: DocumentLoader + Send + Sync + 'static,
    W: DocumentLoader + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub fn build(self) -> SummarizeHandler<V, T, W, S> {
        SummarizeHandler {
            video_info: self.video_info,
            transcript_loader: self.transcript_loader,
            web_loader: self.web_loader,
            summarizer: self.summarizer,
            prompt: self.prompt,
        }
    }
}
