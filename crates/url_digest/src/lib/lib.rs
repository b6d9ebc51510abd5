mod error;
pub mod llm;
pub mod loader;
pub mod parser;
mod processor;
pub mod server;
pub mod tracing;
pub mod types;
pub mod validation;
pub mod yt;

pub use error::{Error, ParseError};
pub use llm::{
    groq,
    model::Model,
    prompt::PromptTemplate,
    summarizer::{Summarizer, SummaryRequest, SummaryResponse},
};
pub use loader::{web::WebPageLoader, DocumentLoader, LoaderError};
pub use processor::{builder::SummarizeHandlerBuilder, SummarizeHandler};
pub use types::{
    Document, DocumentMetadata, SessionForm, SessionInput, SummaryReport, VideoInfo,
};
pub use yt::{metadata::YtDlp, transcript::TranscriptLoader, VideoInfoExtractor};
