use std::{fmt::Display, future::Future};

use serde::Deserialize;

use crate::llm::model::Model;

/// One stuffed prompt bound for a hosted model.
#[derive(Clone)]
pub struct SummaryRequest<'a> {
    pub api_key: &'a str,
    pub model: Model,
    pub prompt: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

pub trait Summarizer {
    type Error: Display + Send;

    fn summarize(
        &self,
        request: SummaryRequest<'_>,
    ) -> impl Future<Output = Result<SummaryResponse, Self::Error>> + Send;
}
