use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use url_digest::{Model, Summarizer, SummaryRequest, SummaryResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub api_key: String,
    pub model: Model,
    pub prompt: String,
}

#[derive(Clone)]
pub struct MockSummarizer {
    pub summary: String,
    pub calls: Arc<Mutex<Vec<RecordedRequest>>>,
    pub fail_with: Option<String>,
    /// Number of leading calls that fail with `fail_with`
    pub failures_left: Arc<AtomicUsize>,
}

impl MockSummarizer {
    pub fn new(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
            failures_left: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self::failing_times(msg, usize::MAX)
    }

    pub fn failing_times(msg: &str, times: usize) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            failures_left: Arc::new(AtomicUsize::new(times)),
            ..Self::new("summary after recovery")
        }
    }
}

impl Summarizer for MockSummarizer {
    type Error = anyhow::Error;

    async fn summarize(&self, request: SummaryRequest<'_>) -> anyhow::Result<SummaryResponse> {
        self.calls.lock().unwrap().push(RecordedRequest {
            api_key: request.api_key.to_string(),
            model: request.model,
            prompt: request.prompt,
        });

        if let Some(ref msg) = self.fail_with {
            let should_fail = self
                .failures_left
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
            if should_fail {
                return Err(anyhow::anyhow!("{}", msg));
            }
        }

        Ok(SummaryResponse {
            summary: self.summary.clone(),
        })
    }
}
