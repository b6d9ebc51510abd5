use std::sync::{Arc, Mutex};
use url_digest::{Document, DocumentLoader};

/// Returns `text` as a single document, or `"content of <url>"` when unset.
#[derive(Clone, Default)]
pub struct MockLoader {
    pub text: Option<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockLoader {
    pub fn new(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Default::default()
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl DocumentLoader for MockLoader {
    type Error = anyhow::Error;

    async fn load(&self, url: &str) -> anyhow::Result<Vec<Document>> {
        self.calls.lock().unwrap().push(url.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        let text = self
            .text
            .clone()
            .unwrap_or_else(|| format!("content of {url}"));
        Ok(vec![Document::new(text, url)])
    }
}
