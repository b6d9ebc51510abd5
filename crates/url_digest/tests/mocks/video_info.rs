use std::sync::{Arc, Mutex};
use url_digest::{VideoInfo, VideoInfoExtractor};

#[derive(Clone)]
pub struct MockVideoInfo {
    pub info: VideoInfo,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl Default for MockVideoInfo {
    fn default() -> Self {
        Self::new("Mock video", "A video about mocks")
    }
}

impl MockVideoInfo {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            info: VideoInfo {
                title: title.to_string(),
                description: description.to_string(),
                url: "https://rr1.googlevideo.com/mock".to_string(),
            },
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl VideoInfoExtractor for MockVideoInfo {
    type Error = anyhow::Error;

    async fn extract(&self, url: &str) -> anyhow::Result<VideoInfo> {
        self.calls.lock().unwrap().push(url.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.info.clone())
    }
}
