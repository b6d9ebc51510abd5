use reqwest::{header, Client};

use crate::{
    loader::{DocumentLoader, LoaderError},
    parser::{html_title, html_to_text},
    types::Document,
};

/// Loads generic web pages.
///
/// Pages are requested with a desktop browser user agent since many sites
/// refuse obvious bots.
#[derive(Debug, Clone)]
pub struct WebPageLoader {
    client: Client,
}

impl WebPageLoader {
    pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 13_5_1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/116.0.0.0 Safari/537.36";

    /// `accept_invalid_certs` disables TLS certificate verification for every
    /// page this loader fetches.
    pub fn new(accept_invalid_certs: bool) -> Result<Self, LoaderError> {
        let client = Client::builder()
            .user_agent(Self::USER_AGENT)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()?;

        if accept_invalid_certs {
            tracing::warn!("TLS certificate verification is disabled for web page loading");
        }

        Ok(Self { client })
    }
}

impl DocumentLoader for WebPageLoader {
    type Error = LoaderError;

    #[tracing::instrument(skip(self))]
    async fn load(&self, url: &str) -> Result<Vec<Document>, Self::Error> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch web page"))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LoaderError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let body = resp.text().await?;

        let is_html = content_type.is_empty()
            || content_type.contains("text/html")
            || content_type.contains("application/xhtml");

        let document = if is_html {
            let document = Document::new(html_to_text(&body), url);
            match html_title(&body) {
                Some(title) => document.with_title(title),
                None => document,
            }
        } else {
            Document::new(body.trim(), url)
        };

        tracing::debug!(chars = document.page_content.len(), "Loaded web page");

        Ok(vec![document])
    }
}
