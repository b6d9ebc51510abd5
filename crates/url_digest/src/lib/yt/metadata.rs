use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
    process::Output,
};

use tokio::process::Command;

use crate::{types::VideoInfo, yt::VideoInfoExtractor};

/// Video metadata via the `yt-dlp` executable.
#[derive(Debug, Clone)]
pub struct YtDlp {
    binary: PathBuf,
    cookies_path: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum YtDlpError {
    #[error("Failed to run {binary}: {source}")]
    Spawn {
        binary: String,
        source: std::io::Error,
    },
    #[error("yt-dlp exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },
    #[error("Failed to parse yt-dlp output: {0}")]
    Json(#[from] serde_json::Error),
}

impl Default for YtDlp {
    fn default() -> Self {
        Self::new("yt-dlp")
    }
}

impl YtDlp {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            cookies_path: None,
        }
    }

    pub fn with_cookies(mut self, cookies_path: Option<PathBuf>) -> Self {
        self.cookies_path = cookies_path;
        self
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn args<'a>(&'a self, url: &'a str) -> Vec<&'a OsStr> {
        let mut args = [
            "--dump-json",
            "--no-playlist",
            "--skip-download",
            "--no-warnings",
            "-f",
            "bestaudio",
        ]
        .into_iter()
        .map(OsStr::new)
        .collect::<Vec<_>>();

        if let Some(cookies) = &self.cookies_path {
            args.push(OsStr::new("--cookies"));
            args.push(cookies.as_os_str());
        }

        args.push(OsStr::new(url));
        args
    }

    fn parse_output(output: Output) -> Result<VideoInfo, YtDlpError> {
        if !output.status.success() {
            return Err(YtDlpError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(serde_json::from_slice(&output.stdout)?)
    }
}

impl VideoInfoExtractor for YtDlp {
    type Error = YtDlpError;

    #[tracing::instrument(skip(self), fields(binary = %self.binary.display()))]
    async fn extract(&self, url: &str) -> Result<VideoInfo, Self::Error> {
        let output = Command::new(&self.binary)
            .args(self.args(url))
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| YtDlpError::Spawn {
                binary: self.binary.display().to_string(),
                source,
            })
            .inspect_err(|e| tracing::error!(error = %e, "Failed to spawn yt-dlp"))?;

        let info = Self::parse_output(output)
            .inspect_err(|e| tracing::error!(error = %e, "Failed to extract video info"))?;

        tracing::debug!(title = %info.title, "Extracted video info");

        Ok(info)
    }
}
