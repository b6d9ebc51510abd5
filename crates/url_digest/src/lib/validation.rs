//! URL checks performed before any network call.

use url::{Host, Url};

const MAX_URL_LENGTH: usize = 2048;

/// Host markers that route a URL down the YouTube path.
const YOUTUBE_MARKERS: [&str; 2] = ["youtube.com", "youtu.be"];

/// Returns `true` for well-formed `http`/`https` URLs whose host is an IP
/// address or a dotted domain name.
pub fn is_valid_url(url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() || url.len() > MAX_URL_LENGTH {
        return false;
    }

    let Ok(parsed) = Url::parse(url) else {
        return false;
    };

    if !matches!(parsed.scheme(), "http" | "https") {
        return false;
    }

    match parsed.host() {
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        Some(Host::Domain(domain)) => {
            let labels = domain.trim_end_matches('.').split('.').collect::<Vec<_>>();
            labels.len() >= 2 && labels.iter().all(|l| is_valid_label(l))
        }
        None => false,
    }
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_alphanumeric() || c == '-')
}

pub fn is_youtube_url(url: &str) -> bool {
    YOUTUBE_MARKERS.iter().any(|marker| url.contains(marker))
}
