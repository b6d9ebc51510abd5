//! # Parser
//!
//! Pulls plain text out of the payloads the loaders fetch: the
//! `ytInitialPlayerResponse` blob embedded in a YouTube watch page, the
//! timed-text XML of a caption track, and ordinary HTML pages.

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};
use serde::{de::DeserializeOwned, Deserialize};

use crate::error::ParseError;

static YT_PLAYER_RESPONSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)var\s+ytInitialPlayerResponse\s*=\s*(\{.*?\});\s*(?:var\s|</script>)")
        .expect("player response regex is valid")
});

static TIMEDTEXT_CUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<text[^>]*>(.*?)</text>").expect("timedtext regex is valid")
});

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("title selector is valid"));

static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("body selector is valid"));

/// Subtrees that never contribute readable text
const SKIP_TAGS: [&str; 6] = ["script", "style", "noscript", "svg", "head", "template"];

/// Elements that start a new line of text
const BLOCK_TAGS: [&str; 28] = [
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav",
    "ol", "p", "pre", "section", "tr",
];

/// Raw html of a YouTube watch page.
pub struct YtHtmlDocument(String);

impl YtHtmlDocument {
    pub fn new(doc: String) -> Self {
        YtHtmlDocument(doc)
    }

    /// Deserializes the `ytInitialPlayerResponse` assignment found in the page.
    pub fn to_json<T>(&self) -> Result<T, ParseError>
    where
        T: DeserializeOwned,
    {
        let raw = YT_PLAYER_RESPONSE_RE
            .captures(&self.0)
            .and_then(|cap| cap.get(1))
            .ok_or(ParseError::Structure(
                "Failed to extract ytInitialPlayerResponse from the page's script tag",
            ))?;

        Ok(serde_json::from_str(raw.as_str())?)
    }

    pub fn player_response(&self) -> Result<PlayerResponse, ParseError> {
        self.to_json()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    #[serde(default)]
    pub captions: Option<Captions>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Captions {
    #[serde(rename = "playerCaptionsTracklistRenderer", default)]
    pub tracklist: CaptionTracklist,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTracklist {
    #[serde(default)]
    pub caption_tracks: Vec<CaptionTrack>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub base_url: String,
    pub language_code: String,
    /// `Some("asr")` for auto-generated tracks
    #[serde(default)]
    pub kind: Option<String>,
}

impl CaptionTrack {
    pub fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

impl PlayerResponse {
    pub fn caption_tracks(&self) -> &[CaptionTrack] {
        self.captions
            .as_ref()
            .map(|c| c.tracklist.caption_tracks.as_slice())
            .unwrap_or_default()
    }

    /// Picks the track for the first language in `languages` that has one,
    /// preferring manually created tracks over generated ones.
    pub fn find_caption_track(&self, languages: &[&str]) -> Option<&CaptionTrack> {
        let tracks = self.caption_tracks();

        languages.iter().find_map(|lang| {
            let mut candidates = tracks.iter().filter(|t| t.language_code == *lang);
            candidates
                .clone()
                .find(|t| !t.is_generated())
                .or_else(|| candidates.next())
        })
    }
}

/// Joins the cues of a timed-text XML payload into one line of text.
pub fn parse_timedtext(xml: &str) -> String {
    TIMEDTEXT_CUE_RE
        .captures_iter(xml)
        .filter_map(|cap| cap.get(1))
        // caption text arrives entity-encoded inside entity-encoded xml
        .map(|m| decode_entities(&decode_entities(m.as_str())))
        .map(|cue| cue.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|cue| !cue.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decodes html entities and drops any inline markup.
fn decode_entities(raw: &str) -> String {
    Html::parse_fragment(raw).root_element().text().collect()
}

/// Extracts the readable text of an html document.
///
/// Inline markup keeps its surrounding text on one line; block elements
/// become paragraphs separated by a blank line.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let root = document
        .select(&BODY_SELECTOR)
        .next()
        .unwrap_or_else(|| document.root_element());

    let mut text = String::new();
    collect_element_text(root, &mut text);

    clean_whitespace(&text)
}

/// The trimmed contents of the `<title>` element, if any.
pub fn html_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|t| t.text().collect::<String>().trim().to_string());

    title.filter(|t| !t.is_empty())
}

fn collect_element_text(element: ElementRef, out: &mut String) {
    let name = element.value().name();
    if SKIP_TAGS.contains(&name) {
        return;
    }

    let is_block = BLOCK_TAGS.contains(&name);
    if is_block {
        out.push('\n');
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_element_text(child_el, out);
                }
            }
            _ => {}
        }
    }

    if is_block {
        out.push('\n');
    }
}

/// Collapses whitespace within each line and keeps at most one blank line
/// between blocks.
fn clean_whitespace(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut pending_blank = false;

    for line in text.lines() {
        let line = line.split_whitespace().join(" ");
        if line.is_empty() {
            pending_blank = !lines.is_empty();
            continue;
        }
        if pending_blank {
            lines.push(String::new());
            pending_blank = false;
        }
        lines.push(line);
    }

    lines.join("\n")
}
