//! Server-side rendering of the single interactive page.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::{
    error::Error,
    llm::model::Model,
    types::{SessionInput, SummaryReport, VideoInfo},
};

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; color: #262730; display: flex; min-height: 100vh; }
aside { width: 18rem; padding: 2rem 1.5rem; background: #f0f2f6; }
main { flex: 1; padding: 2rem 3rem; max-width: 48rem; }
label { display: block; font-size: .875rem; margin: 1rem 0 .25rem; }
input, select { width: 100%; box-sizing: border-box; padding: .5rem; font-size: 1rem; }
button { margin-top: 1rem; padding: .5rem 1rem; font-size: 1rem; cursor: pointer; }
.error { background: #ffe2e2; color: #7d353b; padding: 1rem; border-radius: .5rem; }
.success { background: #dff5e3; color: #177233; padding: 1rem; border-radius: .5rem; }
.summary, .video { white-space: pre-wrap; }
"#;

const URL_PROMPT: &str = "Enter a URL (YouTube or website):";

/// Renders the page, optionally with the previous input and its outcome.
pub fn render(input: Option<&SessionInput>, outcome: Option<&Result<SummaryReport, Error>>) -> Markup {
    let api_key = input.map(|i| i.api_key.as_str()).unwrap_or_default();
    let url = input.map(|i| i.url.as_str()).unwrap_or_default();
    let selected = input.map(|i| i.model).unwrap_or_default();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Summarize Text from YT or Website" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                form method="post" action="/summarize" style="display: contents" {
                    aside {
                        label for="api_key" { "GROQ API KEY" }
                        input id="api_key" name="api_key" type="password" value=(api_key) autocomplete="off";
                        label for="model" { "Select model" }
                        select id="model" name="model" {
                            @for model in Model::ALL {
                                option value=(model.as_str()) selected[model == selected] { (model.as_str()) }
                            }
                        }
                    }
                    main {
                        h1 { "Summarize Text from YouTube or Website" }
                        h3 { "Summarize URL" }
                        input id="url" name="url" type="text" value=(url) placeholder=(URL_PROMPT) aria-label=(URL_PROMPT);
                        button type="submit" { "Summarize" }
                        @if let Some(outcome) = outcome {
                            (render_outcome(outcome))
                        }
                    }
                }
            }
        }
    }
}

fn render_video(video: &VideoInfo) -> Markup {
    html! {
        p class="video" { "Video Title: " (video.title) }
        p class="video" { "Video Description: " (video.description) }
    }
}

fn render_outcome(outcome: &Result<SummaryReport, Error>) -> Markup {
    match outcome {
        Ok(report) => html! {
            @if let Some(video) = &report.video {
                (render_video(video))
            }
            div class="success" { "Summary:" }
            p class="summary" { (report.summary) }
        },
        Err(e) => html! {
            @if let Some(video) = e.video() {
                (render_video(video))
            }
            div class="error" data-kind=(e.kind()) { (e.to_string()) }
        },
    }
}
