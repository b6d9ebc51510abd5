mod mocks;

use mocks::{
    loader::MockLoader,
    summarizer::{MockSummarizer, RecordedRequest},
    video_info::MockVideoInfo,
};
use url_digest::{
    Error, Model, PromptTemplate, SessionInput, SummarizeHandler, SummarizeHandlerBuilder,
};

type TestHandler = SummarizeHandler<MockVideoInfo, MockLoader, MockLoader, MockSummarizer>;

fn build_handler(
    video_info: MockVideoInfo,
    transcript_loader: MockLoader,
    web_loader: MockLoader,
    summarizer: MockSummarizer,
) -> TestHandler {
    SummarizeHandlerBuilder::new()
        .video_info(video_info)
        .transcript_loader(transcript_loader)
        .web_loader(web_loader)
        .summarizer(summarizer)
        .build()
}

struct Calls {
    video_info: usize,
    transcript: usize,
    web: usize,
    summarizer: usize,
}

/// Builds a handler from fresh mocks and keeps handles on their call logs.
struct Harness {
    handler: TestHandler,
    video_info: MockVideoInfo,
    transcript_loader: MockLoader,
    web_loader: MockLoader,
    summarizer: MockSummarizer,
}

impl Harness {
    fn new(
        video_info: MockVideoInfo,
        transcript_loader: MockLoader,
        web_loader: MockLoader,
        summarizer: MockSummarizer,
    ) -> Self {
        Self {
            handler: build_handler(
                video_info.clone(),
                transcript_loader.clone(),
                web_loader.clone(),
                summarizer.clone(),
            ),
            video_info,
            transcript_loader,
            web_loader,
            summarizer,
        }
    }

    fn with_defaults() -> Self {
        Self::new(
            MockVideoInfo::default(),
            MockLoader::new("transcript text"),
            MockLoader::new("Hello world"),
            MockSummarizer::new("A concise summary."),
        )
    }

    fn calls(&self) -> Calls {
        Calls {
            video_info: self.video_info.calls.lock().unwrap().len(),
            transcript: self.transcript_loader.calls.lock().unwrap().len(),
            web: self.web_loader.calls.lock().unwrap().len(),
            summarizer: self.summarizer.calls.lock().unwrap().len(),
        }
    }

    fn assert_no_calls(&self) {
        let calls = self.calls();
        assert_eq!(calls.video_info, 0, "video info should not be fetched");
        assert_eq!(calls.transcript, 0, "transcript should not be loaded");
        assert_eq!(calls.web, 0, "web page should not be loaded");
        assert_eq!(calls.summarizer, 0, "summarizer should not be called");
    }

    fn prompts(&self) -> Vec<RecordedRequest> {
        self.summarizer.calls.lock().unwrap().clone()
    }
}

fn input(api_key: &str, url: &str) -> SessionInput {
    SessionInput::new(api_key, Model::Llama31_8bInstant, url)
}

// ─── Input validation ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_missing_api_key_is_rejected_without_network() {
    let harness = Harness::with_defaults();

    let result = harness
        .handler
        .handle(input("", "https://example.com/article"))
        .await;

    assert!(
        matches!(result, Err(Error::Input(msg)) if msg == Error::MISSING_INPUT),
        "got {result:?}"
    );
    harness.assert_no_calls();
}

#[tokio::test]
async fn test_blank_url_is_rejected_without_network() {
    let harness = Harness::with_defaults();

    for url in ["", " ", "\t\n  "] {
        let result = harness.handler.handle(input("gsk_key", url)).await;
        assert!(
            matches!(result, Err(Error::Input(msg)) if msg == Error::MISSING_INPUT),
            "url {url:?} got {result:?}"
        );
    }
    harness.assert_no_calls();
}

#[tokio::test]
async fn test_invalid_urls_are_rejected_without_extraction() {
    let harness = Harness::with_defaults();

    for url in [
        "example.com",
        "not a url",
        "ftp://example.com/file.txt",
        "youtube.com/watch?v=dQw4w9WgXcQ",
        "http://localhost",
        "https://",
    ] {
        let result = harness.handler.handle(input("gsk_key", url)).await;
        assert!(
            matches!(result, Err(Error::Input(msg)) if msg == Error::INVALID_URL),
            "url {url:?} got {result:?}"
        );
    }
    harness.assert_no_calls();
}

// ─── YouTube path ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_youtube_happy_path_reports_video_details() {
    let harness = Harness::new(
        MockVideoInfo::new("Never Gonna Give You Up", "The official video"),
        MockLoader::new("We're no strangers to love"),
        MockLoader::new("unused"),
        MockSummarizer::new("A song about commitment."),
    );
    let url = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

    let report = harness
        .handler
        .handle(input("gsk_key", url))
        .await
        .expect("YouTube request should succeed");

    let video = report.video.expect("video details should be reported");
    assert_eq!(video.title, "Never Gonna Give You Up");
    assert_eq!(video.description, "The official video");
    assert_eq!(report.summary, "A song about commitment.");

    assert_eq!(*harness.video_info.calls.lock().unwrap(), vec![url]);
    assert_eq!(*harness.transcript_loader.calls.lock().unwrap(), vec![url]);
    assert_eq!(harness.calls().web, 0, "web loader must not be used");

    let prompts = harness.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].prompt.contains("We're no strangers to love"));
}

#[tokio::test]
async fn test_youtube_short_link_takes_youtube_path() {
    let harness = Harness::with_defaults();

    let report = harness
        .handler
        .handle(input("gsk_key", "https://youtu.be/dQw4w9WgXcQ"))
        .await
        .unwrap();

    assert!(report.video.is_some());
    assert_eq!(harness.calls().web, 0);
    assert_eq!(harness.calls().transcript, 1);
}

#[tokio::test]
async fn test_youtube_metadata_failure_is_extraction_error_without_fallback() {
    let harness = Harness::new(
        MockVideoInfo::failing("ERROR: Video unavailable"),
        MockLoader::new("transcript"),
        MockLoader::new("page"),
        MockSummarizer::new("summary"),
    );

    let result = harness
        .handler
        .handle(input("gsk_key", "https://www.youtube.com/watch?v=dQw4w9WgXcQ"))
        .await;

    match result {
        Err(Error::Extraction(msg)) => assert!(msg.contains("ERROR: Video unavailable")),
        other => panic!("expected extraction error, got {other:?}"),
    }

    let calls = harness.calls();
    assert_eq!(calls.video_info, 1);
    assert_eq!(calls.web, 0, "no generic extraction fallback");
    assert_eq!(calls.transcript, 0);
    assert_eq!(calls.summarizer, 0);
}

#[tokio::test]
async fn test_youtube_url_without_video_id_is_extraction_error() {
    let harness = Harness::with_defaults();

    let result = harness
        .handler
        .handle(input("gsk_key", "https://www.youtube.com/@ParliamentofKenyaChannel"))
        .await;

    assert!(matches!(result, Err(Error::Extraction(_))), "got {result:?}");
    let calls = harness.calls();
    assert_eq!(calls.transcript, 0);
    assert_eq!(calls.web, 0);
    assert_eq!(calls.summarizer, 0);
}

#[tokio::test]
async fn test_transcript_failure_is_processing_error() {
    let harness = Harness::new(
        MockVideoInfo::default(),
        MockLoader::failing("No transcript available"),
        MockLoader::new("page"),
        MockSummarizer::new("summary"),
    );

    let result = harness
        .handler
        .handle(input("gsk_key", "https://www.youtube.com/watch?v=dQw4w9WgXcQ"))
        .await;

    match result {
        Err(Error::Processing { message, video }) => {
            assert!(message.contains("No transcript available"));
            let video = video.expect("video details are kept");
            assert_eq!(video.title, "Mock video");
            assert_eq!(video.description, "A video about mocks");
        }
        other => panic!("expected processing error, got {other:?}"),
    }
    assert_eq!(harness.calls().summarizer, 0);
}

#[tokio::test]
async fn test_youtube_summarizer_failure_keeps_video_details() {
    let harness = Harness::new(
        MockVideoInfo::new("Never Gonna Give You Up", "The official video"),
        MockLoader::new("transcript"),
        MockLoader::new("page"),
        MockSummarizer::failing("API error: 401 - invalid api key"),
    );

    let err = harness
        .handler
        .handle(input("gsk_key", "https://youtu.be/dQw4w9WgXcQ"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "processing");
    assert_eq!(
        err.video().map(|v| v.title.as_str()),
        Some("Never Gonna Give You Up")
    );
}

// ─── Web page path ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_web_page_text_is_embedded_in_fixed_template() {
    let harness = Harness::with_defaults();

    let report = harness
        .handler
        .handle(SessionInput::new(
            "gsk_key",
            Model::Mixtral8x7b32768,
            "https://example.com/article",
        ))
        .await
        .expect("web request should succeed");

    assert_eq!(report.summary, "A concise summary.");
    assert!(report.video.is_none());

    let prompts = harness.prompts();
    assert_eq!(
        prompts,
        vec![RecordedRequest {
            api_key: "gsk_key".to_string(),
            model: Model::Mixtral8x7b32768,
            prompt: "\nProvide a summary of the following content in 300 words:\ncontent: Hello world\n"
                .to_string(),
        }]
    );

    let calls = harness.calls();
    assert_eq!(calls.video_info, 0);
    assert_eq!(calls.transcript, 0);
    assert_eq!(
        *harness.web_loader.calls.lock().unwrap(),
        vec!["https://example.com/article"]
    );
}

#[tokio::test]
async fn test_url_is_trimmed_before_loading() {
    let harness = Harness::with_defaults();

    harness
        .handler
        .handle(input("gsk_key", "  https://example.com/padded  "))
        .await
        .unwrap();

    assert_eq!(
        *harness.web_loader.calls.lock().unwrap(),
        vec!["https://example.com/padded"]
    );
}

#[tokio::test]
async fn test_web_loader_failure_is_processing_error() {
    let harness = Harness::new(
        MockVideoInfo::default(),
        MockLoader::new("transcript"),
        MockLoader::failing("https://example.com responded with 503"),
        MockSummarizer::new("summary"),
    );

    let result = harness
        .handler
        .handle(input("gsk_key", "https://example.com"))
        .await;

    match result {
        Err(Error::Processing { message, video }) => {
            assert!(message.contains("responded with 503"));
            assert!(video.is_none());
        }
        other => panic!("expected processing error, got {other:?}"),
    }
    assert_eq!(harness.calls().summarizer, 0);
}

#[tokio::test]
async fn test_custom_prompt_template() {
    let summarizer = MockSummarizer::new("summary");
    let calls = summarizer.calls.clone();

    let handler = SummarizeHandlerBuilder::new()
        .video_info(MockVideoInfo::default())
        .transcript_loader(MockLoader::default())
        .web_loader(MockLoader::new("Hello world"))
        .summarizer(summarizer)
        .prompt(PromptTemplate::new("TL;DR: {text}"))
        .build();

    handler
        .handle(input("gsk_key", "https://example.com"))
        .await
        .unwrap();

    assert_eq!(calls.lock().unwrap()[0].prompt, "TL;DR: Hello world");
}

// ─── Summarizer failures ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_summarizer_failure_is_processing_error_and_handler_stays_usable() {
    let harness = Harness::new(
        MockVideoInfo::default(),
        MockLoader::new("transcript"),
        MockLoader::new("page"),
        MockSummarizer::failing_times("API error: 429 - rate limited", 1),
    );

    let first = harness
        .handler
        .handle(input("gsk_key", "https://example.com/a"))
        .await;

    match first {
        Err(Error::Processing { message, .. }) => {
            assert!(message.contains("rate limited"))
        }
        other => panic!("expected processing error, got {other:?}"),
    }

    let second = harness
        .handler
        .handle(input("gsk_key", "https://example.com/a"))
        .await
        .expect("retry should succeed");

    assert_eq!(second.summary, "summary after recovery");
    assert_eq!(harness.calls().summarizer, 2);
}

// ─── Independence ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_consecutive_requests_are_independent() {
    let harness = Harness::new(
        MockVideoInfo::default(),
        MockLoader::default(),
        MockLoader::default(),
        MockSummarizer::new("summary"),
    );

    let first = harness
        .handler
        .handle(input("key-one", "https://one.example.com"))
        .await
        .unwrap();
    let second = harness
        .handler
        .handle(SessionInput::new(
            "key-two",
            Model::Gemma7bIt,
            "https://two.example.com",
        ))
        .await
        .unwrap();

    assert!(first.video.is_none());
    assert!(second.video.is_none());

    let prompts = harness.prompts();
    assert_eq!(prompts.len(), 2);

    assert!(prompts[0].prompt.contains("content of https://one.example.com"));
    assert!(!prompts[0].prompt.contains("two.example.com"));
    assert_eq!(prompts[0].api_key, "key-one");
    assert_eq!(prompts[0].model, Model::Llama31_8bInstant);

    assert!(prompts[1].prompt.contains("content of https://two.example.com"));
    assert!(!prompts[1].prompt.contains("one.example.com"));
    assert_eq!(prompts[1].api_key, "key-two");
    assert_eq!(prompts[1].model, Model::Gemma7bIt);
}
