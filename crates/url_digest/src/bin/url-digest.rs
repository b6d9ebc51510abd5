use std::{net::SocketAddr, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use url_digest::{
    groq::GroqClient,
    server,
    tracing::{init_tracing_subscriber, LogTarget},
    Model, SessionInput, SummarizeHandler, SummarizeHandlerBuilder, TranscriptLoader, VideoInfo,
    WebPageLoader, YtDlp,
};

#[derive(Parser)]
#[command(
    name = "url-digest",
    about = "Summarize text from YouTube videos or websites"
)]
struct Cli {
    /// Groq OpenAI compatible API base URL
    #[arg(long, env = "GROQ_BASE_URL", default_value = GroqClient::DEFAULT_BASE_URL)]
    groq_base_url: String,

    /// Path to the yt-dlp executable
    #[arg(long, env = "YTDLP_PATH", default_value = "yt-dlp")]
    ytdlp_path: PathBuf,

    /// Path to yt-dlp cookies file
    #[arg(long, env = "YTDLP_COOKIES_PATH")]
    ytdlp_cookies: Option<PathBuf>,

    /// Skip TLS certificate verification when fetching web pages
    #[arg(
        long,
        env = "WEB_ACCEPT_INVALID_CERTS",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    accept_invalid_certs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the interactive page
    Serve {
        /// Address to listen on
        #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8501")]
        bind: SocketAddr,
    },
    /// Summarize a single URL and exit
    Run {
        /// YouTube or website URL
        #[arg(long)]
        url: String,

        /// Groq API key
        #[arg(long, env = "GROQ_API_KEY", hide_env_values = true, default_value = "")]
        api_key: String,

        /// Model used for the summary
        #[arg(long, value_enum, default_value_t = Model::default())]
        model: Model,
    },
}

impl Command {
    /// `run` prints its result on stdout, so its logs go to stderr.
    fn log_target(&self) -> LogTarget {
        match self {
            Command::Serve { .. } => LogTarget::Stdout,
            Command::Run { .. } => LogTarget::Stderr,
        }
    }
}

type Handler = SummarizeHandler<YtDlp, TranscriptLoader, WebPageLoader, GroqClient>;

fn build_handler(cli: &Cli) -> anyhow::Result<Handler> {
    let yt_dlp = YtDlp::new(&cli.ytdlp_path).with_cookies(cli.ytdlp_cookies.clone());
    tracing::debug!(binary = %yt_dlp.binary().display(), "Using yt-dlp");

    let handler = SummarizeHandlerBuilder::new()
        .video_info(yt_dlp)
        .transcript_loader(TranscriptLoader::default())
        .web_loader(WebPageLoader::new(cli.accept_invalid_certs)?)
        .summarizer(GroqClient::new().with_base_url(&cli.groq_base_url))
        .build();

    Ok(handler)
}

fn print_video(video: &VideoInfo) {
    println!("Video Title: {}", video.title);
    println!("Video Description: {}", video.description);
}

async fn run_once(handler: &Handler, input: SessionInput) -> ExitCode {
    match handler.handle(input).await {
        Ok(report) => {
            if let Some(video) = &report.video {
                print_video(video);
            }
            println!("Summary:");
            println!("{}", report.summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            if let Some(video) = e.video() {
                print_video(video);
            }
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber(cli.command.log_target())?;

    let handler = build_handler(&cli)?;

    match cli.command {
        Command::Serve { bind } => {
            server::serve(server::router(handler), bind).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Run {
            url,
            api_key,
            model,
        } => {
            tracing::info!(%url, %model, "Summarizing once...");
            Ok(run_once(&handler, SessionInput::new(api_key, model, url)).await)
        }
    }
}
