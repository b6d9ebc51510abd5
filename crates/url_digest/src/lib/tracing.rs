use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter, Registry};

const DEFAULT_FILTER: &str = "info,url_digest=debug,tower_http=info";

/// Where the JSON log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    /// Keeps stdout free for command output
    Stderr,
}

/// Installs the global subscriber: bunyan JSON lines on `target`, filtered by
/// `RUST_LOG`, with events forwarded to sentry.
pub fn init_tracing_subscriber(target: LogTarget) -> anyhow::Result<()> {
    match target {
        LogTarget::Stdout => install(std::io::stdout),
        LogTarget::Stderr => install(std::io::stderr),
    }
}

fn install<W>(make_writer: W) -> anyhow::Result<()>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let formatting_layer = BunyanFormattingLayer::new(env!("CARGO_PKG_NAME").into(), make_writer);

    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
        .with(sentry_tracing::layer());

    ::tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
