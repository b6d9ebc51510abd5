pub mod page;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use maud::Markup;
use tower_http::trace::TraceLayer;

use crate::{
    error::Error,
    llm::summarizer::Summarizer,
    llm::model::Model,
    loader::DocumentLoader,
    types::{SessionForm, SessionInput},
    yt::VideoInfoExtractor,
    SummarizeHandler,
};

pub struct AppState<V, T, W, S>
where
    V: VideoInfoExtractor + Send + Sync + 'static,
    T: DocumentLoader + Send + Sync + 'static,
    W: DocumentLoader + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    handler: Arc<SummarizeHandler<V, T, W, S>>,
}

impl<V, T, W, S> Clone for AppState<V, T, W, S>
where
    V: VideoInfoExtractor + Send + Sync + 'static,
    T: DocumentLoader + Send + Sync + 'static,
    W: DocumentLoader + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::Input(_) => StatusCode::UNPROCESSABLE_ENTITY,
        Error::Extraction(_) | Error::Processing { .. } => StatusCode::BAD_GATEWAY,
    }
}

/// JSON rendition of [`Error`] for the api route.
struct ApiError(Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = serde_json::json!({
            "error": {
                "kind": self.0.kind(),
                "message": self.0.to_string(),
            }
        });
        if let Some(video) = self.0.video() {
            body["video"] = serde_json::json!(video);
        }
        (status_for(&self.0), Json(body)).into_response()
    }
}

/// Builds the page and api routes around a shared handler.
pub fn router<V, T, W, S>(handler: SummarizeHandler<V, T, W, S>) -> Router
where
    V: VideoInfoExtractor + Send + Sync + 'static,
    T: DocumentLoader + Send + Sync + 'static,
    W: DocumentLoader + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    let state = AppState {
        handler: Arc::new(handler),
    };

    Router::new()
        .route("/", get(index))
        .route("/summarize", post(summarize_form::<V, T, W, S>))
        .route("/api/summarize", post(summarize_json::<V, T, W, S>))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves `router` on `addr` until Ctrl-C.
pub async fn serve(router: Router, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

async fn index() -> Markup {
    page::render(None, None)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn summarize_form<V, T, W, S>(
    State(state): State<AppState<V, T, W, S>>,
    form: Result<Form<SessionForm>, FormRejection>,
) -> (StatusCode, Markup)
where
    V: VideoInfoExtractor + Send + Sync + 'static,
    T: DocumentLoader + Send + Sync + 'static,
    W: DocumentLoader + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Rejected form body");
            let outcome = Err(Error::Input(Error::MALFORMED_REQUEST));
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                page::render(None, Some(&outcome)),
            );
        }
    };

    let (input, outcome) = match form.model() {
        Ok(model) => {
            let input = form.into_input(model);
            let outcome = state.handler.handle(input.clone()).await;
            (input, outcome)
        }
        Err(e) => (form.into_input(Model::default()), Err(e)),
    };

    let status = match &outcome {
        Ok(_) => StatusCode::OK,
        Err(e) => status_for(e),
    };

    (status, page::render(Some(&input), Some(&outcome)))
}

async fn summarize_json<V, T, W, S>(
    State(state): State<AppState<V, T, W, S>>,
    body: Result<Json<SessionForm>, JsonRejection>,
) -> Response
where
    V: VideoInfoExtractor + Send + Sync + 'static,
    T: DocumentLoader + Send + Sync + 'static,
    W: DocumentLoader + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    let input = match body {
        Ok(Json(form)) => SessionInput::try_from(form),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Rejected json body");
            Err(Error::Input(Error::MALFORMED_REQUEST))
        }
    };

    let outcome = match input {
        Ok(input) => state.handler.handle(input).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(report) => Json(report).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}
