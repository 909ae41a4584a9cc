use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::store::Store;

const INDEX_HTML: &str = include_str!("../static/index.html");

#[derive(Debug, Clone)]
pub struct ChatServer {
    pub store: Store,
}

// HTTP request/response types

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StartResponse {
    pub name: Option<String>,
    /// `[sender, message]` pairs, oldest first.
    pub history: Vec<(String, String)>,
}

/// Any failure below the handlers. Reported to the client as a bare 500.
#[derive(Debug)]
pub struct ApiError(anyhow::Error);

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "internal error" })),
        )
            .into_response()
    }
}

pub fn router(server: ChatServer) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/start", get(start))
        .route("/chat", post(chat))
        .layer(TraceLayer::new_for_http())
        .with_state(server)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn start(State(server): State<ChatServer>) -> Result<Json<StartResponse>, ApiError> {
    Ok(Json(server.do_start().await?))
}

// The body is parsed by hand so that a missing, non-string or unparseable
// `message` degrades to empty text instead of a 4xx.
async fn chat(
    State(server): State<ChatServer>,
    body: Bytes,
) -> Result<Json<ChatResponse>, ApiError> {
    let req: ChatRequest = serde_json::from_slice(&body).unwrap_or_default();
    let response = server.do_chat(&req.message).await?;
    Ok(Json(ChatResponse { response }))
}
