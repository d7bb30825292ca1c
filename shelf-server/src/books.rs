use std::io;
use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use shelf_core::FixtureBookSource;
use tracing::{info, warn};

pub struct BooksState {
    pub source: FixtureBookSource,
}

pub fn books_router(state: Arc<BooksState>) -> Router {
    Router::new()
        .route("/books", get(list_books))
        .route("/health", get(health))
        .with_state(state)
}

async fn list_books(State(state): State<Arc<BooksState>>) -> Response {
    let source = &state.source;
    source.wait().await;

    if source.forces_network_error() {
        warn!("dropping /books connection (forced network error)");
        return aborted_response();
    }

    info!("serving {} books", source.books().len());
    Json(source.books()).into_response()
}

/// Headers go out, then the body errors and hyper tears down the connection.
/// Clients see a transport failure, not an HTTP error status.
fn aborted_response() -> Response {
    let body = futures::stream::once(async {
        Err::<Bytes, io::Error>(io::Error::new(
            io::ErrorKind::ConnectionAborted,
            "forced network error",
        ))
    });

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Body::from_stream(body),
    )
        .into_response()
}

async fn health(State(state): State<Arc<BooksState>>) -> Response {
    let body = serde_json::json!({
        "status": "ok",
        "books": state.source.books().len(),
    });

    (
        StatusCode::OK,
        [("content-type", "application/json")],
        body.to_string(),
    )
        .into_response()
}
