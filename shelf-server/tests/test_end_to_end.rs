use std::cell::Cell;
use std::net::SocketAddr;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::{Json, Router};
use shelf_core::{
    BookListLoader, FixtureBookSource, HttpBookSource, LoadingState, SourceError,
};
use shelf_server::{books_router, BooksState};

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn serve_fixture(source: FixtureBookSource) -> String {
    let addr = serve(books_router(Arc::new(BooksState { source }))).await;
    format!("http://{addr}")
}

fn counting_reporter() -> (Rc<Cell<usize>>, impl Fn(&SourceError)) {
    let count = Rc::new(Cell::new(0));
    let counter = count.clone();
    (count, move |_: &SourceError| counter.set(counter.get() + 1))
}

#[tokio::test]
async fn test_loads_books_from_server() {
    let base = serve_fixture(FixtureBookSource::bundled().unwrap()).await;
    let loader = BookListLoader::new(HttpBookSource::new(base));

    loader.start().await.unwrap();

    let list = loader.snapshot();
    assert_eq!(list.state(), LoadingState::Loaded);
    assert!(list.len() > 3);
    assert_eq!(list.len(), 8);
}

#[tokio::test]
async fn test_rendered_count_matches_response_body() {
    let base = serve_fixture(FixtureBookSource::bundled().unwrap()).await;

    let body: serde_json::Value = reqwest::get(format!("{base}/books"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let raw = body.as_array().expect("/books should answer with an array");
    assert!(raw.len() > 5);

    let loader = BookListLoader::new(HttpBookSource::new(base));
    loader.start().await.unwrap();
    assert_eq!(loader.snapshot().len(), raw.len());
}

#[tokio::test]
async fn test_loading_shown_until_delayed_response_settles() {
    let base = serve_fixture(
        FixtureBookSource::bundled()
            .unwrap()
            .with_delay(Duration::from_millis(400)),
    )
    .await;
    let loader = BookListLoader::new(HttpBookSource::new(base));

    let observe = async {
        assert!(loader.snapshot().is_loading());
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(loader.snapshot().is_loading());
    };

    let (result, ()) = futures::join!(loader.start(), observe);
    result.unwrap();

    let list = loader.snapshot();
    assert!(!list.is_loading());
    assert_eq!(list.len(), 8);
}

#[tokio::test]
async fn test_forced_network_error_after_delay() {
    let base = serve_fixture(
        FixtureBookSource::bundled()
            .unwrap()
            .with_delay(Duration::from_millis(200))
            .with_network_error(true),
    )
    .await;
    let (count, reporter) = counting_reporter();
    let loader = BookListLoader::with_reporter(HttpBookSource::new(base), reporter);

    loader.start().await.unwrap();

    let list = loader.snapshot();
    assert_eq!(list.state(), LoadingState::Failed);
    assert!(!list.is_loading());
    assert!(list.is_empty());
    assert_eq!(count.get(), 1);
    assert!(list.error().unwrap().starts_with("network error"));
}

#[tokio::test]
async fn test_unreachable_server_fails_cleanly() {
    // Bind and immediately drop to get a port nothing listens on.
    let addr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let (count, reporter) = counting_reporter();
    let loader =
        BookListLoader::with_reporter(HttpBookSource::new(format!("http://{addr}")), reporter);

    loader.start().await.unwrap();

    assert_eq!(loader.state(), LoadingState::Failed);
    assert_eq!(count.get(), 1);
}

#[tokio::test]
async fn test_http_error_status_fails() {
    let base = serve_fixture(FixtureBookSource::bundled().unwrap()).await;
    let (count, reporter) = counting_reporter();
    // Prefix makes the request hit /missing/books, which has no route.
    let loader =
        BookListLoader::with_reporter(HttpBookSource::new(format!("{base}/missing")), reporter);

    loader.start().await.unwrap();

    let list = loader.snapshot();
    assert_eq!(list.state(), LoadingState::Failed);
    assert_eq!(list.error(), Some("server returned HTTP 404"));
    assert_eq!(count.get(), 1);
}

#[tokio::test]
async fn test_non_array_body_fails() {
    let app = Router::new().route(
        "/books",
        get(|| async { Json(serde_json::json!({ "books": [] })) }),
    );
    let addr = serve(app).await;
    let (count, reporter) = counting_reporter();
    let loader =
        BookListLoader::with_reporter(HttpBookSource::new(format!("http://{addr}")), reporter);

    loader.start().await.unwrap();

    let list = loader.snapshot();
    assert_eq!(list.state(), LoadingState::Failed);
    assert!(list.error().unwrap().starts_with("unexpected response body"));
    assert!(list.is_empty());
    assert_eq!(count.get(), 1);
}
