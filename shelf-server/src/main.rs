use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use shelf_core::FixtureBookSource;
use shelf_server::{books_router, BooksState};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{error, info, warn};

/// shelf server - serves the book collection and, optionally, the web UI.
#[derive(Parser)]
#[command(name = "shelf-server")]
struct Args {
    /// JSON file with the book collection. Uses the bundled fixture if omitted.
    #[arg(long, env = "SHELF_FIXTURE")]
    fixture: Option<PathBuf>,

    /// Hold every /books response for this many milliseconds.
    #[arg(long, default_value = "0", env = "SHELF_DELAY_MS")]
    delay_ms: u64,

    /// Drop /books connections instead of answering (after the delay).
    #[arg(long, env = "SHELF_FORCE_NETWORK_ERROR")]
    force_network_error: bool,

    /// Port to listen on.
    #[arg(long, default_value = "4540", env = "SHELF_PORT")]
    port: u16,

    /// Address to bind to.
    #[arg(long, default_value = "0.0.0.0", env = "SHELF_BIND")]
    bind: String,

    /// Path to the built shelf-web dist directory.
    #[arg(long, env = "SHELF_WEB_DIR")]
    web_dir: Option<PathBuf>,
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() {
    configure_logging();
    let args = Args::parse();

    let source = match &args.fixture {
        Some(path) => {
            info!("loading fixture from {}", path.display());
            FixtureBookSource::from_path(path)
        }
        None => FixtureBookSource::bundled(),
    }
    .unwrap_or_else(|e| {
        error!("failed to load fixture: {e}");
        std::process::exit(1);
    })
    .with_delay(Duration::from_millis(args.delay_ms))
    .with_network_error(args.force_network_error);

    info!("serving {} books", source.books().len());
    if args.delay_ms > 0 {
        info!("delaying /books responses by {}ms", args.delay_ms);
    }
    if args.force_network_error {
        warn!("/books will fail with a forced network error");
    }

    let router = books_router(Arc::new(BooksState { source }));

    let app = if let Some(ref web_dir) = args.web_dir {
        info!("serving web UI from {}", web_dir.display());
        let spa_fallback =
            ServeDir::new(web_dir).fallback(ServeFile::new(web_dir.join("index.html")));
        router.fallback_service(spa_fallback)
    } else {
        router
    };

    let addr = format!("{}:{}", args.bind, args.port);

    info!("binding to {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            error!("failed to bind to {addr}: {e}");
            std::process::exit(1);
        });

    info!("shelf-server listening on http://{addr}");
    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
