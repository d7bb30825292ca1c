//! Book list loader
//!
//! Drives a [`BookList`] through exactly one fetch from a [`BookSource`].
//!
//! # Observing the state
//!
//! The loader is the only writer of its `BookList`. Every transition is
//! published on a `tokio::sync::watch` channel, so a UI can mirror it:
//!
//! ```ignore
//! let loader = BookListLoader::new(HttpBookSource::new(origin));
//! let mut rx = loader.subscribe();
//! spawn(async move { loader.start().await });
//! while rx.changed().await.is_ok() {
//!     render(&rx.borrow_and_update());
//! }
//! ```
//!
//! `Loading` is published before the request goes out and is replaced by
//! `Loaded` or `Failed` as soon as the source settles. There is no timeout,
//! no retry and no minimum display time.

use crate::report::{ErrorReporter, TracingReporter};
use crate::source::BookSource;
use shelf_common::{BookList, LoadingState, TransitionError};
use tokio::sync::watch;
use tracing::info;

pub struct BookListLoader<S, R = TracingReporter> {
    source: S,
    reporter: R,
    state: watch::Sender<BookList>,
}

impl<S: BookSource> BookListLoader<S> {
    /// Loader that logs failures through `tracing`.
    pub fn new(source: S) -> Self {
        Self::with_reporter(source, TracingReporter)
    }
}

impl<S: BookSource, R: ErrorReporter> BookListLoader<S, R> {
    pub fn with_reporter(source: S, reporter: R) -> Self {
        let (state, _) = watch::channel(BookList::new());
        Self {
            source,
            reporter,
            state,
        }
    }

    /// Receiver that sees every transition from now on.
    pub fn subscribe(&self) -> watch::Receiver<BookList> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> BookList {
        self.state.borrow().clone()
    }

    pub fn state(&self) -> LoadingState {
        self.state.borrow().state()
    }

    /// Run the fetch.
    ///
    /// Only valid from `Idle`; any other state returns the `TransitionError`
    /// without touching the source. A failed fetch is reported and ends in
    /// `Failed`; it is not returned to the caller.
    pub async fn start(&self) -> Result<(), TransitionError> {
        self.transition(BookList::begin)?;

        match self.source.fetch_books().await {
            Ok(books) => {
                info!("Loaded {} books", books.len());
                self.transition(move |list| list.resolve(books))
            }
            Err(e) => {
                self.reporter.report(&e);
                let message = e.to_string();
                self.transition(move |list| list.fail(message))
            }
        }
    }

    /// Apply a state machine step and notify subscribers only if it took.
    fn transition<F>(&self, step: F) -> Result<(), TransitionError>
    where
        F: FnOnce(&mut BookList) -> Result<(), TransitionError>,
    {
        let mut outcome = Ok(());
        self.state.send_if_modified(|list| match step(list) {
            Ok(()) => true,
            Err(e) => {
                outcome = Err(e);
                false
            }
        });
        outcome
    }
}
