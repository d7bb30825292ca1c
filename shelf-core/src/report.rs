//! Diagnostic channel for fetch failures

use crate::source::SourceError;
use tracing::error;

/// Receives fetch failures instead of the caller.
///
/// The loader calls `report` once per failed fetch and then settles into
/// `Failed`; the error never reaches the rendering layer as a panic or `Err`.
pub trait ErrorReporter {
    fn report(&self, error: &SourceError);
}

/// Logs failures at error level. In the browser the Dioxus logger turns this
/// into a `console.error` call.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, err: &SourceError) {
        error!("Failed to load books: {err}");
    }
}

impl<F> ErrorReporter for F
where
    F: Fn(&SourceError),
{
    fn report(&self, error: &SourceError) {
        self(error)
    }
}
