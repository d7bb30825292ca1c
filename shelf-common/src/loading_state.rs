/// Lifecycle of a book list fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingState {
    /// Nothing requested yet
    Idle,
    /// Request outstanding; the loading indicator is shown
    Loading,
    /// Response arrived and was parsed
    Loaded,
    /// Request failed; no books are shown
    Failed,
}

#[allow(clippy::derivable_impls)]
impl Default for LoadingState {
    fn default() -> Self {
        LoadingState::Idle
    }
}

impl LoadingState {
    /// Whether `next` is a legal successor of this state.
    pub fn can_transition_to(self, next: LoadingState) -> bool {
        matches!(
            (self, next),
            (LoadingState::Idle, LoadingState::Loading)
                | (LoadingState::Loading, LoadingState::Loaded)
                | (LoadingState::Loading, LoadingState::Failed)
        )
    }

    /// Loaded and Failed are final.
    pub fn is_terminal(self) -> bool {
        matches!(self, LoadingState::Loaded | LoadingState::Failed)
    }
}
