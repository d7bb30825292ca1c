//! Loading indicator component

use dioxus::prelude::*;

/// Spinner shown while a request is outstanding.
///
/// Carries the `loading` test id and an accessible label so both test
/// harnesses and screen readers can find it. The caller mounts it only while
/// loading; it has no hidden state of its own.
#[component]
pub fn LoadingIndicator(
    /// Announced to assistive technology
    #[props(default = "App is loading books".to_string())]
    label: String,
    /// Message to display next to spinner (default: "Loading...")
    #[props(default = "Loading...".to_string())]
    message: String,
) -> Element {
    rsx! {
        div {
            class: "flex justify-center items-center py-12",
            role: "status",
            "aria-live": "polite",
            "aria-label": "{label}",
            "data-testid": "loading",
            div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-blue-500" }
            p { class: "ml-4 text-gray-300", "{message}" }
        }
    }
}
