//! Failed-load region

use dioxus::prelude::*;

/// Alert box for a load that settled in failure.
///
/// `label` names the region for assistive technology, `heading` is the
/// user-facing summary and `message` the underlying error text.
#[component]
pub fn ErrorDisplay(label: String, heading: String, message: String) -> Element {
    rsx! {
        div {
            class: "bg-red-900 border border-red-700 text-red-100 px-4 py-3 rounded mb-4",
            role: "alert",
            "aria-label": "{label}",
            "data-testid": "error",
            p { class: "font-medium", "{heading}" }
            p { class: "text-sm mt-2", "{message}" }
        }
    }
}
