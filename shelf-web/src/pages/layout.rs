use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn AppLayout() -> Element {
    rsx! {
        header { class: "border-b border-gray-800 px-4 py-3",
            span { class: "text-lg font-semibold text-white", "shelf" }
        }
        main { class: "px-4", Outlet::<Route> {} }
    }
}
