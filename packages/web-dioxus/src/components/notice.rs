//! Inline notices.

use dioxus::prelude::*;

/// Muted note shown when live content is unavailable and the bundled
/// defaults are rendered instead. Provider error text stays in the logs,
/// never on the page.
#[component]
pub fn FallbackNotice() -> Element {
    rsx! {
        p {
            class: "text-xs text-gray-400 italic mb-6",
            "Showing our standard listing while live updates are unavailable."
        }
    }
}
