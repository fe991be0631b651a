//! Loading components

use dioxus::prelude::*;

/// Full-page loading spinner
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center py-16",
            div {
                class: "flex space-x-2",
                div { class: "w-3 h-3 bg-emerald-700 rounded-full animate-bounce" }
                div { class: "w-3 h-3 bg-emerald-700 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
                div { class: "w-3 h-3 bg-emerald-700 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
            }
            p { class: "mt-4 text-sm text-gray-500", "Loading..." }
        }
    }
}

/// Card-shaped placeholder shown while a content grid is loading.
#[component]
pub fn CardSkeleton() -> Element {
    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-5 animate-pulse",
            div { class: "h-6 w-3/4 bg-gray-200 rounded mb-3" }
            div { class: "h-4 w-1/2 bg-gray-200 rounded mb-4" }
            div {
                class: "space-y-2",
                div { class: "h-4 w-full bg-gray-200 rounded" }
                div { class: "h-4 w-5/6 bg-gray-200 rounded" }
            }
        }
    }
}

/// A grid of [`CardSkeleton`]s.
#[component]
pub fn SkeletonGrid(count: usize) -> Element {
    rsx! {
        div {
            class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
            for i in 0..count {
                CardSkeleton { key: "{i}" }
            }
        }
    }
}
