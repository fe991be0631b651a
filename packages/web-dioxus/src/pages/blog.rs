//! Insights (blog) page component

use dioxus::prelude::*;

use crate::components::{BlogCard, SkeletonGrid};
use crate::hooks::use_blog_posts;

/// Insights page - posts aggregated from both publishing platforms
#[component]
pub fn Blog() -> Element {
    let posts = use_blog_posts();
    let state = posts.state();

    rsx! {
        div {
            class: "max-w-7xl mx-auto px-6 py-12",

            div {
                class: "mb-8",
                h1 { class: "text-3xl font-bold text-gray-900 mb-2", "Insights" }
                p {
                    class: "text-gray-600 max-w-2xl",
                    "Commentary from our advocates on Kenyan law and practice, \
                     published on the firm's newsroom and the Advocates' Column."
                }
            }

            // Loading State
            if state.loading {
                SkeletonGrid { count: 6 }
            }

            // Error State (no bundled fallback for external feeds)
            else if state.items.is_empty() && state.error.is_some() {
                div {
                    class: "text-center py-16",
                    h3 { class: "text-lg font-medium text-gray-900 mb-2", "Unable to load articles" }
                    p {
                        class: "text-gray-500 mb-4",
                        "Our publications are temporarily unreachable."
                    }
                    button {
                        class: "px-4 py-2 bg-emerald-800 text-white rounded-lg hover:bg-emerald-900 transition-colors text-sm font-medium",
                        onclick: move |_| posts.reload(),
                        "Try again"
                    }
                }
            }

            // Empty State
            else if state.items.is_empty() {
                div {
                    class: "text-center py-16",
                    h3 { class: "text-lg font-medium text-gray-900 mb-2", "No articles yet" }
                    p { class: "text-gray-500", "New commentary is published regularly. Check back soon." }
                }
            }

            // Posts Grid
            else {
                div {
                    class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                    for post in state.items.iter() {
                        BlogCard { key: "{post.id}", post: post.clone() }
                    }
                }
            }
        }
    }
}
