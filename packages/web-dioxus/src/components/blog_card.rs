//! Blog post card component

use dioxus::prelude::*;

use crate::types::BlogPost;

/// Props for BlogCard
#[derive(Props, Clone, PartialEq)]
pub struct BlogCardProps {
    pub post: BlogPost,
}

/// Card for one aggregated blog post, linking out to the platform it was
/// published on.
#[component]
pub fn BlogCard(props: BlogCardProps) -> Element {
    let post = &props.post;
    let published = post.published_at.format("%d %B %Y").to_string();

    rsx! {
        a {
            class: "block rounded-xl border border-gray-200 bg-white p-5 hover:shadow-lg transition-all duration-200",
            href: "{post.url}",
            target: "_blank",
            rel: "noopener",

            div {
                class: "flex items-center justify-between mb-3",
                span {
                    class: "px-2.5 py-1 rounded-full text-xs font-medium bg-emerald-50 text-emerald-800",
                    "{post.source.label()}"
                }
                span { class: "text-xs text-gray-400", "{published}" }
            }

            h3 {
                class: "text-lg font-semibold text-gray-900 mb-2 line-clamp-2",
                "{post.title}"
            }

            if !post.excerpt.is_empty() {
                p { class: "text-sm text-gray-600 line-clamp-3 mb-3", "{post.excerpt}" }
            }

            if let Some(author) = &post.author {
                p { class: "text-xs text-gray-500", "By {author}" }
            }
        }
    }
}
