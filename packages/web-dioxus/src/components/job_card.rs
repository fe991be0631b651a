//! Job posting card component

use dioxus::prelude::*;

use crate::types::JobPosition;

/// Props for JobCard
#[derive(Props, Clone, PartialEq)]
pub struct JobCardProps {
    pub job: JobPosition,
}

/// Card for one open position, with a mailto application link.
#[component]
pub fn JobCard(props: JobCardProps) -> Element {
    let job = &props.job;

    let apply_href = job.apply_email.as_ref().map(|email| {
        format!(
            "mailto:{}?subject={}",
            email,
            urlencoding::encode(&format!("Application: {}", job.title))
        )
    });

    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-5 flex flex-col h-full",

            div {
                class: "flex items-center gap-2 mb-3",
                span {
                    class: "px-2.5 py-1 rounded-full text-xs font-medium bg-emerald-50 text-emerald-800",
                    "{job.employment_type}"
                }
                span { class: "text-xs text-gray-500", "{job.location}" }
            }

            h3 { class: "text-lg font-semibold text-gray-900 mb-1", "{job.title}" }

            if let Some(department) = &job.department {
                p { class: "text-sm text-emerald-800 mb-2", "{department}" }
            }

            p { class: "text-sm text-gray-600 flex-1", "{job.summary}" }

            if let Some(deadline) = &job.deadline {
                p {
                    class: "text-xs text-gray-500 mt-3",
                    {format!("Apply by {}", deadline.format("%d %B %Y"))}
                }
            }

            if let Some(href) = apply_href {
                a {
                    class: "mt-4 inline-flex items-center justify-center px-4 py-2 bg-emerald-800 text-white rounded-lg hover:bg-emerald-900 transition-colors text-sm font-medium",
                    href: "{href}",
                    "Apply by Email"
                }
            }
        }
    }
}
