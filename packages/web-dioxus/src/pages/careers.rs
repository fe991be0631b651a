//! Careers page component

use dioxus::prelude::*;

use crate::components::{FallbackNotice, JobCard, SkeletonGrid};
use crate::content::{defaults, select};
use crate::hooks::use_job_positions;

/// Careers page - open positions with mailto applications
#[component]
pub fn Careers() -> Element {
    let jobs = use_job_positions();
    let state = jobs.state();
    let fallback = defaults::job_positions();

    rsx! {
        div {
            class: "max-w-7xl mx-auto px-6 py-12",

            div {
                class: "mb-8",
                h1 { class: "text-3xl font-bold text-gray-900 mb-2", "Careers" }
                p {
                    class: "text-gray-600 max-w-2xl",
                    "We hire advocates and staff who care about craft. Current openings \
                     are listed below; speculative applications are always welcome at \
                     careers@mwangiwekesa.co.ke."
                }
            }

            if state.loading {
                SkeletonGrid { count: 2 }
            } else {
                if state.error.is_some() {
                    FallbackNotice {}
                }
                div {
                    class: "grid gap-6 sm:grid-cols-2",
                    for job in select(&state.items, &fallback).iter() {
                        JobCard { key: "{job.id}", job: job.clone() }
                    }
                }
            }
        }
    }
}
