//! Practice areas page component

use dioxus::prelude::*;

use crate::components::{FallbackNotice, ServiceCard, SkeletonGrid};
use crate::content::{defaults, select};
use crate::hooks::use_services;
use crate::types::Service;

/// Practice areas page - every service the firm offers
#[component]
pub fn Services() -> Element {
    let services = use_services();
    let state = services.state();
    let fallback = defaults::services();

    let shown: Vec<Service> = {
        let mut shown: Vec<Service> = select(&state.items, &fallback).to_vec();
        shown.sort_by_key(|s| s.display_order.unwrap_or(i32::MAX));
        shown
    };

    rsx! {
        div {
            class: "max-w-7xl mx-auto px-6 py-12",

            div {
                class: "mb-8",
                h1 { class: "text-3xl font-bold text-gray-900 mb-2", "Practice Areas" }
                p {
                    class: "text-gray-600 max-w-2xl",
                    "The firm acts across the full breadth of Kenyan commercial and \
                     private-client law. Choose an area to learn how we can help."
                }
            }

            if state.loading {
                SkeletonGrid { count: 6 }
            } else {
                if state.error.is_some() {
                    div {
                        class: "flex items-center justify-between",
                        FallbackNotice {}
                        button {
                            class: "text-sm font-medium text-emerald-800 hover:text-emerald-900 mb-6",
                            onclick: move |_| services.reload(),
                            "Try again"
                        }
                    }
                }
                div {
                    class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                    for service in shown {
                        ServiceCard { key: "{service.id}", service: service.clone() }
                    }
                }
            }
        }
    }
}
