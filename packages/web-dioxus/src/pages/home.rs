//! Home page component

use dioxus::prelude::*;

use crate::components::{CardSkeleton, FallbackNotice, ServiceCard};
use crate::content::{defaults, select};
use crate::hooks::use_services;
use crate::routes::Route;
use crate::types::Service;

/// Home page - hero, firm introduction, and a practice area preview
#[component]
pub fn Home() -> Element {
    let services = use_services();
    let state = services.state();
    let fallback = defaults::services();

    // First three practice areas, product order.
    let featured: Vec<Service> = {
        let mut shown: Vec<Service> = select(&state.items, &fallback).to_vec();
        shown.sort_by_key(|s| s.display_order.unwrap_or(i32::MAX));
        shown.truncate(3);
        shown
    };

    rsx! {
        div {
            // Hero
            header {
                class: "bg-emerald-950 text-white",
                div {
                    class: "max-w-7xl mx-auto px-6 py-20 text-center",
                    h1 {
                        class: "text-4xl sm:text-5xl font-bold mb-4",
                        "Counsel you can build on."
                    }
                    p {
                        class: "text-lg sm:text-xl text-emerald-100/90 max-w-2xl mx-auto mb-8",
                        "Mwangi & Wekesa Advocates LLP is a full-service Kenyan law firm \
                         advising businesses, families and institutions across East Africa."
                    }
                    Link {
                        to: Route::Contact {},
                        class: "inline-flex items-center gap-2 px-6 py-3 bg-white text-emerald-950 rounded-xl hover:bg-emerald-50 transition-colors font-medium",
                        "Talk to an Advocate"
                    }
                }
            }

            // Firm stats
            section {
                class: "border-b border-gray-100",
                div {
                    class: "max-w-7xl mx-auto px-6 py-10 grid grid-cols-3 gap-6 text-center",
                    Stat { value: "20+", label: "Years in practice" }
                    Stat { value: "14", label: "Advocates" }
                    Stat { value: "1,200+", label: "Matters concluded" }
                }
            }

            // Practice area preview
            section {
                class: "max-w-7xl mx-auto px-6 py-12",
                div {
                    class: "flex items-center justify-between mb-6",
                    h2 { class: "text-2xl font-bold text-gray-900", "Practice Areas" }
                    Link {
                        to: Route::Services {},
                        class: "text-sm font-medium text-emerald-800 hover:text-emerald-900",
                        "View all \u{2192}"
                    }
                }

                if state.loading {
                    div {
                        class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                        for i in 0..3 {
                            CardSkeleton { key: "{i}" }
                        }
                    }
                } else {
                    if state.error.is_some() {
                        FallbackNotice {}
                    }
                    div {
                        class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                        for service in featured {
                            ServiceCard { key: "{service.id}", service: service.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StatProps {
    value: &'static str,
    label: &'static str,
}

#[component]
fn Stat(props: StatProps) -> Element {
    rsx! {
        div {
            p { class: "text-3xl font-bold text-emerald-900", "{props.value}" }
            p { class: "text-sm text-gray-500", "{props.label}" }
        }
    }
}
