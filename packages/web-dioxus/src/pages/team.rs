//! Team directory page component

use dioxus::prelude::*;

use crate::components::{FallbackNotice, MemberCard, SkeletonGrid};
use crate::content::{defaults, group_by_category, select};
use crate::hooks::{use_categories, use_team_members};
use crate::types::{Category, TeamMember};

/// Team page - the firm's people, grouped by category
#[component]
pub fn Team() -> Element {
    let members = use_team_members();
    let categories = use_categories();

    let members_state = members.state();
    let categories_state = categories.state();

    let fallback_members = defaults::team_members();
    let shown: Vec<TeamMember> = {
        let mut shown: Vec<TeamMember> =
            select(&members_state.items, &fallback_members).to_vec();
        shown.sort_by_key(|m| m.display_order.unwrap_or(i32::MAX));
        shown
    };

    // Live category order when the backend has one; the fixed product order
    // otherwise.
    let live_categories: Option<Vec<Category>> = if categories_state.items.is_empty() {
        None
    } else {
        let mut live = categories_state.items.clone();
        live.sort_by_key(|c| c.display_order.unwrap_or(i32::MAX));
        Some(live)
    };
    let sections = group_by_category(&shown, live_categories.as_deref());

    rsx! {
        div {
            class: "max-w-7xl mx-auto px-6 py-12",

            div {
                class: "mb-8",
                h1 { class: "text-3xl font-bold text-gray-900 mb-2", "Our People" }
                p {
                    class: "text-gray-600 max-w-2xl",
                    "Advocates and staff who bring decades of combined experience to \
                     every matter."
                }
            }

            if members_state.loading {
                SkeletonGrid { count: 6 }
            } else {
                if members_state.error.is_some() {
                    FallbackNotice {}
                }
                for group in sections.iter().filter(|s| !s.members.is_empty()) {
                    section {
                        key: "{group.name}",
                        class: "mb-10",
                        h2 {
                            class: "text-xl font-semibold text-emerald-900 border-b border-gray-100 pb-2 mb-6",
                            "{group.name}"
                        }
                        div {
                            class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                            for member in group.members.iter() {
                                MemberCard { key: "{member.id}", member: member.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}
