//! Site-wide layout: navigation bar, page outlet, footer.

use dioxus::prelude::*;

use crate::routes::Route;

/// Layout wrapping every public page.
#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        div {
            class: "min-h-screen flex flex-col bg-white",

            nav {
                class: "bg-white border-b border-gray-100 px-6 py-4 sticky top-0 z-20",
                div {
                    class: "max-w-7xl mx-auto flex items-center justify-between",

                    Link {
                        to: Route::Home {},
                        class: "text-xl font-bold text-emerald-900",
                        "Mwangi & Wekesa Advocates"
                    }

                    div {
                        class: "hidden md:flex items-center gap-1",
                        NavLink { to: Route::Home {}, label: "Home" }
                        NavLink { to: Route::Services {}, label: "Practice Areas" }
                        NavLink { to: Route::Team {}, label: "Our People" }
                        NavLink { to: Route::Blog {}, label: "Insights" }
                        NavLink { to: Route::Careers {}, label: "Careers" }
                        NavLink { to: Route::Contact {}, label: "Contact" }
                    }
                }
            }

            main {
                class: "flex-1",
                Outlet::<Route> {}
            }

            footer {
                class: "bg-emerald-950 text-emerald-100 mt-12",
                div {
                    class: "max-w-7xl mx-auto px-6 py-10 grid gap-8 md:grid-cols-3",
                    div {
                        h2 { class: "text-lg font-semibold mb-2", "Mwangi & Wekesa Advocates LLP" }
                        p {
                            class: "text-sm text-emerald-200/80",
                            "A full-service law firm serving clients across Kenya and the \
                             wider East African region since 2004."
                        }
                    }
                    div {
                        h3 { class: "text-sm font-semibold uppercase tracking-wide mb-2", "Visit us" }
                        p { class: "text-sm text-emerald-200/80", "Riverside Green Suites, Block C" }
                        p { class: "text-sm text-emerald-200/80", "Riverside Drive, Nairobi" }
                    }
                    div {
                        h3 { class: "text-sm font-semibold uppercase tracking-wide mb-2", "Reach us" }
                        p { class: "text-sm text-emerald-200/80", "info@mwangiwekesa.co.ke" }
                        p { class: "text-sm text-emerald-200/80", "+254 20 765 4321" }
                    }
                }
                div {
                    class: "border-t border-emerald-900 py-4 text-center text-xs text-emerald-300/60",
                    "\u{00A9} 2026 Mwangi & Wekesa Advocates LLP. All rights reserved."
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    to: Route,
    label: &'static str,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    rsx! {
        Link {
            to: props.to.clone(),
            class: "px-3 py-2 rounded-lg text-sm font-medium text-gray-600 hover:text-emerald-900 hover:bg-emerald-50 transition-colors",
            "{props.label}"
        }
    }
}
