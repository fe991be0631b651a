//! Practice area card component

use dioxus::prelude::*;

use crate::types::Service;

/// Props for ServiceCard
#[derive(Props, Clone, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
}

/// Card for one practice area.
#[component]
pub fn ServiceCard(props: ServiceCardProps) -> Element {
    let service = &props.service;

    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-5 hover:shadow-lg transition-all duration-200 flex flex-col h-full",

            if let Some(image) = &service.header_image {
                img {
                    class: "w-full h-36 object-cover rounded-lg mb-4",
                    src: "{image}",
                    alt: "{service.title}"
                }
            }

            h3 {
                class: "text-lg font-semibold text-gray-900 mb-1 line-clamp-2",
                "{service.title}"
            }
            p {
                class: "text-sm font-medium text-emerald-800 mb-3",
                "{service.summary}"
            }
            p {
                class: "text-sm text-gray-600 line-clamp-4 flex-1",
                "{service.description}"
            }
        }
    }
}
