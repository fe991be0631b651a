//! Mwangi & Wekesa Advocates LLP - Dioxus web frontend
//!
//! A single-page site for the firm: practice areas, the team directory, the
//! blog feed, careers, and a contact form. Content comes from the hosted
//! content backend with bundled defaults as a fallback.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod content;
mod feeds;
mod hooks;
mod pages;
mod routes;
mod types;

use content_client::ClientConfig;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // The backend client is configured exactly once, before any component
    // mounts. Endpoint and key are baked in at build time (see build.rs).
    content_client::init(ClientConfig {
        base_url: option_env!("CONTENT_API_URL")
            .unwrap_or("https://content.mwangiwekesa.co.ke")
            .to_string(),
        api_key: option_env!("CONTENT_API_KEY")
            .unwrap_or("public-site-key")
            .to_string(),
    });

    #[cfg(feature = "web")]
    dioxus::launch(app::App);

    // Without a renderer there is nothing to mount; `dx serve --features web`
    // is the supported way to run the site.
    #[cfg(not(feature = "web"))]
    {
        let _app: fn() -> dioxus::prelude::Element = app::App;
        tracing::warn!("built without the `web` feature; exiting");
    }
}
