//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::SiteLayout;
use crate::pages::{Blog, Careers, Contact, Home, Services, Team};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},

        #[route("/services")]
        Services {},

        #[route("/team")]
        Team {},

        #[route("/blog")]
        Blog {},

        #[route("/careers")]
        Careers {},

        #[route("/contact")]
        Contact {},
}
