#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;

mod sections;

mod site;
use site::{PortfolioSite, SneakerSite};

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// each site is a single page; anything else falls back to the portfolio
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    PortfolioSite {},
    #[route("/sneakers")]
    SneakerSite {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!({ path = ?segments }, "unknown route, showing the portfolio");

    rsx! {
        PortfolioSite {}
    }
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::SITE_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
