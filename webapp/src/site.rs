use std::rc::Rc;

use anyhow::Result;
use dioxus::prelude::*;
use gloo_console::error as console_error;
use tracing::info;

use showcase_common::{SiteContent, SiteVariant, content};

use crate::{
    components::navigation::NavBar,
    sections::{Section, footer::Footer},
};

fn load_site(variant: SiteVariant) -> Result<Rc<SiteContent>> {
    let site = content::load(variant)?;

    info!({ variant = %variant, sections = site.sections.len() }, "rendering site");
    Ok(Rc::new(site))
}

#[derive(Clone, PartialEq, Props)]
pub struct SitePageProps {
    variant: SiteVariant,
}

// one page built from a content document: header, listed sections, footer
#[component]
pub fn SitePage(props: SitePageProps) -> Element {
    let variant = props.variant;

    let site = use_hook(move || {
        load_site(variant).map_err(|err| {
            console_error!(format!("Failed to load {variant} site content: {err:#}"));
            format!("{err:#}")
        })
    });

    match site {
        Ok(site) => {
            let tokens_css = site.tokens.to_css();

            rsx! {
                style { "{tokens_css}" }
                div { class: "page",
                    NavBar { brand: site.brand.clone(), links: site.nav.clone() }
                    for kind in site.sections.iter() {
                        Section { key: "{kind:?}", kind: *kind, site: site.clone() }
                    }
                    Footer { brand: site.brand.clone(), content: site.footer.clone() }
                }
            }
        }
        Err(err) => rsx! {
            div { class: "error-panel",
                h2 { "This page could not be built" }
                p { "{err}" }
            }
        },
    }
}

#[component]
pub fn PortfolioSite() -> Element {
    rsx! {
        SitePage { variant: SiteVariant::Portfolio }
    }
}

#[component]
pub fn SneakerSite() -> Element {
    rsx! {
        SitePage { variant: SiteVariant::Sneakers }
    }
}
