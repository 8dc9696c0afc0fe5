use std::rc::Rc;

use dioxus::prelude::*;

use showcase_common::{SectionKind, SiteContent};

pub mod about;
pub mod cards;
pub mod contact;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod limited;
pub mod newsletter;
pub mod products;
pub mod testimonials;

use about::About;
use cards::CardGridSection;
use contact::Contact;
use gallery::Gallery;
use hero::Hero;
use limited::LimitedEdition;
use newsletter::Newsletter;
use products::Products;
use testimonials::Testimonials;

#[derive(Clone, PartialEq, Props)]
pub struct SectionProps {
    kind: SectionKind,
    site: Rc<SiteContent>,
}

// renders one listed section from its slice of the site content
//
// content presence is checked when the document is loaded, so a missing slice here just renders
// nothing
#[component]
pub fn Section(props: SectionProps) -> Element {
    let site = props.site;

    match props.kind {
        SectionKind::Hero => rsx! {
            Hero { content: site.hero.clone() }
        },
        SectionKind::Gallery => match site.gallery.clone() {
            Some(content) => rsx! { Gallery { content } },
            None => rsx! {},
        },
        SectionKind::Products => match site.products.clone() {
            Some(content) => rsx! { Products { content } },
            None => rsx! {},
        },
        SectionKind::About => match site.about.clone() {
            Some(content) => rsx! { About { content } },
            None => rsx! {},
        },
        SectionKind::Features => match site.features.clone() {
            Some(content) => rsx! { CardGridSection { content } },
            None => rsx! {},
        },
        SectionKind::Services => match site.services.clone() {
            Some(content) => rsx! { CardGridSection { content } },
            None => rsx! {},
        },
        SectionKind::LimitedEdition => match site.limited_edition.clone() {
            Some(content) => rsx! { LimitedEdition { content } },
            None => rsx! {},
        },
        SectionKind::Testimonials => match site.testimonials.clone() {
            Some(content) => rsx! { Testimonials { content } },
            None => rsx! {},
        },
        SectionKind::Contact => match site.contact.clone() {
            Some(content) => rsx! { Contact { content } },
            None => rsx! {},
        },
        SectionKind::Newsletter => match site.newsletter.clone() {
            Some(content) => rsx! { Newsletter { content } },
            None => rsx! {},
        },
        SectionKind::ValueProps => match site.value_props.clone() {
            Some(content) => rsx! { CardGridSection { content, compact: true } },
            None => rsx! {},
        },
    }
}
