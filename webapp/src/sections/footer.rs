use dioxus::prelude::*;

use showcase_common::content::{Brand, ContactLine, FooterContent};

use crate::{
    common::current_year,
    components::{anchor::Anchor, icon::Glyph},
    sections::contact::SocialRow,
};

#[derive(Clone, PartialEq, Props)]
pub struct FooterProps {
    brand: Brand,
    content: FooterContent,
}

#[component]
pub fn Footer(props: FooterProps) -> Element {
    let brand = props.brand;
    let footer = props.content;
    let year = current_year();
    let name = brand.full_name();

    rsx! {
        footer { class: "site-footer",
            div { class: "container-custom",
                div { class: "footer-grid",
                    div {
                        h3 { "{name}" }
                        p { class: "footer-links", "{brand.blurb}" }
                    }

                    for column in footer.columns.iter() {
                        div { key: "{column.title}",
                            h4 { "{column.title}" }
                            ul { class: "footer-links",
                                for link in column.links.iter() {
                                    li { key: "{link.label}",
                                        Anchor { href: link.href.clone(), "{link.label}" }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        h4 { "{footer.contact_title}" }
                        ul { class: "footer-links",
                            for line in footer.contact.iter() {
                                FooterContactLine { key: "{line.label}", line: line.clone() }
                            }
                        }
                    }
                }

                div { class: "footer-bottom",
                    p { "© {year} {footer.rights}" }
                    SocialRow { links: footer.socials.clone() }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct FooterContactLineProps {
    line: ContactLine,
}

#[component]
fn FooterContactLine(props: FooterContactLineProps) -> Element {
    let line = props.line;
    let text = line.lines.join(", ");

    rsx! {
        li {
            Glyph { icon: line.icon }
            span { "{text}" }
        }
    }
}
