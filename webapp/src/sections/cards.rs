use dioxus::prelude::*;

use showcase_common::content::CardGrid;

use crate::components::{anchor::Anchor, icon::Glyph, intro::SectionIntro, reveal::Reveal};

#[derive(Clone, PartialEq, Props)]
pub struct CardGridProps {
    content: CardGrid,
    // tighter, title-less strip used for value props
    #[props(default)]
    compact: bool,
}

// services, product features and value props
#[component]
pub fn CardGridSection(props: CardGridProps) -> Element {
    let grid = props.content;

    let mut class = String::from(if props.compact { "value-strip" } else { "section-padding" });
    if grid.dark {
        class.push_str(" surface-dark");
    } else if props.compact {
        class.push_str(" surface-muted");
    }

    rsx! {
        section { id: "{grid.anchor}", class: "{class}",
            div { class: "container-custom",
                if let Some(title) = grid.title.clone() {
                    SectionIntro { title, subtitle: grid.subtitle.clone().unwrap_or_default() }
                }

                div { class: "card-grid",
                    for card in grid.cards.iter() {
                        Reveal { key: "{card.title}", class: "icon-card", animation: "slide-up",
                            div { class: "card-icon",
                                Glyph { icon: card.icon, class: "icon icon-lg" }
                            }
                            div {
                                h3 { "{card.title}" }
                                p { "{card.description}" }
                            }
                        }
                    }
                }

                if grid.closing.is_some() || grid.cta.is_some() {
                    div { class: "card-grid-closing",
                        if let Some(closing) = grid.closing.clone() {
                            p { "{closing}" }
                        }
                        if let Some(cta) = grid.cta.clone() {
                            Anchor { href: cta.href, class: "btn btn-primary", "{cta.label}" }
                        }
                    }
                }
            }
        }
    }
}
