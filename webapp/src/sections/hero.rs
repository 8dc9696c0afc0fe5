use dioxus::prelude::*;

use showcase_common::content::HeroContent;

use crate::components::anchor::Anchor;

#[derive(Clone, PartialEq, Props)]
pub struct HeroProps {
    content: HeroContent,
}

#[component]
pub fn Hero(props: HeroProps) -> Element {
    let hero = props.content;

    rsx! {
        section { class: "hero",
            div { class: "hero-backdrop",
                img { src: "{hero.image_url}", alt: "{hero.image_alt}" }
            }

            div { class: "hero-body container-custom",
                div { class: "animate-slide-up",
                    h1 { "{hero.headline}" }
                    p { "{hero.subline}" }
                    div { class: "hero-actions",
                        Anchor { href: hero.primary.href.clone(), class: "btn btn-primary",
                            "{hero.primary.label}"
                        }
                        if let Some(secondary) = hero.secondary.clone() {
                            Anchor { href: secondary.href, class: "btn btn-outline", "{secondary.label}" }
                        }
                    }
                }
            }

            if let Some(cue) = hero.scroll_cue.clone() {
                div { class: "scroll-cue animate-fade-in-slow",
                    Anchor { href: cue.href,
                        span { "{cue.label}" }
                        span { class: "line" }
                    }
                }
            }
        }
    }
}
