use dioxus::prelude::*;

use showcase_common::content::AboutContent;

use crate::components::{anchor::Anchor, reveal::Reveal};

#[derive(Clone, PartialEq, Props)]
pub struct AboutProps {
    content: AboutContent,
}

#[component]
pub fn About(props: AboutProps) -> Element {
    let about = props.content;

    rsx! {
        section { id: "{about.anchor}", class: "section-padding",
            div { class: "container-custom split",
                Reveal { class: "framed", animation: "slide-left",
                    img { src: "{about.image_url}", alt: "{about.image_alt}" }
                }

                Reveal { class: "about-copy", animation: "slide-up",
                    h2 { "{about.title}" }
                    for paragraph in about.paragraphs.iter() {
                        p { "{paragraph}" }
                    }

                    div { class: "bullet-lists",
                        for list in about.lists.iter() {
                            div { key: "{list.title}",
                                h4 { "{list.title}" }
                                ul {
                                    for entry in list.items.iter() {
                                        li { "{entry}" }
                                    }
                                }
                            }
                        }
                    }

                    if let Some(cta) = about.cta.clone() {
                        Anchor { href: cta.href, class: "btn btn-primary", "{cta.label}" }
                    }
                }
            }
        }
    }
}
