use dioxus::prelude::*;

use showcase_common::content::{ContactContent, ContactLine, SocialLink};

use crate::components::{icon::Glyph, intro::SectionIntro, reveal::Reveal};

#[derive(Clone, PartialEq, Props)]
pub struct ContactLinesProps {
    lines: Vec<ContactLine>,
}

#[component]
pub fn ContactLines(props: ContactLinesProps) -> Element {
    rsx! {
        for line in props.lines.iter() {
            div { key: "{line.label}", class: "contact-line",
                span { class: "icon-badge",
                    Glyph { icon: line.icon }
                }
                div {
                    h4 { "{line.label}" }
                    for text in line.lines.iter() {
                        p { "{text}" }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SocialRowProps {
    links: Vec<SocialLink>,
}

#[component]
pub fn SocialRow(props: SocialRowProps) -> Element {
    rsx! {
        div { class: "social-row",
            for link in props.links.iter() {
                a { key: "{link.label}", href: "{link.href}", aria_label: "{link.label}",
                    Glyph { icon: link.icon }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ContactProps {
    content: ContactContent,
}

// the form relies on native `required` validation and is not submitted anywhere
#[component]
pub fn Contact(props: ContactProps) -> Element {
    let contact = props.content;

    rsx! {
        section { id: "{contact.anchor}", class: "section-padding",
            div { class: "container-custom",
                SectionIntro { title: contact.title.clone(), subtitle: contact.subtitle.clone() }

                div { class: "split",
                    Reveal { animation: "slide-left",
                        form {
                            onsubmit: move |event| event.prevent_default(),
                            div { class: "form-row form-group",
                                div {
                                    label { class: "form-label", r#for: "first-name", "First Name" }
                                    input { class: "form-input", id: "first-name", r#type: "text", required: true }
                                }
                                div {
                                    label { class: "form-label", r#for: "last-name", "Last Name" }
                                    input { class: "form-input", id: "last-name", r#type: "text", required: true }
                                }
                            }
                            div { class: "form-group",
                                label { class: "form-label", r#for: "email", "Email" }
                                input { class: "form-input", id: "email", r#type: "email", required: true }
                            }
                            div { class: "form-group",
                                label { class: "form-label", r#for: "service", "{contact.service_prompt}" }
                                select { class: "form-select", id: "service",
                                    for option in contact.services.iter() {
                                        option { key: "{option.value}", value: "{option.value}", "{option.label}" }
                                    }
                                }
                            }
                            div { class: "form-group",
                                label { class: "form-label", r#for: "message", "Message" }
                                textarea { class: "form-textarea", id: "message", rows: "5", required: true }
                            }
                            button { class: "btn btn-primary btn-block", r#type: "submit", "{contact.submit_label}" }
                        }
                    }

                    Reveal { class: "contact-info", animation: "slide-up",
                        h3 { "{contact.info_title}" }
                        ContactLines { lines: contact.info.clone() }

                        h3 { "{contact.social_title}" }
                        SocialRow { links: contact.socials.clone() }
                    }
                }
            }
        }
    }
}
