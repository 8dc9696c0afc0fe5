use dioxus::prelude::*;

use showcase_common::content::NewsletterContent;

use crate::components::intro::SectionIntro;

#[derive(Clone, PartialEq, Props)]
pub struct NewsletterProps {
    content: NewsletterContent,
}

#[component]
pub fn Newsletter(props: NewsletterProps) -> Element {
    let newsletter = props.content;

    rsx! {
        section { id: "{newsletter.anchor}", class: "section-padding",
            div { class: "container-custom",
                SectionIntro { title: newsletter.title.clone(), subtitle: newsletter.subtitle.clone() }

                form {
                    class: "newsletter-form",
                    onsubmit: move |event| event.prevent_default(),
                    input {
                        class: "form-input",
                        r#type: "email",
                        placeholder: "{newsletter.placeholder}",
                        aria_label: "Email address",
                        required: true,
                    }
                    button { class: "btn btn-primary", r#type: "submit", "{newsletter.button_label}" }
                }

                if let Some(fine_print) = newsletter.fine_print.clone() {
                    p { class: "newsletter-fine-print", "{fine_print}" }
                }
            }
        }
    }
}
