use dioxus::prelude::*;

use crate::components::reveal::Reveal;

#[derive(Clone, PartialEq, Props)]
pub struct SectionIntroProps {
    title: String,
    #[props(default)]
    subtitle: String,
}

#[component]
pub fn SectionIntro(props: SectionIntroProps) -> Element {
    rsx! {
        Reveal { class: "section-intro", animation: "slide-up",
            h2 { "{props.title}" }
            if !props.subtitle.is_empty() {
                p { "{props.subtitle}" }
            }
        }
    }
}
