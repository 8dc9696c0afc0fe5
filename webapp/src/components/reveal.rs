use dioxus::prelude::*;

use showcase_common::tokens::reveal_class;

use crate::common::listener::use_reveal;

#[derive(Clone, PartialEq, Props)]
pub struct RevealProps {
    #[props(default, into)]
    class: String,
    // name of a token animation, e.g. "slide-up"
    #[props(into)]
    animation: String,
    children: Element,
}

// block that stays hidden until it first scrolls into view, then plays its entrance animation
#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let reveal = use_reveal();

    let class = reveal_class(&props.class, &props.animation, reveal.is_visible());

    rsx! {
        div {
            class: "{class}",
            onmounted: move |event: MountedEvent| {
                if let Some(element) = event.data().downcast::<web_sys::Element>() {
                    reveal.watch(element);
                }
            },
            {props.children}
        }
    }
}
