use dioxus::prelude::*;

use showcase_common::{
    content::LimitedEditionContent,
    countdown::{Countdown, TICK_MS},
};

use crate::{
    common::listener::use_interval,
    components::{anchor::Anchor, reveal::Reveal},
};

#[derive(Clone, PartialEq, Props)]
pub struct CountdownTimerProps {
    start: Countdown,
}

// ticks once a second from mount and parks at zero; the interval dies with the component
#[component]
pub fn CountdownTimer(props: CountdownTimerProps) -> Element {
    let start = props.start;
    let mut remaining = use_signal(move || start);

    use_interval(TICK_MS, move || {
        let current = *remaining.peek();
        if !current.is_zero() {
            remaining.set(current.tick());
        }
    });

    let cells: Vec<(String, &'static str)> = remaining()
        .segments()
        .iter()
        .map(|(value, label)| (format!("{value:02}"), *label))
        .collect();

    rsx! {
        div { class: "countdown", role: "timer",
            for (value, label) in cells {
                div { key: "{label}", class: "countdown-cell",
                    span { class: "countdown-value", "{value}" }
                    span { class: "countdown-label", "{label}" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct LimitedEditionProps {
    content: LimitedEditionContent,
}

#[component]
pub fn LimitedEdition(props: LimitedEditionProps) -> Element {
    let limited = props.content;

    rsx! {
        section { id: "{limited.anchor}", class: "section-padding surface-dark",
            div { class: "container-custom split",
                Reveal { animation: "slide-up",
                    span { class: "limited-eyebrow", "{limited.eyebrow}" }
                    h2 { "{limited.title}" }
                    p { "{limited.description}" }
                    p { class: "limited-price", "{limited.price}" }

                    CountdownTimer { start: limited.countdown }

                    Anchor { href: limited.cta.href.clone(), class: "btn btn-primary", "{limited.cta.label}" }
                }
                Reveal { class: "framed", animation: "slide-left",
                    img { src: "{limited.image_url}", alt: "{limited.image_alt}" }
                }
            }
        }
    }
}
