use dioxus::prelude::*;

use showcase_common::{
    content::{Icon, Testimonial, TestimonialsContent},
    selection::Carousel,
};

use crate::components::{
    icon::{CHEVRON_LEFT, CHEVRON_RIGHT, Glyph, Svg},
    intro::SectionIntro,
};

#[derive(Clone, PartialEq, Props)]
struct TestimonialCardProps {
    testimonial: Testimonial,
    active: bool,
}

#[component]
fn TestimonialCard(props: TestimonialCardProps) -> Element {
    let testimonial = props.testimonial;

    rsx! {
        div { class: if props.active { "testimonial-card" } else { "testimonial-card inactive" },
            div { class: "testimonial-person",
                img { src: "{testimonial.image_url}", alt: "{testimonial.name}" }
                div {
                    h4 { "{testimonial.name}" }
                    p { "{testimonial.role}" }
                }
            }
            div { class: "stars", aria_label: "{testimonial.rating} out of 5",
                for star in 0..testimonial.rating {
                    Glyph { key: "{star}", icon: Icon::Star }
                }
            }
            p { class: "testimonial-quote", "“{testimonial.quote}”" }
        }
    }
}

// wide screens show every card; narrow ones show the active card with prev/next controls
#[derive(Clone, PartialEq, Props)]
pub struct TestimonialsProps {
    content: TestimonialsContent,
}

#[component]
pub fn Testimonials(props: TestimonialsProps) -> Element {
    let testimonials = props.content;
    let mut carousel = use_signal(|| Carousel::new(testimonials.items.len()));

    let (active, count) = {
        let carousel = carousel.read();
        if carousel.is_empty() {
            return rsx! {};
        }
        (carousel.index(), carousel.len())
    };

    rsx! {
        section { id: "{testimonials.anchor}", class: "section-padding surface-muted",
            div { class: "container-custom",
                SectionIntro { title: testimonials.title.clone(), subtitle: testimonials.subtitle.clone() }

                div { class: "testimonial-grid",
                    for (index, testimonial) in testimonials.items.iter().enumerate() {
                        TestimonialCard {
                            key: "{testimonial.id}",
                            testimonial: testimonial.clone(),
                            active: index == active,
                        }
                    }
                }

                if count > 1 {
                    div { class: "carousel-controls",
                        button {
                            class: "pill",
                            aria_label: "Previous testimonial",
                            onclick: move |_| carousel.write().prev(),
                            Svg { paths: CHEVRON_LEFT }
                        }
                        for index in 0..count {
                            button {
                                key: "{index}",
                                class: if index == active { "carousel-dot active" } else { "carousel-dot" },
                                aria_label: format!("Show testimonial {}", index + 1),
                                onclick: move |_| carousel.write().go_to(index),
                            }
                        }
                        button {
                            class: "pill",
                            aria_label: "Next testimonial",
                            onclick: move |_| carousel.write().next(),
                            Svg { paths: CHEVRON_RIGHT }
                        }
                    }
                }
            }
        }
    }
}
