use dioxus::prelude::*;

use showcase_common::{
    content::{Product, ProductsContent},
    gallery::CategoryFilter,
    selection::SwatchPicker,
};

use crate::{components::intro::SectionIntro, sections::gallery::FilterBar};

#[derive(Clone, PartialEq, Props)]
struct ProductCardProps {
    product: Product,
    cart_label: String,
}

#[component]
fn ProductCard(props: ProductCardProps) -> Element {
    let product = props.product;
    let swatch_count = product.colors.len();
    let mut picker = use_signal(move || SwatchPicker::new(swatch_count));

    let selected = picker.read().selected();
    let colorway = product
        .colors
        .get(selected)
        .map(|swatch| swatch.name.clone())
        .unwrap_or_default();

    rsx! {
        article { class: "product-card",
            if let Some(badge) = product.badge.clone() {
                span { class: "product-badge", "{badge}" }
            }
            img { src: "{product.image_url}", alt: "{product.name}" }

            div { class: "product-body",
                div { class: "product-head",
                    h3 { "{product.name}" }
                    strong { "{product.price}" }
                }
                p { class: "product-colorway", "{product.tagline} · {colorway}" }

                div { class: "swatches",
                    for (index, swatch) in product.colors.iter().enumerate() {
                        button {
                            key: "{swatch.name}",
                            class: if index == selected { "swatch active" } else { "swatch" },
                            style: "background-color: {swatch.hex};",
                            title: "{swatch.name}",
                            aria_label: "{swatch.name}",
                            onclick: move |_| {
                                picker.write().select(index);
                            },
                        }
                    }
                }

                // no cart behind this yet
                button { class: "btn btn-primary btn-block", r#type: "button", "{props.cart_label}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ProductsProps {
    content: ProductsContent,
}

#[component]
pub fn Products(props: ProductsProps) -> Element {
    let products = props.content;
    let categories = products.categories.clone();
    let filter = use_signal(move || CategoryFilter::new(&categories));

    let current = filter.read();
    let visible: Vec<Product> = current
        .apply(&products.products)
        .into_iter()
        .cloned()
        .collect();
    let generation = current.generation();
    let stage_class = current.stage_class();
    drop(current);

    rsx! {
        section { id: "{products.anchor}", class: "section-padding",
            div { class: "container-custom",
                SectionIntro { title: products.title.clone(), subtitle: products.subtitle.clone() }
                FilterBar { categories: products.categories.clone(), filter }

                // keyed on the selection generation so the fade replays on every click
                for generation in std::iter::once(generation) {
                    div { key: "{generation}", class: "product-grid {stage_class}",
                        for product in visible.iter() {
                            ProductCard {
                                key: "{product.id}",
                                product: product.clone(),
                                cart_label: products.cart_label.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}
