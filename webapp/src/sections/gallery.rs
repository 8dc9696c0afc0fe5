use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::debug;

use showcase_common::{
    content::GalleryContent,
    gallery::{Category, CategoryFilter, GalleryItem, TRANSITION_MS},
};

use crate::components::intro::SectionIntro;

#[derive(Clone, PartialEq, Props)]
pub struct FilterBarProps {
    categories: Vec<Category>,
    filter: Signal<CategoryFilter>,
}

// one pill per category; every click, including on the active pill, restarts the fade
#[component]
pub fn FilterBar(props: FilterBarProps) -> Element {
    let mut filter = props.filter;

    rsx! {
        ul { class: "filter-bar",
            for category in props.categories.iter() {
                li { key: "{category.id}",
                    button {
                        class: if filter.read().is_active(&category.id) { "pill active" } else { "pill" },
                        onclick: {
                            let id = category.id.clone();
                            move |_| {
                                let selected = filter.write().select(&id);
                                if let Some(generation) = selected {
                                    debug!("selected category {id} (transition {generation})");
                                    spawn(async move {
                                        TimeoutFuture::new(TRANSITION_MS).await;
                                        filter.write().finish_transition(generation);
                                    });
                                }
                            }
                        },
                        "{category.name}"
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct MasonryTileProps {
    item: GalleryItem,
}

#[component]
fn MasonryTile(props: MasonryTileProps) -> Element {
    let item = props.item;

    rsx! {
        div { class: "masonry-tile",
            img { src: "{item.image_url}", alt: "{item.title}" }
            div { class: "tile-caption",
                h3 { "{item.title}" }
                p { "{item.description}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct GalleryProps {
    content: GalleryContent,
}

#[component]
pub fn Gallery(props: GalleryProps) -> Element {
    let gallery = props.content;
    let categories = gallery.categories.clone();
    let filter = use_signal(move || CategoryFilter::new(&categories));

    let current = filter.read();
    let visible: Vec<GalleryItem> = current.apply(&gallery.items).into_iter().cloned().collect();
    let generation = current.generation();
    let stage_class = current.stage_class();
    drop(current);

    rsx! {
        section { id: "{gallery.anchor}", class: "section-padding surface-muted",
            div { class: "container-custom",
                SectionIntro { title: gallery.title.clone(), subtitle: gallery.subtitle.clone() }
                FilterBar { categories: gallery.categories.clone(), filter }

                // keyed on the selection generation so the fade replays on every click
                for generation in std::iter::once(generation) {
                    div { key: "{generation}", class: stage_class,
                        div { class: "masonry",
                            for item in visible.iter() {
                                MasonryTile { key: "{item.id}", item: item.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}
