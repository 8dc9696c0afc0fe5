use dioxus::prelude::*;

use showcase_common::{
    content::{Brand, Link},
    nav::MobileMenu,
};

use crate::{
    common::listener::use_header_variant,
    components::{
        anchor::Anchor,
        icon::{CLOSE, MENU, Svg},
    },
};

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    brand: Brand,
    links: Vec<Link>,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let variant = use_header_variant();
    let mut menu = use_signal(MobileMenu::default);

    let toggle_paths = if menu.read().is_open() { CLOSE } else { MENU };

    rsx! {
        header { class: variant().class(),
            div { class: "container-custom header-bar",
                Anchor { href: "#", class: "brand",
                    strong { "{props.brand.emphasis}" }
                    " {props.brand.name}"
                }

                nav {
                    ul { class: "header-links",
                        for link in props.links.iter() {
                            li { key: "{link.href}{link.label}",
                                Anchor { href: link.href.clone(), "{link.label}" }
                            }
                        }
                    }
                }

                button {
                    class: "menu-toggle",
                    aria_label: "Toggle menu",
                    onclick: move |_| menu.write().toggle(),
                    Svg { paths: toggle_paths, class: "icon icon-lg" }
                }
            }
        }

        if menu.read().is_open() {
            div { class: "mobile-menu animate-fade-in",
                nav {
                    ul {
                        for link in props.links.iter() {
                            li { key: "{link.href}{link.label}",
                                Anchor {
                                    href: link.href.clone(),
                                    on_follow: move |_| menu.write().link_selected(),
                                    "{link.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
