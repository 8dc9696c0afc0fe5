use dioxus::prelude::*;

use showcase_common::content::Icon;

// stroke paths on a 24x24 grid
pub const MENU: &[&str] = &["M3 12h18", "M3 6h18", "M3 18h18"];
pub const CLOSE: &[&str] = &["M18 6L6 18", "M6 6l12 12"];
pub const CHEVRON_LEFT: &[&str] = &["M15 18l-6-6 6-6"];
pub const CHEVRON_RIGHT: &[&str] = &["M9 18l6-6-6-6"];

fn icon_paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::Camera => &[
            "M23 19a2 2 0 0 1-2 2H3a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h4l2-3h6l2 3h4a2 2 0 0 1 2 2z",
            "M16 13a4 4 0 1 1-8 0a4 4 0 1 1 8 0z",
        ],
        Icon::Mail => &[
            "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
            "M22 6l-10 7L2 6",
        ],
        Icon::Phone => &[
            "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
        ],
        Icon::MapPin => &[
            "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z",
            "M15 10a3 3 0 1 1-6 0a3 3 0 1 1 6 0z",
        ],
        Icon::Instagram => &[
            "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
            "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
            "M17.5 6.5h.01",
        ],
        Icon::Facebook => &["M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"],
        Icon::Twitter => &[
            "M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z",
        ],
        Icon::Star => &[
            "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
        ],
        Icon::Truck => &[
            "M1 3h15v13H1z",
            "M16 8h4l3 3v5h-7V8z",
            "M8 18.5a2.5 2.5 0 1 1-5 0a2.5 2.5 0 1 1 5 0z",
            "M21 18.5a2.5 2.5 0 1 1-5 0a2.5 2.5 0 1 1 5 0z",
        ],
        Icon::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
        Icon::Refresh => &[
            "M23 4v6h-6",
            "M1 20v-6h6",
            "M3.51 9a9 9 0 0 1 14.85-3.36L23 10M1 14l4.64 4.36A9 9 0 0 0 20.49 15",
        ],
        Icon::Award => &[
            "M19 8a7 7 0 1 1-14 0a7 7 0 1 1 14 0z",
            "M8.21 13.89L7 23l5-3 5 3-1.21-9.12",
        ],
        Icon::Feather => &[
            "M20.24 12.24a6 6 0 0 0-8.49-8.49L5 10.5V19h8.5z",
            "M16 8L2 22",
            "M17.5 15H9",
        ],
        Icon::Zap => &["M13 2L3 14h9l-1 8 10-12h-9l1-8z"],
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SvgProps {
    paths: &'static [&'static str],
    #[props(default = String::from("icon"), into)]
    class: String,
}

#[component]
pub fn Svg(props: SvgProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for d in props.paths.iter() {
                path { d: *d }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct GlyphProps {
    icon: Icon,
    #[props(default = String::from("icon"), into)]
    class: String,
}

#[component]
pub fn Glyph(props: GlyphProps) -> Element {
    rsx! {
        Svg { paths: icon_paths(props.icon), class: props.class }
    }
}
