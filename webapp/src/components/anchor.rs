use dioxus::prelude::*;

use showcase_common::nav::anchor_id;

use crate::common::scroll::scroll_to_anchor;

#[derive(Clone, PartialEq, Props)]
pub struct AnchorProps {
    #[props(into)]
    href: String,
    #[props(default, into)]
    class: String,
    // fired after the click has been handled, e.g. to close the mobile menu
    on_follow: Option<EventHandler<()>>,
    children: Element,
}

// same-page link with smooth scrolling
//
// `#id` links cancel the default jump and scroll to just below the fixed header; a bare `#` and
// external hrefs keep the browser's default behavior
#[component]
pub fn Anchor(props: AnchorProps) -> Element {
    let href = props.href.clone();
    let on_follow = props.on_follow;

    rsx! {
        a {
            href: "{props.href}",
            class: "{props.class}",
            onclick: move |event: MouseEvent| {
                if anchor_id(&href).is_some() {
                    event.prevent_default();
                    scroll_to_anchor(&href);
                }
                if let Some(handler) = on_follow {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}
