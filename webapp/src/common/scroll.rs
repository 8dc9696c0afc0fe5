use tracing::debug;
use web_sys::{ScrollBehavior, ScrollToOptions};

use showcase_common::nav::{anchor_id, scroll_target};

// smooth-scroll to the element a same-page link points at, leaving room for the fixed header
//
// returns false without touching the page when the href is not an in-page anchor or when the
// element does not exist
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(id) = anchor_id(href) else {
        return false;
    };

    let Some(window) = web_sys::window() else {
        return false;
    };

    let Some(element) = window
        .document()
        .and_then(|document| document.get_element_by_id(id))
    else {
        debug!("no element with id '{id}' to scroll to");
        return false;
    };

    let top = element.get_bounding_client_rect().top();
    let current = window.scroll_y().unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(scroll_target(top, current));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);

    true
}
