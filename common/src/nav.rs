// header and in-page navigation behavior

// scroll offset (px) at which the header switches to its solid variant
pub const SCROLL_THRESHOLD: f64 = 50.0;

// height (px) of the fixed header; anchor targets are scrolled to just below it
pub const HEADER_HEIGHT: f64 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderVariant {
    // overlaid on the hero image
    Transparent,
    // opaque bar once the page has moved
    Solid,
}

impl HeaderVariant {
    // inclusive boundary: 49px is still transparent, 50px is solid
    pub fn for_scroll(offset: f64) -> Self {
        if offset >= SCROLL_THRESHOLD {
            HeaderVariant::Solid
        } else {
            HeaderVariant::Transparent
        }
    }

    pub fn class(self) -> &'static str {
        if self.is_solid() {
            "site-header solid"
        } else {
            "site-header transparent"
        }
    }

    pub fn is_solid(self) -> bool {
        self == HeaderVariant::Solid
    }
}

// the element id a same-page link points at
//
// only hrefs of the form `#id` qualify; a bare `#`, an empty string, and anything pointing at
// another document are left to the browser
pub fn anchor_id(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

// absolute page offset to scroll to for an element whose viewport-relative top is `element_top`
pub fn scroll_target(element_top: f64, current_scroll: f64) -> f64 {
    element_top + current_scroll - HEADER_HEIGHT
}

// open/closed state of the full-screen mobile menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    // any link inside the menu closes it
    pub fn link_selected(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_boundary_is_inclusive() {
        assert_eq!(HeaderVariant::for_scroll(0.0), HeaderVariant::Transparent);
        assert_eq!(HeaderVariant::for_scroll(49.0), HeaderVariant::Transparent);
        assert_eq!(HeaderVariant::for_scroll(49.9), HeaderVariant::Transparent);
        assert_eq!(HeaderVariant::for_scroll(50.0), HeaderVariant::Solid);
        assert_eq!(HeaderVariant::for_scroll(1200.0), HeaderVariant::Solid);
    }

    #[test]
    fn header_class_matches_variant() {
        assert_eq!(HeaderVariant::for_scroll(10.0).class(), "site-header transparent");
        assert_eq!(HeaderVariant::for_scroll(50.0).class(), "site-header solid");
    }

    #[test]
    fn header_variant_follows_scroll_back_up() {
        let path = [0.0, 60.0, 120.0, 40.0];
        let variants: Vec<bool> = path
            .iter()
            .map(|y| HeaderVariant::for_scroll(*y).is_solid())
            .collect();

        assert_eq!(variants, vec![false, true, true, false]);
    }

    #[test]
    fn bare_hash_is_not_an_anchor() {
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id(""), None);
        assert_eq!(anchor_id("https://example.com/#portfolio"), None);
        assert_eq!(anchor_id("/sneakers"), None);
    }

    #[test]
    fn hash_links_resolve_to_ids() {
        assert_eq!(anchor_id("#portfolio"), Some("portfolio"));
        assert_eq!(anchor_id("#contact"), Some("contact"));
    }

    #[test]
    fn target_accounts_for_scroll_and_header() {
        assert_eq!(scroll_target(600.0, 0.0), 520.0);
        assert_eq!(scroll_target(-200.0, 1500.0), 1220.0);
    }

    #[test]
    fn menu_starts_closed_and_link_closes_it() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open());

        menu.link_selected();
        assert!(!menu.is_open());

        menu.link_selected();
        assert!(!menu.is_open());

        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
    }
}
