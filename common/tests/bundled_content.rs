use pretty_assertions::assert_eq;

use showcase_common::{
    content::{self, SectionKind, SiteVariant},
    gallery::{CategoryFilter, CategoryId},
    selection::SwatchPicker,
};

#[test]
fn portfolio_document_loads() {
    let site = content::load(SiteVariant::Portfolio).unwrap();

    assert_eq!(site.variant, SiteVariant::Portfolio);
    assert_eq!(
        site.sections,
        vec![
            SectionKind::Hero,
            SectionKind::Gallery,
            SectionKind::About,
            SectionKind::Services,
            SectionKind::Testimonials,
            SectionKind::Contact,
        ]
    );

    let gallery = site.gallery.unwrap();
    let ids: Vec<&str> = gallery.categories.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["all", "portrait", "landscape", "architecture", "street"]);
    assert_eq!(gallery.items.len(), 6);
}

#[test]
fn sneaker_document_loads() {
    let site = content::load(SiteVariant::Sneakers).unwrap();

    assert_eq!(site.variant, SiteVariant::Sneakers);
    assert!(site.gallery.is_none());
    assert!(site.sections.contains(&SectionKind::LimitedEdition));

    let limited = site.limited_edition.unwrap();
    assert!(!limited.countdown.is_zero());

    assert_eq!(site.tokens.resolve("jordan.red"), Some("#CE1141"));
}

#[test]
fn every_listed_section_has_content() {
    for variant in [SiteVariant::Portfolio, SiteVariant::Sneakers] {
        let site = content::load(variant).unwrap();

        for kind in site.sections.iter() {
            assert!(site.has_section(*kind), "{variant}: {kind:?}");
        }
    }
}

#[test]
fn portfolio_filter_walkthrough() {
    let gallery = content::load(SiteVariant::Portfolio).unwrap().gallery.unwrap();
    let mut filter = CategoryFilter::new(&gallery.categories);

    let titles = |filter: &CategoryFilter| -> Vec<String> {
        filter
            .apply(&gallery.items)
            .iter()
            .map(|item| item.title.clone())
            .collect()
    };

    assert_eq!(titles(&filter).len(), 6);

    filter.select(&CategoryId::from("street")).unwrap();
    assert_eq!(titles(&filter), vec!["London Calling", "Rainy Day in NYC"]);

    filter.select(&CategoryId::from("architecture")).unwrap();
    assert_eq!(titles(&filter), vec!["Timeless Structures", "Geometric Patterns"]);

    filter.select(&CategoryId::all()).unwrap();
    assert_eq!(titles(&filter).len(), 6);
}

#[test]
fn sneaker_products_filter_and_pick_colors() {
    let products = content::load(SiteVariant::Sneakers).unwrap().products.unwrap();
    let mut filter = CategoryFilter::new(&products.categories);

    filter.select(&CategoryId::from("retro")).unwrap();
    let retro: Vec<u32> = filter.apply(&products.products).iter().map(|p| p.id).collect();
    assert_eq!(retro, vec![1, 4]);

    let first = &products.products[0];
    let mut picker = SwatchPicker::new(first.colors.len());
    assert!(picker.select(first.colors.len() - 1));
    assert!(!picker.select(first.colors.len()));
    assert_eq!(first.colors[picker.selected()].name, "Royal");
}

#[test]
fn token_stylesheets_cover_roles() {
    for variant in [SiteVariant::Portfolio, SiteVariant::Sneakers] {
        let css = content::load(variant).unwrap().tokens.to_css();

        for role in ["ink", "accent", "surface", "muted", "raised", "text", "text-muted"] {
            assert!(css.contains(&format!("--role-{role}:")), "{variant}: {role}");
        }
        assert!(css.contains(".animate-slide-up"));
    }
}
