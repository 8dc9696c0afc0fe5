use std::{collections::HashSet, fmt};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::{
    countdown::Countdown,
    gallery::{Categorized, Category, CategoryId, GalleryItem},
    tokens::DesignTokens,
};

const PORTFOLIO_DOC: &str = include_str!("../content/portfolio.toml");
const SNEAKERS_DOC: &str = include_str!("../content/sneakers.toml");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteVariant {
    Portfolio,
    Sneakers,
}

impl SiteVariant {
    pub fn document(self) -> &'static str {
        match self {
            SiteVariant::Portfolio => PORTFOLIO_DOC,
            SiteVariant::Sneakers => SNEAKERS_DOC,
        }
    }
}

impl fmt::Display for SiteVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SiteVariant::Portfolio => "portfolio",
            SiteVariant::Sneakers => "sneakers",
        };
        write!(f, "{}", name)
    }
}

// page sections, rendered in the order the document lists them between the header and the footer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Hero,
    Gallery,
    Products,
    About,
    Features,
    Services,
    LimitedEdition,
    Testimonials,
    Contact,
    Newsletter,
    ValueProps,
}

// inline svg glyphs available to the content documents
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Camera,
    Mail,
    Phone,
    MapPin,
    Instagram,
    Facebook,
    Twitter,
    Star,
    Truck,
    Shield,
    Refresh,
    Award,
    Feather,
    Zap,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: Icon,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Brand {
    // rendered heavier than the rest of the name, e.g. "Photography" in "Photography Portfolio"
    pub emphasis: String,
    pub name: String,
    pub blurb: String,
}

impl Brand {
    pub fn full_name(&self) -> String {
        if self.name.is_empty() {
            self.emphasis.clone()
        } else {
            format!("{} {}", self.emphasis, self.name)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct HeroContent {
    pub headline: String,
    pub subline: String,
    pub image_url: String,
    pub image_alt: String,
    pub primary: Link,
    pub secondary: Option<Link>,
    pub scroll_cue: Option<Link>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GalleryContent {
    pub anchor: String,
    pub title: String,
    pub subtitle: String,
    pub categories: Vec<Category>,
    pub items: Vec<GalleryItem>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Swatch {
    pub name: String,
    pub hex: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Product {
    pub id: u32,
    pub category: CategoryId,
    pub name: String,
    pub tagline: String,
    pub price: String,
    pub image_url: String,
    pub badge: Option<String>,
    pub colors: Vec<Swatch>,
}

impl Categorized for Product {
    fn category(&self) -> &CategoryId {
        &self.category
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ProductsContent {
    pub anchor: String,
    pub title: String,
    pub subtitle: String,
    pub cart_label: String,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BulletList {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AboutContent {
    pub anchor: String,
    pub title: String,
    pub image_url: String,
    pub image_alt: String,
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub lists: Vec<BulletList>,
    pub cta: Option<Link>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct IconCard {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

// services, product features and value props all share this shape
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CardGrid {
    pub anchor: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[serde(default)]
    pub dark: bool,
    pub cards: Vec<IconCard>,
    pub closing: Option<String>,
    pub cta: Option<Link>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct LimitedEditionContent {
    pub anchor: String,
    pub eyebrow: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub image_alt: String,
    pub price: String,
    pub countdown: Countdown,
    pub cta: Link,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub image_url: String,
    pub quote: String,
    pub rating: u8,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TestimonialsContent {
    pub anchor: String,
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Testimonial>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ContactLine {
    pub icon: Icon,
    pub label: String,
    pub lines: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ContactContent {
    pub anchor: String,
    pub title: String,
    pub subtitle: String,
    pub service_prompt: String,
    pub services: Vec<SelectOption>,
    pub submit_label: String,
    pub info_title: String,
    pub info: Vec<ContactLine>,
    pub social_title: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct NewsletterContent {
    pub anchor: String,
    pub title: String,
    pub subtitle: String,
    pub placeholder: String,
    pub button_label: String,
    pub fine_print: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct LinkColumn {
    pub title: String,
    pub links: Vec<Link>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FooterContent {
    pub columns: Vec<LinkColumn>,
    pub contact_title: String,
    pub contact: Vec<ContactLine>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    pub rights: String,
}

// a whole site: copy, images, category lists, and design tokens
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SiteContent {
    pub variant: SiteVariant,
    pub brand: Brand,
    pub nav: Vec<Link>,
    pub sections: Vec<SectionKind>,
    pub hero: HeroContent,
    pub gallery: Option<GalleryContent>,
    pub products: Option<ProductsContent>,
    pub about: Option<AboutContent>,
    pub features: Option<CardGrid>,
    pub services: Option<CardGrid>,
    pub limited_edition: Option<LimitedEditionContent>,
    pub testimonials: Option<TestimonialsContent>,
    pub contact: Option<ContactContent>,
    pub newsletter: Option<NewsletterContent>,
    pub value_props: Option<CardGrid>,
    pub footer: FooterContent,
    pub tokens: DesignTokens,
}

// the site table lives under a [site] root so the document can grow other tables later
#[derive(Debug, Deserialize, Serialize)]
struct ContentFile {
    site: SiteContent,
}

impl SiteContent {
    pub fn has_section(&self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::Hero => true,
            SectionKind::Gallery => self.gallery.is_some(),
            SectionKind::Products => self.products.is_some(),
            SectionKind::About => self.about.is_some(),
            SectionKind::Features => self.features.is_some(),
            SectionKind::Services => self.services.is_some(),
            SectionKind::LimitedEdition => self.limited_edition.is_some(),
            SectionKind::Testimonials => self.testimonials.is_some(),
            SectionKind::Contact => self.contact.is_some(),
            SectionKind::Newsletter => self.newsletter.is_some(),
            SectionKind::ValueProps => self.value_props.is_some(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for kind in self.sections.iter() {
            if !seen.insert(*kind) {
                bail!("section {kind:?} is listed more than once");
            }
            if !self.has_section(*kind) {
                bail!("section {kind:?} is listed but has no content");
            }
        }

        if let Some(gallery) = &self.gallery {
            validate_categories(&gallery.categories, &gallery.items)
                .context("invalid gallery")?;
        }

        if let Some(products) = &self.products {
            validate_categories(&products.categories, &products.products)
                .context("invalid product list")?;

            for product in products.products.iter() {
                if product.colors.is_empty() {
                    bail!("product '{}' has no color swatches", product.name);
                }
            }
        }

        if let Some(limited) = &self.limited_edition {
            limited
                .countdown
                .validate()
                .context("invalid limited edition countdown")?;
        }

        if let Some(testimonials) = &self.testimonials {
            for testimonial in testimonials.items.iter() {
                if !(1..=5).contains(&testimonial.rating) {
                    bail!(
                        "testimonial from '{}' has rating {}, expected 1-5",
                        testimonial.name,
                        testimonial.rating
                    );
                }
            }
        }

        self.tokens.validate().context("invalid design tokens")?;

        Ok(())
    }
}

// every filter list needs `all` and unique ids; every item must sit in one of the real categories
fn validate_categories<T: Categorized>(categories: &[Category], items: &[T]) -> Result<()> {
    let mut ids = HashSet::new();
    for category in categories.iter() {
        if !ids.insert(&category.id) {
            bail!("category '{}' is listed more than once", category.id);
        }
    }

    if !ids.contains(&CategoryId::all()) {
        bail!("category list must include 'all'");
    }

    for item in items.iter() {
        let category = item.category();
        if category.is_all() || !ids.contains(category) {
            bail!("item uses unknown category '{category}'");
        }
    }

    Ok(())
}

pub fn parse(doc: &str) -> Result<SiteContent> {
    let file: ContentFile = toml::from_str(doc).context("failed to parse site content")?;

    file.site.validate()?;
    Ok(file.site)
}

#[instrument(level=Level::DEBUG)]
pub fn load(variant: SiteVariant) -> Result<SiteContent> {
    debug!("loading bundled site content");

    load_document(variant, variant.document())
}

// parse a document that is expected to describe `variant`
fn load_document(variant: SiteVariant, doc: &str) -> Result<SiteContent> {
    let content = parse(doc).with_context(|| format!("bundled {variant} content"))?;

    if content.variant != variant {
        bail!(
            "bundled {variant} content declares itself as {}",
            content.variant
        );
    }

    debug!(sections = content.sections.len(), "site content ready");
    Ok(content)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const MINIMAL: &str = r##"
[site]
variant = "portfolio"
sections = ["hero", "gallery"]
nav = [{ label = "Home", href = "#" }]

[site.brand]
emphasis = "Photography"
name = "Portfolio"
blurb = "Moments."

[site.hero]
headline = "Capturing moments"
subline = "Professional photography"
image_url = "https://images.example/hero"
image_alt = "seascape"
primary = { label = "View Portfolio", href = "#portfolio" }

[site.gallery]
anchor = "portfolio"
title = "Portfolio"
subtitle = "Work"
categories = [
  { id = "all", name = "All Work" },
  { id = "portrait", name = "Portrait" },
]
items = [
  { id = 1, category = "portrait", image_url = "https://images.example/1", title = "One", description = "Portrait, 2023" },
]

[site.footer]
columns = []
contact_title = "Contact"
contact = []
rights = "All rights reserved."

[site.tokens.palette.photo]
black = "#111111"
accent = "#C8A97E"
white = "#FFFFFF"

[site.tokens.roles]
ink = "photo.black"
accent = "photo.accent"
surface = "photo.white"
muted = "photo.white"
raised = "photo.black"
text = "photo.black"
text-muted = "photo.black"
text-inverse = "photo.white"

[site.tokens.keyframes]
fadeIn = [{ at = "0%", style = "opacity: 0;" }, { at = "100%", style = "opacity: 1;" }]
slideUp = [{ at = "0%", style = "opacity: 0;" }, { at = "100%", style = "opacity: 1;" }]

[site.tokens.animations]
fade-in = { keyframes = "fadeIn", duration = "1.2s" }
fade-in-slow = { keyframes = "fadeIn", duration = "2s" }
slide-up = { keyframes = "slideUp", duration = "0.8s" }
slide-left = { keyframes = "slideUp", duration = "0.8s" }
"##;

    #[test]
    fn minimal_document_parses() {
        let content = parse(MINIMAL).unwrap();

        assert_eq!(content.variant, SiteVariant::Portfolio);
        assert_eq!(content.sections, vec![SectionKind::Hero, SectionKind::Gallery]);
        assert_eq!(content.brand.full_name(), "Photography Portfolio");
        assert!(content.products.is_none());
    }

    #[test]
    fn listed_section_without_content_is_rejected() {
        let doc = MINIMAL.replace(
            r#"sections = ["hero", "gallery"]"#,
            r#"sections = ["hero", "gallery", "testimonials"]"#,
        );

        let err = parse(&doc).unwrap_err();
        assert!(err.to_string().contains("Testimonials"));
    }

    #[test]
    fn duplicate_sections_are_rejected() {
        let doc = MINIMAL.replace(
            r#"sections = ["hero", "gallery"]"#,
            r#"sections = ["hero", "gallery", "hero"]"#,
        );

        assert!(parse(&doc).is_err());
    }

    #[test]
    fn unknown_item_category_is_rejected() {
        let doc = MINIMAL.replace(r#"category = "portrait""#, r#"category = "macro""#);

        let err = parse(&doc).unwrap_err();
        assert_eq!(format!("{err:#}"), "invalid gallery: item uses unknown category 'macro'");
    }

    #[test]
    fn category_list_needs_all() {
        let doc = MINIMAL.replace(r#"{ id = "all", name = "All Work" },"#, "");

        assert!(parse(&doc).is_err());
    }

    #[test]
    fn unknown_section_name_fails_to_parse() {
        let doc = MINIMAL.replace(r#""gallery"]"#, r#""pricing"]"#);

        let err = parse(&doc).unwrap_err();
        assert!(err.to_string().contains("failed to parse site content"));
    }

    #[test]
    fn duplicate_category_ids_are_rejected() {
        let doc = SiteVariant::Sneakers.document().replace(
            r#"{ id = "lifestyle", name = "Lifestyle" },"#,
            r#"{ id = "retro", name = "Lifestyle" },"#,
        );

        let err = parse(&doc).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "invalid product list: category 'retro' is listed more than once"
        );
    }

    #[test]
    fn product_without_swatches_is_rejected() {
        let doc = SiteVariant::Sneakers.document().replace(
            "colors = [\n  { name = \"Bred\", hex = \"#000000\" },\n  { name = \"Cement\", hex = \"#9E9E9E\" },\n]",
            "colors = []",
        );

        let err = parse(&doc).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "product 'Flight Elite' has no color swatches"
        );
    }

    #[test]
    fn out_of_range_countdown_is_rejected() {
        let doc = SiteVariant::Sneakers.document().replace("hours = 14", "hours = 24");

        let err = parse(&doc).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "invalid limited edition countdown: countdown hours must be within 0-23, got 24"
        );
    }

    #[test]
    fn rating_outside_one_to_five_is_rejected() {
        let doc = SiteVariant::Sneakers
            .document()
            .replacen("rating = 5", "rating = 6", 1);

        let err = parse(&doc).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "testimonial from 'Marcus Lee' has rating 6, expected 1-5"
        );

        let doc = SiteVariant::Sneakers
            .document()
            .replacen("rating = 5", "rating = 0", 1);
        assert!(parse(&doc).is_err());
    }

    #[test]
    fn document_for_another_variant_is_rejected() {
        let err = load_document(SiteVariant::Sneakers, MINIMAL).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "bundled sneakers content declares itself as portfolio"
        );

        assert!(load_document(SiteVariant::Portfolio, MINIMAL).is_ok());
    }

    #[test]
    fn variant_display_matches_serde_name() {
        assert_eq!(SiteVariant::Sneakers.to_string(), "sneakers");
        assert_eq!(SiteVariant::Portfolio.to_string(), "portfolio");
    }
}
