use std::fmt;

use serde::{Deserialize, Serialize};

// the reserved category that matches every item
pub const ALL: &str = "all";

// length of the cross-fade that runs after each category click, in milliseconds
pub const TRANSITION_MS: u32 = 500;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn all() -> Self {
        CategoryId(String::from(ALL))
    }

    pub fn is_all(&self) -> bool {
        self.0 == ALL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        CategoryId(value.to_owned())
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// a filter button: the id is matched against items, the name is shown to the visitor
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GalleryItem {
    pub id: u32,
    pub category: CategoryId,
    pub image_url: String,
    pub title: String,
    pub description: String,
}

// anything that can be shown in a filterable grid
pub trait Categorized {
    fn category(&self) -> &CategoryId;
}

impl Categorized for GalleryItem {
    fn category(&self) -> &CategoryId {
        &self.category
    }
}

// stable filter over the source list
//
// `all` passes everything through untouched; any other id keeps the items with exactly that
// category in their original relative order
pub fn filter_items<'a, T: Categorized>(items: &'a [T], active: &CategoryId) -> Vec<&'a T> {
    if active.is_all() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| item.category() == active)
        .collect()
}

// category filter state
//
// the active id is always one of the configured categories.  every accepted selection, including
// a repeat of the current one, starts a new transition and bumps the generation counter; only the
// timer holding the latest generation may end the transition, so an early timer from a previous
// click cannot cut a later fade short.  selections are never refused because a transition is
// running.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryFilter {
    categories: Vec<CategoryId>,
    active: CategoryId,
    generation: u64,
    transitioning: bool,
}

impl CategoryFilter {
    pub fn new(categories: &[Category]) -> Self {
        let mut ids: Vec<CategoryId> = categories.iter().map(|c| c.id.clone()).collect();

        if !ids.iter().any(CategoryId::is_all) {
            ids.insert(0, CategoryId::all());
        }

        CategoryFilter {
            categories: ids,
            active: CategoryId::all(),
            generation: 0,
            transitioning: false,
        }
    }

    pub fn active(&self) -> &CategoryId {
        &self.active
    }

    pub fn is_active(&self, id: &CategoryId) -> bool {
        &self.active == id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    // classes for the container that holds the filtered grid
    pub fn stage_class(&self) -> &'static str {
        if self.transitioning {
            "filter-stage transitioning"
        } else {
            "filter-stage"
        }
    }

    // returns the generation the caller must hand back to finish_transition(), or None if the
    // id is not one of the configured categories (in which case nothing changes)
    pub fn select(&mut self, id: &CategoryId) -> Option<u64> {
        if !self.categories.contains(id) {
            return None;
        }

        self.active = id.clone();
        self.generation += 1;
        self.transitioning = true;

        Some(self.generation)
    }

    pub fn finish_transition(&mut self, generation: u64) {
        if generation == self.generation {
            self.transitioning = false;
        }
    }

    pub fn apply<'a, T: Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        filter_items(items, &self.active)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn item(id: u32, category: &str) -> GalleryItem {
        GalleryItem {
            id,
            category: CategoryId::from(category),
            image_url: format!("https://images.example/{id}"),
            title: format!("item {id}"),
            description: String::new(),
        }
    }

    fn categories() -> Vec<Category> {
        ["all", "portrait", "landscape", "architecture", "street"]
            .iter()
            .map(|id| Category {
                id: CategoryId::from(*id),
                name: id.to_uppercase(),
            })
            .collect()
    }

    fn items() -> Vec<GalleryItem> {
        vec![
            item(1, "portrait"),
            item(2, "architecture"),
            item(3, "architecture"),
            item(4, "street"),
            item(5, "street"),
            item(6, "landscape"),
        ]
    }

    fn ids(items: &[&GalleryItem]) -> Vec<u32> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn all_returns_every_item_in_order() {
        let items = items();
        assert_eq!(ids(&filter_items(&items, &CategoryId::all())), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn each_category_keeps_matching_items_in_order() {
        let items = items();

        for category in categories().iter().filter(|c| !c.id.is_all()) {
            let expected: Vec<u32> = items
                .iter()
                .filter(|item| item.category == category.id)
                .map(|item| item.id)
                .collect();

            assert_eq!(ids(&filter_items(&items, &category.id)), expected);
        }

        assert_eq!(ids(&filter_items(&items, &"street".into())), vec![4, 5]);
        assert_eq!(ids(&filter_items(&items, &"architecture".into())), vec![2, 3]);
    }

    #[test]
    fn empty_category_yields_nothing() {
        let items = vec![item(1, "portrait")];
        assert!(filter_items(&items, &"street".into()).is_empty());
    }

    #[test]
    fn filter_starts_on_all() {
        let filter = CategoryFilter::new(&categories());

        assert!(filter.active().is_all());
        assert!(!filter.is_transitioning());
        assert_eq!(filter.apply(&items()).len(), 6);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut filter = CategoryFilter::new(&categories());

        assert_eq!(filter.select(&"macro".into()), None);
        assert!(filter.active().is_all());
        assert_eq!(filter.generation(), 0);
        assert!(!filter.is_transitioning());
    }

    #[test]
    fn reselecting_restarts_the_transition() {
        let mut filter = CategoryFilter::new(&categories());

        let first = filter.select(&"street".into()).unwrap();
        filter.finish_transition(first);
        assert!(!filter.is_transitioning());

        let second = filter.select(&"street".into()).unwrap();
        assert!(second > first);
        assert!(filter.is_transitioning());
        assert_eq!(filter.active(), &CategoryId::from("street"));
    }

    #[test]
    fn stale_timer_does_not_end_a_newer_transition() {
        let mut filter = CategoryFilter::new(&categories());

        let first = filter.select(&"portrait".into()).unwrap();
        let second = filter.select(&"landscape".into()).unwrap();

        filter.finish_transition(first);
        assert!(filter.is_transitioning());
        assert_eq!(filter.active(), &CategoryId::from("landscape"));

        filter.finish_transition(second);
        assert!(!filter.is_transitioning());
    }

    #[test]
    fn stage_class_tracks_the_transition() {
        let mut filter = CategoryFilter::new(&categories());
        assert_eq!(filter.stage_class(), "filter-stage");

        let generation = filter.select(&"portrait".into()).unwrap();
        assert_eq!(filter.stage_class(), "filter-stage transitioning");

        filter.finish_transition(generation);
        assert_eq!(filter.stage_class(), "filter-stage");
    }

    #[test]
    fn all_is_implied_when_missing_from_the_list() {
        let mut filter = CategoryFilter::new(&categories()[1..]);

        assert!(filter.select(&"portrait".into()).is_some());
        assert!(filter.select(&CategoryId::all()).is_some());
        assert!(filter.active().is_all());
    }
}
