use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::consts::{
    ALL_CATEGORIES, ASSET_CARD_SELECTOR, ASSET_CATEGORY_ATTR, ASSET_EMPTY_ID, ASSET_NAME_ATTR,
    ASSET_NOTE_SELECTOR, ASSET_SEARCH_ID, TAB_ACTIVE_CLASS, TAB_FILTER_ATTR, TAB_SELECTOR,
};
use crate::utils::{
    element_by_id, has_class, query, query_all, set_attribute, set_class, set_display,
};
use crate::Error;

/// The searchable content of an asset card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetCard {
    category: Option<String>,
    name: String,
    text: String,
}

impl AssetCard {
    pub fn new(category: Option<String>, name: &str, text: &str) -> Self {
        Self {
            category,
            name: name.to_lowercase(),
            text: text.to_lowercase(),
        }
    }
}

/// A category and free-text query. A card must match both to be shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetFilter {
    category: String,
    query: String,
}

impl AssetFilter {
    pub fn new(category: &str, query: &str) -> Self {
        Self {
            category: category.to_owned(),
            query: query.trim().to_lowercase(),
        }
    }

    pub fn matches(&self, card: &AssetCard) -> bool {
        let category = self.category == ALL_CATEGORIES
            || card.category.as_deref() == Some(self.category.as_str());

        let query = self.query.is_empty()
            || card.name.contains(&self.query)
            || card.text.contains(&self.query);

        category && query
    }
}

struct Gallery {
    cards: Vec<(Element, AssetCard)>,
    tabs: Vec<Element>,
    search: Option<HtmlInputElement>,
    empty: Option<Element>,
    note: Option<Element>,
}

impl Gallery {
    fn query(&self) -> String {
        self.search
            .as_ref()
            .map(|search| search.value())
            .unwrap_or_default()
    }

    fn active_category(&self) -> String {
        self.tabs
            .iter()
            .find(|tab| has_class(tab, TAB_ACTIVE_CLASS))
            .map(category_of)
            .unwrap_or_else(|| ALL_CATEGORIES.to_owned())
    }

    /// Shows the cards matching `category` and the current query. Returns the number of
    /// visible cards.
    fn apply(&self, category: &str) -> usize {
        let filter = AssetFilter::new(category, &self.query());

        let mut visible = 0;
        for (element, card) in &self.cards {
            if filter.matches(card) {
                set_display(element, "");
                visible += 1;
            } else {
                set_display(element, "none");
            }
        }

        if let Some(empty) = &self.empty {
            set_display(empty, if visible == 0 { "block" } else { "none" });
        }

        if let Some(note) = &self.note {
            set_display(note, if visible == 0 { "none" } else { "" });
        }

        log::debug!("Asset filter {:?}: {} visible", filter, visible);
        visible
    }

    fn select(&self, selected: &Element) {
        for tab in &self.tabs {
            let active = tab == selected;

            set_class(tab, TAB_ACTIVE_CLASS, active);
            set_attribute(tab, "aria-selected", if active { "true" } else { "false" });
        }

        self.apply(&category_of(selected));
    }
}

/// Tabs without a filter show everything.
fn category_of(tab: &Element) -> String {
    tab.get_attribute(TAB_FILTER_ATTR)
        .unwrap_or_else(|| ALL_CATEGORIES.to_owned())
}

/// The category tabs and search box above the asset grid.
///
/// The listeners are removed when the `AssetGallery` is dropped.
pub struct AssetGallery {
    gallery: Rc<Gallery>,
    _listeners: Vec<EventListener>,
}

impl AssetGallery {
    pub fn new() -> Result<Self, Error> {
        let tabs = query_all(TAB_SELECTOR);
        if tabs.is_empty() {
            return Err(Error::Empty("asset tabs"));
        }

        let cards: Vec<_> = query_all(ASSET_CARD_SELECTOR)
            .into_iter()
            .map(|element| {
                let card = AssetCard::new(
                    element.get_attribute(ASSET_CATEGORY_ATTR),
                    &element.get_attribute(ASSET_NAME_ATTR).unwrap_or_default(),
                    &element.text_content().unwrap_or_default(),
                );

                (element, card)
            })
            .collect();
        if cards.is_empty() {
            return Err(Error::Empty("asset cards"));
        }

        let gallery = Rc::new(Gallery {
            cards,
            tabs,
            search: element_by_id(ASSET_SEARCH_ID)
                .ok()
                .and_then(|search| search.dyn_into::<HtmlInputElement>().ok()),
            empty: element_by_id(ASSET_EMPTY_ID).ok(),
            note: query(ASSET_NOTE_SELECTOR).ok(),
        });

        let mut listeners = Vec::with_capacity(gallery.tabs.len() + 1);

        for tab in &gallery.tabs {
            let state = gallery.clone();
            let selected = tab.clone();

            listeners.push(EventListener::new(tab, "click", move |_| {
                state.select(&selected);
            }));
        }

        if let Some(search) = &gallery.search {
            let state = gallery.clone();

            listeners.push(EventListener::new(search, "input", move |_| {
                state.apply(&state.active_category());
            }));
        }

        gallery.apply(&gallery.active_category());

        Ok(Self {
            gallery,
            _listeners: listeners,
        })
    }

    /// Re-applies the filter with the active tab and returns the number of visible cards.
    pub fn refresh(&self) -> usize {
        self.gallery.apply(&self.gallery.active_category())
    }
}

#[cfg(test)]
mod tests {
    use super::{AssetCard, AssetFilter};

    fn cards() -> Vec<AssetCard> {
        vec![
            AssetCard::new(Some("maps".into()), "Volcano Peak", "Volcano Peak Map A lava arena"),
            AssetCard::new(Some("models".into()), "Lava Golem", "Lava Golem Model Rigged"),
            AssetCard::new(Some("ui".into()), "Health Bar", "Health Bar UI Kit"),
            AssetCard::new(None, "Mystery Box", "Mystery Box"),
        ]
    }

    fn visible(filter: &AssetFilter) -> Vec<bool> {
        cards().iter().map(|card| filter.matches(card)).collect()
    }

    #[test]
    fn test_filter_all() {
        assert_eq!(
            visible(&AssetFilter::new("all", "")),
            [true, true, true, true]
        );
        assert_eq!(
            visible(&AssetFilter::new("all", "  ")),
            [true, true, true, true]
        );
    }

    #[test]
    fn test_filter_category() {
        assert_eq!(
            visible(&AssetFilter::new("models", "")),
            [false, true, false, false]
        );
        assert_eq!(
            visible(&AssetFilter::new("audio", "")),
            [false, false, false, false]
        );
    }

    #[test]
    fn test_filter_query() {
        // Name or full text, case-insensitive.
        assert_eq!(
            visible(&AssetFilter::new("all", "LAVA")),
            [true, true, false, false]
        );
        assert_eq!(
            visible(&AssetFilter::new("all", "kit")),
            [false, false, true, false]
        );
    }

    #[test]
    fn test_filter_requires_both() {
        // Category matches but text does not.
        assert_eq!(
            visible(&AssetFilter::new("maps", "golem")),
            [false, false, false, false]
        );

        // Text matches but category does not.
        assert_eq!(
            visible(&AssetFilter::new("ui", "lava")),
            [false, false, false, false]
        );

        assert_eq!(
            visible(&AssetFilter::new("models", "lava")),
            [false, true, false, false]
        );
    }

    #[test]
    fn test_filter_idempotent() {
        let filter = AssetFilter::new("maps", "peak");

        assert_eq!(visible(&filter), visible(&filter));
        assert_eq!(filter, AssetFilter::new("maps", " Peak "));
    }
}
