mod format;

pub use format::format_count;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

use crate::Error;

#[inline]
pub fn window() -> Window {
    gloo_utils::window()
}

/// Returns the root [`Document`].
///
/// # Panics
///
/// Panics if there is no [`Document`] in root window or no root window is present. This should
/// never be the case in a web environment.
#[inline]
pub fn document() -> Document {
    gloo_utils::document()
}

/// Returns the element with the given `id`.
pub fn element_by_id(id: &'static str) -> Result<Element, Error> {
    document()
        .get_element_by_id(id)
        .ok_or(Error::MissingElement(id))
}

/// Returns the first element in the document matching `selectors`.
pub fn query(selectors: &'static str) -> Result<Element, Error> {
    document()
        .query_selector(selectors)
        .ok()
        .flatten()
        .ok_or(Error::MissingElement(selectors))
}

/// Returns the first element below `parent` matching `selectors`.
pub fn query_in(parent: &Element, selectors: &'static str) -> Result<Element, Error> {
    parent
        .query_selector(selectors)
        .ok()
        .flatten()
        .ok_or(Error::MissingElement(selectors))
}

/// Returns all elements in the document matching `selectors`, in document order.
pub fn query_all(selectors: &str) -> Vec<Element> {
    document()
        .query_selector_all(selectors)
        .map(elements)
        .unwrap_or_default()
}

/// Returns all elements below `parent` matching `selectors`, in document order.
pub fn query_all_in(parent: &Element, selectors: &str) -> Vec<Element> {
    parent
        .query_selector_all(selectors)
        .map(elements)
        .unwrap_or_default()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Sets the inline `display` style of `element`. An empty `value` falls back to the stylesheet.
pub fn set_display(element: &Element, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let style = element.style();

        let res = if value.is_empty() {
            style.remove_property("display").map(|_| ())
        } else {
            style.set_property("display", value)
        };

        if let Err(err) = res {
            log::debug!("Failed to set display: {:?}", err);
        }
    }
}

/// Adds or removes `class` on `element`.
pub fn set_class(element: &Element, class: &str, enabled: bool) {
    let classes = element.class_list();

    let res = if enabled {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };

    if let Err(err) = res {
        log::debug!("Failed to update class {:?}: {:?}", class, err);
    }
}

#[inline]
pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Sets an attribute, logging instead of failing if the browser rejects it.
pub fn set_attribute(element: &Element, name: &str, value: &str) {
    if let Err(err) = element.set_attribute(name, value) {
        log::debug!("Failed to set attribute {:?}: {:?}", name, err);
    }
}
