use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

use crate::error::{describe_js, EnhanceError};

pub fn window() -> Result<Window, EnhanceError> {
    web_sys::window().ok_or(EnhanceError::MissingWindow)
}

pub fn document() -> Result<Document, EnhanceError> {
    window()?.document().ok_or(EnhanceError::MissingDocument)
}

pub fn body(document: &Document) -> Result<HtmlElement, EnhanceError> {
    document.body().ok_or(EnhanceError::MissingBody)
}

/// All elements matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Result<Vec<Element>, EnhanceError> {
    let list = root
        .query_selector_all(selector)
        .map_err(|e| EnhanceError::Selector {
            selector: selector.to_string(),
            message: describe_js(&e),
        })?;
    Ok(elements(&list))
}

/// Descendants of `element` matching `selector`; an invalid selector matches nothing.
pub fn query_all_within(element: &Element, selector: &str) -> Vec<Element> {
    element
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First descendant of `element` matching `selector`; an invalid selector
/// counts as no match.
pub fn query_within(element: &Element, selector: &str) -> Option<Element> {
    element.query_selector(selector).ok().flatten()
}

/// Target id of an in-page link such as `#team`.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Enter and Space activate focusable widgets.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Puts the element in the tab order and sets its pointer cursor.
pub fn make_interactive(element: &Element, cursor: &str) {
    if let Err(e) = element.set_attribute("tabindex", "0") {
        log::warn!("Could not set tabindex: {}", describe_js(&e));
    }
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html.style().set_property("cursor", cursor) {
            log::warn!("Could not set cursor: {}", describe_js(&e));
        }
    }
}

/// Calls the element's `focus` if it has one, as HTML and SVG elements do.
/// Returns whether focus was requested.
pub fn focus(element: &Element) -> Result<bool, EnhanceError> {
    let focus = js_sys::Reflect::get(element, &JsValue::from_str("focus"))?;
    let Some(focus) = focus.dyn_ref::<js_sys::Function>() else {
        return Ok(false);
    };
    focus.call0(element)?;
    Ok(true)
}

/// True while the parser is still building the document.
pub fn is_loading(document: &Document) -> bool {
    js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|state| state.as_string())
        .map_or(false, |state| state == "loading")
}
