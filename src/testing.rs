//! Browser fixtures for the wasm tests.

use gloo_timers::future::TimeoutFuture;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, KeyboardEventInit};
use wasm_bindgen::JsCast;

use crate::dom;

pub fn document() -> Document {
    dom::document().unwrap()
}

/// Appends `markup` to the body inside a fresh container. Remove the
/// container when done.
pub fn fixture(markup: &str) -> Element {
    let document = document();
    let container = document.create_element("div").unwrap();
    container.set_inner_html(markup);
    dom::body(&document).unwrap().append_child(&container).unwrap();
    container
}

pub fn by_id(id: &str) -> HtmlElement {
    document()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

pub fn click(selector: &str) {
    document()
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

pub fn key_event(kind: &str, key: &str) -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    init.set_cancelable(true);
    KeyboardEvent::new_with_keyboard_event_init_dict(kind, &init).unwrap()
}

/// Lets Yew render and run effects.
pub async fn settle() {
    TimeoutFuture::new(30).await;
}
