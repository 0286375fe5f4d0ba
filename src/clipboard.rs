use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Clipboard, Document, HtmlElement, KeyboardEvent};

use crate::config::Config;
use crate::dom;
use crate::error::{describe_js, EnhanceError};
use crate::toast::{self, ToastKind};

/// Drops leading icons and punctuation, keeping ASCII letters, digits and
/// anything in `keep`, then trims surrounding whitespace.
pub fn strip_leading_symbols(text: &str, keep: &str) -> String {
    text.trim_start_matches(|c: char| !(c.is_ascii_alphanumeric() || keep.contains(c)))
        .trim()
        .to_string()
}

pub async fn write_text(text: &str) -> Result<(), EnhanceError> {
    let navigator = dom::window()?.navigator();
    // Absent outside secure contexts
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .ok_or(EnhanceError::ClipboardUnavailable)?
        .unchecked_into::<Clipboard>();

    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(|e| EnhanceError::ClipboardRejected(describe_js(&e)))?;
    Ok(())
}

async fn copy_and_confirm(text: String, config: Rc<Config>) {
    let outcome = write_text(&text).await;
    if let Err(e) = &outcome {
        log::warn!("Copy failed: {}", e);
    }
    let kind = ToastKind::for_outcome(&outcome);
    if let Err(e) = toast::show(kind.message(&config), &config) {
        log::warn!("Could not show toast: {}", e);
    }
}

/// Click-to-copy for contact details.
pub struct ClipboardHelper {
    _listeners: Vec<EventListener>,
}

impl ClipboardHelper {
    pub fn install(document: &Document, config: &Rc<Config>) -> Result<Self, EnhanceError> {
        let items = dom::query_all(document, &config.contact_selector)?;
        let mut listeners = Vec::with_capacity(items.len() * 2);

        for item in &items {
            dom::make_interactive(item, "copy");

            listeners.push({
                let (item_el, config) = (item.clone(), config.clone());
                EventListener::new(item, "click", move |_| {
                    let raw = item_el.text_content().unwrap_or_default();
                    let text = strip_leading_symbols(&raw, &config.copy_keep_leading);
                    log::debug!("Copying {:?}", text);
                    spawn_local(copy_and_confirm(text, config.clone()));
                })
            });

            listeners.push({
                let item_el = item.clone();
                EventListener::new_with_options(
                    item,
                    "keydown",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        if dom::is_activation_key(&key_event.key()) {
                            event.prevent_default();
                            if let Some(html) = item_el.dyn_ref::<HtmlElement>() {
                                html.click();
                            }
                        }
                    },
                )
            });
        }

        log::info!("Click-to-copy enabled on {} contact items", items.len());
        Ok(Self {
            _listeners: listeners,
        })
    }
}
