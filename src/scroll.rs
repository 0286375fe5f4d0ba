use std::cell::Cell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

use crate::config::Config;
use crate::dom;
use crate::error::EnhanceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    Smooth,
    Instant,
}

impl ScrollMode {
    pub fn for_reduced_motion(reduced: bool) -> Self {
        if reduced {
            ScrollMode::Instant
        } else {
            ScrollMode::Smooth
        }
    }
}

/// Turns in-page navigation links into scrolls to their target section.
pub struct ScrollController {
    _links: Vec<EventListener>,
    _preference: Option<EventListener>,
}

impl ScrollController {
    pub fn install(document: &Document, config: &Config) -> Result<Self, EnhanceError> {
        let window = dom::window()?;
        let media = window
            .match_media(&config.reduced_motion_query)
            .ok()
            .flatten();
        let reduced = media.as_ref().map_or(false, |m| m.matches());
        let mode = Rc::new(Cell::new(ScrollMode::for_reduced_motion(reduced)));

        // The preference can flip while the page is open.
        let preference = media.map(|media| {
            let mode = mode.clone();
            let watched = media.clone();
            EventListener::new(&media, "change", move |_| {
                let next = ScrollMode::for_reduced_motion(watched.matches());
                log::debug!("Reduced-motion preference changed, scrolling is now {:?}", next);
                mode.set(next);
            })
        });

        let links: Vec<EventListener> = dom::query_all(document, &config.nav_link_selector)?
            .into_iter()
            .map(|link| {
                let mode = mode.clone();
                let clicked = link.clone();
                EventListener::new_with_options(
                    &link,
                    "click",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        event.prevent_default();
                        let href = clicked.get_attribute("href").unwrap_or_default();
                        if let Some(id) = dom::fragment_id(&href) {
                            scroll_to_section(id, mode.get());
                        }
                    },
                )
            })
            .collect();

        log::info!(
            "Bound {} navigation links ({:?} scrolling)",
            links.len(),
            mode.get()
        );
        Ok(Self {
            _links: links,
            _preference: preference,
        })
    }
}

fn scroll_to_section(id: &str, mode: ScrollMode) {
    let Ok(window) = dom::window() else {
        return;
    };
    let Some(target) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        log::debug!("No section #{} on this page", id);
        return;
    };

    match mode {
        ScrollMode::Smooth => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
        ScrollMode::Instant => {
            let top = target
                .dyn_ref::<HtmlElement>()
                .map_or(0, |el| el.offset_top());
            let options = ScrollToOptions::new();
            options.set_top(f64::from(top));
            options.set_behavior(ScrollBehavior::Instant);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_jumps() {
        assert_eq!(ScrollMode::for_reduced_motion(true), ScrollMode::Instant);
    }

    #[test]
    fn default_motion_animates() {
        assert_eq!(ScrollMode::for_reduced_motion(false), ScrollMode::Smooth);
    }
}
