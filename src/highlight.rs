use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::config::Config;
use crate::dom;
use crate::error::EnhanceError;

/// Navigation links keyed by their `href`.
pub struct NavLinks<T> {
    links: Vec<(String, T)>,
}

impl<T> NavLinks<T> {
    pub fn new(links: Vec<(String, T)>) -> Self {
        Self { links }
    }

    /// The first link pointing at `#id`.
    pub fn for_section(&self, id: &str) -> Option<&T> {
        self.links
            .iter()
            .find(|(href, _)| dom::fragment_id(href) == Some(id))
            .map(|(_, link)| link)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Activate,
    Deactivate,
}

/// Browsers may report a ratio a hair below the threshold at the crossing itself.
const RATIO_TOLERANCE: f64 = 1e-3;

pub fn highlight_for(is_intersecting: bool, ratio: f64, threshold: f64) -> Highlight {
    if is_intersecting && ratio + RATIO_TOLERANCE >= threshold {
        Highlight::Activate
    } else {
        Highlight::Deactivate
    }
}

/// Marks the nav link of every section that is at least `threshold` visible.
/// Observation stops when this is dropped.
pub struct SectionHighlighter {
    observer: IntersectionObserver,
    _on_change: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl SectionHighlighter {
    pub fn install(document: &Document, config: &Config) -> Result<Self, EnhanceError> {
        let links: NavLinks<Element> = NavLinks::new(
            dom::query_all(document, &config.highlight_link_selector)?
                .into_iter()
                .filter_map(|link| link.get_attribute("href").map(|href| (href, link)))
                .collect(),
        );
        let link_count = links.len();
        let active_class = config.active_class.clone();
        let threshold = config.visibility_threshold;

        let on_change = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let id = entry.target().id();
                    let Some(link) = links.for_section(&id) else {
                        continue;
                    };
                    let classes = link.class_list();
                    let result = match highlight_for(
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                        threshold,
                    ) {
                        Highlight::Activate => classes.add_1(&active_class),
                        Highlight::Deactivate => classes.remove_1(&active_class),
                    };
                    if let Err(e) = result {
                        log::warn!("Could not update nav link for #{}: {:?}", id, e);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(on_change.as_ref().unchecked_ref(), &options)?;

        let sections = dom::query_all(document, &config.section_selector)?;
        for section in &sections {
            observer.observe(section);
        }
        log::info!(
            "Observing {} sections for {} nav links",
            sections.len(),
            link_count
        );

        Ok(Self {
            observer,
            _on_change: on_change,
        })
    }
}

impl Drop for SectionHighlighter {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
