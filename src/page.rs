use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::Document;

use crate::cards::CardActivator;
use crate::clipboard::ClipboardHelper;
use crate::config::Config;
use crate::dom;
use crate::error::EnhanceError;
use crate::highlight::SectionHighlighter;
use crate::overlay::OverlayController;
use crate::scroll::ScrollController;

thread_local! {
    static INSTALLED: RefCell<Option<PageEnhancements>> = RefCell::new(None);
}

/// Everything bound to the page. Listeners stay live while this is held.
pub struct PageEnhancements {
    _scroll: Option<ScrollController>,
    _highlighter: Option<SectionHighlighter>,
    _cards: Option<CardActivator>,
    _contacts: Option<ClipboardHelper>,
}

impl PageEnhancements {
    /// Installs every component it can; one failing does not stop the others.
    pub fn install(document: &Document, config: Rc<Config>) -> Self {
        let overlay = OverlayController::new(&config);
        Self {
            _scroll: installed("smooth scrolling", ScrollController::install(document, &config)),
            _highlighter: installed(
                "section highlighting",
                SectionHighlighter::install(document, &config),
            ),
            _cards: installed("team cards", CardActivator::install(document, &config, &overlay)),
            _contacts: installed("click-to-copy", ClipboardHelper::install(document, &config)),
        }
    }
}

fn installed<T>(what: &str, result: Result<T, EnhanceError>) -> Option<T> {
    match result {
        Ok(component) => Some(component),
        Err(e) => {
            log::error!("Failed to install {}: {}", what, e);
            None
        }
    }
}

fn install_and_keep(document: &Document) {
    let config = Rc::new(Config::load(document));
    let page = PageEnhancements::install(document, config);
    INSTALLED.with(|slot| *slot.borrow_mut() = Some(page));
    log::info!("Page enhancements ready");
}

/// Installs the enhancements now, or once the document has been parsed.
pub fn start() -> Result<(), EnhanceError> {
    let document = dom::document()?;
    if dom::is_loading(&document) {
        log::debug!("Document still loading, waiting for DOMContentLoaded");
        let ready = document.clone();
        EventListener::once(&document, "DOMContentLoaded", move |_| install_and_keep(&ready))
            .forget();
    } else {
        install_and_keep(&document);
    }
    Ok(())
}
