//! Modal overlay showing the details of one team card.
//!
//! The overlay is either closed or open; there is nothing in between. Opening
//! mounts a [`TeamOverlay`] app in its own host element and remembers which
//! element had focus. Closing tears the app down and hands focus back.

mod view;

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;
use yew::{AttrValue, Callback};

use crate::cards::CardData;
use crate::config::Config;
use crate::dom;
use crate::error::EnhanceError;
use crate::render::Mounted;

pub use view::{OverlayContent, TeamOverlay, TeamOverlayProps};

/// Holds at most one open dialog.
#[derive(Debug)]
pub struct DialogSlot<T> {
    open: Option<T>,
}

impl<T> Default for DialogSlot<T> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<T> DialogSlot<T> {
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Stores `dialog` unless one is already open, in which case it is handed back.
    pub fn fill(&mut self, dialog: T) -> Result<(), T> {
        if self.open.is_some() {
            return Err(dialog);
        }
        self.open = Some(dialog);
        Ok(())
    }

    pub fn take(&mut self) -> Option<T> {
        self.open.take()
    }
}

struct OpenOverlay {
    mounted: Mounted<TeamOverlay>,
    restore_focus: Option<Element>,
}

#[derive(Clone)]
pub struct OverlayController {
    slot: Rc<RefCell<DialogSlot<OpenOverlay>>>,
    close_label: AttrValue,
}

impl OverlayController {
    pub fn new(config: &Config) -> Self {
        Self {
            slot: Rc::new(RefCell::new(DialogSlot::default())),
            close_label: AttrValue::from(config.close_label.clone()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.slot.borrow().is_open()
    }

    /// Shows `card` in the overlay. Ignored while another overlay is open.
    pub fn open(&self, card: &CardData) -> Result<(), EnhanceError> {
        if self.is_open() {
            log::debug!("Overlay already open, ignoring {:?}", card.title);
            return Ok(());
        }

        let document = dom::document()?;
        let restore_focus = document.active_element();

        let on_dismiss = {
            let controller = self.clone();
            Callback::from(move |_: ()| {
                controller.close();
            })
        };
        let props = TeamOverlayProps {
            content: OverlayContent::from_card(card),
            close_label: self.close_label.clone(),
            on_dismiss,
        };
        let mounted = Mounted::<TeamOverlay>::new(&document, props)?;

        let filled = self.slot.borrow_mut().fill(OpenOverlay {
            mounted,
            restore_focus,
        });
        if let Err(stale) = filled {
            stale.mounted.unmount();
            return Ok(());
        }
        log::debug!("Opened overlay for {:?}", card.title);
        Ok(())
    }

    /// Closes the overlay. Returns false when there was nothing to close.
    pub fn close(&self) -> bool {
        let Some(open) = self.slot.borrow_mut().take() else {
            return false;
        };
        open.mounted.unmount();

        if let Some(element) = open.restore_focus.filter(|el| el.is_connected()) {
            match dom::focus(&element) {
                Ok(true) => {}
                Ok(false) => log::debug!("Previously focused element cannot take focus"),
                Err(e) => log::warn!("Could not restore focus: {}", e),
            }
        }
        log::debug!("Closed overlay");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let slot: DialogSlot<&str> = DialogSlot::default();
        assert!(!slot.is_open());
    }

    #[test]
    fn second_open_is_rejected() {
        let mut slot = DialogSlot::default();
        assert_eq!(slot.fill("ada"), Ok(()));
        assert_eq!(slot.fill("grace"), Err("grace"));
        assert_eq!(slot.take(), Some("ada"));
    }

    #[test]
    fn second_close_is_a_noop() {
        let mut slot = DialogSlot::default();
        slot.fill("ada").unwrap();
        assert_eq!(slot.take(), Some("ada"));
        assert_eq!(slot.take(), None);
        assert!(!slot.is_open());
    }

    #[test]
    fn reopens_after_close() {
        let mut slot = DialogSlot::default();
        slot.fill("ada").unwrap();
        slot.take();
        assert_eq!(slot.fill("grace"), Ok(()));
        assert!(slot.is_open());
    }
}
