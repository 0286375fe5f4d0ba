use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement, KeyboardEvent};

use crate::config::Config;
use crate::dom;
use crate::error::{describe_js, EnhanceError};
use crate::overlay::OverlayController;

/// The parts of a team card the overlay shows. Missing parts are empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardData {
    pub image_src: String,
    pub image_alt: String,
    pub title: String,
    pub description: String,
}

impl CardData {
    pub fn read(card: &Element, config: &Config) -> Self {
        let (image_src, image_alt) = dom::query_within(card, &config.card_image_selector)
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
            .map(|img| (img.src(), img.alt()))
            .unwrap_or_default();
        let text_of = |selector: &str| {
            dom::query_within(card, selector)
                .and_then(|el| el.text_content())
                .unwrap_or_default()
        };
        Self {
            image_src,
            image_alt,
            title: text_of(&config.card_heading_selector),
            description: text_of(&config.card_description_selector),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Activation {
    Pointer,
    Keyboard,
}

fn activate(card: &Element, config: &Config, overlay: &OverlayController, how: Activation) {
    let data = CardData::read(card, config);
    log::debug!("Card {:?} activated by {:?}", data.title, how);
    if let Err(e) = overlay.open(&data) {
        log::warn!("Could not open overlay: {}", e);
    }
}

/// Makes team cards focusable and opens the overlay when one is activated.
pub struct CardActivator {
    _listeners: Vec<EventListener>,
}

impl CardActivator {
    pub fn install(
        document: &Document,
        config: &Rc<Config>,
        overlay: &OverlayController,
    ) -> Result<Self, EnhanceError> {
        let cards = dom::query_all(document, &config.card_selector)?;
        let mut listeners = Vec::with_capacity(cards.len() * 2);

        for card in &cards {
            dom::make_interactive(card, "pointer");
            for img in dom::query_all_within(card, &config.card_image_selector) {
                if let Err(e) = img.set_attribute("loading", "lazy") {
                    log::warn!("Could not mark team image lazy: {}", describe_js(&e));
                }
            }

            listeners.push({
                let (card_el, config, overlay) = (card.clone(), config.clone(), overlay.clone());
                EventListener::new(card, "click", move |_| {
                    activate(&card_el, &config, &overlay, Activation::Pointer);
                })
            });

            listeners.push({
                let (card_el, config, overlay) = (card.clone(), config.clone(), overlay.clone());
                EventListener::new_with_options(
                    card,
                    "keydown",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        if dom::is_activation_key(&key_event.key()) {
                            event.prevent_default();
                            activate(&card_el, &config, &overlay, Activation::Keyboard);
                        }
                    },
                )
            });
        }

        log::info!("Activated {} team cards", cards.len());
        Ok(Self {
            _listeners: listeners,
        })
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlImageElement;

    use super::*;
    use crate::overlay::OverlayContent;
    use crate::testing::{by_id, document, fixture, key_event, settle};

    const TEAM: &str = r#"
        <div class="team-under-test">
            <div id="card-ada">
                <img src="https://example.com/ada.jpg" alt="Portrait of Ada" />
                <h3>Ada</h3>
                <p>Keeps the lights on.</p>
            </div>
            <div id="card-blank"></div>
        </div>"#;

    fn team_config() -> Rc<Config> {
        Rc::new(Config {
            card_selector: ".team-under-test > div".to_string(),
            ..Config::default()
        })
    }

    /// What the open overlay actually shows.
    fn rendered_content() -> OverlayContent {
        let document = document();
        let text = |selector: &str| {
            document
                .query_selector(selector)
                .unwrap()
                .and_then(|el| el.text_content())
                .unwrap_or_default()
        };
        let image = document
            .query_selector(".team-modal img")
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlImageElement>()
            .unwrap();
        OverlayContent {
            title: text(".team-modal h2"),
            description: text(".team-modal p"),
            image_src: image.src(),
            image_alt: image.alt(),
        }
    }

    #[wasm_bindgen_test]
    fn reads_card_markup() {
        let container = fixture(TEAM);
        let config = team_config();

        assert_eq!(
            CardData::read(&by_id("card-ada"), &config),
            CardData {
                image_src: "https://example.com/ada.jpg".to_string(),
                image_alt: "Portrait of Ada".to_string(),
                title: "Ada".to_string(),
                description: "Keeps the lights on.".to_string(),
            }
        );
        assert_eq!(CardData::read(&by_id("card-blank"), &config), CardData::default());
        container.remove();
    }

    #[wasm_bindgen_test]
    fn install_makes_cards_reachable() {
        let container = fixture(TEAM);
        let config = team_config();
        let overlay = OverlayController::new(&config);
        let _cards = CardActivator::install(&document(), &config, &overlay).unwrap();

        let ada = by_id("card-ada");
        assert_eq!(ada.get_attribute("tabindex").as_deref(), Some("0"));
        assert_eq!(ada.style().get_property_value("cursor").unwrap(), "pointer");
        let image = ada.query_selector("img").unwrap().unwrap();
        assert_eq!(image.get_attribute("loading").as_deref(), Some("lazy"));
        container.remove();
    }

    #[wasm_bindgen_test]
    async fn pointer_and_keyboard_open_the_same_overlay() {
        let container = fixture(TEAM);
        let config = team_config();
        let overlay = OverlayController::new(&config);
        let _cards = CardActivator::install(&document(), &config, &overlay).unwrap();
        let ada = by_id("card-ada");

        ada.click();
        settle().await;
        assert!(overlay.is_open());
        let by_pointer = rendered_content();
        assert!(overlay.close());
        settle().await;

        ada.dispatch_event(&key_event("keydown", "Enter")).unwrap();
        settle().await;
        assert!(overlay.is_open());
        let by_keyboard = rendered_content();
        assert!(overlay.close());

        assert_eq!(by_pointer, by_keyboard);
        assert_eq!(by_pointer.title, "Ada");
        assert_eq!(by_pointer.description, "Keeps the lights on.");
        assert_eq!(by_pointer.image_alt, "Portrait of Ada");
        container.remove();
    }

    #[wasm_bindgen_test]
    async fn space_opens_blank_card_and_other_keys_do_not() {
        let container = fixture(TEAM);
        let config = team_config();
        let overlay = OverlayController::new(&config);
        let _cards = CardActivator::install(&document(), &config, &overlay).unwrap();
        let blank = by_id("card-blank");

        blank.dispatch_event(&key_event("keydown", "a")).unwrap();
        settle().await;
        assert!(!overlay.is_open());

        blank.dispatch_event(&key_event("keydown", " ")).unwrap();
        settle().await;
        assert!(overlay.is_open());
        let content = rendered_content();
        assert_eq!(content.title, "");
        assert_eq!(content.description, "");
        assert!(overlay.close());
        container.remove();
    }
}
