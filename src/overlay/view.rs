use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, Node};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::cards::CardData;
use crate::error::describe_js;

/// What the overlay shows for one card.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayContent {
    pub title: String,
    pub description: String,
    pub image_src: String,
    pub image_alt: String,
}

impl OverlayContent {
    pub fn from_card(card: &CardData) -> Self {
        let image_alt = if card.image_alt.is_empty() {
            card.title.clone()
        } else {
            card.image_alt.clone()
        };
        Self {
            title: card.title.clone(),
            description: card.description.clone(),
            image_src: card.image_src.clone(),
            image_alt,
        }
    }
}

pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

#[derive(Properties, PartialEq)]
pub struct TeamOverlayProps {
    pub content: OverlayContent,
    pub close_label: AttrValue,
    pub on_dismiss: Callback<()>,
}

const BACKDROP_STYLE: &str = "position: fixed; inset: 0; display: flex; align-items: center; \
    justify-content: center; background: rgba(0,0,0,0.7); z-index: 9999; padding: 20px;";

const PANEL_STYLE: &str = "background: linear-gradient(180deg, rgba(0,128,128,0.95), rgba(0,102,102,0.95)); \
    color: #fff; border-radius: 12px; max-width: 900px; width: 100%; \
    box-shadow: 0 10px 40px rgba(0,0,0,0.6); overflow: hidden; \
    display: grid; grid-template-columns: 1fr 1fr; gap: 20px; align-items: center;";

const CLOSE_STYLE: &str = "background: #ff6600; color: #fff; border: none; padding: 10px 14px; \
    border-radius: 8px; cursor: pointer; font-weight: bold;";

#[function_component(TeamOverlay)]
pub fn team_overlay(props: &TeamOverlayProps) -> Html {
    let backdrop_ref = use_node_ref();
    let close_ref = use_node_ref();

    // Focus the close button as soon as the dialog is on screen
    {
        let close_ref = close_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(button) = close_ref.cast::<HtmlElement>() {
                    if let Err(e) = button.focus() {
                        log::warn!("Could not focus close button: {}", describe_js(&e));
                    }
                }
                || ()
            },
            (),
        );
    }

    // Escape anywhere on the page; the hook drops the listener on unmount
    {
        let on_dismiss = props.on_dismiss.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if is_dismiss_key(&e.key()) {
                on_dismiss.emit(());
            }
        });
    }

    let on_backdrop_click = {
        let on_dismiss = props.on_dismiss.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            if target.is_some() && target == backdrop_ref.get() {
                on_dismiss.emit(());
            }
        })
    };

    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    let content = &props.content;

    html! {
        <div
            ref={backdrop_ref}
            class="team-modal-overlay"
            role="dialog"
            aria-modal="true"
            aria-label={content.title.clone()}
            style={BACKDROP_STYLE}
            onclick={on_backdrop_click}
        >
            <div class="team-modal" style={PANEL_STYLE}>
                <div style="padding: 20px;">
                    <img
                        src={content.image_src.clone()}
                        alt={content.image_alt.clone()}
                        style="width: 100%; height: auto; border-radius: 10px; border: 4px solid #ffb84d; display: block;"
                    />
                </div>
                <div style="padding: 20px; text-align: left;">
                    <h2 style="margin-top: 0; color: #ffcc33;">{content.title.clone()}</h2>
                    <p style="margin-bottom: 1rem;">{content.description.clone()}</p>
                    <button
                        ref={close_ref}
                        type="button"
                        class="team-modal-close"
                        style={CLOSE_STYLE}
                        onclick={on_close}
                    >
                        {props.close_label.to_string()}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> CardData {
        CardData {
            image_src: "https://example.com/ada.jpg".to_string(),
            image_alt: "Portrait of Ada".to_string(),
            title: "Ada".to_string(),
            description: "Keeps the lights on.".to_string(),
        }
    }

    #[test]
    fn maps_card_fields() {
        let content = OverlayContent::from_card(&card());
        assert_eq!(content.title, "Ada");
        assert_eq!(content.description, "Keeps the lights on.");
        assert_eq!(content.image_src, "https://example.com/ada.jpg");
        assert_eq!(content.image_alt, "Portrait of Ada");
    }

    #[test]
    fn alt_falls_back_to_title() {
        let mut card = card();
        card.image_alt.clear();
        assert_eq!(OverlayContent::from_card(&card).image_alt, "Ada");
    }

    #[test]
    fn empty_card_maps_to_empty_content() {
        let content = OverlayContent::from_card(&CardData::default());
        assert_eq!(
            content,
            OverlayContent {
                title: String::new(),
                description: String::new(),
                image_src: String::new(),
                image_alt: String::new(),
            }
        );
    }

    #[test]
    fn only_escape_dismisses() {
        assert!(is_dismiss_key("Escape"));
        assert!(is_dismiss_key("Esc"));
        assert!(!is_dismiss_key("Enter"));
        assert!(!is_dismiss_key(" "));
    }
}
