use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::Config;
use crate::dom;
use crate::error::EnhanceError;
use crate::render::Mounted;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Copied,
    CopyFailed,
}

impl ToastKind {
    pub fn for_outcome<E>(outcome: &Result<(), E>) -> Self {
        match outcome {
            Ok(()) => ToastKind::Copied,
            Err(_) => ToastKind::CopyFailed,
        }
    }

    pub fn message(self, config: &Config) -> &str {
        match self {
            ToastKind::Copied => config.copied_message.as_str(),
            ToastKind::CopyFailed => config.copy_failed_message.as_str(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: AttrValue,
    pub fade_in_ms: u32,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        let fade_in_ms = props.fade_in_ms;
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(fade_in_ms, move || visible.set(true));
                // Dropping the handle cancels a fade that has not fired yet
                move || drop(timeout)
            },
            (),
        );
    }

    let style = format!(
        "position: fixed; left: 50%; transform: translateX(-50%); bottom: 30px; \
         background: rgba(0,0,0,0.8); color: #fff; padding: 10px 14px; border-radius: 20px; \
         z-index: 10000; font-weight: 600; transition: opacity 0.2s ease-in; opacity: {};",
        if *visible { "1" } else { "0" }
    );

    html! {
        <div class="toast" role="status" aria-live="polite" style={style}>
            {props.message.to_string()}
        </div>
    }
}

/// Shows `message` at the bottom of the page and removes it after the
/// configured duration.
pub fn show(message: &str, config: &Config) -> Result<(), EnhanceError> {
    let document = dom::document()?;
    let props = ToastProps {
        message: AttrValue::from(message.to_string()),
        fade_in_ms: config.toast_fade_in_ms,
    };
    let mounted = Mounted::<Toast>::new(&document, props)?;
    Timeout::new(config.toast_duration_ms, move || mounted.unmount()).forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_shows_copied() {
        let config = Config::default();
        let kind = ToastKind::for_outcome::<()>(&Ok(()));
        assert_eq!(kind, ToastKind::Copied);
        assert_eq!(kind.message(&config), "Copied!");
    }

    #[test]
    fn failure_shows_could_not_copy() {
        let config = Config::default();
        let kind = ToastKind::for_outcome(&Err(EnhanceError::ClipboardUnavailable));
        assert_eq!(kind, ToastKind::CopyFailed);
        assert_eq!(kind.message(&config), "Could not copy");
    }

    #[test]
    fn messages_follow_config() {
        let config = Config {
            copied_message: "Kopiert!".to_string(),
            ..Config::default()
        };
        assert_eq!(ToastKind::Copied.message(&config), "Kopiert!");
    }
}
