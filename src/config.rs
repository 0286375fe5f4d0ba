use log::Level;
use serde::Deserialize;

use crate::error::EnhanceError;

/// Id of the optional `<script type="application/json">` element carrying overrides.
pub const CONFIG_ISLAND_ID: &str = "page-enhance-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Selectors, class names and timings the enhancements rely on.
///
/// Every field has a default matching the stock page markup, so a config
/// island only needs to name what differs.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub nav_link_selector: String,
    pub highlight_link_selector: String,
    pub section_selector: String,
    pub active_class: String,
    pub visibility_threshold: f64,
    pub card_selector: String,
    pub card_image_selector: String,
    pub card_heading_selector: String,
    pub card_description_selector: String,
    pub contact_selector: String,
    /// Leading characters kept when cleaning copied text, besides ASCII letters and digits.
    pub copy_keep_leading: String,
    pub copied_message: String,
    pub copy_failed_message: String,
    pub toast_duration_ms: u32,
    pub toast_fade_in_ms: u32,
    pub reduced_motion_query: String,
    pub close_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nav_link_selector: r##"nav a[href^="#"]"##.to_string(),
            highlight_link_selector: "nav a".to_string(),
            section_selector: "section[id]".to_string(),
            active_class: "active".to_string(),
            visibility_threshold: 0.5,
            card_selector: ".team > div".to_string(),
            card_image_selector: "img".to_string(),
            card_heading_selector: "h3".to_string(),
            card_description_selector: "p".to_string(),
            contact_selector: "#contact p".to_string(),
            copy_keep_leading: "@+".to_string(),
            copied_message: "Copied!".to_string(),
            copy_failed_message: "Could not copy".to_string(),
            toast_duration_ms: 2000,
            toast_fade_in_ms: 10,
            reduced_motion_query: "(prefers-reduced-motion: reduce)".to_string(),
            close_label: "Close".to_string(),
        }
    }
}

impl Config {
    pub fn from_json(raw: &str) -> Result<Self, EnhanceError> {
        let config: Config = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EnhanceError> {
        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err(EnhanceError::Config(format!(
                "visibility_threshold must be within 0..=1, got {}",
                self.visibility_threshold
            )));
        }
        if self.toast_duration_ms == 0 {
            return Err(EnhanceError::Config(
                "toast_duration_ms must be greater than zero".to_string(),
            ));
        }
        let selectors = [
            ("nav_link_selector", &self.nav_link_selector),
            ("highlight_link_selector", &self.highlight_link_selector),
            ("section_selector", &self.section_selector),
            ("card_selector", &self.card_selector),
            ("card_image_selector", &self.card_image_selector),
            ("card_heading_selector", &self.card_heading_selector),
            ("card_description_selector", &self.card_description_selector),
            ("contact_selector", &self.contact_selector),
        ];
        if let Some((name, _)) = selectors.iter().find(|(_, s)| s.trim().is_empty()) {
            return Err(EnhanceError::Config(format!("{} must not be empty", name)));
        }
        Ok(())
    }

    /// Reads the config island from the page, falling back to defaults when
    /// it is absent or unusable.
    pub fn load(document: &web_sys::Document) -> Self {
        let Some(island) = document.get_element_by_id(CONFIG_ISLAND_ID) else {
            return Self::default();
        };
        let raw = island.text_content().unwrap_or_default();
        match Self::from_json(&raw) {
            Ok(config) => {
                log::debug!("Loaded config overrides from #{}", CONFIG_ISLAND_ID);
                config
            }
            Err(e) => {
                log::warn!("Ignoring #{}: {}", CONFIG_ISLAND_ID, e);
                Self::default()
            }
        }
    }
}
