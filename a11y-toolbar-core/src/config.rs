//! Toolbar configuration
use crate::constants::{
    DEFAULT_BASE_FONT_PX, DEFAULT_DESKTOP_BREAKPOINT_PX, DEFAULT_FONT_STEP_PX, DEFAULT_MAX_FONT_PX,
    DEFAULT_MIN_FONT_PX, DEFAULT_READ_ALOUD_DEBOUNCE_MS, DEFAULT_READ_ALOUD_MIN_CHARS,
    DEFAULT_SPEECH_LANG, DEFAULT_TOAST_DURATION_MS,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

const DEFAULT_TOOLBAR_DATA: &str =
    include_str!("../../a11y-toolbar-web/static/assets/data/toolbar.json");

static HEX_COLOR: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").ok());

fn is_hex_color(value: &str) -> bool {
    HEX_COLOR
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}

/// Light-mode colour literal mapped to its dark-mode replacement.
pub type ColorMap = BTreeMap<String, String>;

/// Errors raised when a toolbar configuration is unusable.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("font bounds inverted (min {min:.2} > max {max:.2})")]
    FontBounds { min: f64, max: f64 },
    #[error("font step must be a positive number (got {step})")]
    FontStep { step: f64 },
    #[error("base font size {base:.2} outside {min:.2}..={max:.2}")]
    BaseFontOutOfBounds { base: f64, min: f64, max: f64 },
    #[error("colour mapping `{light}` -> `{dark}` is not a pair of hex colours")]
    ColorMapping { light: String, dark: String },
    #[error("unknown locale `{0}`")]
    UnknownLocale(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct A11yConfig {
    #[serde(default = "A11yConfig::default_base_font_px")]
    pub base_font_px: f64,
    #[serde(default = "A11yConfig::default_font_step_px")]
    pub font_step_px: f64,
    #[serde(default = "A11yConfig::default_min_font_px")]
    pub min_font_px: f64,
    #[serde(default = "A11yConfig::default_max_font_px")]
    pub max_font_px: f64,
    /// Selectors rescaled alongside `html`/`body`, in emission order.
    #[serde(default = "A11yConfig::default_text_selectors")]
    pub text_selectors: Vec<String>,
    /// Zero keeps the preference cookies session-scoped.
    #[serde(default)]
    pub cookie_expiration_days: u32,
    #[serde(default = "A11yConfig::default_color_map")]
    pub color_map: ColorMap,
    #[serde(default = "A11yConfig::default_speech_lang")]
    pub speech_lang: String,
    #[serde(default = "A11yConfig::default_read_aloud_debounce_ms")]
    pub read_aloud_debounce_ms: u32,
    #[serde(default = "A11yConfig::default_read_aloud_min_chars")]
    pub read_aloud_min_chars: usize,
    #[serde(default = "A11yConfig::default_toast_duration_ms")]
    pub toast_duration_ms: u32,
    #[serde(default = "A11yConfig::default_desktop_breakpoint_px")]
    pub desktop_breakpoint_px: f64,
    #[serde(default = "A11yConfig::default_locale")]
    pub locale: String,
    #[serde(default = "A11yConfig::default_log_level")]
    pub log_level: String,
}

impl A11yConfig {
    const fn default_base_font_px() -> f64 {
        DEFAULT_BASE_FONT_PX
    }

    const fn default_font_step_px() -> f64 {
        DEFAULT_FONT_STEP_PX
    }

    const fn default_min_font_px() -> f64 {
        DEFAULT_MIN_FONT_PX
    }

    const fn default_max_font_px() -> f64 {
        DEFAULT_MAX_FONT_PX
    }

    fn default_text_selectors() -> Vec<String> {
        [
            "p", "h1", "h2", "h3", "h4", "h5", "h6", "span", "a", "button", "li", "td", "th",
            "label", "input", "textarea", "div",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }

    fn default_color_map() -> ColorMap {
        [
            ("#ffffff", "#121212"),
            ("#f8f9fa", "#121212"),
            ("#f1f3f5", "#1e1e1e"),
            ("#e9ecef", "#262626"),
            ("#ececec", "#000000"),
            ("#dee2e6", "#303030"),
            ("#000000", "#e0e0e0"),
            ("#343a40", "#d0d0d0"),
            ("#495057", "#b0b0b0"),
            ("#212529", "#f8f9fa"),
        ]
        .into_iter()
        .map(|(light, dark)| (light.to_string(), dark.to_string()))
        .collect()
    }

    fn default_speech_lang() -> String {
        DEFAULT_SPEECH_LANG.to_string()
    }

    const fn default_read_aloud_debounce_ms() -> u32 {
        DEFAULT_READ_ALOUD_DEBOUNCE_MS
    }

    const fn default_read_aloud_min_chars() -> usize {
        DEFAULT_READ_ALOUD_MIN_CHARS
    }

    const fn default_toast_duration_ms() -> u32 {
        DEFAULT_TOAST_DURATION_MS
    }

    const fn default_desktop_breakpoint_px() -> f64 {
        DEFAULT_DESKTOP_BREAKPOINT_PX
    }

    fn default_locale() -> String {
        "pt".to_string()
    }

    fn default_log_level() -> String {
        "warn".to_string()
    }

    /// Configuration compiled into the bundle, falling back to the built-in
    /// defaults when the asset does not parse.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_TOOLBAR_DATA).unwrap_or_default()
    }

    /// Parse a (possibly partial) configuration and validate it.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the JSON is malformed or any field breaks
    /// the invariants checked by [`A11yConfig::validate`].
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the controller relies on.
    ///
    /// # Errors
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_font_px.is_finite() && self.max_font_px.is_finite())
            || self.min_font_px > self.max_font_px
        {
            return Err(ConfigError::FontBounds {
                min: self.min_font_px,
                max: self.max_font_px,
            });
        }
        if !(self.font_step_px.is_finite() && self.font_step_px > 0.0) {
            return Err(ConfigError::FontStep {
                step: self.font_step_px,
            });
        }
        if !(self.min_font_px..=self.max_font_px).contains(&self.base_font_px) {
            return Err(ConfigError::BaseFontOutOfBounds {
                base: self.base_font_px,
                min: self.min_font_px,
                max: self.max_font_px,
            });
        }
        if let Some((light, dark)) = self
            .color_map
            .iter()
            .find(|(light, dark)| !is_hex_color(light) || !is_hex_color(dark))
        {
            return Err(ConfigError::ColorMapping {
                light: light.clone(),
                dark: dark.clone(),
            });
        }
        Ok(())
    }
}

impl Default for A11yConfig {
    fn default() -> Self {
        Self {
            base_font_px: Self::default_base_font_px(),
            font_step_px: Self::default_font_step_px(),
            min_font_px: Self::default_min_font_px(),
            max_font_px: Self::default_max_font_px(),
            text_selectors: Self::default_text_selectors(),
            cookie_expiration_days: 0,
            color_map: Self::default_color_map(),
            speech_lang: Self::default_speech_lang(),
            read_aloud_debounce_ms: Self::default_read_aloud_debounce_ms(),
            read_aloud_min_chars: Self::default_read_aloud_min_chars(),
            toast_duration_ms: Self::default_toast_duration_ms(),
            desktop_breakpoint_px: Self::default_desktop_breakpoint_px(),
            locale: Self::default_locale(),
            log_level: Self::default_log_level(),
        }
    }
}
