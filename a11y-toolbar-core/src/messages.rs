//! User-facing toast messages
use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("pt", include_str!("../i18n/pt.json")),
    ("en", include_str!("../i18n/en.json")),
];

const FALLBACK_LOCALE: &str = "pt";

/// Message catalogue for the toast. Templates use `{name}` or `{{name}}`
/// placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    pub font_size: String,
    pub font_reset: String,
    pub contrast_on: String,
    pub contrast_off: String,
    pub dark_mode_on: String,
    pub dark_mode_off: String,
    pub read_aloud_on: String,
    pub read_aloud_off: String,
}

fn locale_value(lang: &str) -> Option<Value> {
    LOCALE_TABLE
        .iter()
        .find(|(code, _)| *code == lang)
        .and_then(|(_, raw)| serde_json::from_str(raw).ok())
}

/// Merge the top-level keys of `overlay` into `base`.
fn merge_objects(base: &mut Value, overlay: Value) {
    if let (Value::Object(base_map), Value::Object(overlay_map)) = (base, overlay) {
        for (key, value) in overlay_map {
            base_map.insert(key, value);
        }
    }
}

/// Substitute `{key}` and `{{key}}` placeholders.
#[must_use]
pub fn render(template: &str, args: &[(&str, &str)]) -> String {
    let mut text = template.to_string();
    for (k, v) in args {
        let ph1 = format!("{{{{{k}}}}}");
        let ph2 = format!("{{{k}}}");
        text = text.replace(&ph1, v);
        text = text.replace(&ph2, v);
    }
    text
}

impl Messages {
    /// Load the catalogue for `lang`.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownLocale`] when no catalogue ships for `lang`.
    pub fn for_lang(lang: &str) -> Result<Self, ConfigError> {
        Self::for_lang_with_overrides(lang, None)
    }

    /// Load the catalogue for `lang` and replace any keys present in the
    /// `overrides` JSON object.
    ///
    /// # Errors
    /// Returns [`ConfigError`] for an unknown locale or malformed overrides.
    pub fn for_lang_with_overrides(lang: &str, overrides: Option<&str>) -> Result<Self, ConfigError> {
        let mut value =
            locale_value(lang).ok_or_else(|| ConfigError::UnknownLocale(lang.to_string()))?;
        if let Some(raw) = overrides {
            let overlay: Value = serde_json::from_str(raw)?;
            merge_objects(&mut value, overlay);
        }
        Ok(serde_json::from_value(value)?)
    }

    #[must_use]
    pub fn font_size(&self, px: f64) -> String {
        let px = format!("{:.0}", px.round());
        render(&self.font_size, &[("px", &px)])
    }

    #[must_use]
    pub fn contrast(&self, enabled: bool) -> &str {
        if enabled {
            &self.contrast_on
        } else {
            &self.contrast_off
        }
    }

    #[must_use]
    pub fn dark_mode(&self, enabled: bool) -> &str {
        if enabled {
            &self.dark_mode_on
        } else {
            &self.dark_mode_off
        }
    }

    #[must_use]
    pub fn read_aloud(&self, enabled: bool) -> &str {
        if enabled {
            &self.read_aloud_on
        } else {
            &self.read_aloud_off
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        locale_value(FALLBACK_LOCALE)
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_else(|| Self {
                font_size: "Fonte: {px}px".to_string(),
                font_reset: "Fonte restaurada ao tamanho original".to_string(),
                contrast_on: "Alto contraste ativado".to_string(),
                contrast_off: "Alto contraste desativado".to_string(),
                dark_mode_on: "Modo escuro ativado".to_string(),
                dark_mode_off: "Modo escuro desativado".to_string(),
                read_aloud_on: "Leitura ativada".to_string(),
                read_aloud_off: "Leitura desativada".to_string(),
            })
    }
}
