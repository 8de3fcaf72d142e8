//! CSS text generated into the injected style element
use crate::config::ColorMap;
use crate::constants::{CLASS_DARK_MODE, CLASS_HIGH_CONTRAST, FONT_VAR_PREFIX};
use crate::font::FontScale;
use std::fmt::Write as _;

/// Custom-property suffix for a selector: its ASCII letters and digits.
#[must_use]
pub fn selector_token(selector: &str) -> String {
    selector
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Root/body sizing plus one proportional rule per selector.
#[must_use]
pub fn font_css(font: &FontScale, selectors: &[String]) -> String {
    let mut css = format!(
        "html {{ font-size: {}% !important; }} body {{ font-size: {}px !important; }}",
        font.percentage(),
        font.current_px()
    );
    let ratio = font.ratio();
    for selector in selectors {
        let _ = write!(
            css,
            "{selector} {{ font-size: calc({ratio}em * var({FONT_VAR_PREFIX}{}, 1em)) !important; }}",
            selector_token(selector)
        );
    }
    css
}

/// Forced black/white scheme with yellow/cyan interactive elements.
#[must_use]
pub fn contrast_css() -> String {
    let c = CLASS_HIGH_CONTRAST;
    format!(
        "
body.{c}, body.{c} * {{ background-color: #000 !important; color: #fff !important; border-color: #fff !important; }}
body.{c} a, body.{c} button {{ color: #ffff00 !important; }}
body.{c} a:hover, body.{c} button:hover {{ color: #00ffff !important; }}
body.{c} img {{ filter: grayscale(100%) contrast(120%) !important; opacity: 0.8 !important; }}
body.{c} input, body.{c} textarea {{ background-color: #333 !important; color: #fff !important; border: 1px solid #fff !important; }}
body.{c} .header-wrapper-99, .rodape-99 {{ background-image: none !important; background-color: #000 !important; }}
"
    )
}

/// Dark theme plus literal inline-style overrides for every mapped colour.
///
/// The overrides are `[style*="..."]` substring selectors: they only hit
/// inline styles written exactly as `background-color: #rrggbb` or
/// `color: #rrggbb`, with that spacing and casing.
#[must_use]
pub fn dark_mode_css(colors: &ColorMap) -> String {
    let d = CLASS_DARK_MODE;
    let mut css = format!(
        "
body.{d} {{ background-color: #121212 !important; color: #e0e0e0 !important; }}
body.{d} h1, body.{d} h2, body.{d} h3, body.{d} h4, body.{d} h5, body.{d} h6 {{ color: #f5f5f5 !important; }}
body.{d} a {{ color: #90caf9 !important; }}
body.{d} a:hover {{ color: #42a5f5 !important; }}
body.{d} button, body.{d} input[type=\"button\"], body.{d} input[type=\"submit\"] {{ background-color: #333 !important; color: #e0e0e0 !important; border-color: #555 !important; }}
body.{d} img:not([src*=\".svg\"]) {{ filter: brightness(0.8) contrast(1.1) !important; }}
"
    );
    for (light, dark) in colors {
        let _ = writeln!(
            css,
            "body.{d} [style*=\"background-color: {light}\"] {{ background-color: {dark} !important; }}"
        );
        let _ = writeln!(
            css,
            "body.{d} [style*=\"color: {light}\"] {{ color: {dark} !important; }}"
        );
    }
    css
}

/// Ordered concatenation of the active style blocks: font, contrast, dark mode.
#[derive(Debug, Default, Clone)]
pub struct StyleBlocks {
    font: Option<String>,
    contrast: Option<String>,
    dark_mode: Option<String>,
}

impl StyleBlocks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_font(mut self, font: &FontScale, selectors: &[String]) -> Self {
        self.font = Some(font_css(font, selectors));
        self
    }

    #[must_use]
    pub fn with_contrast(mut self) -> Self {
        self.contrast = Some(contrast_css());
        self
    }

    #[must_use]
    pub fn with_dark_mode(mut self, colors: &ColorMap) -> Self {
        self.dark_mode = Some(dark_mode_css(colors));
        self
    }

    #[must_use]
    pub fn render(&self) -> String {
        [&self.font, &self.contrast, &self.dark_mode]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}
