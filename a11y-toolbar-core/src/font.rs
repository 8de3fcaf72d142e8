//! Font scaling state
use crate::config::A11yConfig;

/// Parse a computed CSS length such as `"16px"` into pixels.
///
/// Returns `None` for anything that does not start with a positive finite
/// number.
#[must_use]
pub fn parse_css_px(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    number
        .parse::<f64>()
        .ok()
        .filter(|px| px.is_finite() && *px > 0.0)
}

/// Current and baseline body font size.
///
/// The current size never leaves `[min_px, max_px]`. The original size is
/// captured once from the page and serves as the 100% baseline until
/// [`FontScale::reset`].
#[derive(Debug, Clone, PartialEq)]
pub struct FontScale {
    current_px: f64,
    original_px: Option<f64>,
    base_px: f64,
    min_px: f64,
    max_px: f64,
}

impl FontScale {
    #[must_use]
    pub fn new(config: &A11yConfig) -> Self {
        Self {
            current_px: config.base_font_px,
            original_px: None,
            base_px: config.base_font_px,
            min_px: config.min_font_px,
            max_px: config.max_font_px,
        }
    }

    #[must_use]
    pub const fn current_px(&self) -> f64 {
        self.current_px
    }

    #[must_use]
    pub const fn original_px(&self) -> Option<f64> {
        self.original_px
    }

    #[must_use]
    pub const fn has_original(&self) -> bool {
        self.original_px.is_some()
    }

    fn clamp(&self, px: f64) -> f64 {
        px.max(self.min_px).min(self.max_px)
    }

    /// Record the page's own body size as the baseline. No-op once captured.
    ///
    /// A missing or unusable computed size falls back to the base size.
    pub fn capture_original(&mut self, computed_px: Option<f64>) {
        if self.original_px.is_some() {
            return;
        }
        let px = computed_px
            .filter(|px| px.is_finite() && *px > 0.0)
            .unwrap_or(self.base_px);
        self.original_px = Some(px);
        self.current_px = px;
    }

    pub fn adjust(&mut self, delta_px: f64) {
        let next = self.current_px + delta_px;
        if next.is_finite() {
            self.current_px = self.clamp(next);
        }
    }

    /// Adopt a previously persisted size.
    pub fn restore(&mut self, px: f64) {
        if px.is_finite() {
            self.current_px = self.clamp(px);
        }
    }

    /// Go back to the captured baseline (or the base size) and forget it.
    pub fn reset(&mut self) {
        self.current_px = self.original_px.take().unwrap_or(self.base_px);
    }

    /// `current / original`, used as the `em` multiplier.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.current_px / self.original_px.unwrap_or(self.base_px)
    }

    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.ratio() * 100.0
    }
}
