//! Accessibility controller
//!
//! Owns the toolbar configuration and state and applies every operation to
//! a [`Page`]. Deferred work (toast fade, read-aloud debounce) goes through
//! a [`TimerHost`] with one [`SingleShot`] slot each.
use crate::config::A11yConfig;
use crate::constants::{CLASS_DARK_MODE, CLASS_HIGH_CONTRAST};
use crate::cookies::{StoredPrefs, expiry_from, parse_cookie_header, preference_cookies};
use crate::css::StyleBlocks;
use crate::font::FontScale;
use crate::messages::Messages;
use crate::page::Page;
use crate::read_aloud::speakable_text;
use crate::timer::{SingleShot, TimerHost};
use serde::Serialize;

/// Mutable toolbar state.
#[derive(Debug, Clone, PartialEq)]
pub struct A11yState {
    pub font: FontScale,
    pub high_contrast: bool,
    pub dark_mode: bool,
    pub read_aloud: bool,
    /// Pointer moves are ignored while set.
    pub speaking: bool,
    /// Whether font rules belong in the injected stylesheet. Set by font
    /// adjustments and restores, cleared by reset and mode toggles.
    pub font_applied: bool,
}

impl A11yState {
    #[must_use]
    pub fn new(config: &A11yConfig) -> Self {
        Self {
            font: FontScale::new(config),
            high_contrast: false,
            dark_mode: false,
            read_aloud: false,
            speaking: false,
            font_applied: false,
        }
    }
}

/// Serializable view of the state for page scripts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    pub font_size_px: f64,
    pub original_font_size_px: Option<f64>,
    pub high_contrast: bool,
    pub dark_mode: bool,
    pub read_aloud: bool,
}

pub struct A11yController<P, T: TimerHost> {
    config: A11yConfig,
    messages: Messages,
    state: A11yState,
    page: P,
    timers: T,
    toast_fade: SingleShot<T::Handle>,
    read_aloud_debounce: SingleShot<T::Handle>,
}

fn speak_now<P: Page>(page: &P, text: &str, lang: &str) {
    if !page.speech_available() {
        return;
    }
    page.cancel_speech();
    page.speak(text, lang);
}

impl<P, T> A11yController<P, T>
where
    P: Page + Clone + 'static,
    T: TimerHost,
{
    #[must_use]
    pub fn new(config: A11yConfig, messages: Messages, page: P, timers: T) -> Self {
        let state = A11yState::new(&config);
        Self {
            config,
            messages,
            state,
            page,
            timers,
            toast_fade: SingleShot::new(),
            read_aloud_debounce: SingleShot::new(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &A11yConfig {
        &self.config
    }

    #[must_use]
    pub const fn state(&self) -> &A11yState {
        &self.state
    }

    #[must_use]
    pub const fn page(&self) -> &P {
        &self.page
    }

    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            font_size_px: self.state.font.current_px(),
            original_font_size_px: self.state.font.original_px(),
            high_contrast: self.state.high_contrast,
            dark_mode: self.state.dark_mode,
            read_aloud: self.state.read_aloud,
        }
    }

    /// Capture the page baseline, create the style element and re-apply
    /// stored preferences. Returns whether any preference cookie was found.
    pub fn initialize(&mut self) -> bool {
        self.capture_original_font();
        self.page.ensure_style();
        let restored = self.read_configuration();
        if restored {
            self.state.font.adjust(0.0);
            self.state.font_applied = true;
            self.page
                .set_body_class(CLASS_HIGH_CONTRAST, self.state.high_contrast);
            self.page.set_body_class(CLASS_DARK_MODE, self.state.dark_mode);
            self.render_styles();
            self.save_configuration();
        }
        log::debug!("accessibility toolbar initialised (restored: {restored})");
        restored
    }

    fn capture_original_font(&mut self) {
        if !self.state.font.has_original() {
            let computed = self.page.body_font_size_px();
            self.state.font.capture_original(computed);
        }
    }

    /// Regenerate the whole injected stylesheet from the current state.
    fn render_styles(&self) {
        self.page.set_style_text(&self.stylesheet());
    }

    /// Current stylesheet text as it would be injected.
    #[must_use]
    pub fn stylesheet(&self) -> String {
        let mut blocks = StyleBlocks::new();
        if self.state.font_applied {
            blocks = blocks.with_font(&self.state.font, &self.config.text_selectors);
        }
        if self.state.high_contrast {
            blocks = blocks.with_contrast();
        }
        if self.state.dark_mode {
            blocks = blocks.with_dark_mode(&self.config.color_map);
        }
        blocks.render()
    }

    pub fn adjust_font(&mut self, delta_px: f64) {
        self.capture_original_font();
        self.state.font.adjust(delta_px);
        self.state.font_applied = true;
        log::debug!(
            "font adjusted by {delta_px} to {}px",
            self.state.font.current_px()
        );
        self.render_styles();
        self.save_configuration();
        let message = self.messages.font_size(self.state.font.current_px());
        self.show_feedback(&message);
    }

    /// One configured step larger.
    pub fn increase_font(&mut self) {
        self.adjust_font(self.config.font_step_px);
    }

    /// One configured step smaller.
    pub fn decrease_font(&mut self) {
        self.adjust_font(-self.config.font_step_px);
    }

    pub fn reset_font(&mut self) {
        self.state.font.reset();
        self.state.font_applied = false;
        self.page.remove_style();
        self.save_configuration();
        let message = self.messages.font_reset.clone();
        self.show_feedback(&message);
    }

    pub fn toggle_contrast(&mut self) {
        self.state.high_contrast = !self.state.high_contrast;
        if self.state.high_contrast && self.state.dark_mode {
            self.state.dark_mode = false;
            self.page.set_body_class(CLASS_DARK_MODE, false);
        }
        self.page
            .set_body_class(CLASS_HIGH_CONTRAST, self.state.high_contrast);
        log::debug!("high contrast: {}", self.state.high_contrast);
        self.state.font_applied = false;
        self.render_styles();
        self.save_configuration();
        let message = self.messages.contrast(self.state.high_contrast).to_string();
        self.show_feedback(&message);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.state.dark_mode = !self.state.dark_mode;
        if self.state.dark_mode && self.state.high_contrast {
            self.state.high_contrast = false;
            self.page.set_body_class(CLASS_HIGH_CONTRAST, false);
        }
        self.page.set_body_class(CLASS_DARK_MODE, self.state.dark_mode);
        log::debug!("dark mode: {}", self.state.dark_mode);
        self.state.font_applied = false;
        self.render_styles();
        self.save_configuration();
        let message = self.messages.dark_mode(self.state.dark_mode).to_string();
        self.show_feedback(&message);
    }

    pub fn toggle_read_aloud(&mut self) {
        self.state.read_aloud = !self.state.read_aloud;
        let message = self.messages.read_aloud(self.state.read_aloud).to_string();
        self.show_feedback(&message);
        if !self.state.read_aloud {
            self.read_aloud_debounce.cancel(&self.timers);
            if self.page.speech_available() {
                self.page.cancel_speech();
            }
        }
    }

    /// Restart the read-aloud debounce for the latest pointer position.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if !self.state.read_aloud || self.state.speaking {
            return;
        }
        let page = self.page.clone();
        let lang = self.config.speech_lang.clone();
        let min_chars = self.config.read_aloud_min_chars;
        self.read_aloud_debounce.schedule(
            &self.timers,
            self.config.read_aloud_debounce_ms,
            Box::new(move || {
                if let Some(text) = page
                    .text_at_point(x, y)
                    .and_then(|raw| speakable_text(&raw, min_chars))
                {
                    speak_now(&page, &text, &lang);
                }
            }),
        );
    }

    /// Speak `text` immediately, replacing any utterance in progress.
    pub fn read_text(&self, text: &str) {
        speak_now(&self.page, text, &self.config.speech_lang);
    }

    pub fn save_configuration(&self) {
        let expires = expiry_from(self.page.now_ms(), self.config.cookie_expiration_days);
        for cookie in preference_cookies(
            self.state.font.current_px(),
            self.state.high_contrast,
            self.state.dark_mode,
            expires,
        ) {
            self.page.write_cookie(&cookie);
        }
    }

    /// Pull preferences from the page cookies into the state.
    /// Returns whether any preference cookie was present.
    pub fn read_configuration(&mut self) -> bool {
        let Some(prefs) = parse_cookie_header(&self.page.cookie_header()) else {
            return false;
        };
        self.apply_stored(prefs);
        true
    }

    fn apply_stored(&mut self, prefs: StoredPrefs) {
        if let Some(px) = prefs.font_size_px {
            self.state.font.restore(px);
        }
        if let Some(on) = prefs.high_contrast {
            self.state.high_contrast = on;
        }
        if let Some(on) = prefs.dark_mode {
            self.state.dark_mode = on;
        }
        if self.state.high_contrast && self.state.dark_mode {
            log::warn!("both contrast and dark mode stored; keeping high contrast");
            self.state.dark_mode = false;
        }
    }

    /// Show `message` in the toast and restart its fade timer.
    pub fn show_feedback(&mut self, message: &str) {
        self.page.show_toast(message);
        let page = self.page.clone();
        self.toast_fade.schedule(
            &self.timers,
            self.config.toast_duration_ms,
            Box::new(move || page.fade_toast()),
        );
    }
}
