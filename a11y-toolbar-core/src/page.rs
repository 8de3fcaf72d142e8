//! The host page as seen by the controller
//!
//! Every method is best-effort: implementations swallow missing nodes or APIs
//! instead of reporting them, matching how the toolbar must behave on pages
//! it does not control.

pub trait Page {
    /// Computed body font size in pixels, if the page can report it.
    fn body_font_size_px(&self) -> Option<f64>;

    /// Create the injected style element if it does not exist yet.
    fn ensure_style(&self);

    /// Replace the injected style element's text, creating it on demand.
    fn set_style_text(&self, css: &str);

    /// Remove the injected style element entirely.
    fn remove_style(&self);

    fn set_body_class(&self, class: &str, enabled: bool);

    fn cookie_header(&self) -> String;

    fn write_cookie(&self, cookie: &str);

    /// Create the toast if needed, set its text and make it visible.
    fn show_toast(&self, message: &str);

    fn fade_toast(&self);

    /// Text content of the element under the viewport point.
    fn text_at_point(&self, x: f64, y: f64) -> Option<String>;

    fn speech_available(&self) -> bool;

    fn speak(&self, text: &str, lang: &str);

    fn cancel_speech(&self);

    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> f64;
}
