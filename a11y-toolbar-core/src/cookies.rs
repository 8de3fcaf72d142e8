//! Preference cookies
//!
//! Three flat cookies, no schema version. Reading is forgiving: a value that
//! does not parse is skipped and the matching field keeps whatever it held.
use crate::constants::{
    COOKIE_DARK_MODE, COOKIE_DATE_FORMAT, COOKIE_FONT_SIZE, COOKIE_HIGH_CONTRAST, COOKIE_PATH,
    MS_PER_DAY,
};
use chrono::{DateTime, Utc};

/// Values recovered from the cookie header. `None` means the cookie was
/// absent or unreadable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StoredPrefs {
    pub font_size_px: Option<f64>,
    pub high_contrast: Option<bool>,
    pub dark_mode: Option<bool>,
}

fn cookie_value<'a>(cookie: &'a str, name: &str) -> Option<&'a str> {
    let rest = cookie.strip_prefix(name)?.strip_prefix('=')?;
    Some(rest.split('=').next().unwrap_or_default())
}

/// Parse a `document.cookie` style header.
///
/// Returns `None` when none of the preference cookies is present; a present
/// but malformed font size still counts as found.
#[must_use]
pub fn parse_cookie_header(header: &str) -> Option<StoredPrefs> {
    let mut prefs = StoredPrefs::default();
    let mut found = false;
    for cookie in header.split(';').map(str::trim) {
        if let Some(raw) = cookie_value(cookie, COOKIE_FONT_SIZE) {
            found = true;
            match raw.trim().parse::<f64>() {
                Ok(px) if px.is_finite() => prefs.font_size_px = Some(px),
                _ => log::warn!("ignoring unreadable {COOKIE_FONT_SIZE} value `{raw}`"),
            }
        }
        if let Some(raw) = cookie_value(cookie, COOKIE_HIGH_CONTRAST) {
            found = true;
            prefs.high_contrast = Some(raw == "true");
        }
        if let Some(raw) = cookie_value(cookie, COOKIE_DARK_MODE) {
            found = true;
            prefs.dark_mode = Some(raw == "true");
        }
    }
    found.then_some(prefs)
}

/// Expiry instant for the given lifetime; zero days means a session cookie.
#[must_use]
pub fn expiry_from(now_ms: f64, days: u32) -> Option<DateTime<Utc>> {
    if days == 0 || !now_ms.is_finite() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let now = now_ms as i64;
    DateTime::from_timestamp_millis(now.saturating_add(i64::from(days) * MS_PER_DAY))
}

fn cookie_string(name: &str, value: &str, expires: Option<&DateTime<Utc>>) -> String {
    match expires {
        Some(at) => format!(
            "{name}={value};expires={};path={COOKIE_PATH}",
            at.format(COOKIE_DATE_FORMAT)
        ),
        None => format!("{name}={value};path={COOKIE_PATH}"),
    }
}

/// The three `document.cookie` assignments persisting the preferences.
#[must_use]
pub fn preference_cookies(
    font_size_px: f64,
    high_contrast: bool,
    dark_mode: bool,
    expires: Option<DateTime<Utc>>,
) -> [String; 3] {
    let expires = expires.as_ref();
    [
        cookie_string(COOKIE_FONT_SIZE, &font_size_px.to_string(), expires),
        cookie_string(COOKIE_HIGH_CONTRAST, &high_contrast.to_string(), expires),
        cookie_string(COOKIE_DARK_MODE, &dark_mode.to_string(), expires),
    ]
}
