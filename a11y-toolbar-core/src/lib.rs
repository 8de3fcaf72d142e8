//! Accessibility toolbar engine
//!
//! Platform-agnostic core for the site accessibility toolbar and menu fixer.
//! Everything that touches the browser goes through the [`Page`] and
//! [`TimerHost`] traits, so font math, CSS generation and cookie handling
//! run (and test) without a DOM.

pub mod config;
pub mod constants;
pub mod controller;
pub mod cookies;
pub mod css;
pub mod font;
pub mod menu;
pub mod messages;
pub mod page;
pub mod read_aloud;
pub mod timer;

pub use config::{A11yConfig, ColorMap, ConfigError};
pub use controller::{A11yController, A11yState, StateSnapshot};
pub use cookies::{StoredPrefs, parse_cookie_header, preference_cookies};
pub use css::{StyleBlocks, contrast_css, dark_mode_css, font_css};
pub use font::{FontScale, parse_css_px};
pub use menu::{HoverAction, hover_action, is_desktop};
pub use messages::Messages;
pub use page::Page;
pub use read_aloud::speakable_text;
pub use timer::{SingleShot, TimerHost};
