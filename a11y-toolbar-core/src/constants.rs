//! Names shared with the host page.
//!
//! Cookie keys, element ids and class names are part of the page contract:
//! existing markup, stylesheets and stored cookies depend on them, so they
//! only change together with the site theme.

// Cookies ------------------------------------------------------------------
pub const COOKIE_FONT_SIZE: &str = "acessibilidade_tamanhoFonte";
pub const COOKIE_HIGH_CONTRAST: &str = "acessibilidade_altoContraste";
pub const COOKIE_DARK_MODE: &str = "acessibilidade_modoDark";
pub const COOKIE_PATH: &str = "/";
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
pub const COOKIE_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

// Generated elements -------------------------------------------------------
pub const STYLE_ELEMENT_ID: &str = "estilo-acessibilidade";
pub const TOAST_ELEMENT_ID: &str = "acessibilidade-feedback";
pub const TOAST_CSS: &str = "position: fixed; bottom: 20px; right: 20px; \
background-color: #004366; color: white; padding: 10px 20px; border-radius: 5px; \
z-index: 9999; opacity: 0; transition: opacity 0.3s ease; font-size: 16px;";

// Body classes -------------------------------------------------------------
pub const CLASS_HIGH_CONTRAST: &str = "alto-contraste";
pub const CLASS_DARK_MODE: &str = "modo-dark";

// Font scaling -------------------------------------------------------------
pub const DEFAULT_BASE_FONT_PX: f64 = 12.0;
pub const DEFAULT_FONT_STEP_PX: f64 = 0.5;
pub const DEFAULT_MIN_FONT_PX: f64 = 12.0;
pub const DEFAULT_MAX_FONT_PX: f64 = 28.0;
pub const FONT_VAR_PREFIX: &str = "--tamanho-original-";

// Timing -------------------------------------------------------------------
pub const DEFAULT_READ_ALOUD_DEBOUNCE_MS: u32 = 800;
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;
pub const DEFAULT_READ_ALOUD_MIN_CHARS: usize = 3;
pub const DEFAULT_SPEECH_LANG: &str = "pt-BR";

// Menu ---------------------------------------------------------------------
pub const MENU_SUBMENU_SELECTOR: &str = ".menu-nav-list-sjp-99 .sub-menu";
pub const MENU_PARENT_ITEM_SELECTOR: &str = ".menu-nav-list-sjp-99 > li.menu-item-has-children";
pub const SUBMENU_SELECTOR: &str = ".sub-menu";
pub const DEFAULT_DESKTOP_BREAKPOINT_PX: f64 = 992.0;

// Page overrides -----------------------------------------------------------
pub const CONFIG_OVERRIDE_ELEMENT_ID: &str = "a11y-toolbar-config";
pub const MESSAGES_OVERRIDE_ELEMENT_ID: &str = "a11y-toolbar-messages";
