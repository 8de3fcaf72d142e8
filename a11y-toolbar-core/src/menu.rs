//! Submenu geometry rules

/// Inline styles that keep a submenu from clipping or scrolling.
pub const UNCLAMPED_SUBMENU_STYLE: [(&str, &str); 3] = [
    ("overflow", "visible"),
    ("max-height", "none"),
    ("height", "auto"),
];

/// Inline styles anchoring a submenu to its parent's right edge.
pub const RIGHT_ANCHORED_SUBMENU_STYLE: [(&str, &str); 2] = [("left", "auto"), ("right", "0")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverAction {
    Keep,
    AnchorRight,
}

impl HoverAction {
    #[must_use]
    pub const fn styles(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Keep => &[],
            Self::AnchorRight => &RIGHT_ANCHORED_SUBMENU_STYLE,
        }
    }
}

/// Hover repositioning only applies on desktop-width viewports.
#[must_use]
pub fn is_desktop(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width >= breakpoint
}

#[must_use]
pub fn hover_action(submenu_right: f64, viewport_width: f64) -> HoverAction {
    if submenu_right > viewport_width {
        HoverAction::AnchorRight
    } else {
        HoverAction::Keep
    }
}
