//! Scroll-position behaviors: the floating top button and in-page
//! anchor links.

/// Vertical offset above which the floating button shows.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// A smooth-scroll request for the embedder to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollCue {
    /// Animate back to the document top.
    ToTop,
    /// Animate to the section registered under this id.
    ToSection(String),
    /// Bring the signup confirmation panel into view.
    ToSuccessPanel,
}

/// Floating scroll-to-top control.
///
/// Visibility is derived state, recomputed from the raw offset on every
/// scroll event with no debouncing or hysteresis.
#[derive(Debug, Default)]
pub struct ScrollToTopButton {
    visible: bool,
}

impl ScrollToTopButton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute visibility for the current vertical offset and return
    /// it. Strictly greater than the threshold: at exactly 300 the
    /// button stays hidden.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.visible = offset > SCROLL_TOP_THRESHOLD;
        self.visible
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// A click always requests an animated scroll to the top, whatever
    /// the current offset.
    pub fn click(&self) -> ScrollCue {
        ScrollCue::ToTop
    }
}

/// What to do with a click on a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorAction {
    /// Not an in-page fragment, or the bare root `#`: leave the click
    /// to default navigation.
    Browser,
    /// Intercepted, but no registered section matches; nothing scrolls.
    Intercepted,
    /// Intercepted; smooth-scroll to the named section.
    ScrollTo(String),
}

/// Resolve a click on a link with the given `href`.
///
/// Fragment links are intercepted and handled in-page; the bare `#` is
/// passed through untouched.
pub fn resolve_anchor(href: &str, section_exists: impl Fn(&str) -> bool) -> AnchorAction {
    let Some(fragment) = href.strip_prefix('#') else {
        return AnchorAction::Browser;
    };
    if fragment.is_empty() {
        return AnchorAction::Browser;
    }
    if section_exists(fragment) {
        AnchorAction::ScrollTo(fragment.to_string())
    } else {
        AnchorAction::Intercepted
    }
}
