//! Single-expansion accordion controller.
//!
//! At most one item's detail block is visible across the whole rendered
//! list. Opening an item closes whatever was open; clicking the open item
//! closes it. The controller is rebuilt from request state on every
//! render, so there are no stale handlers to deduplicate.

/// Glyph shown on an expanded item's affordance.
pub const GLYPH_EXPANDED: &str = "\u{25be}"; // ▾
/// Glyph shown on a collapsed item's affordance.
pub const GLYPH_COLLAPSED: &str = "\u{25b8}"; // ▸

/// Tracks which item, if any, is expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionController {
    expanded: Option<String>,
}

impl AccordionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a controller from a previously rendered expansion key.
    pub fn with_expanded(key: Option<String>) -> Self {
        Self { expanded: key }
    }

    /// The key of the currently expanded item, if any.
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    /// True when the given item is the expanded one.
    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.as_deref() == Some(key)
    }

    /// Toggles an item. Opening it closes every other item first.
    /// Returns true when the item is now open.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.is_expanded(key) {
            self.expanded = None;
            false
        } else {
            self.expanded = Some(key.to_string());
            true
        }
    }

    /// Collapses everything; every re-render and category switch goes
    /// through here.
    pub fn collapse_all(&mut self) {
        self.expanded = None;
    }

    /// The affordance glyph for an item in the given state.
    pub fn glyph(expanded: bool) -> &'static str {
        if expanded {
            GLYPH_EXPANDED
        } else {
            GLYPH_COLLAPSED
        }
    }
}
