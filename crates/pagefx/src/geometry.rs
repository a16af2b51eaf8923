//! Pure layout math used by the page behaviors.
//!
//! Kept free of browser types so it can be tested on the host.

/// An element's bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Size and offset of a ripple overlay inside its control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    /// Diameter; the larger of the control's width and height.
    pub size: f64,
    /// Offset from the control's left edge.
    pub left: f64,
    /// Offset from the control's top edge.
    pub top: f64,
}

impl RippleGeometry {
    /// Centers a ripple on the click point `(x, y)` within `rect`.
    pub fn from_click(rect: Rect, x: f64, y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            left: x - rect.left - size / 2.0,
            top: y - rect.top - size / 2.0,
        }
    }
}

/// Whether the scroll-to-top control should show at this offset.
pub fn scroll_top_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Chart height for a parent of the given width.
pub fn chart_height(parent_width: f64, aspect: f64) -> f64 {
    parent_width * aspect
}

/// The element id an in-page link points at.
///
/// Returns `None` for the bare `#` link and for anything that is not a
/// fragment link.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Formats a CSS pixel length.
pub fn px(value: f64) -> String {
    format!("{value}px")
}
