//! The injected style sheet.

use tracing::debug;
use web_sys::{Document, Element};

use crate::error::{DomResultExt, Error, Result};

/// Id of the `<style>` element holding the page effect rules.
pub const STYLE_ID: &str = "pagefx-styles";

/// Rules for ripples, table wrappers, the scroll indicator, the scroll-to-top
/// control, scroll highlights and chart transitions.
pub const CSS: &str = r"
    .ripple {
        position: absolute;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.5);
        transform: scale(0);
        animation: ripple 0.6s linear;
        pointer-events: none;
    }

    @keyframes ripple {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }

    .table-responsive {
        margin: 1em 0;
        box-shadow: var(--box-shadow);
        border-radius: var(--border-radius);
    }

    .scroll-indicator {
        position: fixed;
        top: 50%;
        right: 20px;
        width: 10px;
        height: 10px;
        border-radius: 50%;
        background: var(--accent-color);
        animation: pulse 1s infinite;
        z-index: 1000;
    }

    .scroll-top {
        position: fixed;
        bottom: 20px;
        right: 20px;
        width: 40px;
        height: 40px;
        border-radius: 50%;
        background: var(--accent-color);
        color: white;
        border: none;
        cursor: pointer;
        opacity: 0;
        transition: opacity 0.3s ease, transform 0.3s ease;
        transform: translateY(20px);
        z-index: 1000;
    }

    .scroll-top.visible {
        opacity: 1;
        transform: translateY(0);
    }

    .scroll-top:hover {
        transform: translateY(-5px);
    }

    .scroll-focus {
        animation: highlight 1s ease;
    }

    @keyframes pulse {
        0% { transform: scale(1); opacity: 1; }
        50% { transform: scale(1.5); opacity: 0.5; }
        100% { transform: scale(1); opacity: 1; }
    }

    @keyframes highlight {
        0% { background-color: transparent; }
        50% { background-color: rgba(52, 152, 219, 0.1); }
        100% { background-color: transparent; }
    }

    @media (max-width: 768px) {
        .table-responsive {
            margin: 0.5em -15px;
            padding: 0 15px;
        }
    }

    .chart {
        transition: width 0.3s ease, height 0.3s ease;
    }
";

/// Handle to the installed `<style>` element.
///
/// Constructed once by the page controller. Installing into a document that
/// already carries the sheet adopts the existing element.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    element: Element,
}

impl StyleSheet {
    /// Appends the sheet to `<head>` (or the root element when there is no head).
    ///
    /// # Errors
    ///
    /// Returns an error if the element cannot be created or inserted.
    pub fn install(document: &Document) -> Result<Self> {
        if let Some(element) = document.get_element_by_id(STYLE_ID) {
            debug!("adopting existing style sheet");
            return Ok(Self { element });
        }

        let element = document.create_element("style").dom("createElement")?;
        element.set_id(STYLE_ID);
        element.set_text_content(Some(CSS));

        let parent: Element = match document.head() {
            Some(head) => head.into(),
            None => document.document_element().ok_or(Error::NoDocument)?,
        };
        parent.append_child(&element).dom("appendChild")?;
        debug!(bytes = CSS.len(), "installed style sheet");
        Ok(Self { element })
    }

    /// The `<style>` element.
    pub fn element(&self) -> &Element {
        &self.element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_every_effect() {
        for selector in [
            ".ripple",
            "@keyframes ripple",
            ".table-responsive",
            ".scroll-indicator",
            ".scroll-top.visible",
            ".scroll-top:hover",
            ".scroll-focus",
            "@keyframes pulse",
            "@keyframes highlight",
            "@media (max-width: 768px)",
            ".chart",
        ] {
            assert!(CSS.contains(selector), "missing {selector}");
        }
    }

    #[test]
    fn test_braces_balanced() {
        let open = CSS.matches('{').count();
        let close = CSS.matches('}').count();
        assert_eq!(open, close);
    }
}
