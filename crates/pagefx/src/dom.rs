//! Thin helpers over `web-sys` shared by the behaviors.

use std::rc::Rc;

use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlButtonElement, HtmlElement,
    HtmlInputElement, NodeList, Window,
};

use crate::config::PageConfig;
use crate::error::{DomResultExt, Error, Result};
use crate::geometry::Rect;

/// Marker set on the menu button once its toggle is bound.
pub const NAV: &str = "data-pagefx-nav";
/// Marker set on controls with direct click feedback (non-delegated mode).
pub const FEEDBACK: &str = "data-pagefx-feedback";
/// Marker set on in-page links bound directly (non-delegated mode).
pub const ANCHOR: &str = "data-pagefx-anchor";
/// Marker set on tables that were wrapped.
pub const WRAPPED: &str = "data-pagefx-wrapped";
/// Marker set on table rows with hover listeners.
pub const HOVER: &str = "data-pagefx-hover";

/// The window, document and configuration every behavior works against.
#[derive(Debug, Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub config: Rc<PageConfig>,
}

impl Page {
    /// Resolves the global window and document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoWindow`] or [`Error::NoDocument`] outside a browser page.
    pub fn current(config: PageConfig) -> Result<Self> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let document = window.document().ok_or(Error::NoDocument)?;
        Ok(Self {
            window,
            document,
            config: Rc::new(config),
        })
    }

    pub fn body(&self) -> Result<HtmlElement> {
        self.document.body().ok_or(Error::NoBody)
    }

    /// Every element matching `selector`, in document order.
    pub fn query_all(&self, selector: &str) -> Result<Vec<Element>> {
        let list = self
            .document
            .query_selector_all(selector)
            .dom("querySelectorAll")?;
        Ok(elements(&list))
    }

    /// The first element matching `selector`, if any.
    pub fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    /// Vertical scroll offset of the window, 0 if unavailable.
    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    /// Creates an element with the given class.
    pub fn create(&self, tag: &str, class: &str) -> Result<HtmlElement> {
        let element = self.document.create_element(tag).dom("createElement")?;
        element.set_class_name(class);
        element
            .dyn_into::<HtmlElement>()
            .map_err(|_| Error::Dom {
                op: "createElement",
                message: format!("<{tag}> is not an HTML element"),
            })
    }
}

/// Collects a `NodeList` into elements, skipping non-element nodes.
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Sets `marker` on `element`. Returns `false` if it was already set.
pub fn mark(element: &Element, marker: &str) -> Result<bool> {
    if element.has_attribute(marker) {
        return Ok(false);
    }
    element.set_attribute(marker, "").dom("setAttribute")?;
    Ok(true)
}

/// Whether a control is disabled, natively or by attribute.
pub fn is_disabled(element: &Element) -> bool {
    if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
        if button.disabled() {
            return true;
        }
    }
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        if input.disabled() {
            return true;
        }
    }
    element.has_attribute("disabled")
        || element.get_attribute("aria-disabled").as_deref() == Some("true")
}

/// Disables or re-enables a control.
///
/// Native buttons and inputs get their `disabled` property; every control
/// also gets `aria-disabled` so elements styled as buttons read as disabled.
pub fn set_disabled(element: &Element, disabled: bool) -> Result<()> {
    if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
    } else if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_disabled(disabled);
    } else if disabled {
        element.set_attribute("disabled", "").dom("setAttribute")?;
    } else {
        element.remove_attribute("disabled").dom("removeAttribute")?;
    }
    if disabled {
        element
            .set_attribute("aria-disabled", "true")
            .dom("setAttribute")
    } else {
        element
            .remove_attribute("aria-disabled")
            .dom("removeAttribute")
    }
}

/// Writes an inline style property, logging instead of failing.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value).dom("setProperty") {
        warn!(property, %err, "style write failed");
    }
}

/// Bounding box of `element` in viewport coordinates.
pub fn rect(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Adds a listener that lives as long as the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .dom("addEventListener")?;
    closure.forget();
    Ok(())
}

/// Adds a listener that is removed after its first call.
pub fn listen_once(
    target: &EventTarget,
    event: &str,
    handler: impl FnOnce() + 'static,
) -> Result<()> {
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let callback = Closure::once_into_js(handler);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.unchecked_ref(),
            &options,
        )
        .dom("addEventListener")
}
