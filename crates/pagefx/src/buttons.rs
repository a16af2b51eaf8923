//! Button feedback: click ripples and the timed loading state.

use gloo_timers::callback::Timeout;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, MouseEvent};

use crate::dom::{self, Page};
use crate::error::{DomResultExt, Result};
use crate::geometry::{RippleGeometry, px};

/// Controls that get feedback.
pub const SELECTOR: &str = "button, .button";
/// Controls that match [`SELECTOR`] but are managed elsewhere.
pub const EXCLUDED: &str = ".scroll-top";
/// Attribute that opts a control into the loading state.
pub const LOADING_ATTR: &str = "data-loading";
pub const RIPPLE_CLASS: &str = "ripple";

/// Attaches click feedback.
///
/// In delegated mode a single document listener resolves the control at
/// dispatch time; otherwise every control present now is bound directly.
/// Returns the number of listeners added.
///
/// # Errors
///
/// Returns an error if a listener cannot be attached.
pub fn install(page: &Page) -> Result<usize> {
    if page.config.delegated {
        let handler_page = page.clone();
        dom::listen(&page.document, "click", move |event: Event| {
            let control = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| element.closest(SELECTOR).ok().flatten());
            if let Some(control) = control {
                if !control.matches(EXCLUDED).unwrap_or(false) {
                    on_click(&handler_page, &control, &event);
                }
            }
        })?;
        debug!("button feedback delegated to document");
        return Ok(1);
    }

    let mut bound = 0;
    for control in page.query_all(SELECTOR)? {
        if control.matches(EXCLUDED).unwrap_or(false) || !dom::mark(&control, dom::FEEDBACK)? {
            continue;
        }
        let handler_page = page.clone();
        let handler_control = control.clone();
        dom::listen(&control, "click", move |event: Event| {
            on_click(&handler_page, &handler_control, &event);
        })?;
        bound += 1;
    }
    debug!(bound, "button feedback bound");
    Ok(bound)
}

/// Handles one click on `control`: ripple first, then the loading state.
/// Disabled controls get neither.
pub fn on_click(page: &Page, control: &Element, event: &Event) {
    if dom::is_disabled(control) {
        return;
    }
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        let x = f64::from(mouse.client_x());
        let y = f64::from(mouse.client_y());
        if let Err(err) = spawn_ripple(page, control, x, y) {
            warn!(%err, "ripple failed");
        }
    }
    if wants_loading(control) {
        if let Err(err) = start_loading(page, control) {
            warn!(%err, "loading state failed");
        }
    }
}

/// Appends a ripple centered on `(x, y)`; it removes itself when its
/// animation ends. Several ripples may overlap on one control.
///
/// # Errors
///
/// Returns an error if the overlay cannot be created or attached.
pub fn spawn_ripple(page: &Page, control: &Element, x: f64, y: f64) -> Result<HtmlElement> {
    let ripple = page.create("span", RIPPLE_CLASS)?;
    control.append_child(&ripple).dom("appendChild")?;

    let geometry = RippleGeometry::from_click(dom::rect(control), x, y);
    let size = px(geometry.size);
    dom::set_style(&ripple, "width", &size);
    dom::set_style(&ripple, "height", &size);
    dom::set_style(&ripple, "left", &px(geometry.left));
    dom::set_style(&ripple, "top", &px(geometry.top));

    let overlay = ripple.clone();
    dom::listen_once(&ripple, "animationend", move || overlay.remove())?;
    Ok(ripple)
}

/// Whether the control opted into the loading state.
pub fn wants_loading(control: &Element) -> bool {
    control.get_attribute(LOADING_ATTR).as_deref() == Some("true")
}

/// Shows the loading label and disables `control`, restoring both after the
/// configured delay. The restore is unconditional.
///
/// # Errors
///
/// Returns an error if the control cannot be disabled. The label is still
/// restored on schedule.
pub fn start_loading(page: &Page, control: &Element) -> Result<()> {
    let original = control.text_content();
    control.set_text_content(Some(&page.config.loading_text));

    let restored = control.clone();
    Timeout::new(page.config.loading_ms, move || {
        restored.set_text_content(original.as_deref());
        if let Err(err) = dom::set_disabled(&restored, false) {
            warn!(%err, "could not re-enable control");
        }
    })
    .forget();

    dom::set_disabled(control, true)
}
