//! Smooth scrolling: in-page anchor links, the scroll indicator, target
//! highlighting and the scroll-to-top control.
//!
//! All animations on the window go through one [`ScrollDriver`], which owns a
//! single [`AnimationSlot`]. Starting an animation cancels the one in flight;
//! the cancelled animation stops at its next frame and runs its completion
//! callback with [`Outcome::Cancelled`].

use std::cell::RefCell;
use std::rc::Rc;

use glide::{AnimationSlot, Clock, Token, Tween};
use gloo_timers::callback::Timeout;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, HtmlElement, Window};

use crate::dom::{self, Page};
use crate::error::{DomResultExt, Result};
use crate::geometry::{fragment_target, scroll_top_visible};

/// In-page links.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const INDICATOR_CLASS: &str = "scroll-indicator";
pub const FOCUS_CLASS: &str = "scroll-focus";
pub const SCROLL_TOP_CLASS: &str = "scroll-top";
pub const VISIBLE_CLASS: &str = "visible";

/// How an animation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The animation reached its target.
    Completed,
    /// Another animation took over the window first.
    Cancelled,
}

type OnFinish = Box<dyn FnOnce(Outcome)>;

/// Drives the window's vertical scroll offset, one animation at a time.
#[derive(Debug, Clone)]
pub struct ScrollDriver {
    window: Window,
    slot: Rc<RefCell<AnimationSlot>>,
    duration_ms: f64,
}

impl ScrollDriver {
    pub fn new(window: Window, duration_ms: f64) -> Self {
        Self {
            window,
            slot: Rc::new(RefCell::new(AnimationSlot::new())),
            duration_ms,
        }
    }

    /// True while an animation owns the window.
    pub fn is_animating(&self) -> bool {
        !self.slot.borrow().is_idle()
    }

    /// Animates from the current offset to `target_y`, cancelling any
    /// animation already running. `on_finish` runs exactly once.
    pub fn animate_to(&self, target_y: f64, on_finish: impl FnOnce(Outcome) + 'static) -> Token {
        let from = self.window.scroll_y().unwrap_or(0.0);
        let token = self.slot.borrow_mut().start();
        debug!(from, to = target_y, generation = token.generation(), "scroll animation started");
        Flight {
            window: self.window.clone(),
            slot: Rc::clone(&self.slot),
            token,
            tween: Tween::new(from, target_y, self.duration_ms),
            clock: Clock::new(),
            on_finish: Some(Box::new(on_finish)),
        }
        .schedule();
        token
    }

    /// Stops whatever animation is running.
    pub fn cancel(&self) {
        self.slot.borrow_mut().cancel();
    }
}

/// One in-flight scroll animation, moved from frame callback to frame callback.
struct Flight {
    window: Window,
    slot: Rc<RefCell<AnimationSlot>>,
    token: Token,
    tween: Tween,
    clock: Clock,
    on_finish: Option<OnFinish>,
}

impl Flight {
    fn schedule(self) {
        let window = self.window.clone();
        let slot = Rc::clone(&self.slot);
        let token = self.token;
        let callback = Closure::once_into_js(move |timestamp: f64| self.step(timestamp));
        if let Err(err) = window
            .request_animation_frame(callback.unchecked_ref())
            .dom("requestAnimationFrame")
        {
            warn!(%err, "scroll animation aborted");
            slot.borrow_mut().finish(token);
        }
    }

    fn step(mut self, timestamp: f64) {
        if !self.slot.borrow().is_current(self.token) {
            self.finish(Outcome::Cancelled);
            return;
        }
        let sample = self.tween.sample(self.clock.elapsed(timestamp));
        self.window.scroll_to_with_x_and_y(0.0, sample.value);
        if sample.done {
            self.slot.borrow_mut().finish(self.token);
            self.finish(Outcome::Completed);
        } else {
            self.schedule();
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        debug!(?outcome, generation = self.token.generation(), "scroll animation ended");
        if let Some(on_finish) = self.on_finish.take() {
            on_finish(outcome);
        }
    }
}

/// Attaches smooth scrolling to in-page links.
///
/// Returns the number of listeners added.
///
/// # Errors
///
/// Returns an error if a listener cannot be attached.
pub fn install_anchors(page: &Page, driver: &ScrollDriver) -> Result<usize> {
    if page.config.delegated {
        let handler_page = page.clone();
        let handler_driver = driver.clone();
        dom::listen(&page.document, "click", move |event: Event| {
            let anchor = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| element.closest(ANCHOR_SELECTOR).ok().flatten());
            if let Some(anchor) = anchor {
                on_anchor_click(&handler_page, &handler_driver, &anchor, &event);
            }
        })?;
        debug!("anchor scrolling delegated to document");
        return Ok(1);
    }

    let mut bound = 0;
    for anchor in page.query_all(ANCHOR_SELECTOR)? {
        if !dom::mark(&anchor, dom::ANCHOR)? {
            continue;
        }
        let handler_page = page.clone();
        let handler_driver = driver.clone();
        let handler_anchor = anchor.clone();
        dom::listen(&anchor, "click", move |event: Event| {
            on_anchor_click(&handler_page, &handler_driver, &handler_anchor, &event);
        })?;
        bound += 1;
    }
    debug!(bound, "anchor scrolling bound");
    Ok(bound)
}

/// Handles a click on an in-page link.
///
/// Default navigation is always prevented. The bare `#` link and links
/// whose target id is not on the page do nothing else. Returns whether an
/// animation started.
pub fn on_anchor_click(
    page: &Page,
    driver: &ScrollDriver,
    anchor: &Element,
    event: &Event,
) -> bool {
    event.prevent_default();
    let href = anchor.get_attribute("href").unwrap_or_default();
    let Some(target) = fragment_target(&href).and_then(|id| page.document.get_element_by_id(id))
    else {
        return false;
    };
    match scroll_to_element(page, driver, &target) {
        Ok(()) => true,
        Err(err) => {
            warn!(%err, href, "anchor scroll failed");
            false
        }
    }
}

/// Scrolls to `target` with the indicator showing, then highlights it.
///
/// # Errors
///
/// Returns an error if the indicator cannot be created.
pub fn scroll_to_element(page: &Page, driver: &ScrollDriver, target: &Element) -> Result<()> {
    let indicator = show_indicator(page)?;
    let target_y = dom::rect(target).top + page.scroll_y();
    let highlight_ms = page.config.highlight_ms;
    let target = target.clone();
    driver.animate_to(target_y, move |outcome| {
        indicator.remove();
        if outcome == Outcome::Completed {
            highlight(&target, highlight_ms);
        }
    });
    Ok(())
}

fn show_indicator(page: &Page) -> Result<HtmlElement> {
    let indicator = page.create("div", INDICATOR_CLASS)?;
    page.body()?.append_child(&indicator).dom("appendChild")?;
    Ok(indicator)
}

/// Applies the `scroll-focus` class for `duration_ms`.
pub fn highlight(target: &Element, duration_ms: u32) {
    if target.class_list().add_1(FOCUS_CLASS).is_err() {
        return;
    }
    let target = target.clone();
    Timeout::new(duration_ms, move || {
        let _ = target.class_list().remove_1(FOCUS_CLASS);
    })
    .forget();
}

/// The floating scroll-to-top control.
#[derive(Debug, Clone)]
pub struct ScrollTopButton {
    element: HtmlElement,
}

impl ScrollTopButton {
    /// Creates the control, appends it to `<body>` and starts tracking the
    /// scroll offset.
    ///
    /// # Errors
    ///
    /// Returns an error if the control cannot be created or its listeners
    /// cannot be attached.
    pub fn install(page: &Page, driver: &ScrollDriver) -> Result<Self> {
        let element = page.create("button", SCROLL_TOP_CLASS)?;
        element.set_inner_text("\u{2191}");
        element.set_title("Scroll to top");
        page.body()?.append_child(&element).dom("appendChild")?;

        let click_driver = driver.clone();
        dom::listen(&element, "click", move |_| {
            click_driver.animate_to(0.0, |_| {});
        })?;

        let control = Self { element };
        let scroll_page = page.clone();
        let scroll_control = control.clone();
        dom::listen(&page.window, "scroll", move |_| {
            scroll_control.sync(&scroll_page);
        })?;
        control.sync(page);
        Ok(control)
    }

    /// Shows the control iff the page is scrolled past the threshold.
    pub fn sync(&self, page: &Page) -> bool {
        let visible = scroll_top_visible(page.scroll_y(), page.config.scroll_top_threshold);
        let _ = self
            .element
            .class_list()
            .toggle_with_force(VISIBLE_CLASS, visible);
        visible
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    pub fn is_visible(&self) -> bool {
        self.element.class_list().contains(VISIBLE_CLASS)
    }
}
