//! Chart responsiveness.
//!
//! Every `.chart` fills its parent's width and is `chart_aspect` times as
//! tall. Sizes are applied at start-up and again once a burst of window
//! resizes has been quiet for `resize_debounce_ms`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::dom::{self, Page};
use crate::error::Result;
use crate::geometry::{chart_height, px};

pub const SELECTOR: &str = ".chart";

/// Resizes charts and owns the pending debounce timer.
#[derive(Debug, Clone)]
pub struct ChartSizer {
    page: Page,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl ChartSizer {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Sizes all charts now and re-sizes them after window resizes.
    ///
    /// # Errors
    ///
    /// Returns an error if the resize listener cannot be attached.
    pub fn install(page: &Page) -> Result<Self> {
        let sizer = Self::new(page.clone());
        sizer.resize_all();

        let handler = sizer.clone();
        dom::listen(&page.window, "resize", move |_| handler.schedule())?;
        Ok(sizer)
    }

    /// (Re)starts the quiet period. Replacing the stored timer drops, and
    /// thereby clears, the previous one.
    pub fn schedule(&self) {
        let sizer = self.clone();
        let timeout = Timeout::new(self.page.config.resize_debounce_ms, move || {
            sizer.resize_all();
        });
        *self.pending.borrow_mut() = Some(timeout);
    }

    /// Sizes every chart on the page. Returns how many were sized.
    pub fn resize_all(&self) -> usize {
        let charts = match self.page.query_all(SELECTOR) {
            Ok(charts) => charts,
            Err(err) => {
                warn!(%err, "chart lookup failed");
                return 0;
            }
        };
        let sized = charts
            .into_iter()
            .filter_map(|chart| chart.dyn_into::<HtmlElement>().ok())
            .filter(|chart| self.resize(chart))
            .count();
        debug!(sized, "charts resized");
        sized
    }

    /// Sizes one chart against its parent. Charts without a parent are skipped.
    pub fn resize(&self, chart: &HtmlElement) -> bool {
        let Some(parent) = chart.parent_element() else {
            return false;
        };
        let width = f64::from(parent.client_width());
        dom::set_style(chart, "width", "100%");
        dom::set_style(chart, "height", &px(chart_height(width, self.page.config.chart_aspect)));
        true
    }
}
