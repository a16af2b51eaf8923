//! The page controller: wires every behavior up exactly once per page.

use std::cell::RefCell;

use tracing::{debug, info};

use crate::charts::ChartSizer;
use crate::config::PageConfig;
use crate::dom::Page;
use crate::error::Result;
use crate::log::init_logging;
use crate::scroll::{self, ScrollDriver, ScrollTopButton};
use crate::styles::StyleSheet;
use crate::tables::{self, TableReport};
use crate::{buttons, nav};

thread_local! {
    static CONTROLLER: RefCell<Option<PageController>> = const { RefCell::new(None) };
}

/// Owns the page's effect state: the style sheet, the scroll driver, the
/// scroll-to-top control and the chart sizer.
#[derive(Debug)]
pub struct PageController {
    page: Page,
    styles: StyleSheet,
    scroll: ScrollDriver,
    scroll_top: ScrollTopButton,
    charts: ChartSizer,
}

impl PageController {
    /// Installs the style sheet and every behavior.
    ///
    /// # Errors
    ///
    /// Returns an error if the page has no window, document or body, or if a
    /// listener cannot be attached.
    pub fn install(config: PageConfig) -> Result<Self> {
        let page = Page::current(config)?;
        // A failed start must leave nothing bound, so check for <body> before
        // any listener is attached.
        page.body()?;
        let styles = StyleSheet::install(&page.document)?;

        let menu = nav::install(&page)?;
        let buttons = buttons::install(&page)?;
        let tables = tables::install(&page)?;
        let charts = ChartSizer::install(&page)?;

        let scroll = ScrollDriver::new(page.window.clone(), page.config.scroll_duration_ms);
        let anchors = scroll::install_anchors(&page, &scroll)?;
        let scroll_top = ScrollTopButton::install(&page, &scroll)?;

        info!(
            menu,
            buttons,
            anchors,
            tables = tables.wrapped,
            delegated = page.config.delegated,
            "page effects ready"
        );
        Ok(Self {
            page,
            styles,
            scroll,
            scroll_top,
            charts,
        })
    }

    /// Processes tables and charts added since the last pass.
    ///
    /// # Errors
    ///
    /// Returns an error if a new table cannot be wrapped.
    pub fn refresh(&self) -> Result<TableReport> {
        let report = tables::install(&self.page)?;
        let charts = self.charts.resize_all();
        debug!(tables = report.wrapped, charts, "refreshed");
        Ok(report)
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    pub fn scroll(&self) -> &ScrollDriver {
        &self.scroll
    }

    pub fn scroll_top(&self) -> &ScrollTopButton {
        &self.scroll_top
    }

    pub fn charts(&self) -> &ChartSizer {
        &self.charts
    }
}

/// Creates the page controller on first call; later calls refresh it.
/// Returns `true` if this call created the controller.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or installation fails.
pub fn start(config: PageConfig) -> Result<bool> {
    if with_controller(|controller| controller.refresh()).transpose()?.is_some() {
        return Ok(false);
    }
    config.validate()?;
    init_logging(config.level_filter()?);
    let controller = PageController::install(config)?;
    CONTROLLER.with(|cell| *cell.borrow_mut() = Some(controller));
    Ok(true)
}

/// Runs `f` against the controller if the page has been started.
pub fn with_controller<R>(f: impl FnOnce(&PageController) -> R) -> Option<R> {
    CONTROLLER.with(|cell| cell.borrow().as_ref().map(f))
}

/// Whether [`start`] has installed the controller.
pub fn is_started() -> bool {
    CONTROLLER.with(|cell| cell.borrow().is_some())
}
