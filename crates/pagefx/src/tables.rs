//! Table responsiveness: row hover tint and horizontal-scroll wrappers.
//!
//! Both steps mark what they touch, so running them again (after new tables
//! were added to the page) only processes new tables and rows.

use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node};

use crate::dom::{self, Page};
use crate::error::{DomResultExt, Result};

pub const WRAPPER_CLASS: &str = "table-responsive";

/// What one pass over the page's tables did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableReport {
    pub wrapped: usize,
    pub rows: usize,
}

/// Binds row hover and wraps every table not processed yet.
///
/// # Errors
///
/// Returns an error if a listener or wrapper cannot be attached.
pub fn install(page: &Page) -> Result<TableReport> {
    let mut report = TableReport::default();
    for table in page.query_all("table")? {
        report.rows += bind_rows(page, &table)?;
        if dom::mark(&table, dom::WRAPPED)? && wrap(page, &table)?.is_some() {
            report.wrapped += 1;
        }
    }
    debug!(wrapped = report.wrapped, rows = report.rows, "tables processed");
    Ok(report)
}

/// Adds hover listeners to each unbound row of `table`.
fn bind_rows(page: &Page, table: &Element) -> Result<usize> {
    let rows = dom::elements(&table.query_selector_all("tr").dom("querySelectorAll")?);
    let mut bound = 0;
    for row in rows {
        let Ok(row) = row.dyn_into::<HtmlElement>() else {
            continue;
        };
        if !dom::mark(&row, dom::HOVER)? {
            continue;
        }

        let enter_row = row.clone();
        let transition = page.config.row_transition.clone();
        let color = page.config.row_hover_color.clone();
        dom::listen(&row, "mouseenter", move |_| {
            dom::set_style(&enter_row, "transition", &transition);
            dom::set_style(&enter_row, "background-color", &color);
        })?;

        let leave_row = row.clone();
        dom::listen(&row, "mouseleave", move |_| {
            dom::set_style(&leave_row, "background-color", "");
        })?;
        bound += 1;
    }
    Ok(bound)
}

/// Moves `table` into a new horizontally scrollable wrapper placed where
/// the table was. Detached tables are left alone.
///
/// # Errors
///
/// Returns an error if the wrapper cannot be created or inserted.
pub fn wrap(page: &Page, table: &Element) -> Result<Option<HtmlElement>> {
    let Some(parent) = table.parent_node() else {
        return Ok(None);
    };
    let wrapper = page.create("div", WRAPPER_CLASS)?;
    dom::set_style(&wrapper, "overflow-x", "auto");
    let anchor: &Node = table;
    parent
        .insert_before(&wrapper, Some(anchor))
        .dom("insertBefore")?;
    wrapper.append_child(table).dom("appendChild")?;
    Ok(Some(wrapper))
}
