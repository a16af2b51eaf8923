//! Mobile navigation toggle.
//!
//! Clicking `.mobile-menu-button` flips the `active` class on the button,
//! `.navbar-links` and `.navbar-user`. Any of the three may be missing.

use tracing::debug;
use web_sys::Element;

use crate::dom::{self, Page};
use crate::error::Result;

pub const MENU_BUTTON: &str = ".mobile-menu-button";
pub const NAV_LINKS: &str = ".navbar-links";
pub const NAV_USER: &str = ".navbar-user";
pub const ACTIVE: &str = "active";

/// Binds the toggle. Returns `false` when the page has no menu button.
///
/// # Errors
///
/// Returns an error if the listener cannot be attached.
pub fn install(page: &Page) -> Result<bool> {
    let Some(button) = page.query(MENU_BUTTON) else {
        debug!("no mobile menu button; navigation toggle inert");
        return Ok(false);
    };
    if !dom::mark(&button, dom::NAV)? {
        return Ok(true);
    }

    let handler_page = page.clone();
    let handler_button = button.clone();
    dom::listen(&button, "click", move |_| {
        let toggled = toggle(&handler_page, &handler_button);
        debug!(toggled, "navigation toggled");
    })?;
    Ok(true)
}

/// Flips `active` on the button and whichever panels exist.
/// Returns how many elements were toggled.
pub fn toggle(page: &Page, button: &Element) -> usize {
    let panels = [page.query(NAV_LINKS), page.query(NAV_USER)];
    std::iter::once(button.clone())
        .chain(panels.into_iter().flatten())
        .filter(|element| element.class_list().toggle(ACTIVE).is_ok())
        .count()
}
