//! Mobile menu toggle.

use crate::debug;
use crate::dom::{EventKind, Page, Selector};

pub const TOGGLE_FLAG: &str = "data-mobile-toggle";
pub const MENU_FLAG: &str = "data-mobile-menu";

/// Class toggled on both the menu and its toggle.
pub const ACTIVE_CLASS: &str = "active";

/// Make the first `[data-mobile-toggle]` open and close the first
/// `[data-mobile-menu]`.
///
/// Returns 1 when the toggle was wired by this call, 0 when either element
/// is missing or it was wired before.
pub fn setup_mobile_menu(page: &mut Page) -> usize {
    let toggle = page.select_first(&Selector::has_attr(TOGGLE_FLAG));
    let menu = page.select_first(&Selector::has_attr(MENU_FLAG));
    let (Some(toggle), Some(menu)) = (toggle, menu) else {
        debug!("menu"; "no mobile menu on this page");
        return 0;
    };
    if !page.mark_wired(toggle, TOGGLE_FLAG) {
        return 0;
    }

    page.add_event_listener(toggle, EventKind::Click, move |page, _| {
        page.toggle_class(menu, ACTIVE_CLASS);
        page.toggle_class(toggle, ACTIVE_CLASS);
    });
    1
}
