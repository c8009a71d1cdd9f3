//! Smooth scrolling for in-page anchors.

use crate::debug;
use crate::dom::{AttrOp, EventKind, NodeId, Page, ScrollBehavior, ScrollTo, Selector};

/// Height of the fixed header, in css pixels.
pub const HEADER_OFFSET: f64 = 80.0;

const WIRED_KEY: &str = "smooth-scroll";

/// Scroll smoothly to the target of every `a[href^="#"]`, leaving room for
/// the fixed header.
///
/// A bare `#` keeps its default behavior. Any other fragment link is always
/// cancelled; when no element carries the fragment id nothing scrolls.
/// Returns the number of anchors wired by this call.
pub fn setup_smooth_scroll(page: &mut Page) -> usize {
    let selector = Selector::tag("a").with_attr_value("href", AttrOp::Prefix, "#");
    let mut wired = 0;

    for anchor in page.select(&selector) {
        if !page.mark_wired(anchor, WIRED_KEY) {
            continue;
        }
        page.add_event_listener(anchor, EventKind::Click, move |page, event| {
            let Some(href) = page.attr(anchor, "href").map(str::to_string) else {
                return;
            };
            if href == "#" || href.is_empty() {
                return;
            }
            event.prevent_default();
            if let Some(target) = fragment_target(page, &href) {
                let top = page.offset_top(target) - HEADER_OFFSET;
                page.window_mut().scroll_to(ScrollTo {
                    top,
                    behavior: ScrollBehavior::Smooth,
                });
            }
        });
        wired += 1;
    }

    debug!("scroll"; "smooth scrolling {wired} anchor(s)");
    wired
}

/// Element addressed by `#fragment`.
fn fragment_target(page: &Page, href: &str) -> Option<NodeId> {
    href.strip_prefix('#').and_then(|id| page.element_by_id(id))
}
