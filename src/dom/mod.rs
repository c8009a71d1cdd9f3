//! In-memory page document.
//!
//! A small arena DOM: enough structure for the page binder and the
//! interaction helpers to run against real HTML, parsed with `tl` and written
//! back out unchanged apart from what was edited.
//!
//! | Module     | Purpose                                              |
//! |------------|------------------------------------------------------|
//! | `node`     | `Page` arena, tree edits, attributes, classes        |
//! | `html`     | HTML parsing (`tl`) and rendering                    |
//! | `selector` | Compound selectors (`a[href^="#"]`, `#id`, `.class`) |
//! | `style`    | Inline `style` declarations                          |
//! | `event`    | Listeners, dispatch with bubbling, `Window`          |

mod event;
mod html;
mod node;
mod selector;
mod style;

pub use event::{Event, EventKind, ScrollBehavior, ScrollTo, Window};
pub use node::{NodeId, Page};
pub use selector::{AttrOp, Selector};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("failed to parse html: {0}")]
    Parse(String),

    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },
}
