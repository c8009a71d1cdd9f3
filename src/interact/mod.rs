//! Page interaction wiring.
//!
//! | Function                | Elements                     | Event  |
//! |-------------------------|------------------------------|--------|
//! | [`setup_form_handlers`] | `[data-landing-form]`        | submit |
//! | [`setup_mobile_menu`]   | `[data-mobile-toggle]`       | click  |
//! | [`setup_smooth_scroll`] | `a[href^="#"]`               | click  |
//!
//! Each setup function marks the elements it wires, so running it again
//! only picks up elements added since.

mod form;
mod menu;
mod scroll;

pub use form::{
    FORM_FLAG, FormData, NoticeHandler, SubmissionHandler, SubmitError, THANK_YOU,
    setup_form_handlers,
};
pub use menu::{ACTIVE_CLASS, MENU_FLAG, TOGGLE_FLAG, setup_mobile_menu};
pub use scroll::{HEADER_OFFSET, setup_smooth_scroll};
