//! Landing form interception.
//!
//! Every `[data-landing-form]` element gets one submit listener that cancels
//! navigation, collects the form's fields and passes them to the page's
//! [`SubmissionHandler`].

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::dom::{EventKind, NodeId, Page, Selector};
use crate::landing::LandingPage;
use crate::{debug, log};

/// Marker attribute of intercepted forms.
pub const FORM_FLAG: &str = "data-landing-form";

/// Message shown by [`NoticeHandler`].
pub const THANK_YOU: &str = "Thank you! We will contact you soon.";

/// Input types that never contribute a value.
const SKIPPED_INPUTS: &[&str] = &["submit", "button", "reset", "file", "image"];

// ============================================================================
// form data
// ============================================================================

/// Submitted field values by name. A repeated name keeps its last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData(Map<String, Value>);

impl FormData {
    /// Collect the successful controls of `form`.
    pub fn collect(page: &Page, form: NodeId) -> Self {
        let mut data = Self::default();
        for control in page.descendant_elements(form) {
            let Some(name) = page.attr(control, "name").filter(|n| !n.is_empty()) else {
                continue;
            };
            if is_disabled(page, control, form) {
                continue;
            }
            if let Some(value) = control_value(page, control) {
                data.insert(name, value);
            }
        }
        data
    }

    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_string(), Value::String(value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The data as a JSON object.
    pub fn as_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl fmt::Display for FormData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_value())
    }
}

/// Disabled itself, or inside a disabled `<fieldset>` within the form.
fn is_disabled(page: &Page, control: NodeId, form: NodeId) -> bool {
    page.ancestors_inclusive(control)
        .into_iter()
        .take_while(|id| *id != form)
        .any(|id| {
            page.has_attr(id, "disabled") && (id == control || page.tag(id) == Some("fieldset"))
        })
}

fn control_value(page: &Page, control: NodeId) -> Option<String> {
    match page.tag(control)? {
        "input" => {
            let kind = page
                .attr(control, "type")
                .unwrap_or("text")
                .to_ascii_lowercase();
            if SKIPPED_INPUTS.contains(&kind.as_str()) {
                return None;
            }
            if matches!(kind.as_str(), "checkbox" | "radio") {
                if !page.has_attr(control, "checked") {
                    return None;
                }
                return Some(page.attr(control, "value").unwrap_or("on").to_string());
            }
            Some(page.attr(control, "value").unwrap_or_default().to_string())
        }
        "textarea" => Some(page.text_content(control)),
        "select" => {
            let options: Vec<NodeId> = page
                .descendant_elements(control)
                .into_iter()
                .filter(|id| page.tag(*id) == Some("option"))
                .collect();
            let chosen = options
                .iter()
                .rev()
                .find(|id| page.has_attr(**id, "selected"))
                .or(options.first())?;
            Some(option_value(page, *chosen))
        }
        _ => None,
    }
}

fn option_value(page: &Page, option: NodeId) -> String {
    match page.attr(option, "value") {
        Some(value) => value.to_string(),
        None => page
            .text_content(option)
            .split_ascii_whitespace()
            .collect::<Vec<_>>()
            .join(" "),
    }
}

// ============================================================================
// submission handling
// ============================================================================

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Receives the data of an intercepted form.
pub trait SubmissionHandler {
    fn handle(&self, page: &mut Page, data: &FormData) -> Result<(), SubmitError>;
}

/// Logs the submission and thanks the visitor.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoticeHandler;

impl SubmissionHandler for NoticeHandler {
    fn handle(&self, page: &mut Page, data: &FormData) -> Result<(), SubmitError> {
        log!("form"; "submitted: {data}");
        page.window_mut().alert(THANK_YOU);
        Ok(())
    }
}

/// Intercept submission of every landing form.
///
/// Returns the number of forms wired by this call; forms wired earlier are
/// left alone.
pub fn setup_form_handlers(page: &mut Page, landing: &LandingPage) -> usize {
    let forms = page.select(&Selector::has_attr(FORM_FLAG));
    let mut wired = 0;

    for form in forms {
        if !page.mark_wired(form, FORM_FLAG) {
            continue;
        }
        let handler = landing.submission_handler();
        page.add_event_listener(form, EventKind::Submit, move |page, event| {
            event.prevent_default();
            let data = FormData::collect(page, event.current_target());
            if let Some(handler) = &handler
                && let Err(err) = handler.handle(page, &data)
            {
                log!("error"; "form submission failed: {err}");
            }
        });
        wired += 1;
    }

    debug!("form"; "intercepting {wired} form(s)");
    wired
}
