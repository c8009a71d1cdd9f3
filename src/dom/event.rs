//! Events, listeners and window state.
//!
//! Dispatch is synchronous: listeners run on the target, then on each
//! ancestor up to the document, unless one stops propagation. After dispatch
//! the page runs the default action (fragment jump for anchors, navigation
//! for forms) when no listener prevented it.

use std::rc::Rc;

use super::node::{NodeId, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Submit,
}

/// An event in flight.
#[derive(Debug, Clone)]
pub struct Event {
    kind: EventKind,
    target: NodeId,
    current_target: NodeId,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl Event {
    fn new(kind: EventKind, target: NodeId) -> Self {
        Self {
            kind,
            target,
            current_target: target,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Node the event was dispatched on.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Node whose listener is running.
    pub fn current_target(&self) -> NodeId {
        self.current_target
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

pub(super) type Callback = Rc<dyn Fn(&mut Page, &mut Event)>;

pub(super) struct Listener {
    node: NodeId,
    kind: EventKind,
    callback: Callback,
}

// ============================================================================
// Window
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Auto,
    Smooth,
}

/// A `window.scrollTo` request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTo {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// Browser window state the page touches.
#[derive(Debug, Clone, Default)]
pub struct Window {
    scroll_y: f64,
    scrolls: Vec<ScrollTo>,
    alerts: Vec<String>,
    location_hash: Option<String>,
    navigations: Vec<String>,
}

impl Window {
    /// Scroll the page. The animation itself is the browser's business, the
    /// final position is applied at once.
    pub fn scroll_to(&mut self, request: ScrollTo) {
        self.scroll_y = request.top.max(0.0);
        self.scrolls.push(request);
    }

    /// Show a blocking message.
    pub fn alert(&mut self, message: impl Into<String>) {
        self.alerts.push(message.into());
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn scrolls(&self) -> &[ScrollTo] {
        &self.scrolls
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn location_hash(&self) -> Option<&str> {
        self.location_hash.as_deref()
    }

    /// Form navigations that were not prevented (their `action`).
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }
}

// ============================================================================
// listeners and dispatch
// ============================================================================

impl Page {
    /// Register a listener. Registration is additive, like the DOM.
    pub fn add_event_listener(
        &mut self,
        node: NodeId,
        kind: EventKind,
        callback: impl Fn(&mut Page, &mut Event) + 'static,
    ) {
        self.listeners.push(Listener {
            node,
            kind,
            callback: Rc::new(callback),
        });
    }

    pub fn listener_count(&self, node: NodeId, kind: EventKind) -> usize {
        self.listeners
            .iter()
            .filter(|l| l.node == node && l.kind == kind)
            .count()
    }

    /// Mark `node` as wired by `key`. Returns `false` if it already was.
    pub fn mark_wired(&mut self, node: NodeId, key: &'static str) -> bool {
        self.wired.insert((node, key))
    }

    /// Run listeners for `kind` on `target` and its ancestors.
    pub fn dispatch(&mut self, target: NodeId, kind: EventKind) -> Event {
        let mut event = Event::new(kind, target);

        for node in self.ancestors_inclusive(target) {
            // Snapshot: listeners added during dispatch run next time.
            let callbacks: Vec<Callback> = self
                .listeners
                .iter()
                .filter(|l| l.node == node && l.kind == kind)
                .map(|l| Rc::clone(&l.callback))
                .collect();

            event.current_target = node;
            for callback in callbacks {
                callback(self, &mut event);
            }
            if event.propagation_stopped {
                break;
            }
        }

        event
    }

    /// Click an element, then follow an in-page anchor unless prevented.
    pub fn click(&mut self, target: NodeId) -> Event {
        let event = self.dispatch(target, EventKind::Click);
        if !event.is_default_prevented() {
            self.follow_anchor(target);
        }
        event
    }

    /// Submit a form, then navigate to its `action` unless prevented.
    pub fn submit(&mut self, form: NodeId) -> Event {
        let event = self.dispatch(form, EventKind::Submit);
        if !event.is_default_prevented() {
            let action = self.attr(form, "action").unwrap_or_default().to_string();
            self.window.navigations.push(action);
        }
        event
    }

    /// Default action of a click: jump (no animation) to the fragment.
    fn follow_anchor(&mut self, target: NodeId) {
        let anchor = self
            .ancestors_inclusive(target)
            .into_iter()
            .find(|id| self.tag(*id) == Some("a") && self.has_attr(*id, "href"));
        let Some(href) = anchor.and_then(|a| self.attr(a, "href")).map(str::to_string) else {
            return;
        };
        let Some(fragment) = href.strip_prefix('#') else {
            return;
        };

        self.window.location_hash = Some(href.clone());
        let top = self
            .element_by_id(fragment)
            .map_or(0.0, |element| self.offset_top(element));
        self.window.scroll_to(ScrollTo {
            top,
            behavior: ScrollBehavior::Auto,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn page_with_link() -> (Page, NodeId, NodeId) {
        let mut page = Page::new();
        let root = page.root();
        let body = page.append_element(root, "body", &[]);
        let section = page.append_element(body, "section", &[("id", "features")]);
        page.set_offset_top(section, 500.0);
        let link = page.append_element(body, "a", &[("href", "#features")]);
        let span = page.append_element(link, "span", &[]);
        (page, link, span)
    }

    #[test]
    fn test_dispatch_bubbles_to_ancestors() {
        let (mut page, link, span) = page_with_link();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&seen);
        page.add_event_listener(link, EventKind::Click, move |_, event| {
            log.borrow_mut().push((event.target(), event.current_target()));
        });

        page.dispatch(span, EventKind::Click);
        assert_eq!(*seen.borrow(), vec![(span, link)]);
    }

    #[test]
    fn test_stop_propagation() {
        let (mut page, link, span) = page_with_link();
        let hits = Rc::new(RefCell::new(0));

        page.add_event_listener(span, EventKind::Click, |_, event| event.stop_propagation());
        let counter = Rc::clone(&hits);
        page.add_event_listener(link, EventKind::Click, move |_, _| {
            *counter.borrow_mut() += 1;
        });

        page.dispatch(span, EventKind::Click);
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn test_click_default_follows_fragment() {
        let (mut page, _, span) = page_with_link();
        let event = page.click(span);
        assert!(!event.is_default_prevented());
        assert_eq!(page.window().location_hash(), Some("#features"));
        assert_eq!(page.window().scroll_y(), 500.0);
    }

    #[test]
    fn test_prevented_click_stays() {
        let (mut page, link, _) = page_with_link();
        page.add_event_listener(link, EventKind::Click, |_, event| event.prevent_default());
        let event = page.click(link);
        assert!(event.is_default_prevented());
        assert_eq!(page.window().location_hash(), None);
        assert!(page.window().scrolls().is_empty());
    }

    #[test]
    fn test_submit_default_navigates() {
        let mut page = Page::new();
        let root = page.root();
        let form = page.append_element(root, "form", &[("action", "/signup")]);
        page.submit(form);
        assert_eq!(page.window().navigations(), ["/signup".to_string()]);
    }

    #[test]
    fn test_mark_wired_once() {
        let (mut page, link, _) = page_with_link();
        assert!(page.mark_wired(link, "scroll"));
        assert!(!page.mark_wired(link, "scroll"));
        assert!(page.mark_wired(link, "menu"));
    }

    #[test]
    fn test_window_scroll_clamps_position() {
        let mut window = Window::default();
        window.scroll_to(ScrollTo {
            top: -80.0,
            behavior: ScrollBehavior::Smooth,
        });
        assert_eq!(window.scroll_y(), 0.0);
        assert_eq!(window.scrolls()[0].top, -80.0);
    }
}
