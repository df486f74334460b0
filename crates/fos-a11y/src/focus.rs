//! Focus Setting
//!
//! [`FocusSetter::set_focus`] moves input focus to a node, or to the nearest
//! focusable node reachable from it, while keeping the user's text selection.
//!
//! The actual `focus()` call is deferred to a later event-loop turn. If
//! events are already suspended when the call is made, the deferred focus is
//! bracketed by its own enter/exit so the suspension outlives the caller's.
//! Video elements and `type="time"` inputs are left unbracketed because
//! their focus handlers have to run.

use std::fmt;
use std::marker::PhantomData;

use crate::config::FocusConfig;
use crate::dom_util;
use crate::host::{DomView, FocusPlatform};
use crate::scheduler::{DeferredTask, TaskQueue, TaskScheduler};
use crate::suspend::{EventSuspender, EventSuspension};

/// Moves focus on a host document
///
/// `S` is the event-suspension handle and `Q` the scheduler deferred focus
/// calls go through.
pub struct FocusSetter<H, S = EventSuspender, Q = TaskQueue<H>> {
    suspender: S,
    scheduler: Q,
    config: FocusConfig,
    _host: PhantomData<fn(&mut H)>,
}

impl<H> FocusSetter<H> {
    /// Setter with its own task queue
    pub fn new(suspender: EventSuspender) -> Self {
        Self::with_parts(suspender, TaskQueue::new())
    }
}

impl<H, S> FocusSetter<H, S, TaskQueue<H>> {
    /// Run focus calls deferred by earlier [`set_focus`](Self::set_focus)
    pub fn run_deferred(&mut self, host: &mut H) -> usize {
        self.scheduler.run_pending(host)
    }
}

impl<H, S, Q> FocusSetter<H, S, Q> {
    pub fn with_parts(suspender: S, scheduler: Q) -> Self {
        Self {
            suspender,
            scheduler,
            config: FocusConfig::default(),
            _host: PhantomData,
        }
    }

    pub fn with_config(mut self, config: FocusConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &FocusConfig {
        &self.config
    }

    pub fn suspender(&self) -> &S {
        &self.suspender
    }

    pub fn scheduler(&self) -> &Q {
        &self.scheduler
    }
}

impl<H, S, Q> FocusSetter<H, S, Q>
where
    H: FocusPlatform + 'static,
    S: EventSuspension + Clone + 'static,
    Q: TaskScheduler<H>,
{
    /// Move focus to `target` or the nearest focusable node reachable from it
    ///
    /// With `focus_descendants` set and a non-focusable target, the first
    /// focusable descendant (pre-order) is used. Otherwise the ancestor chain
    /// is searched, starting at `target`. When nothing focusable is found
    /// the currently focused element loses focus.
    pub fn set_focus(&mut self, host: &mut H, target: Option<H::Node>, focus_descendants: bool) {
        let saved_range = host.selection_range();

        // Blur first so stale focus handlers don't fire after the new focus.
        if let Some(active) = host.active_element() {
            let inside = target.is_some_and(|t| dom_util::is_descendant_of_node(&*host, t, active));
            if !inside {
                tracing::trace!("Blurring {:?} before moving focus", active);
                host.blur(active);
            }
        }

        if let Some(node) = target {
            if host.tag_name(node) == Some("video") && !dom_util::is_focusable(&*host, node) {
                host.set_attribute(node, "tabindex", "0");
            }
        }

        let resolved = target.and_then(|node| {
            if focus_descendants && !dom_util::is_focusable(&*host, node) {
                Some(dom_util::find_focusable_descendant(&*host, node).unwrap_or(node))
            } else {
                dom_util::find_focusable_ancestor(&*host, node)
            }
        });
        tracing::debug!("Focus target {:?} resolved to {:?}", target, resolved);

        match resolved.filter(|&node| dom_util::is_focusable(&*host, node)) {
            Some(node) if host.tag_name(node) == Some("iframe") => {
                // The frame's own instance focuses itself.
                tracing::trace!("Leaving focus of iframe {:?} to the frame", node);
            }
            Some(node) => self.focus_later(host, node),
            None => {
                if let Some(active) = host.active_element() {
                    if host.body() != Some(active) {
                        host.blur(active);
                    }
                }
            }
        }

        match resolved {
            Some(node) if dom_util::is_input_type_text(&*host, node) => host.select_text(node),
            _ if self.config.restore_selection => {
                if let Some(range) = saved_range {
                    host.remove_all_ranges();
                    host.add_range(range);
                }
            }
            _ => {}
        }
    }

    fn focus_later(&mut self, host: &mut H, node: H::Node) {
        let bracket = self.suspender.are_events_suspended()
            && should_enter_suspend_events(&*host, node);
        if bracket {
            self.suspender.enter_suspend_events();
        }

        let suspender = self.suspender.clone();
        let task: DeferredTask<H> = Box::new(move |host: &mut H| {
            host.focus(node);
            if bracket {
                suspender.exit_suspend_events();
            }
        });

        if self.config.defer_focus {
            self.scheduler.schedule(task);
        } else {
            task(host);
        }
    }
}

impl<H, S: fmt::Debug, Q: fmt::Debug> fmt::Debug for FocusSetter<H, S, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusSetter")
            .field("suspender", &self.suspender)
            .field("scheduler", &self.scheduler)
            .field("config", &self.config)
            .finish()
    }
}

/// Whether a deferred focus on `node` should run with events suspended
///
/// False for video elements and for nodes with `type="time"`: both rely on
/// focus handlers that suspension would swallow.
pub fn should_enter_suspend_events<V: DomView + ?Sized>(view: &V, node: V::Node) -> bool {
    if view.tag_name(node) == Some("video") {
        return false;
    }
    view.attribute(node, "type") != Some("time")
}

#[cfg(test)]
mod tests {
    use super::*;
    use fos_dom::{Document, FocusChange, NodeId, Range};

    fn setter() -> FocusSetter<Document> {
        FocusSetter::new(EventSuspender::new())
    }

    #[test]
    fn test_should_enter_suspend_events() {
        let mut doc = Document::default();
        let body = doc.body().unwrap();
        let video = doc.append_element(body, "video", &[]).unwrap();
        let time = doc.append_element(body, "input", &[("type", "time")]).unwrap();
        let date = doc.append_element(body, "input", &[("type", "date")]).unwrap();
        let custom = doc.append_element(body, "div", &[("type", "time")]).unwrap();

        assert!(!should_enter_suspend_events(&doc, video));
        assert!(!should_enter_suspend_events(&doc, time));
        assert!(!should_enter_suspend_events(&doc, custom));
        assert!(should_enter_suspend_events(&doc, date));
        assert!(should_enter_suspend_events(&doc, body));
    }

    #[test]
    fn test_focus_is_deferred() {
        let mut doc = Document::default();
        let body = doc.body().unwrap();
        let button = doc.append_element(body, "button", &[]).unwrap();
        let mut fs = setter();

        fs.set_focus(&mut doc, Some(button), false);
        assert_eq!(doc.focused_element(), None);
        assert_eq!(fs.scheduler().len(), 1);

        assert_eq!(fs.run_deferred(&mut doc), 1);
        assert_eq!(doc.focused_element(), Some(button));
    }

    #[test]
    fn test_inline_focus_when_not_deferred() {
        let mut doc = Document::default();
        let body = doc.body().unwrap();
        let button = doc.append_element(body, "button", &[]).unwrap();
        let suspender = EventSuspender::new();
        let _outer = suspender.suspend();
        let mut fs = FocusSetter::new(suspender.clone())
            .with_config(FocusConfig::default().with_defer_focus(false));
        assert!(!fs.config().defer_focus);
        assert_eq!(fs.suspender().level(), 1);

        fs.set_focus(&mut doc, Some(button), false);
        assert_eq!(doc.focused_element(), Some(button));
        assert!(fs.scheduler().is_empty());
        assert_eq!(suspender.level(), 1);
    }

    #[test]
    fn test_refocus_inside_active_does_not_blur() {
        let mut doc = Document::default();
        let body = doc.body().unwrap();
        let button = doc.append_element(body, "button", &[]).unwrap();
        doc.focus(button);
        doc.take_focus_changes();
        let mut fs = setter();

        fs.set_focus(&mut doc, Some(button), false);
        fs.run_deferred(&mut doc);
        assert_eq!(doc.focused_element(), Some(button));
        assert!(doc.focus_changes().is_empty());
    }

    #[test]
    fn test_none_target_blurs_active() {
        let mut doc = Document::default();
        let body = doc.body().unwrap();
        let input = doc.append_element(body, "input", &[]).unwrap();
        doc.focus(input);
        let mut fs = setter();

        fs.set_focus(&mut doc, None, false);
        assert_eq!(doc.active_element(), Some(body));
        assert!(fs.scheduler().is_empty());
    }

    #[test]
    fn test_selection_not_restored_when_disabled() {
        let mut doc = Document::default();
        let body = doc.body().unwrap();
        let text = doc.append_text(body, "hello").unwrap();
        let button = doc.append_element(body, "button", &[]).unwrap();
        doc.selection_mut().add_range(Range::between(text, 0, text, 5));
        let mut fs = setter().with_config(FocusConfig::default().with_restore_selection(false));

        fs.set_focus(&mut doc, Some(button), false);
        fs.run_deferred(&mut doc);
        // Nothing was re-added on top of the existing range
        assert_eq!(doc.selection().range_count(), 1);
        assert_eq!(doc.take_focus_changes(), vec![FocusChange::Focus(button)]);
    }

    #[test]
    fn test_unknown_node_is_a_no_op() {
        let mut doc = Document::default();
        let body = doc.body().unwrap();
        let loose: NodeId = doc.tree_mut().create_element("div");
        let mut fs = setter();

        fs.set_focus(&mut doc, Some(loose), true);
        assert!(fs.scheduler().is_empty());
        assert_eq!(doc.active_element(), Some(body));
    }
}
