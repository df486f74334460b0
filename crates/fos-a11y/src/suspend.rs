//! Event suspension
//!
//! While events are suspended, accessibility handlers ignore the DOM events
//! they would normally react to. This stops a programmatic focus change from
//! being announced back as if the user had made it.
//!
//! Suspension nests: every `enter` needs a matching `exit`, and events stay
//! suspended until the outermost `exit`.

use std::cell::Cell;
use std::rc::Rc;

/// Suspension capability handed to the focus logic
///
/// Methods take `&self` so a handle can be captured by deferred tasks.
pub trait EventSuspension {
    fn are_events_suspended(&self) -> bool;

    fn enter_suspend_events(&self);

    fn exit_suspend_events(&self);
}

/// Shared nesting counter. Clones observe and update the same counter.
#[derive(Debug, Clone, Default)]
pub struct EventSuspender {
    level: Rc<Cell<u32>>,
}

impl EventSuspender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current nesting depth
    pub fn level(&self) -> u32 {
        self.level.get()
    }

    /// Suspend events until the returned guard is dropped
    pub fn suspend(&self) -> SuspendGuard {
        self.enter_suspend_events();
        SuspendGuard { suspender: self.clone() }
    }

    /// Run `f` with events suspended
    pub fn with_suspended_events<R>(&self, f: impl FnOnce() -> R) -> R {
        let _guard = self.suspend();
        f()
    }
}

impl EventSuspension for EventSuspender {
    fn are_events_suspended(&self) -> bool {
        self.level.get() > 0
    }

    fn enter_suspend_events(&self) {
        let level = self.level.get().saturating_add(1);
        self.level.set(level);
        tracing::trace!("Event suspension entered (level {})", level);
    }

    fn exit_suspend_events(&self) {
        let level = self.level.get();
        if level == 0 {
            tracing::warn!("exit_suspend_events without matching enter");
            return;
        }
        self.level.set(level - 1);
        tracing::trace!("Event suspension exited (level {})", level - 1);
    }
}

/// Keeps events suspended while alive
#[derive(Debug)]
#[must_use = "events resume as soon as the guard is dropped"]
pub struct SuspendGuard {
    suspender: EventSuspender,
}

impl Drop for SuspendGuard {
    fn drop(&mut self) {
        self.suspender.exit_suspend_events();
    }
}
