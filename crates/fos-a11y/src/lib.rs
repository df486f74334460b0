//! fOS Accessibility
//!
//! Focus handling for assistive technology running against a DOM.
//!
//! Features:
//! - Moving input focus to a node or its nearest focusable relative
//! - Text selection preserved across programmatic focus changes
//! - Nested event suspension around deferred focus calls
//! - DOM focusability predicates generic over the host tree
//!
//! # Example
//! ```rust
//! use fos_a11y::{EventSuspender, FocusSetter};
//! use fos_dom::Document;
//!
//! let mut doc = Document::default();
//! let body = doc.body().unwrap();
//! let list = doc.append_element(body, "ul", &[]).unwrap();
//! let item = doc.append_element(list, "li", &[("tabindex", "0")]).unwrap();
//!
//! let mut focus = FocusSetter::new(EventSuspender::new());
//! focus.set_focus(&mut doc, Some(list), true);
//! focus.run_deferred(&mut doc);
//! assert_eq!(doc.focused_element(), Some(item));
//! ```

pub mod config;
pub mod dom_util;
pub mod focus;
pub mod host;
pub mod scheduler;
pub mod suspend;

mod document_host;

pub use config::FocusConfig;
pub use focus::{FocusSetter, should_enter_suspend_events};
pub use host::{DomView, FocusPlatform};
pub use scheduler::{DeferredTask, TaskQueue, TaskScheduler};
pub use suspend::{EventSuspender, EventSuspension, SuspendGuard};

/// Accessibility error
#[derive(Debug, thiserror::Error)]
pub enum A11yError {
    #[error("Invalid focus configuration: {0}")]
    Config(#[from] serde_json::Error),
}
