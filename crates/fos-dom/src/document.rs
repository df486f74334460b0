//! Document - High-level document API
//!
//! Owns the tree plus the state a browser keeps per document: which element
//! holds focus and the current text selection.

use crate::{DomError, DomTree, InputSelection, NodeId, Selection};

/// A focus transition recorded by [`Document::focus`] / [`Document::blur`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusChange {
    /// The node gained focus
    Focus(NodeId),
    /// The node lost focus
    Blur(NodeId),
}

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    url: String,
    html_element: NodeId,
    head_element: NodeId,
    body_element: NodeId,
    focused: Option<NodeId>,
    selection: Selection,
    focus_log: Vec<FocusChange>,
}

impl Document {
    /// Create a document with an `html > (head, body)` skeleton
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();
        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        let mut doc = Self::from_tree(url, tree);
        // Fresh nodes under the fresh root; these links cannot fail.
        let _ = doc.tree.append_child(NodeId::ROOT, html);
        let _ = doc.tree.append_child(html, head);
        let _ = doc.tree.append_child(html, body);
        doc.html_element = html;
        doc.head_element = head;
        doc.body_element = body;
        doc
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self::from_tree(url, DomTree::new())
    }

    fn from_tree(url: &str, tree: DomTree) -> Self {
        Self {
            tree,
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
            focused: None,
            selection: Selection::new(),
            focus_log: Vec::new(),
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get <html> element
    pub fn document_element(&self) -> Option<NodeId> {
        self.html_element.to_option()
    }

    /// Get <head> element
    pub fn head(&self) -> Option<NodeId> {
        self.head_element.to_option()
    }

    /// Get <body> element
    pub fn body(&self) -> Option<NodeId> {
        self.body_element.to_option()
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Create an element with attributes and append it under `parent`
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        attrs: &[(&str, &str)],
    ) -> Result<NodeId, DomError> {
        let id = self.tree.create_element(tag);
        for (name, value) in attrs {
            self.tree.set_attr(id, name, value);
        }
        self.tree.append_child(parent, id)?;
        Ok(id)
    }

    /// Create a text node and append it under `parent`
    pub fn append_text(&mut self, parent: NodeId, content: &str) -> Result<NodeId, DomError> {
        let id = self.tree.create_text(content);
        self.tree.append_child(parent, id)?;
        Ok(id)
    }

    /// Detach a subtree; focus inside it is dropped
    pub fn remove_node(&mut self, id: NodeId) {
        self.tree.detach(id);
        if let Some(focused) = self.focused {
            if self.tree.contains(id, focused) {
                tracing::trace!("Focused node {:?} removed with its subtree", focused);
                self.focused = None;
            }
        }
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(NodeId::ROOT)
            .find(|&node| self.tree.get_attr(node, "id") == Some(id))
    }

    // --- Focus ---

    /// The element holding focus, if one was focused explicitly
    pub fn focused_element(&self) -> Option<NodeId> {
        self.focused.filter(|&id| self.tree.is_connected(id))
    }

    /// The focused element, falling back to <body>
    pub fn active_element(&self) -> Option<NodeId> {
        self.focused_element().or_else(|| self.body())
    }

    /// Move focus to an element
    ///
    /// Detached and non-element nodes are ignored. Focusability is the
    /// caller's concern. Returns whether `id` holds focus afterwards.
    pub fn focus(&mut self, id: NodeId) -> bool {
        if self.tree.element(id).is_none() || !self.tree.is_connected(id) {
            tracing::trace!("Ignoring focus on {:?}: not a connected element", id);
            return false;
        }
        if self.focused_element() == Some(id) {
            return true;
        }
        if let Some(old) = self.focused.take() {
            self.focus_log.push(FocusChange::Blur(old));
        }
        self.focused = Some(id);
        self.focus_log.push(FocusChange::Focus(id));
        tracing::debug!("Focused {:?}", id);
        true
    }

    /// Drop focus from `id` if it holds it
    pub fn blur(&mut self, id: NodeId) -> bool {
        if self.focused != Some(id) {
            return false;
        }
        self.focused = None;
        self.focus_log.push(FocusChange::Blur(id));
        tracing::debug!("Blurred {:?}", id);
        true
    }

    /// Focus transitions recorded so far
    pub fn focus_changes(&self) -> &[FocusChange] {
        &self.focus_log
    }

    /// Drain the recorded focus transitions
    pub fn take_focus_changes(&mut self) -> Vec<FocusChange> {
        std::mem::take(&mut self.focus_log)
    }

    // --- Selection ---

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// Select the whole value of an `input` or `textarea`
    pub fn select_text(&mut self, id: NodeId) -> bool {
        let len = match self.tree.tag_name(id) {
            Some("input") => self.tree.get_attr(id, "value").map_or(0, |v| v.chars().count()),
            Some("textarea") => self.tree
                .children(id)
                .filter_map(|(_, node)| node.as_text())
                .map(|t| t.chars().count())
                .sum(),
            _ => return false,
        };
        match self.tree.element_mut(id) {
            Some(elem) => {
                elem.input_selection.get_or_insert_with(InputSelection::new).select_all(len);
                true
            }
            None => false,
        }
    }

    /// Selection inside a text control
    pub fn input_selection(&self, id: NodeId) -> Option<InputSelection> {
        self.tree.element(id)?.input_selection
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton() {
        let doc = Document::default();
        assert_eq!(doc.url(), "about:blank");
        let html = doc.document_element().unwrap();
        let body = doc.body().unwrap();
        assert_eq!(doc.tree().parent(body), Some(html));
        assert_eq!(doc.tree().tag_name(doc.head().unwrap()), Some("head"));
        assert_eq!(doc.active_element(), Some(body));
        assert_eq!(doc.focused_element(), None);
    }

    #[test]
    fn test_empty_document_has_no_body() {
        let doc = Document::empty("about:blank");
        assert_eq!(doc.body(), None);
        assert_eq!(doc.active_element(), None);
    }

    #[test]
    fn test_get_element_by_id() {
        let mut doc = Document::default();
        let body = doc.body().unwrap();
        let div = doc.append_element(body, "div", &[("id", "main")]).unwrap();
        assert_eq!(doc.get_element_by_id("main"), Some(div));
        assert_eq!(doc.get_element_by_id("missing"), None);
    }

    #[test]
    fn test_focus_records_blur_then_focus() {
        let mut doc = Document::default();
        let body = doc.body().unwrap();
        let a = doc.append_element(body, "button", &[]).unwrap();
        let b = doc.append_element(body, "button", &[]).unwrap();

        assert!(doc.focus(a));
        assert!(doc.focus(b));
        assert_eq!(
            doc.take_focus_changes(),
            vec![FocusChange::Focus(a), FocusChange::Blur(a), FocusChange::Focus(b)]
        );

        // Refocusing is silent
        assert!(doc.focus(b));
        assert!(doc.focus_changes().is_empty());
    }

    #[test]
    fn test_blur_only_affects_focused() {
        let mut doc = Document::default();
        let body = doc.body().unwrap();
        let a = doc.append_element(body, "input", &[]).unwrap();
        let b = doc.append_element(body, "input", &[]).unwrap();
        doc.focus(a);

        assert!(!doc.blur(b));
        assert_eq!(doc.focused_element(), Some(a));
        assert!(doc.blur(a));
        assert_eq!(doc.active_element(), Some(body));
    }

    #[test]
    fn test_focus_ignores_detached_and_text() {
        let mut doc = Document::default();
        let body = doc.body().unwrap();
        let text = doc.append_text(body, "hi").unwrap();
        let loose = doc.tree_mut().create_element("button");

        assert!(!doc.focus(text));
        assert!(!doc.focus(loose));
        assert!(doc.focus_changes().is_empty());
    }

    #[test]
    fn test_remove_node_drops_focus() {
        let mut doc = Document::default();
        let body = doc.body().unwrap();
        let div = doc.append_element(body, "div", &[]).unwrap();
        let button = doc.append_element(div, "button", &[]).unwrap();
        doc.focus(button);

        doc.remove_node(div);
        assert_eq!(doc.focused_element(), None);
        assert_eq!(doc.active_element(), Some(body));
    }

    #[test]
    fn test_select_text() {
        let mut doc = Document::default();
        let body = doc.body().unwrap();
        let input = doc.append_element(body, "input", &[("value", "héllo")]).unwrap();
        let area = doc.append_element(body, "textarea", &[]).unwrap();
        doc.append_text(area, "two words").unwrap();
        let div = doc.append_element(body, "div", &[]).unwrap();

        assert!(doc.select_text(input));
        assert_eq!(doc.input_selection(input).map(|s| s.length()), Some(5));
        assert!(doc.select_text(area));
        assert_eq!(doc.input_selection(area).map(|s| s.end), Some(9));
        assert!(!doc.select_text(div));
        assert_eq!(doc.input_selection(div), None);
    }
}
