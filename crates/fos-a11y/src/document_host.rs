//! [`DomView`] and [`FocusPlatform`] for `fos_dom::Document`

use fos_dom::{Document, NodeId, Range};

use crate::host::{DomView, FocusPlatform};

impl DomView for Document {
    type Node = NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.tree.parent(node)
    }

    fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.tree.first_child(node)
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.tree.next_sibling(node)
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.tree.tag_name(node)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.tree.get_attr(node, name)
    }
}

impl FocusPlatform for Document {
    type Range = Range;

    fn active_element(&self) -> Option<NodeId> {
        Document::active_element(self)
    }

    fn body(&self) -> Option<NodeId> {
        Document::body(self)
    }

    fn focus(&mut self, node: NodeId) {
        Document::focus(self, node);
    }

    fn blur(&mut self, node: NodeId) {
        Document::blur(self, node);
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.tree.set_attr(node, name, value);
    }

    fn selection_range(&self) -> Option<Range> {
        self.selection().get_range_at(0).copied()
    }

    fn remove_all_ranges(&mut self) {
        self.selection_mut().remove_all_ranges();
    }

    fn add_range(&mut self, range: Range) {
        self.selection_mut().add_range(range);
    }

    fn select_text(&mut self, node: NodeId) {
        Document::select_text(self, node);
    }
}
