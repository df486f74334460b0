//! Host capabilities
//!
//! The focus logic never touches a concrete DOM. It reads the tree through
//! [`DomView`] and changes focus and selection through [`FocusPlatform`].
//! `fos_dom::Document` implements both; browser bindings or test doubles can
//! provide their own.

use std::fmt::Debug;

/// Read-only navigation over a node tree
pub trait DomView {
    /// Node handle. Cheap to copy, compared by identity.
    type Node: Copy + Eq + Debug;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    fn first_child(&self, node: Self::Node) -> Option<Self::Node>;

    fn next_sibling(&self, node: Self::Node) -> Option<Self::Node>;

    /// Lowercase tag name, `None` for non-element nodes
    fn tag_name(&self, node: Self::Node) -> Option<&str>;

    fn attribute(&self, node: Self::Node, name: &str) -> Option<&str>;

    fn has_attribute(&self, node: Self::Node, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    fn is_element(&self, node: Self::Node) -> bool {
        self.tag_name(node).is_some()
    }
}

/// Focus, attribute and selection primitives of the host platform
pub trait FocusPlatform: DomView {
    /// A captured selection range, restorable later
    type Range: Clone + Debug;

    /// Element currently holding focus (the body when nothing else does)
    fn active_element(&self) -> Option<Self::Node>;

    fn body(&self) -> Option<Self::Node>;

    fn focus(&mut self, node: Self::Node);

    fn blur(&mut self, node: Self::Node);

    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);

    /// First range of the current selection
    fn selection_range(&self) -> Option<Self::Range>;

    fn remove_all_ranges(&mut self);

    fn add_range(&mut self, range: Self::Range);

    /// Select the whole value of a text control
    fn select_text(&mut self, node: Self::Node);
}
