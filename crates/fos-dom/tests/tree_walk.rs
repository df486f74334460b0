//! Tree walk tests for fos-dom
//!
//! Builds small documents through the public API and checks traversal,
//! focus bookkeeping and selection state together.

use fos_dom::{Document, DomError, FocusChange, NodeId, Range};

// ============================================================================
// TRAVERSAL
// ============================================================================

#[test]
fn test_descendants_cover_whole_document() {
    let mut doc = Document::default();
    let body = doc.body().unwrap();
    let nav = doc.append_element(body, "nav", &[]).unwrap();
    let link = doc.append_element(nav, "a", &[("href", "/")]).unwrap();
    let main = doc.append_element(body, "main", &[]).unwrap();

    let all: Vec<NodeId> = doc.tree().descendants(NodeId::ROOT).collect();
    let html = doc.document_element().unwrap();
    let head = doc.head().unwrap();
    assert_eq!(all, vec![html, head, body, nav, link, main]);
}

#[test]
fn test_deep_nesting_walks_without_recursion() {
    let mut doc = Document::default();
    let mut parent = doc.body().unwrap();
    for _ in 0..2_000 {
        parent = doc.append_element(parent, "div", &[]).unwrap();
    }
    let leaf = parent;

    assert_eq!(doc.tree().ancestors(leaf).count(), 2_000 + 2);
    assert_eq!(doc.tree().descendants(doc.body().unwrap()).last(), Some(leaf));
}

#[test]
fn test_moving_a_subtree() {
    let mut doc = Document::default();
    let body = doc.body().unwrap();
    let left = doc.append_element(body, "section", &[]).unwrap();
    let right = doc.append_element(body, "section", &[]).unwrap();
    let item = doc.append_element(left, "button", &[]).unwrap();

    doc.tree_mut().append_child(right, item).unwrap();
    assert_eq!(doc.tree().parent(item), Some(right));
    assert_eq!(doc.tree().first_child(left), None);
    assert_eq!(
        doc.tree_mut().append_child(item, right),
        Err(DomError::HierarchyRequest { parent: item, child: right })
    );
}

// ============================================================================
// FOCUS + SELECTION
// ============================================================================

#[test]
fn test_focus_survives_selection_changes() {
    let mut doc = Document::default();
    let body = doc.body().unwrap();
    let p = doc.append_element(body, "p", &[]).unwrap();
    let text = doc.append_text(p, "some words").unwrap();
    let button = doc.append_element(body, "button", &[]).unwrap();

    doc.selection_mut().add_range(Range::between(text, 0, text, 4));
    doc.focus(button);
    doc.selection_mut().remove_all_ranges();

    assert_eq!(doc.focused_element(), Some(button));
    assert_eq!(doc.focus_changes(), &[FocusChange::Focus(button)]);
    assert_eq!(doc.selection().range_count(), 0);
}

#[test]
fn test_focus_on_node_removed_later_is_dropped() {
    let mut doc = Document::default();
    let body = doc.body().unwrap();
    let button = doc.append_element(body, "button", &[]).unwrap();

    doc.remove_node(button);
    assert!(!doc.focus(button));
    assert_eq!(doc.active_element(), Some(body));
}
