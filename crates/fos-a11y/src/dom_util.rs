//! DOM predicates used to pick a focus target
//!
//! Everything here is generic over [`DomView`], so the same rules apply to
//! `fos_dom::Document` and to any other host tree.

use crate::host::DomView;

/// Input types, as reported by `input_type`. Anything else reads as `text`.
const INPUT_TYPES: &[&str] = &[
    "button", "checkbox", "color", "date", "datetime-local", "email", "file",
    "hidden", "image", "month", "number", "password", "radio", "range",
    "reset", "search", "submit", "tel", "text", "time", "url", "week",
];

/// Input types edited as a single line of text
const TEXT_INPUT_TYPES: &[&str] = &["email", "number", "password", "search", "tel", "text", "url"];

/// Form controls that honour the `disabled` attribute
const DISABLEABLE: &[&str] = &["button", "input", "select", "textarea"];

/// Whether `node` is `ancestor` or lies beneath it
pub fn is_descendant_of_node<V: DomView + ?Sized>(view: &V, node: V::Node, ancestor: V::Node) -> bool {
    let mut cur = Some(node);
    while let Some(n) = cur {
        if n == ancestor {
            return true;
        }
        cur = view.parent(n);
    }
    false
}

/// Parse a `tabindex` attribute value
pub fn parse_tab_index(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

/// Elements that take focus without a `tabindex`
pub fn is_natively_focusable<V: DomView + ?Sized>(view: &V, node: V::Node) -> bool {
    let Some(tag) = view.tag_name(node) else { return false };
    let native = match tag {
        "a" | "area" => view.has_attribute(node, "href"),
        "button" | "select" | "textarea" | "iframe" | "summary" => true,
        "input" => input_type(view, node) != Some("hidden"),
        _ => false,
    };
    native || is_content_editable(view, node)
}

fn is_content_editable<V: DomView + ?Sized>(view: &V, node: V::Node) -> bool {
    view.attribute(node, "contenteditable")
        .is_some_and(|v| !v.trim().eq_ignore_ascii_case("false"))
}

/// Whether a form control is disabled
pub fn is_disabled<V: DomView + ?Sized>(view: &V, node: V::Node) -> bool {
    view.tag_name(node).is_some_and(|tag| DISABLEABLE.contains(&tag))
        && view.has_attribute(node, "disabled")
}

/// Effective tab index: the parsed attribute, else 0 for natively
/// focusable elements and -1 for everything else
pub fn tab_index<V: DomView + ?Sized>(view: &V, node: V::Node) -> i32 {
    if let Some(value) = view.attribute(node, "tabindex").and_then(parse_tab_index) {
        return value;
    }
    if is_natively_focusable(view, node) { 0 } else { -1 }
}

/// Whether a node can receive input focus
pub fn is_focusable<V: DomView + ?Sized>(view: &V, node: V::Node) -> bool {
    let Some(tag) = view.tag_name(node) else { return false };
    if is_disabled(view, node) {
        return false;
    }
    // Anchors without href report tabIndex 0 but refuse focus.
    if tag == "a" && !view.has_attribute(node, "href") && !view.has_attribute(node, "tabindex") {
        return false;
    }
    if tab_index(view, node) >= 0 {
        return true;
    }
    view.attribute(node, "tabindex").is_some_and(|v| v.trim() == "-1")
}

/// Pre-order walk over the descendants of `node`
pub fn descendants<V: DomView + ?Sized>(view: &V, node: V::Node) -> PreOrder<'_, V> {
    PreOrder {
        view,
        root: node,
        next: view.first_child(node),
    }
}

/// First focusable descendant in pre-order, excluding `node` itself
pub fn find_focusable_descendant<V: DomView + ?Sized>(view: &V, node: V::Node) -> Option<V::Node> {
    descendants(view, node).find(|&n| is_focusable(view, n))
}

/// Nearest focusable node on the ancestor chain, starting at `node`
pub fn find_focusable_ancestor<V: DomView + ?Sized>(view: &V, node: V::Node) -> Option<V::Node> {
    let mut cur = Some(node);
    while let Some(n) = cur {
        if is_focusable(view, n) {
            return Some(n);
        }
        cur = view.parent(n);
    }
    None
}

/// Normalised `type` of an `input` element
///
/// Missing or unknown values read as `text`. Returns `None` for anything
/// that is not an `input`.
pub fn input_type<V: DomView + ?Sized>(view: &V, node: V::Node) -> Option<&'static str> {
    if view.tag_name(node) != Some("input") {
        return None;
    }
    let raw = view.attribute(node, "type").unwrap_or("").trim();
    let known = INPUT_TYPES.iter().copied().find(|t| t.eq_ignore_ascii_case(raw));
    Some(known.unwrap_or("text"))
}

/// Whether a node is an `input` edited as a single line of text
pub fn is_input_type_text<V: DomView + ?Sized>(view: &V, node: V::Node) -> bool {
    input_type(view, node).is_some_and(|t| TEXT_INPUT_TYPES.contains(&t))
}

/// Iterator returned by [`descendants`]
pub struct PreOrder<'a, V: DomView + ?Sized> {
    view: &'a V,
    root: V::Node,
    next: Option<V::Node>,
}

impl<V: DomView + ?Sized> PreOrder<'_, V> {
    fn advance(&self, from: V::Node) -> Option<V::Node> {
        if let Some(child) = self.view.first_child(from) {
            return Some(child);
        }
        let mut cur = from;
        loop {
            if cur == self.root {
                return None;
            }
            if let Some(sibling) = self.view.next_sibling(cur) {
                return Some(sibling);
            }
            cur = self.view.parent(cur)?;
        }
    }
}

impl<V: DomView + ?Sized> Iterator for PreOrder<'_, V> {
    type Item = V::Node;

    fn next(&mut self) -> Option<V::Node> {
        let node = self.next?;
        self.next = self.advance(node);
        Some(node)
    }
}

impl<V: DomView + ?Sized> std::fmt::Debug for PreOrder<'_, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreOrder")
            .field("root", &self.root)
            .field("next", &self.next)
            .finish()
    }
}
