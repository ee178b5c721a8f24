// Tree navigation methods for BaseExtractor

use super::extractor::BaseExtractor;
use tree_sitter::Node;

impl BaseExtractor {
    /// Get field text safely
    pub fn get_field_text(&self, node: &Node, field_name: &str) -> Option<String> {
        node.child_by_field_name(field_name)
            .map(|field_node| self.get_node_text(&field_node))
    }

    /// Find first child by type
    pub fn find_child_by_type<'a>(&self, node: &Node<'a>, child_type: &str) -> Option<Node<'a>> {
        let mut cursor = node.walk();
        let found = node
            .children(&mut cursor)
            .find(|child| child.kind() == child_type);
        found
    }
}

/// Named, non-comment children in source order
pub fn named_children<'a>(node: &Node<'a>) -> Vec<Node<'a>> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect();
    children
}

/// The type node wrapped by a `type_annotation` (or similar) node
///
/// `: string` → the `predefined_type` node for `string`. Nodes that are already
/// plain types are returned unchanged.
pub fn annotated_type<'a>(annotation: &Node<'a>) -> Option<Node<'a>> {
    match annotation.kind() {
        "type_annotation"
        | "opting_type_annotation"
        | "omitting_type_annotation"
        | "asserts_annotation"
        | "type_predicate_annotation" => {
            named_children(annotation).into_iter().next()
        }
        _ => Some(*annotation),
    }
}

/// True when `child` is the node stored under `field_name` of `parent`
pub fn is_field_of(parent: &Node, field_name: &str, child: &Node) -> bool {
    parent
        .child_by_field_name(field_name)
        .is_some_and(|field| field.id() == child.id())
}
