//! Type inference for declarations without an annotation
//!
//! Explicit annotations win. Otherwise the initializer is inspected, and
//! literal initializers are mapped to their primitive or synthetic types.

use crate::extractors::base::tree_methods::{annotated_type, named_children};
use crate::extractors::base::BaseExtractor;
use tree_sitter::Node;

const ANY_ARRAY: &str = "Array<any>";

/// Declared or inferred type of `node`
///
/// `explicit` is the node's annotation (`type_annotation` or a bare type node).
/// Returns `None` when there is no annotation, no initializer and no literal
/// shape to infer from.
pub(crate) fn infer_type(
    base: &BaseExtractor,
    node: Node,
    explicit: Option<Node>,
) -> Option<String> {
    if let Some(type_node) = explicit.as_ref().and_then(annotated_type) {
        return Some(base.get_node_text(&type_node));
    }

    if let Some(initializer) = node.child_by_field_name("value") {
        return infer_type(base, initializer, None);
    }

    infer_literal_type(base, node)
}

/// Type of a literal expression node
fn infer_literal_type(base: &BaseExtractor, node: Node) -> Option<String> {
    match node.kind() {
        "true" | "false" => Some("boolean".to_string()),
        "string" => Some("string".to_string()),
        "number" => Some("number".to_string()),
        "array" => Some(infer_array_type(base, node)),
        "object" => Some(infer_object_type(base, node)),
        _ => None,
    }
}

/// `Array<T>` when the elements that infer all infer to `T`, `Array<any>` otherwise
///
/// Elements with no inferable type are skipped.
fn infer_array_type(base: &BaseExtractor, node: Node) -> String {
    let mut element_types: Vec<String> = Vec::new();
    for element in named_children(&node) {
        if let Some(element_type) = infer_type(base, element, None) {
            if !element_types.contains(&element_type) {
                element_types.push(element_type);
            }
        }
    }

    match element_types.as_slice() {
        [only] => format!("Array<{}>", only),
        _ => ANY_ARRAY.to_string(),
    }
}

/// `{ key: type, ... }` in source property order
fn infer_object_type(base: &BaseExtractor, node: Node) -> String {
    let properties: Vec<String> = named_children(&node)
        .into_iter()
        .filter_map(|property| {
            let (key, value_type) = match property.kind() {
                "pair" => {
                    let key = property.child_by_field_name("key")?;
                    let value_type = property
                        .child_by_field_name("value")
                        .and_then(|value| infer_type(base, value, None));
                    (base.get_node_text(&key), value_type)
                }
                "shorthand_property_identifier" => (base.get_node_text(&property), None),
                "method_definition" => {
                    let name = property.child_by_field_name("name")?;
                    (base.get_node_text(&name), None)
                }
                _ => return None,
            };
            Some(format!(
                "{}: {}",
                key,
                value_type.unwrap_or_else(|| "any".to_string())
            ))
        })
        .collect();

    if properties.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {} }}", properties.join(", "))
    }
}
