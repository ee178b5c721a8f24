//! Identifier usage extraction
//!
//! Records every symbol a resource references so unused-import analysis can
//! compare imports against actual usages. Declared names (the class name, a
//! parameter name, ...) are definitions, not usages, and are skipped.

use crate::extractors::base::tree_methods::is_field_of;
use crate::extractors::typescript::TypeScriptExtractor;
use crate::resources::Resource;
use tracing::trace;
use tree_sitter::Node;

/// Node kinds that name a value or a type
const IDENTIFIER_KINDS: [&str; 2] = ["identifier", "type_identifier"];

/// Declarations whose `name` (or `pattern`) field introduces a binding
const DECLARATION_KINDS: [&str; 18] = [
    "class_declaration",
    "abstract_class_declaration",
    "class",
    "interface_declaration",
    "type_alias_declaration",
    "enum_declaration",
    "function_declaration",
    "generator_function_declaration",
    "function_signature",
    "method_definition",
    "method_signature",
    "abstract_method_signature",
    "public_field_definition",
    "property_signature",
    "required_parameter",
    "optional_parameter",
    "variable_declarator",
    "type_parameter",
];

pub(crate) fn is_identifier(node: Node) -> bool {
    IDENTIFIER_KINDS.contains(&node.kind())
}

/// Record `node` as a usage of the resource unless it declares a name
pub(crate) fn parse_identifier(extractor: &TypeScriptExtractor, resource: &mut Resource, node: Node) {
    if is_declaration_name(node) {
        return;
    }
    let name = extractor.base().get_node_text(&node);
    trace!("Usage {} at byte {}", name, node.start_byte());
    resource.add_usage(name);
}

fn is_declaration_name(node: Node) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };

    match parent.kind() {
        // Destructured bindings: every identifier inside binds a name
        "array_pattern" | "rest_pattern" => true,
        "pair_pattern" => is_field_of(&parent, "value", &node),
        "assignment_pattern" | "object_assignment_pattern" => is_field_of(&parent, "left", &node),
        "catch_clause" => is_field_of(&parent, "parameter", &node),
        kind if DECLARATION_KINDS.contains(&kind) => {
            is_field_of(&parent, "name", &node) || is_field_of(&parent, "pattern", &node)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::typescript::test_utils::{find_all, parse_typescript};

    fn usages_of(code: &str) -> Vec<String> {
        let tree = parse_typescript(code);
        let extractor = TypeScriptExtractor::new(
            "typescript".to_string(),
            "test.ts".to_string(),
            code.to_string(),
        );
        let mut resource = Resource::module("test");
        let mut nodes = find_all(tree.root_node(), "identifier");
        nodes.extend(find_all(tree.root_node(), "type_identifier"));
        nodes.sort_by_key(|node| node.start_byte());
        for node in nodes {
            parse_identifier(&extractor, &mut resource, node);
        }
        resource.usages
    }

    #[test]
    fn test_declared_names_are_not_usages() {
        let usages = usages_of("class Foo<T> { run(input: Bar): T { const local = helper(input); return local; } }");

        assert_eq!(usages, vec!["Bar", "T", "helper", "input", "local"]);
    }

    #[test]
    fn test_destructured_bindings_are_not_usages() {
        let usages = usages_of("function f([a, b]: Pair, { c: d }: Options) { return a + d; }");

        assert_eq!(usages, vec!["Pair", "Options", "a", "d"]);
    }
}
