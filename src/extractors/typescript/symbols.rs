//! Core declaration extraction logic
//!
//! This module handles the main tree traversal and node routing. It
//! delegates to specialized modules for classes, imports and identifiers.

use super::{classes, identifiers, imports};
use crate::extractors::typescript::TypeScriptExtractor;
use crate::resources::Resource;
use tracing::debug;
use tree_sitter::{Node, Tree};

/// Extract all declarations, imports and usages from the syntax tree
pub(super) fn extract_declarations(
    extractor: &TypeScriptExtractor,
    resource: &mut Resource,
    tree: &Tree,
) {
    visit_children(extractor, resource, tree.root_node());
}

fn visit_children(extractor: &TypeScriptExtractor, resource: &mut Resource, node: Node) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit_node(extractor, resource, child);
    }
}

/// Recursively visit nodes and route them by kind
fn visit_node(extractor: &TypeScriptExtractor, resource: &mut Resource, node: Node) {
    match node.kind() {
        "class_declaration" | "abstract_class_declaration" => {
            classes::parse_class(extractor, resource, node);
            return;
        }

        // Anonymous `export default class {}`
        "class" if node.is_named() && is_default_export_value(node) => {
            classes::parse_class(extractor, resource, node);
            return;
        }

        "import_statement" => {
            imports::parse_import(extractor, resource, node);
            return;
        }

        // declare module "x" { ... } / namespace X { ... }
        "module" | "internal_module" => {
            if let Some(child) = parse_ambient_block(extractor, node) {
                resource.resources.push(child);
                return;
            }
        }

        _ if identifiers::is_identifier(node) => {
            identifiers::parse_identifier(extractor, resource, node);
        }

        _ => {}
    }

    visit_children(extractor, resource, node);
}

fn is_default_export_value(node: Node) -> bool {
    node.parent()
        .is_some_and(|parent| parent.kind() == "export_statement")
}

/// Child resource for an ambient module or namespace with a body
fn parse_ambient_block(extractor: &TypeScriptExtractor, node: Node) -> Option<Resource> {
    let base = extractor.base();
    let name_node = node.child_by_field_name("name")?;
    let body = node.child_by_field_name("body")?;

    let mut child = if node.kind() == "module" && name_node.kind() == "string" {
        let name = base
            .get_node_text(&name_node)
            .trim_matches(|c| c == '"' || c == '\'')
            .to_string();
        Resource::module(name)
    } else {
        Resource::namespace(base.get_node_text(&name_node))
    };

    visit_children(extractor, &mut child, body);
    debug!(
        "Extracted ambient block {} ({} declarations)",
        child.identifier(),
        child.declarations.len()
    );
    Some(child)
}
