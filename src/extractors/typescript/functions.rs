//! Function-like bodies: parameter lists and local variables
//!
//! Shared by methods, constructors and accessors. A body is walked once to
//! record identifier usages and collect `const`/`let`/`var` declarations.

use super::identifiers;
use super::inference::infer_type;
use crate::extractors::base::tree_methods::named_children;
use crate::extractors::base::{BaseExtractor, ParameterDeclaration, VariableDeclaration};
use crate::extractors::typescript::TypeScriptExtractor;
use crate::resources::Resource;
use tree_sitter::Node;

/// One entry of a formal parameter list
pub(crate) enum ParsedParameter {
    /// `name`, `name: T`, `...rest: T[]`
    Identifier(ParameterDeclaration),
    /// `{ a, b: c }` or `[a, b]`, expanded to the names it binds
    Destructured(Vec<ParameterDeclaration>),
}

/// Parameter nodes of a callable's `parameters` field
pub(crate) fn parameter_nodes<'tree>(node: &Node<'tree>) -> Vec<Node<'tree>> {
    let Some(parameters) = node.child_by_field_name("parameters") else {
        return Vec::new();
    };
    named_children(&parameters)
        .into_iter()
        .filter(|param| matches!(param.kind(), "required_parameter" | "optional_parameter"))
        .collect()
}

pub(crate) fn parse_parameter(base: &BaseExtractor, param: Node) -> Option<ParsedParameter> {
    let pattern = param.child_by_field_name("pattern")?;

    match pattern.kind() {
        "identifier" | "this" => Some(ParsedParameter::Identifier(ParameterDeclaration::named(
            base.get_node_text(&pattern),
            infer_type(base, param, param.child_by_field_name("type")),
            base.span_of(&param),
        ))),
        "rest_pattern" => {
            let name = named_children(&pattern)
                .into_iter()
                .find(|child| child.kind() == "identifier")?;
            Some(ParsedParameter::Identifier(ParameterDeclaration::named(
                base.get_node_text(&name),
                infer_type(base, param, param.child_by_field_name("type")),
                base.span_of(&param),
            )))
        }
        "object_pattern" | "array_pattern" => Some(ParsedParameter::Destructured(
            bound_names(base, pattern),
        )),
        _ => None,
    }
}

/// Names bound directly by a destructuring pattern
///
/// `{ a }` binds `a`, `{ a: b }` binds `b`, `[a, b]` binds both. Defaults,
/// nested patterns and rest elements bind nothing here.
fn bound_names(base: &BaseExtractor, pattern: Node) -> Vec<ParameterDeclaration> {
    named_children(&pattern)
        .into_iter()
        .filter_map(|element| {
            let name = match element.kind() {
                "shorthand_property_identifier_pattern" | "identifier" => element,
                "pair_pattern" => element
                    .child_by_field_name("value")
                    .filter(|value| value.kind() == "identifier")?,
                _ => return None,
            };
            Some(ParameterDeclaration::named(
                base.get_node_text(&name),
                None,
                base.span_of(&element),
            ))
        })
        .collect()
}

/// Flattened parameter list of a method or accessor
pub(crate) fn parse_method_params(base: &BaseExtractor, node: Node) -> Vec<ParameterDeclaration> {
    let mut params = Vec::new();
    for param in parameter_nodes(&node) {
        match parse_parameter(base, param) {
            Some(ParsedParameter::Identifier(declaration)) => params.push(declaration),
            Some(ParsedParameter::Destructured(bound)) => params.extend(bound),
            None => {}
        }
    }
    params
}

/// Walk a function-like node, recording usages and its local variables
pub(crate) fn parse_function_parts(
    extractor: &TypeScriptExtractor,
    resource: &mut Resource,
    variables: &mut Vec<VariableDeclaration>,
    node: Node,
) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if identifiers::is_identifier(child) {
            identifiers::parse_identifier(extractor, resource, child);
        } else if matches!(child.kind(), "lexical_declaration" | "variable_declaration") {
            parse_variables(extractor.base(), variables, child);
        }
        parse_function_parts(extractor, resource, variables, child);
    }
}

fn parse_variables(base: &BaseExtractor, variables: &mut Vec<VariableDeclaration>, node: Node) {
    let is_const = node
        .child(0)
        .is_some_and(|keyword| keyword.kind() == "const");

    for declarator in named_children(&node) {
        if declarator.kind() != "variable_declarator" {
            continue;
        }
        let Some(name) = declarator.child_by_field_name("name") else {
            continue;
        };
        if name.kind() != "identifier" {
            continue;
        }
        variables.push(VariableDeclaration {
            name: base.get_node_text(&name),
            is_const,
            r#type: infer_type(base, declarator, declarator.child_by_field_name("type")),
            span: base.span_of(&declarator),
        });
    }
}
