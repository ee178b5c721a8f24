//! Class extraction
//!
//! This module turns a class node into a ClassDeclaration with its
//! properties, accessors, methods and constructor, and records every
//! identifier the class references as a usage of the resource.

use super::constructors::parse_ctor_params;
use super::functions::{parse_function_parts, parse_method_params};
use super::helpers::{self, ModifierKind};
use super::identifiers;
use super::inference::infer_type;
use super::type_arguments::{declared_annotation, parse_type_arguments};
use crate::extractors::base::tree_methods::named_children;
use crate::extractors::base::{
    AccessorDeclaration, AccessorKind, ClassDeclaration, ConstructorDeclaration, Declaration,
    DefaultDeclaration, MethodDeclaration, PropertyDeclaration, Span,
};
use crate::extractors::typescript::TypeScriptExtractor;
use crate::resources::Resource;
use tracing::debug;
use tree_sitter::Node;

/// Kinds of member nodes that are callables
const METHOD_KINDS: [&str; 3] = [
    "method_definition",
    "method_signature",
    "abstract_method_signature",
];

/// Extract a class declaration into `resource`
pub(super) fn parse_class(extractor: &TypeScriptExtractor, resource: &mut Resource, node: Node) {
    let base = extractor.base();

    let name = node
        .child_by_field_name("name")
        .map(|name| base.get_node_text(&name))
        .unwrap_or_else(|| resource.default_identifier());

    let span = class_span(extractor, node);
    let mut class = ClassDeclaration::new(name, helpers::is_exported(node), span);

    if helpers::is_default_exported(node) {
        class.is_exported = false;
        resource.declarations.push(Declaration::Default(DefaultDeclaration {
            name: class.name.clone(),
            span: class.span,
        }));
    }

    if let Some(type_parameters) = node.child_by_field_name("type_parameters") {
        class.type_parameters = named_children(&type_parameters)
            .into_iter()
            .filter(|param| param.kind() == "type_parameter")
            .map(|param| base.get_node_text(&param))
            .collect();
    }

    if let Some(body) = node.child_by_field_name("body") {
        for member in named_children(&body) {
            parse_member(extractor, resource, &mut class, member);
        }
    }

    parse_class_identifiers(extractor, resource, node);

    debug!(
        "Extracted class {} ({} properties, {} methods, {} accessors, ctor: {})",
        class.name,
        class.properties.len(),
        class.methods.len(),
        class.accessors.len(),
        class.ctor.is_some()
    );

    resource.declarations.push(Declaration::Class(class));
}

fn parse_member(
    extractor: &TypeScriptExtractor,
    resource: &mut Resource,
    class: &mut ClassDeclaration,
    member: Node,
) {
    let base = extractor.base();

    if member.kind() == "public_field_definition" {
        let Some(name) = member.child_by_field_name("name") else {
            return;
        };
        class.properties.push(PropertyDeclaration {
            name: helpers::member_name_text(base, &name),
            visibility: helpers::visibility_of(member),
            r#type: infer_type(base, member, member.child_by_field_name("type")),
            is_optional: helpers::is_optional(member),
            is_static: helpers::has_modifier(member, ModifierKind::Static),
            span: base.span_of(&member),
            type_arguments: parse_type_arguments(base, member),
        });
        return;
    }

    if !METHOD_KINDS.contains(&member.kind()) {
        return;
    }
    let Some(name_node) = member.child_by_field_name("name") else {
        return;
    };
    let name = helpers::member_name_text(base, &name_node);

    if let Some(kind) = accessor_kind(member) {
        class.accessors.push(AccessorDeclaration {
            kind,
            name,
            visibility: helpers::visibility_of(member),
            r#type: infer_type(base, member, declared_annotation(member)),
            is_abstract: helpers::has_modifier(member, ModifierKind::Abstract),
            is_static: helpers::has_modifier(member, ModifierKind::Static),
            span: base.span_of(&member),
        });
        return;
    }

    if name == "constructor" {
        let mut ctor = ConstructorDeclaration::new(class.name.clone(), base.span_of(&member));
        parse_ctor_params(base, class, &mut ctor, member);
        parse_function_parts(extractor, resource, &mut ctor.variables, member);
        class.ctor = Some(ctor);
        return;
    }

    let mut method = MethodDeclaration {
        name,
        is_abstract: helpers::has_modifier(member, ModifierKind::Abstract),
        visibility: helpers::visibility_of(member),
        return_type: infer_type(base, member, declared_annotation(member)),
        is_optional: helpers::is_optional(member),
        is_static: helpers::has_modifier(member, ModifierKind::Static),
        is_async: helpers::has_modifier(member, ModifierKind::Async),
        span: base.span_of(&member),
        parameters: parse_method_params(base, member),
        type_arguments: parse_type_arguments(base, member),
        variables: Vec::new(),
    };
    parse_function_parts(extractor, resource, &mut method.variables, member);
    class.methods.push(method);
}

/// `get`/`set` keyword before the member name
fn accessor_kind(member: Node) -> Option<AccessorKind> {
    let name_id = member.child_by_field_name("name")?.id();
    let mut cursor = member.walk();
    let kind = member
        .children(&mut cursor)
        .take_while(|child| child.id() != name_id)
        .find_map(|child| match child.kind() {
            "get" => Some(AccessorKind::Getter),
            "set" => Some(AccessorKind::Setter),
            _ => None,
        });
    kind
}

/// Source range of the class, widened to an enclosing `export` statement
fn class_span(extractor: &TypeScriptExtractor, node: Node) -> Span {
    let span = extractor.base().span_of(&node);
    match node.parent() {
        Some(parent) if parent.kind() == "export_statement" => {
            Span::new(parent.start_byte() as u32, span.end)
        }
        _ => span,
    }
}

/// Record every identifier under the class node as a usage
fn parse_class_identifiers(extractor: &TypeScriptExtractor, resource: &mut Resource, node: Node) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if identifiers::is_identifier(child) {
            identifiers::parse_identifier(extractor, resource, child);
        }
        parse_class_identifiers(extractor, resource, child);
    }
}
