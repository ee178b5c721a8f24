//! Structural type flattening
//!
//! Turns inline object types (`{ a: string; b: { c: number } }`), or a generic
//! whose first type argument is one (`Promise<{ a: string }>`), into a tree of
//! ParameterDeclaration so consumers can show nested shapes without reparsing.

use super::helpers::member_name_text;
use super::inference::infer_type;
use crate::extractors::base::tree_methods::{annotated_type, named_children};
use crate::extractors::base::{BaseExtractor, ParameterDeclaration, ParameterType, TypeArguments};
use std::collections::HashSet;
use tree_sitter::Node;

/// A member of a nested object type, remembered with the index of its parent member
struct NestedMember<'tree> {
    parent: usize,
    node: Node<'tree>,
}

/// Flatten the type annotation of a field, method (return type) or signature
pub(crate) fn parse_type_arguments(base: &BaseExtractor, node: Node) -> TypeArguments {
    let Some(annotation) = declared_type(node) else {
        return TypeArguments::default();
    };

    let target = match annotation.kind() {
        "generic_type" => {
            let first_argument = annotation
                .child_by_field_name("type_arguments")
                .and_then(|arguments| named_children(&arguments).into_iter().next());
            match first_argument {
                Some(argument) if argument.kind() == "predefined_type" => {
                    if base.get_node_text(&argument) == "any" {
                        return TypeArguments::Any;
                    }
                    return TypeArguments::default();
                }
                Some(argument) if argument.kind() == "object_type" => argument,
                _ => return TypeArguments::default(),
            }
        }
        "object_type" => annotation,
        _ => return TypeArguments::default(),
    };

    TypeArguments::Members(flatten_members(base, &named_children(&target)))
}

/// Flatten the members of one object type, in source order
///
/// Pass one records every nested member of a structural member in an arena.
/// Pass two emits the parameters; arena entries are emitted at most once,
/// tracked by source position.
fn flatten_members(base: &BaseExtractor, members: &[Node]) -> Vec<ParameterDeclaration> {
    let mut arena: Vec<NestedMember> = Vec::new();
    for (index, member) in members.iter().enumerate() {
        if member_name(base, member).is_none() {
            continue;
        }
        if let Some(object_type) = structural_type(member) {
            arena.extend(
                named_children(&object_type)
                    .into_iter()
                    .map(|node| NestedMember {
                        parent: index,
                        node,
                    }),
            );
        }
    }

    let mut emitted: HashSet<usize> = HashSet::new();
    let mut params = Vec::new();

    for (index, member) in members.iter().enumerate() {
        let Some(name) = member_name(base, member) else {
            continue;
        };

        let Some(object_type) = structural_type(member) else {
            params.push(ParameterDeclaration::named(
                name,
                infer_type(base, *member, declared_annotation(*member)),
                base.span_of(member),
            ));
            continue;
        };

        let nested = flatten_members(base, &named_children(&object_type));
        let mut param = ParameterDeclaration::new(
            name,
            Some(ParameterType::Structural(nested)),
            base.span_of(member),
        );

        for child in arena.iter().filter(|entry| entry.parent <= index) {
            if !emitted.insert(child.node.start_byte()) {
                continue;
            }
            let Some(child_name) = member_name(base, &child.node) else {
                continue;
            };
            param.members.push(ParameterDeclaration::named(
                child_name,
                declared_type(child.node).map(|type_node| base.get_node_text(&type_node)),
                base.span_of(&child.node),
            ));
        }

        params.push(param);
    }

    params
}

/// Display name of an object-type member
///
/// Index signatures are named by their source text up to the closing `]`
/// (`[key: string]`); call and construct signatures have no name.
fn member_name(base: &BaseExtractor, member: &Node) -> Option<String> {
    match member.kind() {
        "index_signature" => {
            let mut cursor = member.walk();
            let close = member
                .children(&mut cursor)
                .find(|child| child.kind() == "]")?;
            Some(base.get_range_text(member.start_byte(), close.end_byte()))
        }
        "call_signature" | "construct_signature" => None,
        _ => member
            .child_by_field_name("name")
            .map(|name| member_name_text(base, &name)),
    }
}

/// The member's own type when it is an inline object type
fn structural_type<'tree>(member: &Node<'tree>) -> Option<Node<'tree>> {
    declared_type(*member).filter(|type_node| type_node.kind() == "object_type")
}

/// Annotation node of a declaration: its `type`, or `return_type` for callables
pub(crate) fn declared_annotation(node: Node) -> Option<Node> {
    node.child_by_field_name("type")
        .or_else(|| node.child_by_field_name("return_type"))
}

/// Type node inside the declaration's annotation
pub(crate) fn declared_type(node: Node) -> Option<Node> {
    declared_annotation(node).and_then(|annotation| annotated_type(&annotation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::typescript::test_utils::{base_for, find_first, parse_typescript};

    fn flatten_field(code: &str) -> TypeArguments {
        let tree = parse_typescript(code);
        let base = base_for(code);
        let field = find_first(tree.root_node(), "public_field_definition").unwrap();
        parse_type_arguments(&base, field)
    }

    #[test]
    fn test_no_annotation_or_plain_type_is_empty() {
        assert!(flatten_field("class A { x = 1; }").is_empty());
        assert!(flatten_field("class A { x: string; }").is_empty());
        assert!(flatten_field("class A { x: Foo; }").is_empty());
    }

    #[test]
    fn test_generic_any_argument() {
        assert_eq!(
            flatten_field("class A { x: Promise<any>; }"),
            TypeArguments::Any
        );
        assert!(flatten_field("class A { x: Promise<string>; }").is_empty());
        assert!(flatten_field("class A { x: Array<Foo>; }").is_empty());
    }

    #[test]
    fn test_generic_structural_argument() {
        let result = flatten_field("class A { x: Promise<{ id: number; label?: string }>; }");
        let members = result.members();

        assert_eq!(members.len(), 2);
        assert_eq!(members[0].name, "id");
        assert_eq!(members[0].type_text(), Some("number"));
        assert_eq!(members[1].name, "label");
        assert_eq!(members[1].type_text(), Some("string"));
    }

    #[test]
    fn test_direct_object_type_with_index_signature() {
        let result = flatten_field("class A { x: { a: string; [k: string]: number }; }");
        let members = result.members();

        assert_eq!(members.len(), 2);
        assert_eq!(members[0].name, "a");
        assert_eq!(members[0].type_text(), Some("string"));
        assert_eq!(members[1].name, "[k: string]");
        assert_eq!(members[1].type_text(), Some("number"));
    }

    #[test]
    fn test_nested_structural_member() {
        let code = "class A { x: { meta: { a: string; [key: string]: number }; count: number }; }";
        let result = flatten_field(code);
        let members = result.members();

        assert_eq!(members.len(), 2);

        let meta = &members[0];
        assert_eq!(meta.name, "meta");
        let child_names: Vec<&str> = meta.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(child_names, vec!["a", "[key: string]"]);
        assert_eq!(meta.members[0].type_text(), Some("string"));
        assert_eq!(meta.members[1].type_text(), Some("number"));

        match &meta.r#type {
            Some(ParameterType::Structural(nested)) => {
                assert_eq!(nested.len(), 2);
                assert_eq!(nested[0].name, "a");
            }
            other => panic!("expected structural type, got {:?}", other),
        }

        assert_eq!(members[1].name, "count");
        assert_eq!(members[1].type_text(), Some("number"));
        assert!(members[1].members.is_empty());
    }

    #[test]
    fn test_children_emitted_once_per_parent() {
        let code = "class A { x: { first: { a: string }; second: { b: number } }; }";
        let result = flatten_field(code);
        let members = result.members();

        assert_eq!(members[0].members.len(), 1);
        assert_eq!(members[0].members[0].name, "a");
        assert_eq!(members[1].members.len(), 1);
        assert_eq!(members[1].members[0].name, "b");
    }

    #[test]
    fn test_call_signatures_are_skipped() {
        let result = flatten_field("class A { x: { (): void; run(): void; name: string }; }");
        let names: Vec<&str> = result.members().iter().map(|m| m.name.as_str()).collect();

        assert_eq!(names, vec!["run", "name"]);
        assert_eq!(result.members()[0].type_text(), Some("void"));
    }

    #[test]
    fn test_method_return_type_is_flattened() {
        let code = "class A { load(): Promise<{ ok: boolean }> { return null; } }";
        let tree = parse_typescript(code);
        let base = base_for(code);
        let method = find_first(tree.root_node(), "method_definition").unwrap();

        let result = parse_type_arguments(&base, method);
        assert_eq!(result.members().len(), 1);
        assert_eq!(result.members()[0].name, "ok");
        assert_eq!(result.members()[0].type_text(), Some("boolean"));
    }
}
