//! Constructor parameters and parameter-property promotion

use super::functions::{parameter_nodes, parse_parameter, ParsedParameter};
use super::helpers;
use super::inference::infer_type;
use super::type_arguments::parse_type_arguments;
use crate::extractors::base::{
    BaseExtractor, ClassDeclaration, ConstructorDeclaration, PropertyDeclaration,
};
use tracing::trace;
use tree_sitter::Node;

/// Fill `ctor.parameters` from the constructor node
///
/// A parameter carrying any modifier (`private id: number`,
/// `readonly name: string`) also declares a property on `class`.
pub(crate) fn parse_ctor_params(
    base: &BaseExtractor,
    class: &mut ClassDeclaration,
    ctor: &mut ConstructorDeclaration,
    node: Node,
) {
    for param in parameter_nodes(&node) {
        match parse_parameter(base, param) {
            Some(ParsedParameter::Identifier(declaration)) => {
                if helpers::is_parameter_property(param) {
                    trace!("Promoting constructor parameter {} of {}", declaration.name, class.name);
                    class.properties.push(PropertyDeclaration {
                        name: declaration.name.clone(),
                        visibility: helpers::visibility_of(param),
                        r#type: infer_type(base, param, param.child_by_field_name("type")),
                        is_optional: helpers::is_optional(param),
                        is_static: helpers::has_modifier(param, helpers::ModifierKind::Static),
                        span: base.span_of(&param),
                        type_arguments: parse_type_arguments(base, param),
                    });
                }
                ctor.parameters.push(declaration);
            }
            Some(ParsedParameter::Destructured(bound)) => ctor.parameters.extend(bound),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::{DeclarationVisibility, Span};
    use crate::extractors::typescript::test_utils::{base_for, find_first, parse_typescript};

    fn parse_ctor(code: &str) -> (ClassDeclaration, ConstructorDeclaration) {
        let tree = parse_typescript(code);
        let base = base_for(code);
        let node = find_first(tree.root_node(), "method_definition").unwrap();
        let mut class = ClassDeclaration::new("A", false, Span::default());
        let mut ctor = ConstructorDeclaration::new("A", base.span_of(&node));
        parse_ctor_params(&base, &mut class, &mut ctor, node);
        (class, ctor)
    }

    #[test]
    fn test_plain_parameters_are_not_promoted() {
        let (class, ctor) = parse_ctor("class A { constructor(a: string, b = 2) {} }");

        assert!(class.properties.is_empty());
        let summary: Vec<(&str, Option<&str>)> = ctor
            .parameters
            .iter()
            .map(|p| (p.name.as_str(), p.type_text()))
            .collect();
        assert_eq!(summary, vec![("a", Some("string")), ("b", Some("number"))]);
    }

    #[test]
    fn test_parameter_properties_are_promoted() {
        let (class, ctor) = parse_ctor(
            "class A { constructor(private id: number, public label?: string, readonly tags: string[], plain: boolean) {} }",
        );

        assert_eq!(ctor.parameters.len(), 4);
        assert_eq!(class.properties.len(), 3);

        let id = &class.properties[0];
        assert_eq!(id.name, "id");
        assert_eq!(id.visibility, Some(DeclarationVisibility::Private));
        assert_eq!(id.r#type.as_deref(), Some("number"));
        assert!(!id.is_optional);

        let label = &class.properties[1];
        assert_eq!(label.visibility, Some(DeclarationVisibility::Public));
        assert!(label.is_optional);

        let tags = &class.properties[2];
        assert_eq!(tags.visibility, None);
        assert_eq!(tags.r#type.as_deref(), Some("string[]"));
    }

    #[test]
    fn test_destructured_parameters_expand() {
        let (class, ctor) = parse_ctor("class A { constructor({ a, b: c }: Opts, [x, [y]]: Pair) {} }");

        assert!(class.properties.is_empty());
        let names: Vec<&str> = ctor.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c", "x"]);
        assert!(ctor.parameters.iter().all(|p| p.r#type.is_none()));
    }

    #[test]
    fn test_readonly_or_override_alone_promotes() {
        let (class, ctor) = parse_ctor(
            "class B extends A { constructor(readonly id: number, override name: string, other = 1) { super(); } }",
        );

        assert_eq!(ctor.parameters.len(), 3);
        let summary: Vec<(&str, Option<DeclarationVisibility>, Option<&str>, bool)> = class
            .properties
            .iter()
            .map(|p| (p.name.as_str(), p.visibility, p.r#type.as_deref(), p.is_static))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("id", None, Some("number"), false),
                ("name", None, Some("string"), false),
            ]
        );
    }
}
