//! Modifier helpers for the TypeScript extractor
//!
//! tree-sitter has no modifier flag set on nodes; modifiers are the keyword
//! children that precede a declaration's name, and export-ness comes from the
//! enclosing `export_statement`. This module turns both into queryable form.

use crate::extractors::base::{BaseExtractor, DeclarationVisibility};
use bitflags::bitflags;
use tree_sitter::Node;

bitflags! {
    /// Combined modifier flags of a declaration node
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ModifierFlags: u16 {
        const EXPORT = 1 << 0;
        const DEFAULT = 1 << 1;
        const PUBLIC = 1 << 2;
        const PROTECTED = 1 << 3;
        const PRIVATE = 1 << 4;
        const STATIC = 1 << 5;
        const ABSTRACT = 1 << 6;
        const ASYNC = 1 << 7;
        const READONLY = 1 << 8;
        const OVERRIDE = 1 << 9;

        /// Any of these on a constructor parameter declares a property
        const PARAMETER_PROPERTY = Self::PUBLIC.bits()
            | Self::PROTECTED.bits()
            | Self::PRIVATE.bits()
            | Self::STATIC.bits()
            | Self::READONLY.bits()
            | Self::OVERRIDE.bits();
    }
}

/// A single modifier keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKind {
    Public,
    Protected,
    Private,
    Static,
    Abstract,
    Async,
    Readonly,
    Override,
}

impl ModifierKind {
    fn from_node(node: Node) -> Option<Self> {
        match node.kind() {
            "accessibility_modifier" => {
                let keyword = node.children(&mut node.walk()).next()?;
                match keyword.kind() {
                    "public" => Some(ModifierKind::Public),
                    "protected" => Some(ModifierKind::Protected),
                    "private" => Some(ModifierKind::Private),
                    _ => None,
                }
            }
            "static" => Some(ModifierKind::Static),
            "abstract" => Some(ModifierKind::Abstract),
            "async" => Some(ModifierKind::Async),
            "readonly" => Some(ModifierKind::Readonly),
            "override_modifier" => Some(ModifierKind::Override),
            _ => None,
        }
    }

    fn flag(self) -> ModifierFlags {
        match self {
            ModifierKind::Public => ModifierFlags::PUBLIC,
            ModifierKind::Protected => ModifierFlags::PROTECTED,
            ModifierKind::Private => ModifierFlags::PRIVATE,
            ModifierKind::Static => ModifierFlags::STATIC,
            ModifierKind::Abstract => ModifierFlags::ABSTRACT,
            ModifierKind::Async => ModifierFlags::ASYNC,
            ModifierKind::Readonly => ModifierFlags::READONLY,
            ModifierKind::Override => ModifierFlags::OVERRIDE,
        }
    }
}

/// Modifier keywords of a node, in source order
///
/// Only children before the declared name (or parameter pattern) count, so a
/// method called `static` is not mistaken for a static method.
pub(crate) fn modifiers(node: Node) -> Vec<ModifierKind> {
    let name_id = node
        .child_by_field_name("name")
        .or_else(|| node.child_by_field_name("pattern"))
        .map(|name| name.id());

    let mut result = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if Some(child.id()) == name_id {
            break;
        }
        if let Some(kind) = ModifierKind::from_node(child) {
            result.push(kind);
        }
    }
    result
}

/// Flags of the node's own modifier keywords
pub(crate) fn modifier_flags(node: Node) -> ModifierFlags {
    modifiers(node)
        .into_iter()
        .fold(ModifierFlags::empty(), |flags, kind| flags | kind.flag())
}

/// Modifier keywords plus the export flags contributed by an `export_statement`
pub(crate) fn combined_modifier_flags(node: Node) -> ModifierFlags {
    let mut flags = modifier_flags(node);

    if let Some(parent) = node.parent() {
        if parent.kind() == "export_statement" {
            flags |= ModifierFlags::EXPORT;
            if parent
                .children(&mut parent.walk())
                .any(|child| child.kind() == "default")
            {
                flags |= ModifierFlags::DEFAULT;
            }
        }
    }

    flags
}

/// `export class Foo {}`, `export default class {}`
pub(crate) fn is_exported(node: Node) -> bool {
    combined_modifier_flags(node).contains(ModifierFlags::EXPORT)
}

/// `export default class Foo {}`
pub(crate) fn is_default_exported(node: Node) -> bool {
    combined_modifier_flags(node).contains(ModifierFlags::DEFAULT)
}

/// First visibility keyword in the modifier list; `None` when there is none
pub(crate) fn visibility_of(node: Node) -> Option<DeclarationVisibility> {
    first_visibility(&modifiers(node))
}

fn first_visibility(kinds: &[ModifierKind]) -> Option<DeclarationVisibility> {
    kinds.iter().find_map(|kind| match kind {
        ModifierKind::Public => Some(DeclarationVisibility::Public),
        ModifierKind::Protected => Some(DeclarationVisibility::Protected),
        ModifierKind::Private => Some(DeclarationVisibility::Private),
        _ => None,
    })
}

/// Check if a node carries a modifier of the given kind
///
/// Useful for checking for 'async', 'static', 'abstract', etc.
pub(crate) fn has_modifier(node: Node, kind: ModifierKind) -> bool {
    modifier_flags(node).contains(kind.flag())
}

/// `constructor(private id: number)`, `constructor(readonly id: number)`
pub(crate) fn is_parameter_property(param: Node) -> bool {
    modifier_flags(param).intersects(ModifierFlags::PARAMETER_PROPERTY)
}

/// Name of a member as written, without the quotes of a string literal name
pub(crate) fn member_name_text(base: &BaseExtractor, name: &Node) -> String {
    let text = base.get_node_text(name);
    if name.kind() == "string" {
        return text
            .trim_matches(|c| c == '"' || c == '\'')
            .to_string();
    }
    text
}

/// `?` directly on the declaration (`name?: string`, `method?(): void`)
pub(crate) fn is_optional(node: Node) -> bool {
    node.kind() == "optional_parameter"
        || node
            .children(&mut node.walk())
            .any(|child| child.kind() == "?")
}
