//! Shared helpers for the TypeScript extractor tests

use crate::extractors::base::BaseExtractor;
use tree_sitter::{Node, Tree};

pub(crate) fn parse_typescript(code: &str) -> Tree {
    let mut parser = crate::language::parser_for("typescript").unwrap();
    parser.parse(code, None).unwrap()
}

pub(crate) fn base_for(code: &str) -> BaseExtractor {
    BaseExtractor::new(
        "typescript".to_string(),
        "test.ts".to_string(),
        code.to_string(),
    )
}

/// First named node of `kind` in pre-order
pub(crate) fn find_first<'a>(node: Node<'a>, kind: &str) -> Option<Node<'a>> {
    find_all(node, kind).into_iter().next()
}

/// Every named node of `kind` in pre-order
pub(crate) fn find_all<'a>(node: Node<'a>, kind: &str) -> Vec<Node<'a>> {
    fn collect<'a>(node: Node<'a>, kind: &str, found: &mut Vec<Node<'a>>) {
        if node.is_named() && node.kind() == kind {
            found.push(node);
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            collect(child, kind, found);
        }
    }

    let mut found = Vec::new();
    collect(node, kind, &mut found);
    found
}
