//! Import statement extraction
//!
//! Only named imports are tracked (`import { a, b as c } from "lib"`, with an
//! optional default binding in front). Namespace imports and side-effect
//! imports carry no specifiers and are ignored.

use crate::extractors::base::tree_methods::named_children;
use crate::extractors::typescript::TypeScriptExtractor;
use crate::imports::{NamedImport, SymbolSpecifier};
use crate::resources::Resource;
use tracing::trace;
use tree_sitter::Node;

/// Extract an import statement into `resource.imports`
pub(super) fn parse_import(extractor: &TypeScriptExtractor, resource: &mut Resource, node: Node) {
    if let Some(import) = named_import(extractor, node) {
        trace!(
            "Import of {} specifiers from {}",
            import.specifiers.len(),
            import.library_name
        );
        resource.imports.push(import);
    }
}

fn named_import(extractor: &TypeScriptExtractor, node: Node) -> Option<NamedImport> {
    let base = extractor.base();
    let source = node.child_by_field_name("source")?;
    let clause = base.find_child_by_type(&node, "import_clause")?;
    let named_imports = base.find_child_by_type(&clause, "named_imports")?;

    let library_name = base
        .get_node_text(&source)
        .trim_matches(|c| c == '"' || c == '\'' || c == '`')
        .to_string();

    let mut import = NamedImport::new(library_name);
    import.default_alias = base
        .find_child_by_type(&clause, "identifier")
        .map(|alias| base.get_node_text(&alias));
    import.specifiers = named_children(&named_imports)
        .into_iter()
        .filter(|specifier| specifier.kind() == "import_specifier")
        .filter_map(|specifier| {
            let name = base.get_field_text(&specifier, "name")?;
            Some(match base.get_field_text(&specifier, "alias") {
                Some(alias) => SymbolSpecifier::with_alias(name, alias),
                None => SymbolSpecifier::new(name),
            })
        })
        .collect();

    let span = base.span_of(&node);
    import.start = Some(span.start);
    import.end = Some(span.end);
    Some(import)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::typescript::test_utils::{find_all, parse_typescript};

    fn imports_of(code: &str) -> Vec<NamedImport> {
        let tree = parse_typescript(code);
        let extractor = TypeScriptExtractor::new(
            "typescript".to_string(),
            "test.ts".to_string(),
            code.to_string(),
        );
        let mut resource = Resource::module("test");
        for node in find_all(tree.root_node(), "import_statement") {
            parse_import(&extractor, &mut resource, node);
        }
        resource.imports
    }

    #[test]
    fn test_named_import_with_alias() {
        let imports = imports_of("import { b, a as c } from 'x';");

        assert_eq!(imports.len(), 1);
        let import = &imports[0];
        assert_eq!(import.library_name, "x");
        assert_eq!(import.default_alias, None);
        assert_eq!(
            import.specifiers,
            vec![SymbolSpecifier::new("b"), SymbolSpecifier::with_alias("a", "c")]
        );
        assert_eq!(import.start, Some(0));
        assert_eq!(import.end, Some(30));
    }

    #[test]
    fn test_default_binding_is_kept() {
        let imports = imports_of("import React, { useState } from \"react\";");

        assert_eq!(imports[0].default_alias.as_deref(), Some("React"));
        assert_eq!(imports[0].specifiers, vec![SymbolSpecifier::new("useState")]);
    }

    #[test]
    fn test_namespace_default_only_and_side_effect_imports_ignored() {
        let imports = imports_of(
            "import * as path from 'path';\nimport fs from 'fs';\nimport './polyfill';",
        );

        assert!(imports.is_empty());
    }
}
