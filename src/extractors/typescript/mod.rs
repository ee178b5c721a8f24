//! TypeScript declaration extractor with modular architecture
//!
//! This module extracts class declarations, named imports and identifier
//! usages from TypeScript and TSX files. The architecture is organized into
//! specialized modules:
//!
//! - **symbols**: Tree traversal and node routing
//! - **classes**: Class extraction (properties, accessors, methods, constructor)
//! - **constructors**: Constructor parameters and parameter-property promotion
//! - **functions**: Parameter lists and local variables of callables
//! - **type_arguments**: Flattening of inline object types
//! - **imports**: Named import statements
//! - **inference**: Type inference from annotations and literal initializers
//! - **identifiers**: Identifier usage extraction
//! - **helpers**: Modifier and export flags

mod classes;
mod constructors;
mod functions;
pub(crate) mod helpers;
mod identifiers;
mod imports;
pub(crate) mod inference;
mod symbols;
pub(crate) mod type_arguments;

#[cfg(test)]
pub(crate) mod test_utils;

use crate::extractors::base::BaseExtractor;
use crate::resources::Resource;
use tree_sitter::Tree;

/// Main TypeScript extractor that orchestrates modular extraction components
pub struct TypeScriptExtractor {
    base: BaseExtractor,
}

impl TypeScriptExtractor {
    pub fn new(language: String, file_path: String, content: String) -> Self {
        Self {
            base: BaseExtractor::new(language, file_path, content),
        }
    }

    /// Fill `resource` with the declarations, imports and usages of the tree
    pub fn extract_declarations(&self, resource: &mut Resource, tree: &Tree) {
        symbols::extract_declarations(self, resource, tree)
    }

    /// Get immutable reference to base extractor (for sub-modules)
    pub(crate) fn base(&self) -> &BaseExtractor {
        &self.base
    }
}
