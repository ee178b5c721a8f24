//! Import model
//!
//! Named imports as they are read from source (`import { a, b as c } from "lib"`)
//! and as they are handed to the generators.

use serde::{Deserialize, Serialize};

/// One imported symbol, optionally renamed (`b as c`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolSpecifier {
    pub specifier: String,
    pub alias: Option<String>,
}

impl SymbolSpecifier {
    pub fn new(specifier: impl Into<String>) -> Self {
        Self {
            specifier: specifier.into(),
            alias: None,
        }
    }

    pub fn with_alias(specifier: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            specifier: specifier.into(),
            alias: Some(alias.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedImport {
    /// Module specifier without quotes
    pub library_name: String,
    /// `Foo` in `import Foo, { a } from "lib"`
    pub default_alias: Option<String>,
    pub specifiers: Vec<SymbolSpecifier>,
    pub start: Option<u32>,
    pub end: Option<u32>,
}

impl NamedImport {
    pub fn new(library_name: impl Into<String>) -> Self {
        Self {
            library_name: library_name.into(),
            default_alias: None,
            specifiers: Vec::new(),
            start: None,
            end: None,
        }
    }

    pub fn with_specifiers(
        library_name: impl Into<String>,
        specifiers: impl IntoIterator<Item = SymbolSpecifier>,
    ) -> Self {
        let mut import = Self::new(library_name);
        import.specifiers = specifiers.into_iter().collect();
        import
    }
}
