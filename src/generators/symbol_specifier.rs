use crate::imports::SymbolSpecifier;
use std::cmp::Ordering;

/// `name` or `name as alias`
pub fn generate_symbol_specifier(specifier: &SymbolSpecifier) -> String {
    match &specifier.alias {
        Some(alias) => format!("{} as {}", specifier.specifier, alias),
        None => specifier.specifier.clone(),
    }
}

/// Orders specifiers by their lowercased name
pub fn specifier_sort(a: &SymbolSpecifier, b: &SymbolSpecifier) -> Ordering {
    a.specifier
        .to_lowercase()
        .cmp(&b.specifier.to_lowercase())
}
