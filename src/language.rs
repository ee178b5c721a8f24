//! Language Support - tree-sitter grammar configuration
//!
//! ALL grammar lookups go through here so the manager and the tests agree on
//! which tree-sitter language backs each name.

use crate::errors::ExtractionError;

/// Get tree-sitter language parser for a given language name
///
/// # Supported Languages
///
/// **TypeScript**: `typescript` (also `ts`), `tsx`
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language, ExtractionError> {
    match language {
        "typescript" | "ts" => Ok(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
        "tsx" => Ok(tree_sitter_typescript::LANGUAGE_TSX.into()),
        _ => Err(ExtractionError::UnsupportedLanguage(language.to_string())),
    }
}

/// Build a parser already configured for `language`
pub fn parser_for(language: &str) -> Result<tree_sitter::Parser, ExtractionError> {
    let ts_language = get_tree_sitter_language(language)?;
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&ts_language)
        .map_err(|source| ExtractionError::Language {
            language: language.to_string(),
            source,
        })?;
    Ok(parser)
}
