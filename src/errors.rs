//! Error types for the fallible edges of extraction
//!
//! The extractors themselves never fail: missing names, modifiers or types fall
//! through to defaults. Errors only come from choosing a grammar, running the
//! parser, or reading a file from disk.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    /// No grammar is registered for the language or extension
    #[error("No extractor available for language '{0}'")]
    UnsupportedLanguage(String),

    /// tree-sitter refused the grammar (ABI version mismatch)
    #[error("Failed to set parser language for {language}: {source}")]
    Language {
        language: String,
        #[source]
        source: tree_sitter::LanguageError,
    },

    /// The parser produced no tree at all
    #[error("Failed to parse file: {0}")]
    Parse(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
