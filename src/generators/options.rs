//! Generation options
//!
//! Formatting rules for generated import statements. Hosts usually hand these
//! over as JSON (editor settings), so the struct deserializes from camelCase
//! keys and every missing key takes its default.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteStyle {
    #[serde(rename = "'")]
    Single,
    #[serde(rename = "\"")]
    Double,
}

impl QuoteStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteStyle::Single => "'",
            QuoteStyle::Double => "\"",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypescriptGenerationOptions {
    /// Statement terminator appended after the module specifier (`;` or empty)
    pub eol: String,
    pub string_quote_style: QuoteStyle,
    /// `{ a }` instead of `{a}`
    pub space_braces: bool,
    /// Indent width of specifier lines in multi-line imports
    pub tab_size: usize,
    /// Longest single-line import, in characters, before wrapping
    pub multi_line_wrap_threshold: usize,
    pub multi_line_trailing_comma: bool,
}

impl Default for TypescriptGenerationOptions {
    fn default() -> Self {
        Self {
            eol: ";".to_string(),
            string_quote_style: QuoteStyle::Double,
            space_braces: true,
            tab_size: 4,
            multi_line_wrap_threshold: 125,
            multi_line_trailing_comma: true,
        }
    }
}

impl TypescriptGenerationOptions {
    /// Parse options from a JSON object; unknown keys are ignored
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
