//! Named import generation
//!
//! Renders `import { a, b as c } from "lib"` and wraps to one specifier per
//! line once the single-line form grows past the configured threshold.

use super::options::TypescriptGenerationOptions;
use super::symbol_specifier::{generate_symbol_specifier, specifier_sort};
use crate::imports::{NamedImport, SymbolSpecifier};

/// Generate source text for a named import
///
/// Specifiers are sorted case-insensitively (stable on ties) for both forms.
/// The single-line candidate, including `eol`, is kept when its length in
/// characters does not exceed `multi_line_wrap_threshold`.
pub fn generate_named_import(import: &NamedImport, options: &TypescriptGenerationOptions) -> String {
    let TypescriptGenerationOptions {
        eol,
        string_quote_style,
        space_braces,
        tab_size,
        multi_line_wrap_threshold,
        multi_line_trailing_comma,
    } = options;

    let quote = string_quote_style.as_str();
    let space = if *space_braces { " " } else { "" };
    let head = match &import.default_alias {
        Some(alias) => format!("import {}, {{", alias),
        None => "import {".to_string(),
    };
    let from = format!("from {}{}{}{}", quote, import.library_name, quote, eol);

    let sorted = sorted_specifiers(&import.specifiers);
    let single_line = format!(
        "{}{}{}{}}} {}",
        head,
        space,
        sorted.join(", "),
        space,
        from
    );
    if single_line.chars().count() <= *multi_line_wrap_threshold {
        return single_line;
    }

    let indent = " ".repeat(*tab_size);
    let lines = sorted
        .iter()
        .map(|specifier| format!("{}{}", indent, specifier))
        .collect::<Vec<_>>()
        .join(",\n");
    let trailing = if *multi_line_trailing_comma { "," } else { "" };

    format!("{}\n{}{}\n}} {}", head, lines, trailing, from)
}

fn sorted_specifiers(specifiers: &[SymbolSpecifier]) -> Vec<String> {
    let mut sorted: Vec<&SymbolSpecifier> = specifiers.iter().collect();
    // sort_by is stable, so equal lowercase names keep their input order
    sorted.sort_by(|a, b| specifier_sort(a, b));
    sorted.into_iter().map(generate_symbol_specifier).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::options::QuoteStyle;

    fn import_of(names: &[&str]) -> NamedImport {
        NamedImport::with_specifiers("x", names.iter().map(|name| SymbolSpecifier::new(*name)))
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let options = TypescriptGenerationOptions::default();

        let forward = generate_named_import(&import_of(&["a", "b"]), &options);
        let backward = generate_named_import(&import_of(&["b", "a"]), &options);

        assert_eq!(forward, "import { a, b } from \"x\";");
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_sort_is_case_insensitive_and_renders_aliases() {
        let import = NamedImport::with_specifiers(
            "./models",
            vec![
                SymbolSpecifier::new("zeta"),
                SymbolSpecifier::with_alias("Beta", "B"),
                SymbolSpecifier::new("alpha"),
            ],
        );
        let options = TypescriptGenerationOptions {
            string_quote_style: QuoteStyle::Single,
            space_braces: false,
            eol: String::new(),
            ..Default::default()
        };

        assert_eq!(
            generate_named_import(&import, &options),
            "import {alpha, Beta as B, zeta} from './models'"
        );
    }

    #[test]
    fn test_threshold_boundary() {
        let import = import_of(&["a", "b"]);
        // `import { a, b } from "x";` is 25 characters
        let at_limit = TypescriptGenerationOptions {
            multi_line_wrap_threshold: 25,
            ..Default::default()
        };
        let below_limit = TypescriptGenerationOptions {
            multi_line_wrap_threshold: 24,
            ..Default::default()
        };

        assert_eq!(
            generate_named_import(&import, &at_limit),
            "import { a, b } from \"x\";"
        );
        assert_eq!(
            generate_named_import(&import, &below_limit),
            "import {\n    a,\n    b,\n} from \"x\";"
        );
    }

    #[test]
    fn test_multi_line_without_trailing_comma() {
        let options = TypescriptGenerationOptions {
            multi_line_wrap_threshold: 0,
            multi_line_trailing_comma: false,
            tab_size: 2,
            ..Default::default()
        };

        let output = generate_named_import(&import_of(&["c", "b", "a"]), &options);

        assert_eq!(output, "import {\n  a,\n  b,\n  c\n} from \"x\";");
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[1].ends_with(','));
        assert!(lines[2].ends_with(','));
        assert!(!lines[3].ends_with(','));
    }

    #[test]
    fn test_default_alias_prefix() {
        let mut import = import_of(&["useState"]);
        import.library_name = "react".to_string();
        import.default_alias = Some("React".to_string());

        assert_eq!(
            generate_named_import(&import, &TypescriptGenerationOptions::default()),
            "import React, { useState } from \"react\";"
        );
    }

    #[test]
    fn test_ties_keep_input_order() {
        let import = NamedImport::with_specifiers(
            "x",
            vec![SymbolSpecifier::new("Foo"), SymbolSpecifier::new("foo")],
        );
        assert_eq!(
            generate_named_import(&import, &TypescriptGenerationOptions::default()),
            "import { Foo, foo } from \"x\";"
        );

        let reversed = NamedImport::with_specifiers(
            "x",
            vec![SymbolSpecifier::new("foo"), SymbolSpecifier::new("Foo")],
        );
        assert_eq!(
            generate_named_import(&reversed, &TypescriptGenerationOptions::default()),
            "import { foo, Foo } from \"x\";"
        );
    }
}
