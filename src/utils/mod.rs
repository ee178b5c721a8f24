// Utilities Module
//
// Common helpers used by the extractor manager and the resource model.

/// Path conversion utilities (absolute ↔ relative Unix-style, module identifiers)
pub mod paths;

/// Language detection utilities
pub mod language {
    use std::path::Path;

    /// Detect the grammar name from a file extension
    pub fn detect_language(path: &Path) -> Option<&'static str> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext {
                "ts" | "mts" | "cts" => Some("typescript"),
                "tsx" => Some("tsx"),
                _ => None,
            })
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_detect_language() {
            assert_eq!(detect_language(Path::new("src/a.ts")), Some("typescript"));
            assert_eq!(detect_language(Path::new("lib.d.ts")), Some("typescript"));
            assert_eq!(detect_language(Path::new("view.tsx")), Some("tsx"));
            assert_eq!(detect_language(Path::new("main.rs")), None);
            assert_eq!(detect_language(Path::new("Makefile")), None);
        }
    }
}
