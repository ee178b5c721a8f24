// BaseExtractor implementation
//
// Holds the source text of the file being extracted and answers text and
// range questions about its tree-sitter nodes.

use tree_sitter::Node;

use super::types::Span;

/// Base implementation for language extractors
pub struct BaseExtractor {
    pub language: String,
    pub file_path: String,
    pub content: String,
}

impl BaseExtractor {
    pub fn new(language: String, file_path: String, content: String) -> Self {
        Self {
            language,
            file_path,
            content,
        }
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> String {
        self.get_range_text(node.start_byte(), node.end_byte())
    }

    /// Source text between two byte offsets, empty when the range is out of bounds
    pub fn get_range_text(&self, start_byte: usize, end_byte: usize) -> String {
        // Use byte slice but handle UTF-8 boundaries properly
        let content_bytes = self.content.as_bytes();
        if start_byte <= end_byte && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// Source range of a node
    pub fn span_of(&self, node: &Node) -> Span {
        Span::new(node.start_byte() as u32, node.end_byte() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_range_text_out_of_bounds_is_empty() {
        let base = BaseExtractor::new(
            "typescript".to_string(),
            "a.ts".to_string(),
            "class A {}".to_string(),
        );

        assert_eq!(base.get_range_text(0, 5), "class");
        assert_eq!(base.get_range_text(4, 99), "");
        assert_eq!(base.get_range_text(6, 2), "");
    }
}
