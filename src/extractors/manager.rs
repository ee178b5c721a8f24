//! ExtractorManager - Public API for declaration extraction
//!
//! Handles language detection and parsing, then delegates to the TypeScript
//! extractor. This module provides the main public interface for clients to
//! turn source files into resources.

use crate::errors::ExtractionError;
use crate::extractors::typescript::TypeScriptExtractor;
use crate::resources::Resource;
use crate::utils::language::detect_language;
use anyhow::Context;
use rayon::prelude::*;
use std::path::Path;

/// Manager for the TypeScript extractors
pub struct ExtractorManager {
    // No state needed - each extraction owns its parser and resource
}

impl Default for ExtractorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorManager {
    pub fn new() -> Self {
        Self {}
    }

    /// Extract a File resource from file content
    ///
    /// `file_path` may be absolute or relative to `workspace_root`.
    pub fn extract_resource(
        &self,
        file_path: &str,
        content: &str,
        workspace_root: &Path,
    ) -> Result<Resource, anyhow::Error> {
        let language = detect_language(Path::new(file_path))
            .ok_or_else(|| ExtractionError::UnsupportedLanguage(file_path.to_string()))?;

        let mut parser = crate::language::parser_for(language)?;

        let tree = parser
            .parse(content, None)
            .ok_or_else(|| ExtractionError::Parse(file_path.to_string()))?;

        let extractor = TypeScriptExtractor::new(
            language.to_string(),
            file_path.to_string(),
            content.to_string(),
        );
        let mut resource = Resource::file(file_path, workspace_root);
        extractor.extract_declarations(&mut resource, &tree);

        tracing::debug!(
            "Extracted {} declarations, {} imports, {} usages from {} file: {}",
            resource.declarations.len(),
            resource.imports.len(),
            resource.usages.len(),
            language,
            file_path
        );
        Ok(resource)
    }

    /// Read `path` from disk and extract it
    pub fn extract_path(&self, path: &Path, workspace_root: &Path) -> Result<Resource, anyhow::Error> {
        let content = std::fs::read_to_string(path).map_err(|source| ExtractionError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let file_path = path.to_string_lossy();
        self.extract_resource(&file_path, &content, workspace_root)
            .with_context(|| format!("Failed to extract declarations from {}", path.display()))
    }

    /// Extract many `(file_path, content)` pairs in parallel
    ///
    /// Results are in input order. A failing file is logged and reported in
    /// its slot without affecting the rest of the batch.
    pub fn extract_files_batch(
        &self,
        files: &[(String, String)],
        workspace_root: &Path,
    ) -> Vec<Result<Resource, anyhow::Error>> {
        files
            .par_iter()
            .map(|(file_path, content)| {
                let result = self.extract_resource(file_path, content, workspace_root);
                if let Err(e) = &result {
                    tracing::warn!("Extraction failed for {}: {:#}", file_path, e);
                }
                result
            })
            .collect()
    }
}
