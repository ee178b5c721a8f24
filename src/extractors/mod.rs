//! Language Extractors Module
//!
//! This module contains the tree-sitter based TypeScript extractor and the
//! manager that drives it. Parsed files become resources holding class
//! declarations, named imports and identifier usages.
//!
//! # Architecture
//!
//! - `base` - Declaration model and tree helpers shared by the extractor
//! - `manager` - ExtractorManager public API
//! - `typescript` - TypeScript / TSX extractor

pub mod base;
pub mod manager;
pub mod typescript;

// Re-export the public API
pub use base::{ClassDeclaration, Declaration, DeclarationVisibility};
pub use manager::ExtractorManager;
