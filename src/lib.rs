// tsdecl Core - tree-sitter based declaration extraction for TypeScript
//
// Two halves: the extractors turn a parsed TypeScript file into a declaration
// model (classes, members, parameters, usages, imports), and the generators
// render import declarations back into source text.

pub mod errors;
pub mod extractors;
pub mod generators;
pub mod imports;
pub mod language;
pub mod resources;

// Shared utilities
pub mod utils;

pub use errors::ExtractionError;
pub use extractors::manager::ExtractorManager;
pub use generators::{generate_named_import, TypescriptGenerationOptions};
pub use imports::{NamedImport, SymbolSpecifier};
pub use resources::{Resource, ResourceKind};
