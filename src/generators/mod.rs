//! TypeScript code generators
//!
//! - **options**: formatting configuration shared by all generators
//! - **named_import**: `import { … } from "…"` rendering with line wrapping
//! - **symbol_specifier**: single specifier rendering and ordering

pub mod named_import;
pub mod options;
pub mod symbol_specifier;

pub use named_import::generate_named_import;
pub use options::{QuoteStyle, TypescriptGenerationOptions};
pub use symbol_specifier::generate_symbol_specifier;
