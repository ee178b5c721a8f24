// Base extractor types
//
// - types.rs: the declaration model (classes, members, parameters, variables)
// - extractor.rs: BaseExtractor implementation (source text access)
// - tree_methods.rs: Tree navigation helpers

pub mod extractor;
pub mod tree_methods;
pub mod types;

// Re-export key types for external use
pub use extractor::BaseExtractor;
pub use types::{
    AccessorDeclaration, AccessorKind, ClassDeclaration, ConstructorDeclaration, Declaration,
    DeclarationVisibility, DefaultDeclaration, MethodDeclaration, ParameterDeclaration,
    ParameterType, PropertyDeclaration, Span, TypeArguments, VariableDeclaration,
};
