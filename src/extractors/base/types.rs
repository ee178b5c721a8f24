// Declaration model types
//
// Every record produced by the extractors. Records are built during a single
// traversal of one class node and are not mutated after they have been handed
// to the owning resource.

use serde::{Deserialize, Serialize};

/// Half-open source range in byte offsets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

/// Explicit visibility keyword on a member; `None` means no keyword (implicitly public)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationVisibility {
    Private,
    Protected,
    Public,
}

/// Type of a parameter: a type text, or a nested structural shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum ParameterType {
    Named(String),
    Structural(Vec<ParameterDeclaration>),
}

impl ParameterType {
    pub fn as_named(&self) -> Option<&str> {
        match self {
            ParameterType::Named(text) => Some(text),
            ParameterType::Structural(_) => None,
        }
    }
}

/// A parameter, or one member of a flattened structural type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDeclaration {
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: Option<ParameterType>,
    pub span: Span,
    /// Children of a structural member (only filled when flattening object types)
    pub members: Vec<ParameterDeclaration>,
}

impl ParameterDeclaration {
    pub fn new(name: impl Into<String>, r#type: Option<ParameterType>, span: Span) -> Self {
        Self {
            name: name.into(),
            r#type,
            span,
            members: Vec::new(),
        }
    }

    /// Leaf parameter with an optional type text
    pub fn named(name: impl Into<String>, type_text: Option<String>, span: Span) -> Self {
        Self::new(name, type_text.map(ParameterType::Named), span)
    }

    pub fn type_text(&self) -> Option<&str> {
        self.r#type.as_ref().and_then(ParameterType::as_named)
    }
}

/// Result of flattening a declaration's type annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum TypeArguments {
    /// The sole type argument was the `any` keyword
    Any,
    Members(Vec<ParameterDeclaration>),
}

impl Default for TypeArguments {
    fn default() -> Self {
        TypeArguments::Members(Vec::new())
    }
}

impl TypeArguments {
    pub fn members(&self) -> &[ParameterDeclaration] {
        match self {
            TypeArguments::Any => &[],
            TypeArguments::Members(members) => members,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, TypeArguments::Members(members) if members.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDeclaration {
    pub name: String,
    pub visibility: Option<DeclarationVisibility>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub is_optional: bool,
    pub is_static: bool,
    pub span: Span,
    pub type_arguments: TypeArguments,
}

/// let/const/var declared inside a constructor or method body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDeclaration {
    pub name: String,
    pub is_const: bool,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDeclaration {
    pub name: String,
    pub is_abstract: bool,
    pub visibility: Option<DeclarationVisibility>,
    pub return_type: Option<String>,
    pub is_optional: bool,
    pub is_static: bool,
    pub is_async: bool,
    pub span: Span,
    pub parameters: Vec<ParameterDeclaration>,
    pub type_arguments: TypeArguments,
    pub variables: Vec<VariableDeclaration>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorDeclaration {
    /// Name of the owning class
    pub name: String,
    pub span: Span,
    pub parameters: Vec<ParameterDeclaration>,
    pub variables: Vec<VariableDeclaration>,
}

impl ConstructorDeclaration {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
            parameters: Vec::new(),
            variables: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessorKind {
    Getter,
    Setter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessorDeclaration {
    pub kind: AccessorKind,
    pub name: String,
    pub visibility: Option<DeclarationVisibility>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub is_abstract: bool,
    pub is_static: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDeclaration {
    pub name: String,
    pub is_exported: bool,
    pub span: Span,
    pub properties: Vec<PropertyDeclaration>,
    pub methods: Vec<MethodDeclaration>,
    pub accessors: Vec<AccessorDeclaration>,
    pub ctor: Option<ConstructorDeclaration>,
    /// Raw source text of each type parameter (`T extends Base = Base`)
    pub type_parameters: Vec<String>,
}

impl ClassDeclaration {
    pub fn new(name: impl Into<String>, is_exported: bool, span: Span) -> Self {
        Self {
            name: name.into(),
            is_exported,
            span,
            properties: Vec::new(),
            methods: Vec::new(),
            accessors: Vec::new(),
            ctor: None,
            type_parameters: Vec::new(),
        }
    }
}

/// Marks the default export of a resource; resolved by name against the resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultDeclaration {
    pub name: String,
    pub span: Span,
}

/// Closed set of declaration variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "declaration")]
pub enum Declaration {
    Class(ClassDeclaration),
    Default(DefaultDeclaration),
    Property(PropertyDeclaration),
    Method(MethodDeclaration),
    Accessor(AccessorDeclaration),
    Constructor(ConstructorDeclaration),
    Parameter(ParameterDeclaration),
    Variable(VariableDeclaration),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Class(d) => &d.name,
            Declaration::Default(d) => &d.name,
            Declaration::Property(d) => &d.name,
            Declaration::Method(d) => &d.name,
            Declaration::Accessor(d) => &d.name,
            Declaration::Constructor(d) => &d.name,
            Declaration::Parameter(d) => &d.name,
            Declaration::Variable(d) => &d.name,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Declaration::Class(d) => d.span,
            Declaration::Default(d) => d.span,
            Declaration::Property(d) => d.span,
            Declaration::Method(d) => d.span,
            Declaration::Accessor(d) => d.span,
            Declaration::Constructor(d) => d.span,
            Declaration::Parameter(d) => d.span,
            Declaration::Variable(d) => d.span,
        }
    }

    pub fn as_class(&self) -> Option<&ClassDeclaration> {
        match self {
            Declaration::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_default(&self) -> Option<&DefaultDeclaration> {
        match self {
            Declaration::Default(default) => Some(default),
            _ => None,
        }
    }
}
