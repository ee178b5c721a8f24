//! Resource model
//!
//! A resource is the container that owns everything extracted from one source
//! unit: a file on disk, or an ambient `declare module "x"` / `namespace X`
//! block. Declarations are appended in source order, which defines the
//! declaration order of the unit.

use crate::extractors::base::{ClassDeclaration, Declaration, DefaultDeclaration};
use crate::imports::NamedImport;
use crate::utils::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Path segments that mark a file as belonging to a dependency, not the workspace
const NON_WORKSPACE_SEGMENTS: [&str; 2] = ["node_modules", "typings"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ResourceKind {
    File {
        file_path: PathBuf,
        root_path: PathBuf,
    },
    Module {
        name: String,
    },
    Namespace {
        name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub kind: ResourceKind,
    pub declarations: Vec<Declaration>,
    /// Identifiers referenced by the resource, first-seen order, no duplicates
    pub usages: Vec<String>,
    pub imports: Vec<NamedImport>,
    /// Ambient modules and namespaces declared inside this resource
    pub resources: Vec<Resource>,
}

impl Resource {
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            declarations: Vec::new(),
            usages: Vec::new(),
            imports: Vec::new(),
            resources: Vec::new(),
        }
    }

    pub fn file(file_path: impl Into<PathBuf>, root_path: impl Into<PathBuf>) -> Self {
        Self::new(ResourceKind::File {
            file_path: file_path.into(),
            root_path: root_path.into(),
        })
    }

    pub fn module(name: impl Into<String>) -> Self {
        Self::new(ResourceKind::Module { name: name.into() })
    }

    pub fn namespace(name: impl Into<String>) -> Self {
        Self::new(ResourceKind::Namespace { name: name.into() })
    }

    /// Identifier of the resource: `/relative/path` for files, the name otherwise
    pub fn identifier(&self) -> String {
        match &self.kind {
            ResourceKind::File {
                file_path,
                root_path,
            } => paths::module_identifier(&absolute_path(file_path, root_path), root_path),
            ResourceKind::Module { name } | ResourceKind::Namespace { name } => name.clone(),
        }
    }

    /// Files outside `node_modules` and `typings` belong to the workspace
    pub fn is_workspace_file(&self) -> bool {
        match &self.kind {
            ResourceKind::File { file_path, .. } => !file_path.components().any(|component| {
                NON_WORKSPACE_SEGMENTS
                    .iter()
                    .any(|segment| component.as_os_str() == *segment)
            }),
            _ => false,
        }
    }

    /// Name used for a default export that has no name of its own
    ///
    /// Workspace files use their base name (`user-service.ts` → `user-service`),
    /// everything else its identifier.
    pub fn default_identifier(&self) -> String {
        if let ResourceKind::File { file_path, .. } = &self.kind {
            if self.is_workspace_file() {
                if let Some(stem) = file_path.file_stem() {
                    return stem.to_string_lossy().to_string();
                }
            }
        }
        self.identifier()
    }

    /// Record a usage, keeping first-seen order
    pub fn add_usage(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.usages.contains(&name) {
            self.usages.push(name);
        }
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassDeclaration> {
        self.declarations.iter().filter_map(Declaration::as_class)
    }

    pub fn default_declaration(&self) -> Option<&DefaultDeclaration> {
        self.declarations.iter().find_map(Declaration::as_default)
    }

    /// Look up the declaration a default export refers to
    pub fn resolve_default(&self, default: &DefaultDeclaration) -> Option<&Declaration> {
        self.declarations.iter().find(|declaration| {
            !matches!(declaration, Declaration::Default(_)) && declaration.name() == default.name
        })
    }
}

fn absolute_path(file_path: &Path, root_path: &Path) -> PathBuf {
    if file_path.is_absolute() {
        file_path.to_path_buf()
    } else {
        root_path.join(file_path)
    }
}
