pub mod common;
pub mod csharp;
pub mod gdscript;
pub mod go;
pub mod javascript;
pub mod python;
pub mod rust;

use serde::{Deserialize, Serialize};

use crate::core::EdgeKind;

/// A reference as written in the source, before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImportRef {
    /// Path, package or namespace text (`./util`, `..pkg.mod`, `crate::a::b`, `res://x.gd`).
    Path(String),
    /// GDScript `extends ClassName` without a path.
    Class(String),
    /// Rust `mod name;` declaration.
    Module(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawImport {
    pub reference: ImportRef,
    pub kind: EdgeKind,
}

impl ImportRef {
    pub fn as_str(&self) -> &str {
        match self {
            ImportRef::Path(text) | ImportRef::Class(text) | ImportRef::Module(text) => text,
        }
    }
}

impl RawImport {
    pub fn path(reference: impl Into<String>, kind: EdgeKind) -> Self {
        Self {
            reference: ImportRef::Path(reference.into()),
            kind,
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self {
            reference: ImportRef::Class(name.into()),
            kind: EdgeKind::Import,
        }
    }

    pub fn module(name: impl Into<String>) -> Self {
        Self {
            reference: ImportRef::Module(name.into()),
            kind: EdgeKind::Import,
        }
    }
}

/// Pulls raw import references out of source text.
///
/// Implementations are pure pattern matching: no filesystem access, no
/// failure on malformed input, and the same text always yields the same
/// references in the same order.
pub trait ImportExtractor: Send + Sync {
    fn extract(&self, source: &str) -> Vec<RawImport>;
    fn language_name(&self) -> &str;
}
