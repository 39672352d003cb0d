pub mod csharp;
pub mod gdscript;
pub mod go;
pub mod javascript;
pub mod python;
pub mod rust;

use std::path::Path;

use crate::core::paths::{escapes_root, normalize, relative_posix};
use crate::core::ProjectIndex;
use crate::parsers::ImportRef;

/// Outcome of resolving one raw reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// One or more project-relative files; heuristic resolvers may return several.
    Resolved(Vec<String>),
    /// Not part of the project; the name is recorded as an external dependency.
    External(String),
    /// Neither found nor confidently external. Dropped silently.
    Unresolved,
}

impl Resolution {
    pub fn file(rel: impl Into<String>) -> Self {
        Resolution::Resolved(vec![rel.into()])
    }

    pub fn from_option(rel: Option<String>) -> Self {
        rel.map(Resolution::file).unwrap_or(Resolution::Unresolved)
    }
}

/// Everything a resolver may consult for one importing file.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    pub index: &'a ProjectIndex,
    /// Absolute, normalized location of the importing file.
    pub source_abs: &'a Path,
    /// Project-relative id of the importing file.
    pub source_rel: &'a str,
}

impl<'a> ResolveContext<'a> {
    pub fn new(index: &'a ProjectIndex, source_abs: &'a Path, source_rel: &'a str) -> Self {
        Self {
            index,
            source_abs,
            source_rel,
        }
    }

    pub fn root(&self) -> &'a Path {
        self.index.root()
    }

    /// Directory holding the importing file.
    pub fn source_dir(&self) -> &'a Path {
        self.source_abs.parent().unwrap_or_else(|| self.root())
    }

    /// Project-relative id of `path` if it is an existing file inside the project.
    pub fn existing_file(&self, path: &Path) -> Option<String> {
        let path = normalize(path);
        if !path.is_file() {
            return None;
        }
        let rel = relative_posix(&path, self.root());
        if escapes_root(&rel) {
            None
        } else {
            Some(rel)
        }
    }
}

/// Maps raw references of one language to project files or external names.
///
/// Resolution never fails: a missing candidate on disk is just a miss.
pub trait ImportResolver: Send + Sync {
    fn resolve(&self, reference: &ImportRef, ctx: &ResolveContext<'_>) -> Resolution;
}
