use std::path::PathBuf;

use super::{ImportResolver, Resolution, ResolveContext};
use crate::parsers::ImportRef;

/// Dotted module paths, absolute from the project root or relative by
/// leading dots.
pub struct PythonResolver;

impl PythonResolver {
    pub fn new() -> Self {
        Self
    }

    fn search_root(leading_dots: usize, ctx: &ResolveContext<'_>) -> PathBuf {
        if leading_dots == 0 {
            return ctx.root().to_path_buf();
        }
        let mut base = ctx.source_dir().to_path_buf();
        for _ in 1..leading_dots {
            if !base.pop() {
                break;
            }
        }
        base
    }
}

impl Default for PythonResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportResolver for PythonResolver {
    fn resolve(&self, reference: &ImportRef, ctx: &ResolveContext<'_>) -> Resolution {
        let ImportRef::Path(module) = reference else {
            return Resolution::Unresolved;
        };

        let module_name = module.trim_start_matches('.');
        let leading_dots = module.len() - module_name.len();

        let mut base = Self::search_root(leading_dots, ctx);
        let segments: Vec<&str> = module_name.split('.').filter(|s| !s.is_empty()).collect();
        for segment in &segments {
            base.push(segment);
        }

        if !segments.is_empty() {
            if let Some(rel) = ctx.existing_file(&base.with_extension("py")) {
                return Resolution::file(rel);
            }
        }
        if let Some(rel) = ctx.existing_file(&base.join("__init__.py")) {
            return Resolution::file(rel);
        }

        // Unresolved absolute imports are stdlib or third-party packages.
        match segments.first() {
            Some(top) if leading_dots == 0 => Resolution::External(top.to_string()),
            _ => Resolution::Unresolved,
        }
    }
}
