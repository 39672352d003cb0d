use std::path::{Path, PathBuf};

use super::{ImportResolver, Resolution, ResolveContext};
use crate::parsers::ImportRef;

/// Probe order for extension-less relative specifiers.
pub const JS_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs"];

/// Relative specifiers resolve against the importing file; everything else
/// is a package specifier.
pub struct JavaScriptResolver;

impl JavaScriptResolver {
    pub fn new() -> Self {
        Self
    }

    fn resolve_relative(specifier: &str, ctx: &ResolveContext<'_>) -> Option<String> {
        let clean = specifier
            .split(|c: char| c == '?' || c == '#')
            .next()
            .unwrap_or(specifier);
        let target = ctx.source_dir().join(clean);

        if let Some(rel) = ctx.existing_file(&target) {
            return Some(rel);
        }
        for ext in JS_EXTENSIONS {
            if let Some(rel) = ctx.existing_file(&append_extension(&target, ext)) {
                return Some(rel);
            }
        }
        for ext in JS_EXTENSIONS {
            if let Some(rel) = ctx.existing_file(&target.join(format!("index.{ext}"))) {
                return Some(rel);
            }
        }
        None
    }
}

impl Default for JavaScriptResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportResolver for JavaScriptResolver {
    fn resolve(&self, reference: &ImportRef, ctx: &ResolveContext<'_>) -> Resolution {
        let ImportRef::Path(specifier) = reference else {
            return Resolution::Unresolved;
        };

        if specifier.starts_with("./") || specifier.starts_with("../") {
            // Relative paths are never external, found or not.
            return Resolution::from_option(Self::resolve_relative(specifier, ctx));
        }

        match package_name(specifier) {
            Some(name) => Resolution::External(name),
            None => Resolution::Unresolved,
        }
    }
}

/// npm package name of a bare specifier: `@scope/name` for scoped
/// packages, the first segment otherwise.
pub fn package_name(specifier: &str) -> Option<String> {
    let name = if specifier.starts_with('@') {
        specifier.splitn(3, '/').take(2).collect::<Vec<_>>().join("/")
    } else {
        specifier.split('/').next().unwrap_or_default().to_string()
    };
    if name.is_empty() || name.starts_with('.') {
        None
    } else {
        Some(name)
    }
}

/// `foo/bar` + `ts` -> `foo/bar.ts`, keeping any dots already in the name.
fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".");
    os.push(ext);
    PathBuf::from(os)
}
