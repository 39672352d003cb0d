use std::fs;
use std::path::Path;

use super::{ImportResolver, Resolution, ResolveContext};
use crate::parsers::ImportRef;

/// Import path prefixes that belong to the Go toolchain's extended library
/// and are never interesting as external dependencies.
pub const IGNORED_GO_PREFIXES: &[&str] = &["golang.org/", "google.golang.org/"];

/// Package import paths. Paths under the module declared in `go.mod` map to
/// a directory, represented by its first non-test `.go` file.
pub struct GoResolver;

impl GoResolver {
    pub fn new() -> Self {
        Self
    }

    fn resolve_local(suffix: &str, ctx: &ResolveContext<'_>) -> Option<String> {
        let dir = if suffix.is_empty() {
            ctx.root().to_path_buf()
        } else {
            ctx.root().join(suffix)
        };

        if dir.is_dir() {
            if let Some(rel) = first_package_file(&dir).and_then(|file| ctx.existing_file(&file)) {
                return Some(rel);
            }
        }

        if suffix.is_empty() {
            return None;
        }
        ctx.existing_file(&ctx.root().join(format!("{suffix}.go")))
    }
}

impl Default for GoResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportResolver for GoResolver {
    fn resolve(&self, reference: &ImportRef, ctx: &ResolveContext<'_>) -> Resolution {
        let ImportRef::Path(import_path) = reference else {
            return Resolution::Unresolved;
        };

        if is_standard_library(import_path) {
            return Resolution::Unresolved;
        }
        if IGNORED_GO_PREFIXES
            .iter()
            .any(|prefix| import_path.starts_with(prefix))
        {
            return Resolution::Unresolved;
        }

        if let Some(suffix) = ctx
            .index
            .go_module()
            .and_then(|module| local_suffix(import_path, module))
        {
            return Resolution::from_option(Self::resolve_local(suffix, ctx));
        }

        Resolution::External(external_name(import_path))
    }
}

/// Standard library packages have neither a dot nor a slash (`fmt`, `os`).
pub fn is_standard_library(import_path: &str) -> bool {
    !import_path.contains('.') && !import_path.contains('/')
}

/// Part of `import_path` below `module`, or `None` when it lives elsewhere.
pub fn local_suffix<'a>(import_path: &'a str, module: &str) -> Option<&'a str> {
    let rest = import_path.strip_prefix(module)?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix('/')
    }
}

/// Module paths on a domain (`github.com/x/y`) are kept whole, anything
/// else is reduced to its first segment.
pub fn external_name(import_path: &str) -> String {
    let first = import_path.split('/').next().unwrap_or(import_path);
    if first.contains('.') {
        import_path.to_string()
    } else {
        first.to_string()
    }
}

/// First non-test `.go` file in `dir`, by file name order.
fn first_package_file(dir: &Path) -> Option<std::path::PathBuf> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| name.ends_with(".go") && !name.ends_with("_test.go"))
        .collect();
    names.sort();
    names.into_iter().next().map(|name| dir.join(name))
}
