use once_cell::sync::Lazy;
use regex::Regex;

use super::{ImportExtractor, RawImport};
use crate::core::EdgeKind;

static PY_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(?:import[ \t]+(?P<plain>\w[\w.]*)|from[ \t]+(?P<from>\.*\w[\w.]*|\.+)[ \t]+import[ \t]+\S)",
    )
    .expect("valid python import regex")
});

/// `import x.y` and `from ..x import y` statements.
///
/// Leading dots of relative imports are kept for the resolver.
pub struct PythonExtractor;

impl PythonExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PythonExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportExtractor for PythonExtractor {
    fn extract(&self, source: &str) -> Vec<RawImport> {
        PY_IMPORT
            .captures_iter(source)
            .filter_map(|caps| caps.name("plain").or_else(|| caps.name("from")))
            .map(|m| RawImport::path(m.as_str().trim(), EdgeKind::Import))
            .collect()
    }

    fn language_name(&self) -> &str {
        "python"
    }
}
