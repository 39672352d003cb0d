use once_cell::sync::Lazy;
use regex::Regex;

use super::{ImportExtractor, RawImport};
use crate::core::EdgeKind;

static CS_USING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*using[ \t]+(?P<ns>\w[\w.]*)[ \t]*;").expect("valid using regex")
});

/// `using Namespace.Path;` directives.
///
/// `using static X;` and `using var x = ...;` never match because the
/// keyword is followed by another token before the semicolon; the explicit
/// keyword check below covers the degenerate single-token forms.
pub struct CSharpExtractor;

impl CSharpExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CSharpExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportExtractor for CSharpExtractor {
    fn extract(&self, source: &str) -> Vec<RawImport> {
        CS_USING
            .captures_iter(source)
            .filter_map(|caps| caps.name("ns"))
            .map(|m| m.as_str())
            .filter(|ns| !matches!(*ns, "static" | "var"))
            .map(|ns| RawImport::path(ns, EdgeKind::Using))
            .collect()
    }

    fn language_name(&self) -> &str {
        "csharp"
    }
}
