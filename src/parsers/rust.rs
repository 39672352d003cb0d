use once_cell::sync::Lazy;
use regex::Regex;

use super::{ImportExtractor, RawImport};
use crate::core::EdgeKind;

static RUST_USE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(?:pub(?:\([^)]*\))?[ \t]+)?use[ \t]+(?P<path>(?:crate|super|self)::[\w:]+)(?:\s*::\s*\{[^}]*\})?(?:\s*::\s*\*)?(?:[ \t]+as[ \t]+\w+)?\s*;",
    )
    .expect("valid use regex")
});

static RUST_MOD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:pub(?:\([^)]*\))?[ \t]+)?mod[ \t]+(?P<name>\w+)\s*;")
        .expect("valid mod regex")
});

/// `use crate::…;`, `use super::…;`, `use self::…;` and `mod name;`.
///
/// Brace groups and glob suffixes are cut off, so `use crate::a::{B, C};`
/// yields `crate::a`.
pub struct RustExtractor;

impl RustExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportExtractor for RustExtractor {
    fn extract(&self, source: &str) -> Vec<RawImport> {
        let mut imports: Vec<RawImport> = RUST_USE
            .captures_iter(source)
            .filter_map(|caps| caps.name("path"))
            .map(|m| m.as_str().trim_end_matches(':'))
            .filter(|path| path.contains("::"))
            .map(|path| RawImport::path(path, EdgeKind::Import))
            .collect();

        imports.extend(
            RUST_MOD
                .captures_iter(source)
                .filter_map(|caps| caps.name("name"))
                .map(|m| RawImport::module(m.as_str())),
        );

        imports
    }

    fn language_name(&self) -> &str {
        "rust"
    }
}
