use once_cell::sync::Lazy;
use regex::Regex;

use super::common::ImportCollector;
use super::{ImportExtractor, RawImport};
use crate::core::EdgeKind;

static JS_IMPORT_FROM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)(?:^|\b)(?:import|export)\b.+?\bfrom\s*['"](?P<path>[^'"]+)['"]"#)
        .expect("valid import-from regex")
});

static JS_REQUIRE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\brequire\s*\(\s*['"](?P<path>[^'"]+)['"]\s*\)"#).expect("valid require regex")
});

static JS_DYNAMIC_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\bimport\s*\(\s*['"](?P<path>[^'"]+)['"]\s*\)"#)
        .expect("valid dynamic import regex")
});

/// ES `import`/`export ... from`, `require(...)` and dynamic `import(...)`.
///
/// Shared by JavaScript and TypeScript. A path seen twice in one file is
/// reported once, with the kind of its first occurrence in the order
/// static imports, then `require`, then dynamic imports.
pub struct JavaScriptExtractor;

impl JavaScriptExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JavaScriptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportExtractor for JavaScriptExtractor {
    fn extract(&self, source: &str) -> Vec<RawImport> {
        let mut collector = ImportCollector::new();

        let passes: [(&Regex, EdgeKind); 3] = [
            (&*JS_IMPORT_FROM, EdgeKind::Import),
            (&*JS_REQUIRE, EdgeKind::Require),
            (&*JS_DYNAMIC_IMPORT, EdgeKind::Import),
        ];

        for (pattern, kind) in passes {
            for caps in pattern.captures_iter(source) {
                if let Some(path) = caps.name("path") {
                    collector.push(RawImport::path(path.as_str(), kind));
                }
            }
        }

        collector.finish()
    }

    fn language_name(&self) -> &str {
        "javascript"
    }
}
