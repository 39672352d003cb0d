use once_cell::sync::Lazy;
use regex::Regex;

use super::common::ImportCollector;
use super::{ImportExtractor, RawImport};
use crate::core::EdgeKind;

static GO_IMPORT_SINGLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^[ \t]*import[ \t]+(?:[\w.]+[ \t]+)?"(?P<path>[^"]+)""#)
        .expect("valid go import regex")
});

static GO_IMPORT_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*import\s*\((?P<block>[^)]*)\)").expect("valid go import block regex")
});

static GO_IMPORT_ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:[\w.]+\s+)?"(?P<path>[^"]+)""#).expect("valid go import entry regex")
});

/// Single-line `import "x"` and grouped `import ( ... )` declarations.
/// Aliases (`foo "x"`, `_ "x"`, `. "x"`) are ignored.
pub struct GoExtractor;

impl GoExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GoExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportExtractor for GoExtractor {
    fn extract(&self, source: &str) -> Vec<RawImport> {
        let mut collector = ImportCollector::new();

        for caps in GO_IMPORT_SINGLE.captures_iter(source) {
            if let Some(path) = caps.name("path") {
                collector.push(RawImport::path(path.as_str(), EdgeKind::Import));
            }
        }

        for block in GO_IMPORT_BLOCK.captures_iter(source) {
            let Some(body) = block.name("block") else {
                continue;
            };
            for entry in GO_IMPORT_ENTRY.captures_iter(body.as_str()) {
                if let Some(path) = entry.name("path") {
                    collector.push(RawImport::path(path.as_str(), EdgeKind::Import));
                }
            }
        }

        collector.finish()
    }

    fn language_name(&self) -> &str {
        "go"
    }
}
