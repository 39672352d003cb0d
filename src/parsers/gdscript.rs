use once_cell::sync::Lazy;
use regex::Regex;

use super::{ImportExtractor, RawImport};
use crate::core::EdgeKind;

static GD_EXTENDS_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^[ \t]*extends[ \t]+["'](?P<path>res://[^"']+)["']"#)
        .expect("valid extends path regex")
});

static GD_EXTENDS_CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*extends[ \t]+(?P<class>[A-Z]\w*)[ \t]*\r?$")
        .expect("valid extends class regex")
});

static GD_PRELOAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\bpreload\s*\(\s*["'](?P<path>res://[^"']+)["']\s*\)"#)
        .expect("valid preload regex")
});

static GD_LOAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\bload\s*\(\s*["'](?P<path>res://[^"']+)["']\s*\)"#).expect("valid load regex")
});

/// Godot scripts: `extends "res://..."`, `extends ClassName`, `preload(...)`
/// and `load(...)`.
pub struct GDScriptExtractor;

impl GDScriptExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GDScriptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportExtractor for GDScriptExtractor {
    fn extract(&self, source: &str) -> Vec<RawImport> {
        let mut imports = Vec::new();

        for pattern in [&*GD_EXTENDS_PATH, &*GD_PRELOAD, &*GD_LOAD] {
            imports.extend(
                pattern
                    .captures_iter(source)
                    .filter_map(|caps| caps.name("path"))
                    .map(|m| RawImport::path(m.as_str(), EdgeKind::Import)),
            );
        }

        imports.extend(
            GD_EXTENDS_CLASS
                .captures_iter(source)
                .filter_map(|caps| caps.name("class"))
                .map(|m| RawImport::class(m.as_str())),
        );

        imports
    }

    fn language_name(&self) -> &str {
        "gdscript"
    }
}
