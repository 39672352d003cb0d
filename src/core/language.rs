use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Languages whose import statements the analyzer understands.
///
/// Everything else collapses to `Other`, which still produces a node but
/// never goes through extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    #[serde(rename = "C#")]
    CSharp,
    GDScript,
    Go,
    Rust,
    Other,
}

/// Coarse bucket a file falls into, independent of its language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Source,
    Config,
    Data,
    Other,
}

impl Language {
    /// Classify by extension (without the dot), case-insensitively.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "py" => Language::Python,
            "js" | "jsx" | "mjs" | "cjs" => Language::JavaScript,
            "ts" | "tsx" | "mts" => Language::TypeScript,
            "cs" => Language::CSharp,
            "gd" => Language::GDScript,
            "go" => Language::Go,
            "rs" => Language::Rust,
            _ => Language::Other,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        extension_of(path.as_ref())
            .map(|ext| Self::from_extension(&ext))
            .unwrap_or(Language::Other)
    }

    /// Display label used in graph nodes.
    pub fn label(self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::CSharp => "C#",
            Language::GDScript => "GDScript",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Other => "Other",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Category {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "py" | "js" | "jsx" | "mjs" | "cjs" | "ts" | "tsx" | "mts" | "cs" | "gd" | "go"
            | "rs" => Category::Source,
            "json" | "yaml" | "yml" | "toml" | "ini" | "cfg" => Category::Config,
            "csv" | "sql" | "xml" => Category::Data,
            _ => Category::Other,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        extension_of(path.as_ref())
            .map(|ext| Self::from_extension(&ext))
            .unwrap_or(Category::Other)
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Source => "source",
            Category::Config => "config",
            Category::Data => "data",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Language and category in one lookup.
pub fn classify(path: impl AsRef<Path>) -> (Language, Category) {
    let path = path.as_ref();
    (Language::from_path(path), Category::from_path(path))
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_string)
}
