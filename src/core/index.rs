use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::{extension_lower, stem_lower};

/// Root namespaces treated as framework code when a C# `using` matches no file.
pub const DEFAULT_CSHARP_FRAMEWORK_ROOTS: &[&str] = &["System", "Microsoft", "Windows", "Newtonsoft"];

static GO_MODULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\s*module\s+"?([^\s"]+)"?"#).expect("valid go module regex"));

/// Read-only lookup structures shared by every resolver during one pass.
#[derive(Debug, Clone)]
pub struct ProjectIndex {
    root: PathBuf,
    files: BTreeSet<String>,
    /// (extension, lower-cased stem) -> sorted project-relative paths
    stems: HashMap<(String, String), Vec<String>>,
    go_module: Option<String>,
    csharp_framework_roots: Vec<String>,
}

impl ProjectIndex {
    pub fn new<I>(root: &Path, files: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let files: BTreeSet<String> = files.into_iter().collect();

        let mut stems: HashMap<(String, String), Vec<String>> = HashMap::new();
        for file in &files {
            if let Some(ext) = extension_lower(file) {
                stems
                    .entry((ext, stem_lower(file)))
                    .or_insert_with(Vec::new)
                    .push(file.clone());
            }
        }

        Self {
            root: root.to_path_buf(),
            files,
            stems,
            go_module: detect_go_module(root),
            csharp_framework_roots: DEFAULT_CSHARP_FRAMEWORK_ROOTS
                .iter()
                .map(|root| root.to_string())
                .collect(),
        }
    }

    pub fn with_go_module(mut self, module: Option<String>) -> Self {
        self.go_module = module;
        self
    }

    pub fn with_csharp_framework_roots(mut self, roots: Vec<String>) -> Self {
        self.csharp_framework_roots = roots;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn contains(&self, rel: &str) -> bool {
        self.files.contains(rel)
    }

    /// Files with the given extension whose stem equals `stem`, ignoring case.
    /// Sorted by path.
    pub fn find_by_stem(&self, extension: &str, stem: &str) -> &[String] {
        self.stems
            .get(&(extension.to_lowercase(), stem.to_lowercase()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn go_module(&self) -> Option<&str> {
        self.go_module.as_deref()
    }

    pub fn is_csharp_framework_root(&self, namespace_root: &str) -> bool {
        self.csharp_framework_roots
            .iter()
            .any(|root| root == namespace_root)
    }
}

/// Module path declared by `<root>/go.mod`, if any.
pub fn detect_go_module(root: &Path) -> Option<String> {
    let go_mod = root.join("go.mod");
    if !go_mod.is_file() {
        return None;
    }
    let contents = match fs::read_to_string(&go_mod) {
        Ok(contents) => contents,
        Err(err) => {
            debug!("could not read {}: {err}", go_mod.display());
            return None;
        }
    };
    contents
        .lines()
        .find_map(|line| GO_MODULE.captures(line).map(|caps| caps[1].to_string()))
}
