use anyhow::{bail, Result};
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use super::language::{Category, Language};
use super::paths::{absolutize, extension_lower, relative_posix};
use crate::config::XrayConfig;

/// Directory names never descended into.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "node_modules",
    ".git",
    "__pycache__",
    ".venv",
    "venv",
    "vendor",
    "dist",
    "build",
    ".next",
    ".nuxt",
    "Temp",
    "Library",
    "obj",
    "bin",
    ".idea",
    ".vscode",
    ".gradle",
    "target",
];

/// Binary extensions whose lines are not counted.
const ASSET_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "tiff", "webp", "svg", "ico", "wav", "mp3", "ogg",
    "flac", "aac", "ttf", "woff", "woff2", "eot", "otf", "mp4", "mov", "avi", "webm", "zip",
    "tar", "gz", "bz2", "xz", "7z", "exe", "dll", "so", "dylib", "pdf", "docx", "xlsx", "pptx",
    "pyc", "pyo", "class",
];

/// One entry of the file inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Absolute path, or a path relative to the project root.
    pub path: PathBuf,
    pub language: Language,
    pub category: Category,
    pub line_count: usize,
    pub size_bytes: u64,
}

impl FileInfo {
    /// Describe a file by reading its size and line count from disk.
    /// Unreadable files get zero for both.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let size_bytes = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        let is_asset = path
            .to_str()
            .and_then(extension_lower)
            .is_some_and(|ext| ASSET_EXTENSIONS.contains(&ext.as_str()));
        let line_count = if is_asset { 0 } else { count_lines(&path) };

        Self {
            language: Language::from_path(&path),
            category: Category::from_path(&path),
            path,
            line_count,
            size_bytes,
        }
    }
}

/// Walk limits and exclusions.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub exclude_dirs: HashSet<String>,
    /// 0 scans only the root directory itself.
    pub max_depth: Option<usize>,
    pub max_files: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            exclude_dirs: DEFAULT_EXCLUDES.iter().map(|d| d.to_string()).collect(),
            max_depth: None,
            max_files: None,
        }
    }
}

impl ScanOptions {
    pub fn from_config(config: &XrayConfig) -> Self {
        let mut options = Self::default();
        options
            .exclude_dirs
            .extend(config.exclude_dirs.iter().cloned());
        options.max_depth = config.max_depth;
        options.max_files = config.max_files;
        options
    }

    pub fn with_excludes<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_dirs.extend(dirs.into_iter().map(Into::into));
        self
    }
}

pub struct FileScanner;

impl FileScanner {
    pub fn new() -> Self {
        Self
    }

    /// Inventory every file under `root_path`, sorted by path.
    pub fn scan_directory(&self, root_path: &Path, options: &ScanOptions) -> Result<Vec<FileInfo>> {
        if !root_path.is_dir() {
            bail!("not a directory: {}", root_path.display());
        }
        let root = absolutize(root_path);

        let mut walker = WalkDir::new(&root).follow_links(true).sort_by_file_name();
        if let Some(depth) = options.max_depth {
            walker = walker.max_depth(depth + 1);
        }

        let entries = walker
            .into_iter()
            .filter_entry(|entry| !is_pruned(entry, options))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    debug!("skipping walk entry: {err}");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file());

        let paths: Vec<PathBuf> = match options.max_files {
            Some(limit) => entries.take(limit).map(DirEntry::into_path).collect(),
            None => entries.map(DirEntry::into_path).collect(),
        };

        let mut files: Vec<FileInfo> = paths.into_par_iter().map(FileInfo::from_path).collect();
        files.sort_by(|a, b| {
            relative_posix(&a.path, &root).cmp(&relative_posix(&b.path, &root))
        });

        debug!("scanned {} files under {}", files.len(), root.display());
        Ok(files)
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Excluded names anywhere, hidden directories below the top level.
fn is_pruned(entry: &DirEntry, options: &ScanOptions) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    options.exclude_dirs.contains(name.as_ref()) || (entry.depth() > 1 && name.starts_with('.'))
}

/// Number of lines, counting an unterminated last line.
pub fn count_lines(path: &Path) -> usize {
    match fs::read(path) {
        Ok(bytes) => {
            let newlines = bytes.iter().filter(|&&b| b == b'\n').count();
            match bytes.last() {
                Some(&last) if last != b'\n' => newlines + 1,
                _ => newlines,
            }
        }
        Err(_) => 0,
    }
}
