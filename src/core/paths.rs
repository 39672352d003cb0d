//! Lexical path helpers shared by the scanner, the resolvers and graph assembly.
//!
//! Everything here works on path text only; nothing reads the filesystem.

use std::path::{Component, Path, PathBuf};

/// Collapse `.` and `..` components without consulting the filesystem.
///
/// A leading `..` on a relative path is kept, a `..` directly above the root
/// is dropped.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    let mut normalized = PathBuf::new();
    for part in parts {
        normalized.push(part.as_os_str());
    }
    normalized
}

/// Anchor a relative path at the current working directory, then normalize.
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return normalize(path);
    }
    match std::env::current_dir() {
        Ok(cwd) => normalize(&cwd.join(path)),
        Err(_) => normalize(path),
    }
}

/// Render `path` relative to `root` with forward slashes.
///
/// Paths outside `root` come back with leading `../` segments, which
/// [`escapes_root`] detects. `root` itself renders as `"."`.
pub fn relative_posix(path: &Path, root: &Path) -> String {
    let path = normalize(path);
    let root = normalize(root);

    let path_parts: Vec<Component<'_>> = path.components().collect();
    let root_parts: Vec<Component<'_>> = root.components().collect();

    let common = path_parts
        .iter()
        .zip(root_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<String> = Vec::new();
    for _ in common..root_parts.len() {
        segments.push("..".to_string());
    }
    for part in &path_parts[common..] {
        segments.push(to_posix(&part.as_os_str().to_string_lossy()));
    }

    if segments.is_empty() {
        ".".to_string()
    } else {
        segments.join("/")
    }
}

/// True when a project-relative path climbs out of the project.
pub fn escapes_root(rel: &str) -> bool {
    rel == ".." || rel.starts_with("../")
}

pub fn to_posix(path: &str) -> String {
    path.replace('\\', "/")
}

/// Parent directory of a project-relative path, `"."` at the top level.
pub fn parent_dir(rel: &str) -> String {
    match rel.rfind('/') {
        Some(idx) if idx > 0 => rel[..idx].to_string(),
        _ => ".".to_string(),
    }
}

/// File name without its last extension, lower-cased.
pub fn stem_lower(rel: &str) -> String {
    let name = rel.rsplit('/').next().unwrap_or(rel);
    let stem = match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    };
    stem.to_lowercase()
}

/// Lower-cased extension of a project-relative path, without the dot.
pub fn extension_lower(rel: &str) -> Option<String> {
    let name = rel.rsplit('/').next().unwrap_or(rel);
    match name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < name.len() => Some(name[idx + 1..].to_lowercase()),
        _ => None,
    }
}
