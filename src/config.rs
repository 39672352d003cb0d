use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = ".xrayrc";

/// Settings loaded from a JSON `.xrayrc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct XrayConfig {
    /// Directory names to skip on top of the built-in exclusions.
    pub exclude_dirs: Vec<String>,
    /// Maximum directory depth below the root; 0 scans only the root.
    pub max_depth: Option<usize>,
    /// Stop the scan after this many files.
    pub max_files: Option<usize>,
    /// Replaces the default C# framework namespace roots.
    pub csharp_framework_roots: Option<Vec<String>>,
}

impl XrayConfig {
    /// Load `.xrayrc` from the project root, then from the home directory.
    ///
    /// Candidates that are missing, unreadable or malformed are skipped, so
    /// this falls back to the defaults rather than failing.
    pub fn load(root: &Path) -> Self {
        let mut candidates = vec![root.join(CONFIG_FILE_NAME)];
        if let Some(home) = home_dir() {
            candidates.push(home.join(CONFIG_FILE_NAME));
        }

        candidates
            .iter()
            .find_map(|candidate| Self::load_file(candidate))
            .unwrap_or_default()
    }

    /// Parse one config file, `None` if it is absent or unusable.
    pub fn load_file(path: &Path) -> Option<Self> {
        if !path.is_file() {
            return None;
        }
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                warn!("failed to read {}: {err}", path.display());
                return None;
            }
        };
        match serde_json::from_str::<Self>(&contents) {
            Ok(config) => {
                debug!("loaded config from {}", path.display());
                Some(config)
            }
            Err(err) => {
                warn!("failed to parse {}: {err}", path.display());
                None
            }
        }
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
