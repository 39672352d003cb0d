use std::path::{Path, PathBuf};

use super::{ImportResolver, Resolution, ResolveContext};
use crate::parsers::ImportRef;

/// `use crate::`, `use super::`, `use self::` paths and `mod name;`
/// declarations, mapped onto the conventional module file layout.
pub struct RustResolver;

impl RustResolver {
    pub fn new() -> Self {
        Self
    }

    /// `src` directory of the crate the importing file belongs to.
    fn crate_src_dir(ctx: &ResolveContext<'_>) -> PathBuf {
        let root = ctx.root();
        ctx.source_dir()
            .ancestors()
            .take_while(|dir| dir.starts_with(root) && *dir != root)
            .find(|dir| dir.file_name().is_some_and(|name| name == "src"))
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.join("src"))
    }

    /// Try `<base>/<path>.rs` then `<base>/<path>/mod.rs`, first with every
    /// segment and then without the last one (an imported item rather than
    /// a module).
    fn probe_module_path(base: &Path, segments: &[&str], ctx: &ResolveContext<'_>) -> Option<String> {
        let mut attempts: Vec<&[&str]> = vec![segments];
        if segments.len() > 1 {
            attempts.push(&segments[..segments.len() - 1]);
        }

        for attempt in attempts {
            let module_dir = attempt.iter().fold(base.to_path_buf(), |dir, seg| dir.join(seg));
            if let Some(rel) = ctx.existing_file(&module_dir.with_extension("rs")) {
                return Some(rel);
            }
            if let Some(rel) = ctx.existing_file(&module_dir.join("mod.rs")) {
                return Some(rel);
            }
        }
        None
    }

    fn resolve_mod(name: &str, ctx: &ResolveContext<'_>) -> Option<String> {
        let dir = ctx.source_dir();
        let mut candidates = vec![dir.join(format!("{name}.rs")), dir.join(name).join("mod.rs")];

        // `foo.rs` declaring `mod bar;` keeps `bar` under `foo/`.
        let stem = ctx
            .source_abs
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();
        if !stem.is_empty() && !matches!(stem, "mod" | "lib" | "main") {
            let nested = dir.join(stem);
            candidates.push(nested.join(format!("{name}.rs")));
            candidates.push(nested.join(name).join("mod.rs"));
        }

        candidates
            .iter()
            .find_map(|candidate| ctx.existing_file(candidate))
    }
}

impl Default for RustResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportResolver for RustResolver {
    fn resolve(&self, reference: &ImportRef, ctx: &ResolveContext<'_>) -> Resolution {
        let path = match reference {
            ImportRef::Module(name) => return Resolution::from_option(Self::resolve_mod(name, ctx)),
            ImportRef::Path(path) => path,
            ImportRef::Class(_) => return Resolution::Unresolved,
        };

        let mut segments: Vec<&str> = path.split("::").filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            return Resolution::Unresolved;
        }
        let anchor = segments.remove(0);

        let base = match anchor {
            "crate" => Self::crate_src_dir(ctx),
            "self" => ctx.source_dir().to_path_buf(),
            "super" => match ctx.source_dir().parent() {
                Some(parent) => parent.to_path_buf(),
                None => return Resolution::Unresolved,
            },
            external => return Resolution::External(external.to_string()),
        };

        if segments.is_empty() {
            return Resolution::Unresolved;
        }
        Resolution::from_option(Self::probe_module_path(&base, &segments, ctx))
    }
}
