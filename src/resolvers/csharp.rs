use super::{ImportResolver, Resolution, ResolveContext};
use crate::parsers::ImportRef;

/// Namespaces do not map onto files, so the last namespace segment is
/// matched against `.cs` file stems instead. Every match becomes an edge.
pub struct CSharpResolver;

impl CSharpResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CSharpResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportResolver for CSharpResolver {
    fn resolve(&self, reference: &ImportRef, ctx: &ResolveContext<'_>) -> Resolution {
        let ImportRef::Path(namespace) = reference else {
            return Resolution::Unresolved;
        };
        let namespace = namespace.trim_end_matches(';');
        let Some(type_hint) = namespace.rsplit('.').next().filter(|s| !s.is_empty()) else {
            return Resolution::Unresolved;
        };

        let matches = ctx.index.find_by_stem("cs", type_hint);
        if !matches.is_empty() {
            return Resolution::Resolved(matches.to_vec());
        }

        let root = namespace.split('.').next().unwrap_or(namespace);
        if ctx.index.is_csharp_framework_root(root) {
            Resolution::External(root.to_string())
        } else {
            Resolution::External(namespace.to_string())
        }
    }
}
