use super::{ImportResolver, Resolution, ResolveContext};
use crate::core::paths::to_posix;
use crate::parsers::ImportRef;

const RES_PREFIX: &str = "res://";

/// Godot `res://` paths are project-root relative; bare class names are
/// looked up by `.gd` file stem. Unknown classes are engine or addon types
/// and are dropped.
pub struct GDScriptResolver;

impl GDScriptResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GDScriptResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportResolver for GDScriptResolver {
    fn resolve(&self, reference: &ImportRef, ctx: &ResolveContext<'_>) -> Resolution {
        match reference {
            ImportRef::Path(path) => {
                let Some(stripped) = path.strip_prefix(RES_PREFIX) else {
                    return Resolution::Unresolved;
                };
                let stripped = to_posix(stripped);
                Resolution::from_option(ctx.existing_file(&ctx.root().join(stripped)))
            }
            ImportRef::Class(class_name) => Resolution::from_option(
                ctx.index
                    .find_by_stem("gd", class_name)
                    .first()
                    .cloned(),
            ),
            ImportRef::Module(_) => Resolution::Unresolved,
        }
    }
}
