use super::language::Language;
use crate::parsers::{
    csharp::CSharpExtractor, gdscript::GDScriptExtractor, go::GoExtractor,
    javascript::JavaScriptExtractor, python::PythonExtractor, rust::RustExtractor,
    ImportExtractor,
};
use crate::resolvers::{
    csharp::CSharpResolver, gdscript::GDScriptResolver, go::GoResolver,
    javascript::JavaScriptResolver, python::PythonResolver, rust::RustResolver, ImportResolver,
};

/// Extractor and resolver pair for one language.
#[derive(Clone, Copy)]
pub struct LanguageStrategy {
    pub extractor: &'static dyn ImportExtractor,
    pub resolver: &'static dyn ImportResolver,
}

static PYTHON: LanguageStrategy = LanguageStrategy {
    extractor: &PythonExtractor,
    resolver: &PythonResolver,
};

static JAVASCRIPT: LanguageStrategy = LanguageStrategy {
    extractor: &JavaScriptExtractor,
    resolver: &JavaScriptResolver,
};

static CSHARP: LanguageStrategy = LanguageStrategy {
    extractor: &CSharpExtractor,
    resolver: &CSharpResolver,
};

static GDSCRIPT: LanguageStrategy = LanguageStrategy {
    extractor: &GDScriptExtractor,
    resolver: &GDScriptResolver,
};

static GO: LanguageStrategy = LanguageStrategy {
    extractor: &GoExtractor,
    resolver: &GoResolver,
};

static RUST: LanguageStrategy = LanguageStrategy {
    extractor: &RustExtractor,
    resolver: &RustResolver,
};

/// The one place languages are wired to their import handling.
/// `None` for files that only become nodes.
pub fn strategy_for(language: Language) -> Option<&'static LanguageStrategy> {
    match language {
        Language::Python => Some(&PYTHON),
        Language::JavaScript | Language::TypeScript => Some(&JAVASCRIPT),
        Language::CSharp => Some(&CSHARP),
        Language::GDScript => Some(&GDSCRIPT),
        Language::Go => Some(&GO),
        Language::Rust => Some(&RUST),
        Language::Other => None,
    }
}
