use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, warn};

use super::graph::{DependencyGraph, Edge, GraphBuilder, Node};
use super::index::{ProjectIndex, DEFAULT_CSHARP_FRAMEWORK_ROOTS};
use super::language::Language;
use super::paths::{absolutize, escapes_root, normalize, relative_posix};
use super::scanner::FileInfo;
use super::strategy::{strategy_for, LanguageStrategy};
use crate::config::XrayConfig;
use crate::parsers::common::read_source;
use crate::resolvers::{Resolution, ResolveContext};

/// A project file that survived node construction.
#[derive(Debug, Clone)]
struct SourceFile {
    rel: String,
    abs: PathBuf,
    language: Language,
}

/// Edges and external names found in one file.
#[derive(Debug, Default)]
struct FileImports {
    edges: Vec<Edge>,
    external_deps: Vec<String>,
}

/// Builds the file-level dependency graph of a project in one pass.
#[derive(Debug, Clone)]
pub struct DependencyAnalyzer {
    csharp_framework_roots: Vec<String>,
}

impl DependencyAnalyzer {
    pub fn new() -> Self {
        Self {
            csharp_framework_roots: DEFAULT_CSHARP_FRAMEWORK_ROOTS
                .iter()
                .map(|root| root.to_string())
                .collect(),
        }
    }

    pub fn from_config(config: &XrayConfig) -> Self {
        let analyzer = Self::new();
        match &config.csharp_framework_roots {
            Some(roots) => analyzer.with_csharp_framework_roots(roots.clone()),
            None => analyzer,
        }
    }

    pub fn with_csharp_framework_roots(mut self, roots: Vec<String>) -> Self {
        self.csharp_framework_roots = roots;
        self
    }

    /// Convenience entry point for callers that only have paths.
    pub fn analyze_paths<I, P>(&self, paths: I, project_root: &Path) -> DependencyGraph
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let root = absolutize(project_root);
        let files: Vec<FileInfo> = paths
            .into_iter()
            .map(|path| {
                let path = path.as_ref();
                if path.is_absolute() {
                    FileInfo::from_path(path)
                } else {
                    FileInfo::from_path(root.join(path))
                }
            })
            .collect();
        self.analyze(&files, &root)
    }

    /// Build the graph for `files`, all expected to live under `project_root`.
    ///
    /// Never fails: unreadable files keep their node but contribute no edges,
    /// and an empty inventory yields an empty graph.
    pub fn analyze(&self, files: &[FileInfo], project_root: &Path) -> DependencyGraph {
        let start = Instant::now();
        let root = absolutize(project_root);

        let mut graph_builder = GraphBuilder::new();
        let mut sources = Vec::with_capacity(files.len());

        for file_info in files {
            let abs = if file_info.path.is_absolute() {
                normalize(&file_info.path)
            } else {
                normalize(&root.join(&file_info.path))
            };
            let rel = relative_posix(&abs, &root);
            if rel == "." || escapes_root(&rel) {
                warn!("skipping {}: outside project root", abs.display());
                continue;
            }

            let node = Node::new(rel.clone(), file_info.line_count, file_info.size_bytes);
            let language = node.language;
            if graph_builder.add_node(node) {
                sources.push(SourceFile { rel, abs, language });
            }
        }

        let index = ProjectIndex::new(&root, sources.iter().map(|source| source.rel.clone()))
            .with_csharp_framework_roots(self.csharp_framework_roots.clone());

        let results: Vec<FileImports> = sources
            .par_iter()
            .filter_map(|source| {
                strategy_for(source.language).map(|strategy| process_file(source, strategy, &index))
            })
            .collect();

        for result in results {
            for edge in result.edges {
                graph_builder.add_edge(edge);
            }
            for name in result.external_deps {
                graph_builder.add_external(name);
            }
        }

        let graph = graph_builder.build();
        debug!(
            "dependency graph: {} nodes, {} edges, {} external in {:.2?}",
            graph.nodes.len(),
            graph.edges.len(),
            graph.external_deps.len(),
            start.elapsed()
        );
        graph
    }
}

impl Default for DependencyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn process_file(
    source: &SourceFile,
    strategy: &LanguageStrategy,
    index: &ProjectIndex,
) -> FileImports {
    let mut imports = FileImports::default();

    let text = match read_source(&source.abs) {
        Ok(text) => text,
        Err(err) => {
            debug!("skipping imports of {}: {err}", source.rel);
            return imports;
        }
    };
    if text.is_empty() {
        return imports;
    }

    let raw_imports = strategy.extractor.extract(&text);
    debug!(
        "{}: {} {} references",
        source.rel,
        raw_imports.len(),
        strategy.extractor.language_name()
    );

    let ctx = ResolveContext::new(index, &source.abs, &source.rel);
    for raw in raw_imports {
        match strategy.resolver.resolve(&raw.reference, &ctx) {
            Resolution::Resolved(targets) => {
                for target in targets {
                    if target != source.rel && index.contains(&target) {
                        imports.edges.push(Edge::new(source.rel.clone(), target, raw.kind));
                    }
                }
            }
            Resolution::External(name) => imports.external_deps.push(name),
            Resolution::Unresolved => {}
        }
    }

    imports
}
