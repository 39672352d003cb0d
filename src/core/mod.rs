pub mod analyzer;
pub mod graph;
pub mod index;
pub mod language;
pub mod paths;
pub mod scanner;
pub mod strategy;

pub use analyzer::DependencyAnalyzer;
pub use graph::{DependencyGraph, Edge, EdgeKind, GraphBuilder, Node};
pub use index::ProjectIndex;
pub use language::{classify, Category, Language};
pub use scanner::{FileInfo, FileScanner, ScanOptions};
