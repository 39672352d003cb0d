use petgraph::{algo::tarjan_scc, graph::NodeIndex, Directed, Graph};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

use super::language::{Category, Language};

/// Import mechanism behind an edge.
///
/// Variant order matches the lexical order of the serialized names, so
/// sorting edges by kind sorts them by their string form too.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Import,
    Require,
    Using,
}

/// One project file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    /// Project-relative path with forward slashes.
    pub id: String,
    pub language: Language,
    pub category: Category,
    pub lines: usize,
    pub size: u64,
    /// Parent directory of `id`, `"."` for top-level files.
    pub directory: String,
}

/// Directed "source imports target" relationship between two project files.
///
/// Field order drives the derived ordering: source, then target, then kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
}

/// Finished analysis result handed to renderers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DependencyGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub external_deps: Vec<String>,
}

impl Node {
    pub fn new(id: String, lines: usize, size: u64) -> Self {
        let language = Language::from_path(&id);
        let category = Category::from_path(&id);
        let directory = super::paths::parent_dir(&id);
        Self {
            id,
            language,
            category,
            lines,
            size,
            directory,
        }
    }
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: EdgeKind) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
        }
    }
}

impl DependencyGraph {
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty() && self.external_deps.is_empty()
    }

    /// Project the value onto a petgraph graph for traversal algorithms.
    pub fn to_petgraph(&self) -> Graph<&Node, EdgeKind, Directed> {
        let mut graph = Graph::with_capacity(self.nodes.len(), self.edges.len());
        let mut index: HashMap<&str, NodeIndex> = HashMap::with_capacity(self.nodes.len());

        for node in &self.nodes {
            index.insert(node.id.as_str(), graph.add_node(node));
        }
        for edge in &self.edges {
            if let (Some(&source), Some(&target)) = (
                index.get(edge.source.as_str()),
                index.get(edge.target.as_str()),
            ) {
                graph.add_edge(source, target, edge.kind);
            }
        }
        graph
    }

    /// Groups of files that import each other in a cycle.
    pub fn import_cycles(&self) -> Vec<Vec<String>> {
        let graph = self.to_petgraph();
        let mut cycles: Vec<Vec<String>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|component| component.len() > 1)
            .map(|component| {
                let mut ids: Vec<String> = component
                    .into_iter()
                    .map(|idx| graph[idx].id.clone())
                    .collect();
                ids.sort();
                ids
            })
            .collect();
        cycles.sort();
        cycles
    }
}

/// Accumulates nodes, edges and external names for one analysis pass.
pub struct GraphBuilder {
    nodes: Vec<Node>,
    node_ids: HashSet<String>,
    edges: BTreeSet<Edge>,
    external_deps: BTreeSet<String>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            node_ids: HashSet::new(),
            edges: BTreeSet::new(),
            external_deps: BTreeSet::new(),
        }
    }

    /// Returns false when a node with the same id already exists.
    pub fn add_node(&mut self, node: Node) -> bool {
        if !self.node_ids.insert(node.id.clone()) {
            return false;
        }
        self.nodes.push(node);
        true
    }

    /// Returns false for self-edges, unknown endpoints and duplicates.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        if edge.source == edge.target {
            return false;
        }
        if !self.node_ids.contains(&edge.source) || !self.node_ids.contains(&edge.target) {
            return false;
        }
        self.edges.insert(edge)
    }

    pub fn add_external(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !name.is_empty() {
            self.external_deps.insert(name);
        }
    }

    pub fn build(self) -> DependencyGraph {
        let node_ids = self.node_ids;
        DependencyGraph {
            nodes: self.nodes,
            edges: self.edges.into_iter().collect(),
            external_deps: self
                .external_deps
                .into_iter()
                .filter(|name| !name.is_empty() && !node_ids.contains(name))
                .collect(),
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
