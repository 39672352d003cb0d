use codexray::core::{Category, DependencyGraph, Edge, EdgeKind, GraphBuilder, Language, Node};

fn node(id: &str) -> Node {
    Node::new(id.to_string(), 10, 100)
}

#[test]
fn node_metadata_comes_from_the_path() {
    let n = node("src/ui/Button.CS");
    assert_eq!(n.language, Language::CSharp);
    assert_eq!(n.category, Category::Source);
    assert_eq!(n.directory, "src/ui");

    let top = node("settings.toml");
    assert_eq!(top.language, Language::Other);
    assert_eq!(top.category, Category::Config);
    assert_eq!(top.directory, ".");
}

#[test]
fn graph_builder_rejects_invalid_and_duplicate_edges() {
    let mut gb = GraphBuilder::new();
    assert!(gb.add_node(node("a.py")));
    assert!(gb.add_node(node("b.py")));
    assert!(!gb.add_node(node("a.py")));

    assert!(gb.add_edge(Edge::new("a.py", "b.py", EdgeKind::Import)));
    assert!(!gb.add_edge(Edge::new("a.py", "b.py", EdgeKind::Import)));
    assert!(gb.add_edge(Edge::new("a.py", "b.py", EdgeKind::Require)));
    assert!(!gb.add_edge(Edge::new("a.py", "a.py", EdgeKind::Import)));
    assert!(!gb.add_edge(Edge::new("a.py", "missing.py", EdgeKind::Import)));

    let graph = gb.build();
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.edges.len(), 2);
}

#[test]
fn build_sorts_edges_and_cleans_externals() {
    let mut gb = GraphBuilder::new();
    for id in ["c.ts", "a.ts", "b.ts"] {
        gb.add_node(node(id));
    }
    gb.add_edge(Edge::new("c.ts", "a.ts", EdgeKind::Import));
    gb.add_edge(Edge::new("a.ts", "c.ts", EdgeKind::Using));
    gb.add_edge(Edge::new("a.ts", "c.ts", EdgeKind::Import));
    gb.add_edge(Edge::new("a.ts", "b.ts", EdgeKind::Require));

    gb.add_external("zod");
    gb.add_external("");
    gb.add_external("react");
    gb.add_external("react");
    gb.add_external("b.ts");

    let graph = gb.build();

    // insertion order for nodes
    let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["c.ts", "a.ts", "b.ts"]);

    assert_eq!(
        graph.edges,
        vec![
            Edge::new("a.ts", "b.ts", EdgeKind::Require),
            Edge::new("a.ts", "c.ts", EdgeKind::Import),
            Edge::new("a.ts", "c.ts", EdgeKind::Using),
            Edge::new("c.ts", "a.ts", EdgeKind::Import),
        ]
    );
    assert_eq!(graph.external_deps, vec!["react", "zod"]);
}

#[test]
fn graph_serializes_with_expected_keys() {
    let mut gb = GraphBuilder::new();
    gb.add_node(node("src/a.rs"));
    gb.add_node(node("src/b.rs"));
    gb.add_edge(Edge::new("src/a.rs", "src/b.rs", EdgeKind::Import));
    gb.add_external("serde");
    let graph = gb.build();

    let value = serde_json::to_value(&graph).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 3);
    assert_eq!(value["nodes"][0]["id"], "src/a.rs");
    assert_eq!(value["nodes"][0]["language"], "Rust");
    assert_eq!(value["nodes"][0]["category"], "source");
    assert_eq!(value["nodes"][0]["lines"], 10);
    assert_eq!(value["nodes"][0]["size"], 100);
    assert_eq!(value["nodes"][0]["directory"], "src");
    assert_eq!(value["edges"][0]["type"], "import");
    assert_eq!(value["external_deps"][0], "serde");

    let back: DependencyGraph = serde_json::from_value(value).unwrap();
    assert_eq!(back, graph);
}

#[test]
fn import_cycles_group_mutually_dependent_files() {
    let mut gb = GraphBuilder::new();
    for id in ["a.py", "b.py", "c.py", "d.py"] {
        gb.add_node(node(id));
    }
    gb.add_edge(Edge::new("b.py", "a.py", EdgeKind::Import));
    gb.add_edge(Edge::new("a.py", "b.py", EdgeKind::Import));
    gb.add_edge(Edge::new("c.py", "a.py", EdgeKind::Import));
    let graph = gb.build();

    assert_eq!(graph.to_petgraph().edge_count(), 3);
    assert_eq!(
        graph.import_cycles(),
        vec![vec!["a.py".to_string(), "b.py".to_string()]]
    );
}

#[test]
fn empty_builder_yields_empty_graph() {
    let graph = GraphBuilder::new().build();
    assert!(graph.is_empty());
    assert!(graph.import_cycles().is_empty());
}
