use sail_trace::graph::{split_qualified, GraphIndex, NodeId};
use sail_trace::utils::error::GraphError;

#[test]
fn test_resolve_is_stable() {
    let mut graph = GraphIndex::new();
    let a = graph.resolve("g:a");
    let b = graph.resolve("g:b");

    assert_eq!(graph.resolve("g:a"), a);
    assert_ne!(a, b);
    assert_eq!(a, NodeId(0));
    assert_eq!(b, NodeId(1));
    assert_ne!(graph.resolve("h:a"), a);
}

#[test]
fn test_split_on_first_separator() {
    assert_eq!(split_qualified("g:a:b"), ("g", "a:b"));
    assert_eq!(split_qualified("plain"), ("plain", ""));

    let mut graph = GraphIndex::new();
    let id = graph.resolve("fn:bb:1");
    let node = graph.node(id).unwrap();
    assert_eq!(node.group(), "fn");
    assert_eq!(node.local(), "bb:1");
    assert_eq!(graph.group_of(id), "fn");
}

#[test]
fn test_redefinition_fails() {
    let mut graph = GraphIndex::new();
    graph.define_content("g:a", "x").unwrap();

    let err = graph.define_content("g:a", "y").unwrap_err();
    assert_eq!(
        err,
        GraphError::Redefinition {
            name: "g:a".to_string(),
            existing: "x".to_string(),
            attempted: "y".to_string(),
        }
    );
    assert_eq!(graph.content_of(NodeId(0)), Some("x"));
}

#[test]
fn test_resolve_after_define_never_errors() {
    let mut graph = GraphIndex::new();
    let id = graph.define_content("g:a", "x").unwrap();
    assert_eq!(graph.resolve("g:a"), id);
    assert_eq!(graph.resolve("g:a"), id);
    assert_eq!(graph.content_of(id), Some("x"));
}

#[test]
fn test_lazy_node_can_be_defined_later() {
    let mut graph = GraphIndex::new();
    let id = graph.resolve("g:a");
    assert_eq!(graph.content_of(id), None);

    assert_eq!(graph.define_content("g:a", "").unwrap(), id);
    assert_eq!(graph.content_of(id), Some(""));
    assert!(graph.define_content("g:a", "").is_err());
}

#[test]
fn test_edge_idempotence() {
    let mut graph = GraphIndex::new();
    assert!(graph.add_edge("g:u", "g:v"));
    assert!(!graph.add_edge("g:u", "g:v"));

    let u = graph.lookup("g:u").unwrap();
    let v = graph.lookup("g:v").unwrap();
    assert_eq!(graph.active_edges("g"), vec![(u, v)]);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_active_views_by_group() {
    let mut graph = GraphIndex::new();
    graph.add_edge("f:a", "f:b");
    graph.add_edge("f:b", "g:c");
    graph.add_edge("g:c", "g:d");

    let ids = |names: &[&str]| -> Vec<NodeId> {
        names.iter().map(|name| graph.lookup(name).unwrap()).collect()
    };

    assert_eq!(graph.active_node_ids("f"), ids(&["f:a", "f:b"]));
    assert_eq!(graph.active_node_ids("g"), ids(&["g:c", "g:d"]));
    assert!(graph.active_node_ids("h").is_empty());

    let f_edges = graph.active_edges("f");
    assert_eq!(f_edges.len(), 2);
    assert!(f_edges.contains(&(graph.lookup("f:b").unwrap(), graph.lookup("g:c").unwrap())));
    assert_eq!(graph.active_edges("g").len(), 1);

    assert_eq!(graph.groups().collect::<Vec<_>>(), vec!["f", "g"]);
}

#[test]
fn test_lookup_does_not_create() {
    let mut graph = GraphIndex::new();
    assert_eq!(graph.lookup("g:a"), None);
    assert_eq!(graph.node_count(), 0);
    graph.resolve("g:a");
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_successors() {
    let mut graph = GraphIndex::new();
    graph.add_edge("g:a", "g:c");
    graph.add_edge("g:a", "g:b");

    let a = graph.lookup("g:a").unwrap();
    let succ: Vec<_> = graph.successors(a).collect();
    assert_eq!(succ, vec![graph.lookup("g:c").unwrap(), graph.lookup("g:b").unwrap()]);
    assert_eq!(graph.successors(graph.lookup("g:b").unwrap()).count(), 0);
}
