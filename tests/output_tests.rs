use pretty_assertions::assert_eq;
use std::path::Path;
use sail_trace::graph::NodeId;
use sail_trace::loader::TraceLoader;
use sail_trace::output::{
    describe_event, generate_text_summary, read_snapshot, to_snapshot, validate_path,
    write_snapshot,
};
use sail_trace::timeline::{EventKind, PayloadRef};
use sail_trace::utils::config::SCHEMA_VERSION;
use tempfile::NamedTempFile;

const TRACE: &str = "\
>>node f:a
x = 1
>>edge f:a f:b
>>globalinfo start
heap
>>edgeinfo f:a f:b
x: [1,1]
>>prevedgeinfo f:a f:b again
";

#[test]
fn test_snapshot_contents() {
    let trace = TraceLoader::load_str(TRACE).unwrap();
    let snapshot = to_snapshot(&trace);

    assert_eq!(snapshot.version, SCHEMA_VERSION);
    assert_eq!(snapshot.source, "<memory>");
    assert_eq!(snapshot.nodes.len(), 2);
    assert_eq!(snapshot.nodes[0].group, "f");
    assert_eq!(snapshot.nodes[0].local, "a");
    assert_eq!(snapshot.nodes[0].content.as_deref(), Some("x = 1"));
    assert_eq!(snapshot.nodes[1].content, None);
    assert_eq!(snapshot.edges, vec![(NodeId(0), NodeId(1))]);
    assert_eq!(snapshot.payloads, vec!["heap", "x: [1,1]"]);

    let edge = EventKind::EdgeInfo {
        src: NodeId(0),
        dst: NodeId(1),
    };
    assert_eq!(snapshot.events[1].kind, edge);
    assert_eq!(snapshot.events[2].kind, edge);
    assert_eq!(snapshot.events[2].tag, "again");
    assert_eq!(snapshot.events[2].payload, PayloadRef(1));
}

#[test]
fn test_write_and_read_snapshot() {
    let trace = TraceLoader::load_str(TRACE).unwrap();
    let snapshot = to_snapshot(&trace);
    let temp_file = NamedTempFile::new().unwrap();

    write_snapshot(&snapshot, temp_file.path()).unwrap();
    let loaded = read_snapshot(temp_file.path()).unwrap();

    assert_eq!(loaded, snapshot);
}

#[test]
fn test_snapshot_event_layout() {
    let trace = TraceLoader::load_str(TRACE).unwrap();
    let json = serde_json::to_value(to_snapshot(&trace)).unwrap();

    assert_eq!(json["events"][0]["kind"], "global");
    assert_eq!(json["events"][1]["kind"], "edge_info");
    assert_eq!(json["events"][1]["src"], 0);
    assert_eq!(json["events"][1]["dst"], 1);
    assert_eq!(json["events"][2]["payload"], 1);
    assert!(json["nodes"][1].get("content").is_none());
}

#[test]
fn test_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/snapshot.json");
    let trace = TraceLoader::load_str(TRACE).unwrap();

    write_snapshot(&to_snapshot(&trace), &nested_path).unwrap();

    assert!(nested_path.exists());
}

#[test]
fn test_validate_output_path_empty() {
    assert!(validate_path(Path::new("")).is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(validate_path(temp_dir.path()).is_err());
}

#[test]
fn test_text_summary() {
    let trace = TraceLoader::load_str(TRACE).unwrap();
    let summary = generate_text_summary(&trace, 10);

    assert!(summary.contains("Nodes: 2 (1 without content)"));
    assert!(summary.contains("Events: 3 (global 1, node 0, edge 2)"));
    assert!(summary.contains("1 back-referenced events"));
    assert!(summary.contains("┃ f "));
}

#[test]
fn test_describe_event() {
    let trace = TraceLoader::load_str(TRACE).unwrap();
    let graph = trace.graph();
    let events = trace.timeline().events();

    assert_eq!(describe_event(graph, &events[0]), "global [start]");
    assert_eq!(describe_event(graph, &events[1]), "edge f:a -> f:b");
    assert_eq!(describe_event(graph, &events[2]), "edge f:a -> f:b [again]");
}

#[test]
fn test_read_missing_snapshot_reports_read_failure() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_snapshot(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, sail_trace::utils::error::OutputError::ReadFailed(_)));
    assert!(err.to_string().starts_with("Failed to read file"));
}
