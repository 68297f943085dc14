use sail_trace::commands::{
    execute_export, execute_history, execute_inspect, execute_show, ExportArgs, HistoryArgs,
    InspectArgs, SameKeyJump, ShowArgs,
};
use sail_trace::output::read_snapshot;
use std::io::Write;
use tempfile::NamedTempFile;

fn trace_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

const TRACE: &str = "\
>>node f:a
x = 1
>>nodeinfo f:a
x: [1,1]
>>globalinfo
heap
>>prevnodeinfo f:a
";

#[test]
fn test_inspect() {
    let file = trace_file(TRACE);
    let args = InspectArgs {
        trace: file.path().to_path_buf(),
        max_groups: 5,
    };

    assert!(execute_inspect(args).is_ok());
}

#[test]
fn test_inspect_reports_load_errors() {
    let file = trace_file(">>node f:a\n>>node f:a\n");
    let args = InspectArgs {
        trace: file.path().to_path_buf(),
        max_groups: 5,
    };

    let err = execute_inspect(args).unwrap_err();
    assert!(format!("{err:#}").contains("already defined"));
}

#[test]
fn test_export_writes_snapshot() {
    let file = trace_file(TRACE);
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out/snapshot.json");

    execute_export(ExportArgs {
        trace: file.path().to_path_buf(),
        output: output.clone(),
    })
    .unwrap();

    let snapshot = read_snapshot(&output).unwrap();
    assert_eq!(snapshot.events.len(), 3);
    assert_eq!(snapshot.payloads.len(), 2);
}

#[test]
fn test_show_positions() {
    let file = trace_file(TRACE);

    for args in [
        ShowArgs {
            trace: file.path().to_path_buf(),
            index: Some(1),
            ..Default::default()
        },
        ShowArgs {
            trace: file.path().to_path_buf(),
            position: Some(0.5),
            jump: Some(SameKeyJump::Next),
            ..Default::default()
        },
        ShowArgs {
            trace: file.path().to_path_buf(),
            index: Some(99),
            jump: Some(SameKeyJump::Prev),
            ..Default::default()
        },
    ] {
        assert!(execute_show(args).is_ok());
    }
}

#[test]
fn test_show_empty_trace() {
    let file = trace_file("");
    let args = ShowArgs {
        trace: file.path().to_path_buf(),
        ..Default::default()
    };

    assert!(execute_show(args).is_ok());
}

#[test]
fn test_history() {
    let file = trace_file(TRACE);
    let args = HistoryArgs {
        trace: file.path().to_path_buf(),
        node: "f:a".to_string(),
        at: Some(1),
    };
    assert!(execute_history(args).is_ok());

    let args = HistoryArgs {
        trace: file.path().to_path_buf(),
        node: "f:missing".to_string(),
        at: None,
    };
    assert!(execute_history(args).is_err());
}
