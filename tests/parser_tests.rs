use sail_trace::parser::{parse_instructions, Instructions, Opcode};
use sail_trace::utils::error::ParseError;

#[test]
fn test_split_header_and_body() {
    let text = ">>node g1:a\nline one\nline two\n>>edge g1:a g1:b\n";
    let raw: Vec<_> = Instructions::new(text).collect::<Result<_, _>>().unwrap();

    assert_eq!(raw.len(), 2);
    assert_eq!(raw[0].line, 1);
    assert_eq!(raw[0].header, ">>node g1:a");
    assert_eq!(raw[0].body, "line one\nline two");
    assert_eq!(raw[1].line, 4);
    assert_eq!(raw[1].body, "");
}

#[test]
fn test_blank_body_lines_are_kept() {
    let text = ">>nodeinfo g:a\nfirst\n\nlast\n\n>>globalinfo\n";
    let instructions = parse_instructions(text).unwrap();

    assert_eq!(instructions[0].body, "first\n\nlast\n");
    assert_eq!(instructions[1].opcode, Opcode::GlobalInfo);
}

#[test]
fn test_opcode_table() {
    let text = "\
>>node g:a
>>edge g:a g:b
>>nodeinfo g:a
>>edgeinfo g:a g:b
>>globalinfo
>>prevnodeinfo g:a
>>prevedgeinfo g:a g:b
>>prevglobalinfo
";
    let opcodes: Vec<_> = parse_instructions(text)
        .unwrap()
        .into_iter()
        .map(|instr| (instr.opcode, instr.args.len()))
        .collect();

    assert_eq!(
        opcodes,
        vec![
            (Opcode::Node, 1),
            (Opcode::Edge, 2),
            (Opcode::NodeInfo, 1),
            (Opcode::EdgeInfo, 2),
            (Opcode::GlobalInfo, 0),
            (Opcode::PrevNodeInfo, 1),
            (Opcode::PrevEdgeInfo, 2),
            (Opcode::PrevGlobalInfo, 0),
        ]
    );
}

#[test]
fn test_tags_with_spaces() {
    let text = ">>nodeinfo g:a widen at loop head\n{}\n>>globalinfo heap state\n{}\n>>prevedgeinfo g:a g:b\ttaken";
    let instructions = parse_instructions(text).unwrap();

    assert_eq!(instructions[0].tag, "widen at loop head");
    assert_eq!(instructions[1].tag, "heap state");
    assert_eq!(instructions[2].tag, "taken");
}

#[test]
fn test_unknown_opcode() {
    let err = parse_instructions(">>selectgroup main\n").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnknownOpcode {
            line: 1,
            header: ">>selectgroup main".to_string()
        }
    );
}

#[test]
fn test_wrong_argument_count() {
    let err = parse_instructions(">>edge g:a\n").unwrap_err();
    assert!(matches!(
        err,
        ParseError::ArgumentCount {
            expected: 2,
            found: 1,
            ..
        }
    ));

    let err = parse_instructions(">>node g:a g:b\n").unwrap_err();
    assert!(matches!(
        err,
        ParseError::ArgumentCount {
            expected: 1,
            found: 2,
            ..
        }
    ));

    let err = parse_instructions(">>nodeinfo\nvalue\n").unwrap_err();
    assert!(matches!(err, ParseError::ArgumentCount { found: 0, .. }));
}

#[test]
fn test_edge_with_body_is_rejected() {
    let err = parse_instructions(">>node g:a\n>>edge g:a g:b\nstray\n").unwrap_err();
    match err {
        ParseError::UnexpectedBody { line, header, body } => {
            assert_eq!(line, 2);
            assert_eq!(header, ">>edge g:a g:b");
            assert_eq!(body, "stray");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_prev_with_body_is_rejected() {
    let err = parse_instructions(">>prevglobalinfo\nvalue\n").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedBody { .. }));
}

#[test]
fn test_text_before_first_instruction() {
    let err = parse_instructions("\nhello\n>>node g:a\n").unwrap_err();
    assert_eq!(
        err,
        ParseError::OrphanBody {
            line: 2,
            text: "hello".to_string()
        }
    );

    // Leading blank lines are fine
    assert_eq!(parse_instructions("\n\n>>node g:a\n").unwrap().len(), 1);
}

#[test]
fn test_empty_input() {
    assert!(parse_instructions("").unwrap().is_empty());
}

#[test]
fn test_crlf_line_endings() {
    let instructions = parse_instructions(">>node g:a\r\ncontent\r\n>>edge g:a g:b\r\n").unwrap();
    assert_eq!(instructions[0].args, vec!["g:a"]);
    assert_eq!(instructions[0].body, "content");
    assert_eq!(instructions[1].args, vec!["g:a", "g:b"]);
}

#[test]
fn test_trailing_separator_on_node_and_edge() {
    for header in [">>node g:a \ncontent\n", ">>edge g:a g:b \n", ">>edge g:a g:b\t\n"] {
        let err = parse_instructions(header).unwrap_err();
        assert!(
            matches!(err, ParseError::ArgumentCount { .. }),
            "{header:?} gave {err:?}"
        );
    }

    // Info headers consume one separator before an empty tag
    let instructions = parse_instructions(">>nodeinfo g:a \nv\n").unwrap();
    assert_eq!(instructions[0].tag, "");
}
