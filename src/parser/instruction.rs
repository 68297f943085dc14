//! Instruction splitting and header tokenization.
//!
//! A trace is a sequence of instructions. Each instruction starts at a
//! line beginning with `>>`; every following line up to the next marker
//! is the instruction body.
//!
//! Example:
//! ```text
//! >>node cfg:bb0
//! %x = add i32 1, 2
//! >>edge cfg:bb0 cfg:bb1
//! >>nodeinfo cfg:bb0 after join
//! {x: [1, 3]}
//! ```

use crate::utils::config::{HEADER_SEPARATORS, INSTRUCTION_MARKER};
use crate::utils::error::ParseError;
use std::iter::{Enumerate, Peekable};
use std::str::Lines;

/// Instruction opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Node,
    Edge,
    NodeInfo,
    EdgeInfo,
    GlobalInfo,
    PrevNodeInfo,
    PrevEdgeInfo,
    PrevGlobalInfo,
}

impl Opcode {
    /// Look up an opcode by its name in the header (without the marker)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "node" => Some(Self::Node),
            "edge" => Some(Self::Edge),
            "nodeinfo" => Some(Self::NodeInfo),
            "edgeinfo" => Some(Self::EdgeInfo),
            "globalinfo" => Some(Self::GlobalInfo),
            "prevnodeinfo" => Some(Self::PrevNodeInfo),
            "prevedgeinfo" => Some(Self::PrevEdgeInfo),
            "prevglobalinfo" => Some(Self::PrevGlobalInfo),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Edge => "edge",
            Self::NodeInfo => "nodeinfo",
            Self::EdgeInfo => "edgeinfo",
            Self::GlobalInfo => "globalinfo",
            Self::PrevNodeInfo => "prevnodeinfo",
            Self::PrevEdgeInfo => "prevedgeinfo",
            Self::PrevGlobalInfo => "prevglobalinfo",
        }
    }

    /// Number of positional node-name arguments
    pub fn arity(self) -> usize {
        match self {
            Self::GlobalInfo | Self::PrevGlobalInfo => 0,
            Self::Node | Self::NodeInfo | Self::PrevNodeInfo => 1,
            Self::Edge | Self::EdgeInfo | Self::PrevEdgeInfo => 2,
        }
    }

    /// Whether lines after the header may carry data
    pub fn accepts_body(self) -> bool {
        matches!(
            self,
            Self::Node | Self::NodeInfo | Self::EdgeInfo | Self::GlobalInfo
        )
    }

    /// Whether the header remainder after the arguments is a free-text tag
    pub fn takes_tag(self) -> bool {
        !matches!(self, Self::Node | Self::Edge)
    }

    /// `prev*` opcodes reuse the payload of an earlier event
    pub fn is_back_reference(self) -> bool {
        matches!(
            self,
            Self::PrevNodeInfo | Self::PrevEdgeInfo | Self::PrevGlobalInfo
        )
    }
}

/// One instruction as split from the trace text, before tokenization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInstruction {
    /// 1-based line number of the header
    pub line: usize,
    /// Full header line, marker included
    pub header: String,
    /// Continuation lines joined with `\n`
    pub body: String,
}

/// A tokenized instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub line: usize,
    pub header: String,
    pub opcode: Opcode,
    /// Positional node-name arguments, exactly `opcode.arity()` of them
    pub args: Vec<String>,
    /// Verbatim header remainder for info opcodes, empty otherwise
    pub tag: String,
    pub body: String,
}

/// Iterator over the raw instructions of a trace
///
/// Stops after the first error.
pub struct Instructions<'a> {
    lines: Peekable<Enumerate<Lines<'a>>>,
    failed: bool,
}

impl<'a> Instructions<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate().peekable(),
            failed: false,
        }
    }
}

impl Iterator for Instructions<'_> {
    type Item = Result<RawInstruction, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        // Only reachable before the first marker: later continuation
        // lines are consumed together with their header
        let (index, header) = loop {
            let (index, line) = self.lines.next()?;
            if line.starts_with(INSTRUCTION_MARKER) {
                break (index, line);
            }
            if !line.trim().is_empty() {
                self.failed = true;
                return Some(Err(ParseError::OrphanBody {
                    line: index + 1,
                    text: line.to_string(),
                }));
            }
        };

        let mut body_lines = Vec::new();
        while let Some((_, line)) = self
            .lines
            .next_if(|(_, line)| !line.starts_with(INSTRUCTION_MARKER))
        {
            body_lines.push(line);
        }

        Some(Ok(RawInstruction {
            line: index + 1,
            header: header.to_string(),
            body: body_lines.join("\n"),
        }))
    }
}

/// Tokenize the header of a raw instruction
///
/// **Public** - used by the loader for every instruction
///
/// # Errors
/// * `ParseError::UnknownOpcode` - opcode not in the instruction table
/// * `ParseError::ArgumentCount` - too few arguments, or extra fields on `node`/`edge`
/// * `ParseError::MissingArgument` - empty field caused by doubled separators
/// * `ParseError::UnexpectedBody` - body on an opcode that takes none
pub fn parse_header(raw: RawInstruction) -> Result<Instruction, ParseError> {
    let text = raw
        .header
        .strip_prefix(INSTRUCTION_MARKER)
        .unwrap_or(&raw.header);

    let (name, mut rest) = split_field(text);
    let Some(opcode) = Opcode::from_name(name) else {
        return Err(ParseError::UnknownOpcode {
            line: raw.line,
            header: raw.header,
        });
    };

    let expected = opcode.arity();
    let mut args = Vec::with_capacity(expected);
    while args.len() < expected {
        if rest.is_empty() {
            return Err(ParseError::ArgumentCount {
                line: raw.line,
                header: raw.header,
                expected,
                found: args.len(),
            });
        }
        let (field, tail) = split_field(rest);
        if field.is_empty() {
            return Err(ParseError::MissingArgument {
                line: raw.line,
                header: raw.header,
            });
        }
        args.push(field.to_string());
        rest = tail;
    }

    let tag = if opcode.takes_tag() {
        rest.to_string()
    } else {
        // A trailing separator opens an empty extra field
        let extra = if rest.is_empty() && !text.ends_with(HEADER_SEPARATORS) {
            0
        } else {
            rest.split(HEADER_SEPARATORS).count()
        };
        if extra > 0 {
            return Err(ParseError::ArgumentCount {
                line: raw.line,
                header: raw.header,
                expected,
                found: expected + extra,
            });
        }
        String::new()
    };

    if !opcode.accepts_body() && !raw.body.is_empty() {
        return Err(ParseError::UnexpectedBody {
            line: raw.line,
            header: raw.header,
            body: raw.body,
        });
    }

    Ok(Instruction {
        line: raw.line,
        header: raw.header,
        opcode,
        args,
        tag,
        body: raw.body,
    })
}

/// Split and tokenize a whole trace
///
/// **Public** - convenience for tests and tooling; the loader streams instead
pub fn parse_instructions(text: &str) -> Result<Vec<Instruction>, ParseError> {
    Instructions::new(text)
        .map(|raw| raw.and_then(parse_header))
        .collect()
}

/// Split on the first header separator, consuming exactly one separator
///
/// **Private** - internal tokenizer
fn split_field(text: &str) -> (&str, &str) {
    match text.find(HEADER_SEPARATORS) {
        Some(pos) => (&text[..pos], &text[pos + 1..]),
        None => (text, ""),
    }
}
