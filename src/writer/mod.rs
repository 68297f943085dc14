//! Trace emission for instrumented analyses.
//!
//! `TraceWriter` is the producer side of the format. Every writer keeps
//! its own memo of the last value recorded per entity and tag; when a
//! value repeats it emits a body-less `prev*` instruction instead of the
//! payload.
//!
//! # Example
//! ```
//! use sail_trace::writer::TraceWriter;
//!
//! let mut writer = TraceWriter::new(Vec::new());
//! writer.select_group("main").unwrap();
//! writer.define_node("bb0", "entry:").unwrap();
//! writer.record_node_info("x = 1", "bb0", None).unwrap();
//! writer.record_node_info("x = 1", "bb0", None).unwrap();
//! let text = String::from_utf8(writer.into_inner()).unwrap();
//! assert!(text.ends_with(">>prevnodeinfo main:bb0\n"));
//! ```

use crate::utils::config::{
    GROUP_ANCHOR_PREFIX, GROUP_ANCHOR_TAG, GROUP_SEPARATOR, HEADER_SEPARATORS,
    INSTRUCTION_MARKER,
};
use crate::utils::error::WriterError;
use log::debug;
use std::collections::{HashMap, HashSet};
use std::io::Write;

/// Entity an annotation is recorded on, by qualified name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum MemoKey {
    Global,
    Node(String),
    Edge(String, String),
}

/// Per-session trace emitter
pub struct TraceWriter<W: Write> {
    out: W,
    current_group: String,
    anchors: HashSet<String>,
    /// Last value per (entity, tag)
    last_tagged: HashMap<(MemoKey, String), String>,
    /// Last value per entity, whatever the tag; this is what the loader
    /// resolves a back-reference against
    last_value: HashMap<MemoKey, String>,
    instructions: usize,
}

impl<W: Write> TraceWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            current_group: String::new(),
            anchors: HashSet::new(),
            last_tagged: HashMap::new(),
            last_value: HashMap::new(),
            instructions: 0,
        }
    }

    /// Make `group` the namespace for following node names
    ///
    /// Emits a global annotation tagged with the group name and an
    /// `entry` annotation on the group's anchor node, which makes the
    /// group active at this point of the timeline.
    pub fn select_group(&mut self, group: &str) -> Result<(), WriterError> {
        validate_group(group)?;
        debug!("Selecting group '{}'", group);
        self.current_group = group.to_string();
        self.record_global_info("", Some(group))?;

        let anchor = format!("{}{}", GROUP_ANCHOR_PREFIX, group);
        let qualified_anchor = self.qualify(&anchor);
        if self.anchors.insert(qualified_anchor) {
            self.define_node(&anchor, "")?;
        }
        self.record_node_info("", &anchor, Some(GROUP_ANCHOR_TAG))
    }

    /// Define a node of the current group with its display content
    pub fn define_node(&mut self, node: &str, content: &str) -> Result<(), WriterError> {
        let name = self.qualified(node)?;
        check_body(content)?;
        self.write_instruction("node", &[name.as_str()], "")?;
        self.write_body(content)
    }

    /// Define an edge between two nodes of the current group
    pub fn define_edge(&mut self, src: &str, dst: &str) -> Result<(), WriterError> {
        let src = self.qualified(src)?;
        let dst = self.qualified(dst)?;
        self.write_instruction("edge", &[src.as_str(), dst.as_str()], "")
    }

    /// Define an edge between nodes of explicitly named groups
    pub fn define_cross_group_edge(
        &mut self,
        src_group: &str,
        src: &str,
        dst_group: &str,
        dst: &str,
    ) -> Result<(), WriterError> {
        validate_group(src_group)?;
        validate_group(dst_group)?;
        validate_name(src)?;
        validate_name(dst)?;
        let src = format!("{}{}{}", src_group, GROUP_SEPARATOR, src);
        let dst = format!("{}{}{}", dst_group, GROUP_SEPARATOR, dst);
        self.write_instruction("edge", &[src.as_str(), dst.as_str()], "")
    }

    pub fn record_node_info(
        &mut self,
        value: &str,
        node: &str,
        tag: Option<&str>,
    ) -> Result<(), WriterError> {
        let node = self.qualified(node)?;
        self.record(
            "nodeinfo",
            MemoKey::Node(node.clone()),
            &[node.as_str()],
            value,
            tag.unwrap_or(""),
        )
    }

    pub fn record_edge_info(
        &mut self,
        value: &str,
        src: &str,
        dst: &str,
        tag: Option<&str>,
    ) -> Result<(), WriterError> {
        let src = self.qualified(src)?;
        let dst = self.qualified(dst)?;
        self.record(
            "edgeinfo",
            MemoKey::Edge(src.clone(), dst.clone()),
            &[src.as_str(), dst.as_str()],
            value,
            tag.unwrap_or(""),
        )
    }

    pub fn record_global_info(&mut self, value: &str, tag: Option<&str>) -> Result<(), WriterError> {
        self.record("globalinfo", MemoKey::Global, &[], value, tag.unwrap_or(""))
    }

    /// Number of instructions written so far
    pub fn instruction_count(&self) -> usize {
        self.instructions
    }

    pub fn flush(&mut self) -> Result<(), WriterError> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn record(
        &mut self,
        opcode: &str,
        key: MemoKey,
        args: &[&str],
        value: &str,
        tag: &str,
    ) -> Result<(), WriterError> {
        check_body(value)?;
        let memo = (key, tag.to_string());
        let unchanged = self.last_tagged.get(&memo).is_some_and(|last| last == value)
            && self.last_value.get(&memo.0).is_some_and(|last| last == value);

        if unchanged {
            return self.write_instruction(&format!("prev{}", opcode), args, tag);
        }

        self.write_instruction(opcode, args, tag)?;
        self.write_body(value)?;
        self.last_value.insert(memo.0.clone(), value.to_string());
        self.last_tagged.insert(memo, value.to_string());
        Ok(())
    }

    fn write_instruction(
        &mut self,
        opcode: &str,
        args: &[&str],
        tag: &str,
    ) -> Result<(), WriterError> {
        if tag.contains('\n') {
            return Err(WriterError::InvalidTag {
                tag: tag.to_string(),
            });
        }
        check_carriage_return(tag)?;
        let mut header = format!("{}{}", INSTRUCTION_MARKER, opcode);
        for arg in args {
            header.push(' ');
            header.push_str(arg);
        }
        if !tag.is_empty() {
            header.push(' ');
            header.push_str(tag);
        }
        writeln!(self.out, "{}", header)?;
        self.instructions += 1;
        Ok(())
    }

    fn write_body(&mut self, body: &str) -> Result<(), WriterError> {
        writeln!(self.out, "{}", body)?;
        Ok(())
    }

    /// Prefix a local name with the current group, if one is selected
    fn qualify(&self, local: &str) -> String {
        if self.current_group.is_empty() {
            local.to_string()
        } else {
            format!("{}{}{}", self.current_group, GROUP_SEPARATOR, local)
        }
    }

    fn qualified(&self, local: &str) -> Result<String, WriterError> {
        validate_name(local)?;
        Ok(self.qualify(local))
    }
}

/// Body lines must not look like instruction headers or carry `\r`
fn check_body(body: &str) -> Result<(), WriterError> {
    check_carriage_return(body)?;
    match body.split('\n').find(|line| line.starts_with(INSTRUCTION_MARKER)) {
        Some(line) => Err(WriterError::MarkerInBody {
            line: line.to_string(),
        }),
        None => Ok(()),
    }
}

/// Names become header fields, so they must be non-empty single tokens
fn validate_name(name: &str) -> Result<(), WriterError> {
    if name.is_empty() || name.contains(HEADER_SEPARATORS) || name.contains(['\n', '\r']) {
        return Err(WriterError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Group names of explicitly qualified edges must not nest groups
fn validate_group(group: &str) -> Result<(), WriterError> {
    validate_name(group)?;
    if group.contains(GROUP_SEPARATOR) {
        return Err(WriterError::InvalidName {
            name: group.to_string(),
        });
    }
    Ok(())
}

fn check_carriage_return(text: &str) -> Result<(), WriterError> {
    if text.contains('\r') {
        return Err(WriterError::CarriageReturn {
            text: text.to_string(),
        });
    }
    Ok(())
}
