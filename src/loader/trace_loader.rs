//! Single-pass trace loading.
//!
//! Reads instructions in order and dispatches them to the graph index
//! and the event log. The model is only handed out once every
//! instruction has been applied.

use super::trace::Trace;
use crate::graph::GraphIndex;
use crate::parser::{parse_header, Instruction, Instructions, Opcode};
use crate::timeline::{EventKind, EventLog};
use crate::utils::config::IN_MEMORY_SOURCE;
use crate::utils::error::LoadError;
use log::{debug, info, warn};
use std::path::Path;

/// Builds a `Trace` from instructions
#[derive(Debug, Default)]
pub struct TraceLoader {
    graph: GraphIndex,
    timeline: EventLog,
    applied: usize,
}

impl TraceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a trace held in memory
    ///
    /// **Public** - main entry point for loading
    ///
    /// # Errors
    /// * `LoadError::Parse` - malformed instruction
    /// * `LoadError::Graph` - node content defined twice
    /// * `LoadError::Timeline` - `prev*` instruction with nothing to refer to
    pub fn load_str(text: &str) -> Result<Trace, LoadError> {
        Self::load_named(text, IN_MEMORY_SOURCE)
    }

    /// Read and load a trace file
    ///
    /// **Public** - used by the CLI commands
    pub fn load_file(path: impl AsRef<Path>) -> Result<Trace, LoadError> {
        let path = path.as_ref();
        info!("Reading trace file: {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::load_named(&text, &path.display().to_string())
    }

    fn load_named(text: &str, source: &str) -> Result<Trace, LoadError> {
        let mut loader = Self::new();
        for raw in Instructions::new(text) {
            loader.apply(parse_header(raw?)?)?;
        }
        Ok(loader.finish(source))
    }

    /// Apply one tokenized instruction
    ///
    /// The instruction must come from `parse_header`, which guarantees
    /// `args.len() == opcode.arity()`.
    pub fn apply(&mut self, instruction: Instruction) -> Result<(), LoadError> {
        let Instruction {
            line,
            header,
            opcode,
            args,
            tag,
            body,
        } = instruction;

        match opcode {
            Opcode::Node => {
                self.graph
                    .define_content(&args[0], &body)
                    .map_err(|source| LoadError::Graph {
                        line,
                        header,
                        source,
                    })?;
            }
            Opcode::Edge => {
                if !self.graph.add_edge(&args[0], &args[1]) {
                    debug!("line {}: duplicate edge {} -> {} ignored", line, args[0], args[1]);
                }
            }
            Opcode::NodeInfo | Opcode::EdgeInfo | Opcode::GlobalInfo => {
                let kind = self.resolve_kind(opcode, &args);
                self.timeline.append_with_value(kind, tag, body);
            }
            Opcode::PrevNodeInfo | Opcode::PrevEdgeInfo | Opcode::PrevGlobalInfo => {
                let kind = self.resolve_kind(opcode, &args);
                self.timeline
                    .append_with_back_reference(kind, tag)
                    .map_err(|source| LoadError::Timeline {
                        line,
                        header,
                        source,
                    })?;
            }
        }

        self.applied += 1;
        Ok(())
    }

    /// Resolve the entities an info instruction refers to
    ///
    /// **Private** - ids are created lazily
    fn resolve_kind(&mut self, opcode: Opcode, args: &[String]) -> EventKind {
        match opcode {
            Opcode::NodeInfo | Opcode::PrevNodeInfo => EventKind::NodeInfo {
                node: self.graph.resolve(&args[0]),
            },
            Opcode::EdgeInfo | Opcode::PrevEdgeInfo => EventKind::EdgeInfo {
                src: self.graph.resolve(&args[0]),
                dst: self.graph.resolve(&args[1]),
            },
            _ => EventKind::Global,
        }
    }

    /// Finish loading and hand out the model
    pub fn finish(self, source: &str) -> Trace {
        let undefined = self
            .graph
            .nodes()
            .filter(|node| node.content.is_none())
            .count();
        if undefined > 0 {
            warn!("{} node(s) are referenced but never defined", undefined);
        }

        info!(
            "Loaded {} instructions: {} nodes, {} edges, {} events",
            self.applied,
            self.graph.node_count(),
            self.graph.edge_count(),
            self.timeline.len()
        );

        Trace::new(source.to_string(), self.graph, self.timeline)
    }
}
