//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use crate::timeline::EventKind;
use thiserror::Error;

/// Errors that can occur while splitting and tokenizing instructions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: unknown instruction in '{header}'")]
    UnknownOpcode { line: usize, header: String },

    #[error("line {line}: invalid number of arguments in '{header}' (expected {expected}, found {found})")]
    ArgumentCount {
        line: usize,
        header: String,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: empty argument in '{header}'")]
    MissingArgument { line: usize, header: String },

    #[error("line {line}: '{header}' does not take a body, found:\n{body}")]
    UnexpectedBody {
        line: usize,
        header: String,
        body: String,
    },

    #[error("line {line}: text before the first instruction: '{text}'")]
    OrphanBody { line: usize, text: String },
}

/// Errors raised by the graph index
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {name} is already defined with content\n{existing}\nfound redefinition\n{attempted}")]
    Redefinition {
        name: String,
        existing: String,
        attempted: String,
    },
}

/// Errors raised while appending to the event log
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    #[error("back-reference to {key} which has no earlier annotation")]
    DanglingBackReference { key: EventKind },
}

/// Errors that abort loading a trace
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read trace: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("line {line}: '{header}': {source}")]
    Graph {
        line: usize,
        header: String,
        #[source]
        source: GraphError,
    },

    #[error("line {line}: '{header}': {source}")]
    Timeline {
        line: usize,
        header: String,
        #[source]
        source: TimelineError,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while emitting a trace
#[derive(Error, Debug)]
pub enum WriterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("name '{name}' is empty or contains whitespace")]
    InvalidName { name: String },

    #[error("tag '{tag}' spans several lines")]
    InvalidTag { tag: String },

    #[error("body line starts with the instruction marker: '{line}'")]
    MarkerInBody { line: String },

    #[error("'{text}' contains a carriage return, which the line reader strips")]
    CarriageReturn { text: String },
}
