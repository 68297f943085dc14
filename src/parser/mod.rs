//! Trace instruction parsing.
//!
//! This module handles:
//! - Splitting raw trace text into header + body instructions
//! - Tokenizing headers into opcode, arguments and tag
//! - Rejecting malformed instructions

pub mod instruction;

// Re-export main types
pub use instruction::{
    parse_header, parse_instructions, Instruction, Instructions, Opcode, RawInstruction,
};
