//! # Brainfuck Program Representation
//!
//! Turns raw source text into the dense instruction sequence the interpreter
//! runs, and resolves which loop brackets belong together.
//!
//! For more detailed examples and usage instructions, please refer to the documentation
//! of each module.

// The eight instructions and their source positions.
pub mod instructions;

// Loading programs from strings or readers.
pub mod program;

// Matching up loop brackets.
pub mod brackets;

pub use brackets::{BracketKind, JumpTable, UnmatchedBracket};
pub use instructions::{HumanReadableInstruction, RawInstruction};
pub use program::Program;
