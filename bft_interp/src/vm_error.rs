use bft_types::{HumanReadableInstruction, UnmatchedBracket};

/// Faults that end a run. None of them are recoverable inside the run and
/// none are transient, so the VM never retries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VMError {
    /// `>` moved the data pointer past the last cell.
    #[error("pointer too high: {position} at {instruction}")]
    PointerTooHigh {
        position: usize,
        instruction: HumanReadableInstruction,
    },

    /// `<` moved the data pointer below cell 0.
    #[error("pointer too low at {instruction}")]
    PointerTooLow { instruction: HumanReadableInstruction },

    /// A loop bracket without a partner anywhere in the program.
    #[error(transparent)]
    UnmatchedBracket(#[from] UnmatchedBracket),

    /// The configured step budget ran out before the program finished.
    #[error("step limit exceeded ({limit})")]
    StepLimitExceeded { limit: usize },
}
