//! Loop bracket resolution.
//!
//! [`find_matching_bracket`] is the reference scan: walk away from a bracket
//! keeping a nesting depth, the match is where the depth first reaches zero.
//! [`JumpTable`] computes the same pairs for a whole program in one pass so the
//! interpreter can jump in constant time.

use crate::instructions::{HumanReadableInstruction, RawInstruction};
use core::fmt;

/// Which side of a loop was left without a partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    Open,
    Close,
}

impl fmt::Display for BracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketKind::Open => write!(f, "'['"),
            BracketKind::Close => write!(f, "']'"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unmatched {kind} at {instruction}")]
pub struct UnmatchedBracket {
    pub kind: BracketKind,
    pub instruction: HumanReadableInstruction,
}

/// Finds the partner of the bracket at `position` by scanning with a depth counter.
///
/// Scans forward for `[` and backward for `]`. Returns `None` when the scan runs
/// off either end of the sequence, or when `position` is not a bracket at all.
///
/// The interpreter jumps through [`JumpTable`] instead. This scan costs a walk
/// over the program per call and is kept as the reference the table is
/// checked against.
pub fn find_matching_bracket(
    instructions: &[HumanReadableInstruction],
    position: usize,
) -> Option<usize> {
    let (deeper, shallower, forward) = match instructions.get(position)?.raw_instruction() {
        RawInstruction::ConditionalForward => (
            RawInstruction::ConditionalForward,
            RawInstruction::ConditionalBackward,
            true,
        ),
        RawInstruction::ConditionalBackward => (
            RawInstruction::ConditionalBackward,
            RawInstruction::ConditionalForward,
            false,
        ),
        _ => return None,
    };

    let mut depth = 1usize;
    let mut index = position;
    loop {
        index = if forward {
            index + 1
        } else {
            index.checked_sub(1)?
        };
        let instruction = instructions.get(index)?.raw_instruction();
        if instruction == deeper {
            depth += 1;
        } else if instruction == shallower {
            depth -= 1;
            if depth == 0 {
                return Some(index);
            }
        }
    }
}

/// Bidirectional jump table, indexed by instruction position.
///
/// Each bracket position holds the position of its partner, every other
/// position holds `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpTable {
    matching_brackets: Vec<Option<usize>>,
}

impl JumpTable {
    /// Pairs up every bracket in `instructions`.
    ///
    /// Fails on the first `]` that closes nothing, or, once the whole sequence
    /// has been seen, on the innermost `[` that was never closed.
    pub fn new(instructions: &[HumanReadableInstruction]) -> Result<Self, UnmatchedBracket> {
        let mut matching_brackets = vec![None; instructions.len()];
        // Track the open brackets with a stack
        let mut open_brackets = Vec::new();

        for (index, hr_instruction) in instructions.iter().enumerate() {
            match hr_instruction.raw_instruction() {
                RawInstruction::ConditionalForward => open_brackets.push(index),
                RawInstruction::ConditionalBackward => {
                    let Some(open_bracket) = open_brackets.pop() else {
                        let err = UnmatchedBracket {
                            kind: BracketKind::Close,
                            instruction: *hr_instruction,
                        };
                        log::error!("{}", err);
                        return Err(err);
                    };
                    matching_brackets[open_bracket] = Some(index);
                    matching_brackets[index] = Some(open_bracket);
                }
                _ => {}
            }
        }

        if let Some(open_bracket) = open_brackets.pop() {
            let err = UnmatchedBracket {
                kind: BracketKind::Open,
                instruction: instructions[open_bracket],
            };
            log::error!("{}", err);
            return Err(err);
        }

        Ok(JumpTable { matching_brackets })
    }

    pub fn get(&self, index: usize) -> Option<usize> {
        self.matching_brackets.get(index).copied().flatten()
    }
}
