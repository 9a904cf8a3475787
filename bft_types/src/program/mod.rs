use crate::instructions::{HumanReadableInstruction, RawInstruction};
use core::fmt;
use std::io::{self, Read};

/// A Brainfuck program: the dense sequence of instructions left after every
/// character outside `><+-.,[]` has been stripped from the source.
///
/// Loading never fails. Text without a single instruction yields an empty
/// program, which terminates immediately.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    instructions: Vec<HumanReadableInstruction>,
}

impl Program {
    /// Loads a program from source text.
    ///
    /// ```
    /// use bft_types::program::Program;
    ///
    /// let program = Program::new("+ add one\n[-] then clear it");
    /// assert_eq!(program.len(), 4);
    /// assert_eq!(program.to_string(), "+[-]");
    /// ```
    pub fn new(source: &str) -> Self {
        let mut instructions = Vec::new();

        for (line_idx, line) in source.lines().enumerate() {
            for (col_idx, c) in line.chars().enumerate() {
                if let Some(instruction) = RawInstruction::from_char(c) {
                    let index = instructions.len();
                    instructions.push(HumanReadableInstruction::new(
                        instruction,
                        line_idx,
                        col_idx,
                        index,
                    ));
                }
            }
        }

        log::debug!("Loaded {} instructions", instructions.len());
        Program { instructions }
    }

    /// Loads a program from a reader.
    ///
    /// The source is treated as bytes: anything that is not valid UTF-8 is
    /// dropped along with every other non-instruction character. Only a failure
    /// of the reader itself is an error.
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self::new(&String::from_utf8_lossy(&data)))
    }

    pub fn instructions(&self) -> &[HumanReadableInstruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

// Renders the filtered program, so loading the rendering gives the same sequence back
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instruction in &self.instructions {
            write!(f, "{}", instruction.raw_instruction().to_char())?;
        }
        Ok(())
    }
}
