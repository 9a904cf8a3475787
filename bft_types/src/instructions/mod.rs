use core::fmt;

/// One of the eight Brainfuck instructions.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum RawInstruction {
    /// `>`
    IncrementPointer,
    /// `<`
    DecrementPointer,
    /// `+`
    IncrementByte,
    /// `-`
    DecrementByte,
    /// `.`
    OutputByte,
    /// `,`
    InputByte,
    /// `[`
    ConditionalForward,
    /// `]`
    ConditionalBackward,
}

impl RawInstruction {
    /// Maps a source character onto an instruction, `None` for anything outside the alphabet.
    pub fn from_char(c: char) -> Option<RawInstruction> {
        match c {
            '>' => Some(RawInstruction::IncrementPointer),
            '<' => Some(RawInstruction::DecrementPointer),
            '+' => Some(RawInstruction::IncrementByte),
            '-' => Some(RawInstruction::DecrementByte),
            '.' => Some(RawInstruction::OutputByte),
            ',' => Some(RawInstruction::InputByte),
            '[' => Some(RawInstruction::ConditionalForward),
            ']' => Some(RawInstruction::ConditionalBackward),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            RawInstruction::IncrementPointer => '>',
            RawInstruction::DecrementPointer => '<',
            RawInstruction::IncrementByte => '+',
            RawInstruction::DecrementByte => '-',
            RawInstruction::OutputByte => '.',
            RawInstruction::InputByte => ',',
            RawInstruction::ConditionalForward => '[',
            RawInstruction::ConditionalBackward => ']',
        }
    }
}

impl fmt::Display for RawInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RawInstruction::IncrementPointer => "Increment Pointer",
            RawInstruction::DecrementPointer => "Decrement Pointer",
            RawInstruction::IncrementByte => "Increment Byte",
            RawInstruction::DecrementByte => "Decrement Byte",
            RawInstruction::OutputByte => "Output Byte",
            RawInstruction::InputByte => "Input Byte",
            RawInstruction::ConditionalForward => "Conditional Forward",
            RawInstruction::ConditionalBackward => "Conditional Backward",
        };
        write!(f, "{} ({})", name, self.to_char())
    }
}

/// An instruction together with where it came from in the source text.
///
/// `line` and `column` are 1-based positions in the raw source, `index` is the
/// position within the filtered instruction sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HumanReadableInstruction {
    instruction: RawInstruction,
    line: usize,
    column: usize,
    index: usize,
}

impl HumanReadableInstruction {
    pub(crate) fn new(
        instruction: RawInstruction,
        line: usize,
        column: usize,
        index: usize,
    ) -> Self {
        HumanReadableInstruction {
            instruction,
            line: line + 1,
            column: column + 1,
            index,
        }
    }

    pub fn raw_instruction(&self) -> RawInstruction {
        self.instruction
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for HumanReadableInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.line, self.column, self.instruction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_readable_instruction_display() {
        let instruction = HumanReadableInstruction::new(RawInstruction::IncrementByte, 0, 0, 0);
        assert_eq!(format!("{}", instruction), "1:1 Increment Byte (+)");
    }

    #[test]
    fn test_from_char_accepts_only_the_alphabet() {
        for c in "><+-.,[]".chars() {
            let instruction = RawInstruction::from_char(c).expect("alphabet symbol");
            assert_eq!(instruction.to_char(), c);
        }
        for c in "abc 123\n\t#!{}()".chars() {
            assert_eq!(RawInstruction::from_char(c), None, "{:?} should be ignored", c);
        }
    }
}
