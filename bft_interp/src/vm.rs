use crate::vm_error::VMError;
use bft_types::{
    BracketKind, HumanReadableInstruction, JumpTable, Program, RawInstruction, UnmatchedBracket,
};
use std::num::NonZeroUsize;

// Represents the VM capable of interpreting Brainfuck programs. It owns the execution environment:
// the tape (memory), the data and instruction pointers, the input cursor and the output buffer.
// All of it is reset at the start of every run, so one VM can execute any number of programs.
#[derive(Debug, Clone)]
pub struct BrainfuckVM {
    tape: Vec<u8>,
    head: usize,
    instruction_index: usize,
    input: Vec<char>,
    input_cursor: usize,
    output: String,
    instructions_processed: usize,
    cell_count: NonZeroUsize,
    step_limit: Option<usize>,
}

impl BrainfuckVM {
    // Constructs a new VM instance with specified settings
    pub fn new(cell_count: NonZeroUsize, step_limit: Option<usize>) -> Self {
        BrainfuckVM {
            tape: vec![0; cell_count.get()],
            head: 0,
            instruction_index: 0,
            input: Vec::new(),
            input_cursor: 0,
            output: String::new(),
            instructions_processed: 0,
            cell_count,
            step_limit,
        }
    }

    pub fn cell_count(&self) -> NonZeroUsize {
        self.cell_count
    }

    pub fn step_limit(&self) -> Option<usize> {
        self.step_limit
    }

    pub fn tape(&self) -> &[u8] {
        &self.tape
    }

    pub fn head(&self) -> usize {
        self.head
    }

    /// Output of the most recent run. After a fault this holds everything
    /// written before the faulting instruction.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn instructions_processed(&self) -> usize {
        self.instructions_processed
    }

    /// Loads `source` and runs it to completion against `input`.
    ///
    /// ```
    /// use bft_interp::VMBuilder;
    ///
    /// let mut vm = VMBuilder::new().build();
    /// assert_eq!(vm.execute(",[.,]", "abc").unwrap(), "abc");
    /// ```
    pub fn execute(&mut self, source: &str, input: &str) -> Result<String, VMError> {
        let program = Program::new(source);
        self.interpret(&program, input)
    }

    // Runs the entire Brainfuck program to completion or until an error occurs
    pub fn interpret(&mut self, program: &Program, input: &str) -> Result<String, VMError> {
        self.reset(input);

        // Brackets are paired once up front, so an unmatched one faults before anything runs
        let jump_table = JumpTable::new(program.instructions())?;

        log::debug!(
            "Running {} instructions on {} cells",
            program.len(),
            self.tape.len()
        );
        while self.instruction_index < program.len() {
            self.check_step_limit()?;
            self.process_instruction(program, &jump_table)?;
        }
        log::debug!(
            "Program finished after {} instructions",
            self.instructions_processed
        );

        Ok(self.output.clone())
    }

    fn reset(&mut self, input: &str) {
        self.tape.clear();
        self.tape.resize(self.cell_count.get(), 0);
        self.head = 0;
        self.instruction_index = 0;
        self.input = input.chars().collect();
        self.input_cursor = 0;
        self.output.clear();
        self.instructions_processed = 0;
    }

    fn check_step_limit(&self) -> Result<(), VMError> {
        match self.step_limit {
            Some(limit) if self.instructions_processed >= limit => {
                log::error!("Step limit of {} reached", limit);
                Err(VMError::StepLimitExceeded { limit })
            }
            _ => Ok(()),
        }
    }

    fn process_instruction(
        &mut self,
        program: &Program,
        jump_table: &JumpTable,
    ) -> Result<(), VMError> {
        let hr_instruction = program.instructions()[self.instruction_index];
        log::trace!("Processing instruction: {}", hr_instruction);
        match hr_instruction.raw_instruction() {
            RawInstruction::IncrementPointer => self.move_head_right(&hr_instruction)?,
            RawInstruction::DecrementPointer => self.move_head_left(&hr_instruction)?,
            RawInstruction::IncrementByte => {
                let cell = self.current_cell();
                *cell = cell.wrapping_add(1);
            }
            RawInstruction::DecrementByte => {
                let cell = self.current_cell();
                *cell = cell.wrapping_sub(1);
            }
            RawInstruction::OutputByte => self.write_value(),
            RawInstruction::InputByte => self.read_value(),
            RawInstruction::ConditionalForward => {
                if *self.current_cell() == 0 {
                    self.jump(jump_table, &hr_instruction, BracketKind::Open)?;
                }
            }
            RawInstruction::ConditionalBackward => {
                if *self.current_cell() != 0 {
                    self.jump(jump_table, &hr_instruction, BracketKind::Close)?;
                }
            }
        }

        // A taken jump lands on the partner bracket, so this steps past it
        self.instruction_index += 1;
        self.instructions_processed += 1;

        Ok(())
    }

    fn jump(
        &mut self,
        jump_table: &JumpTable,
        hr_instruction: &HumanReadableInstruction,
        kind: BracketKind,
    ) -> Result<(), VMError> {
        let target = jump_table.get(hr_instruction.index()).ok_or_else(|| {
            VMError::UnmatchedBracket(UnmatchedBracket {
                kind,
                instruction: *hr_instruction,
            })
        })?;
        log::debug!("Jumping from {} to {}", hr_instruction.index(), target);
        self.instruction_index = target;
        Ok(())
    }

    fn current_cell(&mut self) -> &mut u8 {
        // The head is kept inside the tape by the two move functions
        &mut self.tape[self.head]
    }

    fn move_head_left(
        &mut self,
        hr_instruction: &HumanReadableInstruction,
    ) -> Result<(), VMError> {
        if self.head == 0 {
            let err = VMError::PointerTooLow {
                instruction: *hr_instruction,
            };
            log::error!("{}", err);
            return Err(err);
        }
        self.head -= 1;
        Ok(())
    }

    fn move_head_right(
        &mut self,
        hr_instruction: &HumanReadableInstruction,
    ) -> Result<(), VMError> {
        if self.head + 1 >= self.tape.len() {
            let err = VMError::PointerTooHigh {
                position: self.head + 1,
                instruction: *hr_instruction,
            };
            log::error!("{}", err);
            return Err(err);
        }
        self.head += 1;
        Ok(())
    }

    // Stores the low byte of the next input character, or 0 once the input is used up
    fn read_value(&mut self) {
        let value = match self.input.get(self.input_cursor) {
            Some(&c) => {
                self.input_cursor += 1;
                (u32::from(c) & 0xff) as u8
            }
            None => 0,
        };
        *self.current_cell() = value;
    }

    fn write_value(&mut self) {
        let value = *self.current_cell();
        self.output.push(char::from(value));
    }
}
