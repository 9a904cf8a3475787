//! # Brainfuck Execution Engine
//!
//! Runs a loaded program against a fixed-size tape of byte cells, reading
//! characters from an input string and collecting the characters it prints.
//!
//! Each run owns its own tape, pointers and buffers. There is no shared or
//! global interpreter state, so separate VMs may run on separate threads.

use std::num::NonZeroUsize;

pub mod vm;
pub mod vm_builder;
pub mod vm_error;

pub use vm::BrainfuckVM;
pub use vm_builder::VMBuilder;
pub use vm_error::VMError;

/// Traditionally Brainfuck interpreters use a tape of 30,000 cells.
pub const DEFAULT_CELL_COUNT: NonZeroUsize = match NonZeroUsize::new(30_000) {
    Some(count) => count,
    None => panic!("default cell count must be non-zero"),
};

/// Runs `source` once on a fresh VM of `cell_count` cells and returns what it printed.
///
/// ```
/// use bft_interp::{execute, DEFAULT_CELL_COUNT};
///
/// assert_eq!(execute(",[.,]", "abc", DEFAULT_CELL_COUNT).unwrap(), "abc");
/// ```
pub fn execute(source: &str, input: &str, cell_count: NonZeroUsize) -> Result<String, VMError> {
    VMBuilder::new()
        .set_cell_count(Some(cell_count))
        .build()
        .execute(source, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_execute_uses_fresh_state() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(execute("+++++[>+++++++++++++<-]>.", "", DEFAULT_CELL_COUNT)?, "A");
        assert_eq!(execute("+.", "", DEFAULT_CELL_COUNT)?, "\u{1}");
        Ok(())
    }

    #[test]
    fn test_execute_single_cell_fault() {
        let one = NonZeroUsize::MIN;
        assert!(matches!(
            execute("+>", "", one),
            Err(VMError::PointerTooHigh { position: 1, .. })
        ));
        assert!(matches!(
            execute("]", "", one),
            Err(VMError::UnmatchedBracket(_))
        ));
    }

    #[test]
    fn test_independent_vms_on_threads() {
        let handles: Vec<_> = (0..4u8)
            .map(|n| {
                thread::spawn(move || {
                    let program = format!("{}.", "+".repeat(usize::from(b'a' + n)));
                    execute(&program, "", DEFAULT_CELL_COUNT)
                })
            })
            .collect();

        let outputs: Vec<String> = handles
            .into_iter()
            .map(|handle| handle.join().expect("thread panicked").expect("run failed"))
            .collect();
        assert_eq!(outputs, vec!["a", "b", "c", "d"]);
    }
}
