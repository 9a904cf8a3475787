//! Provides a builder for creating instances of the BrainfuckVM struct.

use crate::{vm::BrainfuckVM, DEFAULT_CELL_COUNT};
use std::num::NonZeroUsize;

/// Main builder object. Creates a BrainfuckVM according to various configs.
///
/// # Examples
///
/// Default configuration: 30,000 cells and no step limit
///
/// ```rust
/// use bft_interp::vm_builder::VMBuilder;
///
/// let program_string = "++++++++++[>+++++++>++++++++++>+++>+<<<<-]>++.>+.+++++++..+++.>++.<<+++++++++++++++.>.+++.------.--------.";
///
/// let mut vm = VMBuilder::new().build();
/// assert_eq!(vm.execute(program_string, "").unwrap(), "Hello World");
/// ```
///
/// Setting more interesting parameters
///
/// ```rust
/// use bft_interp::vm_builder::VMBuilder;
/// use bft_interp::VMError;
/// # use core::num::NonZeroUsize;
///
/// let mut vm = VMBuilder::new()
///     .set_cell_count(NonZeroUsize::new(1111))
///     .set_step_limit(Some(100))
///     .build();
///
/// assert_eq!(vm.tape().len(), 1111);
/// assert!(matches!(
///     vm.execute("+[]", ""),
///     Err(VMError::StepLimitExceeded { limit: 100 })
/// ));
/// ```
#[derive(Debug, Default, Clone)]
pub struct VMBuilder {
    cell_count: Option<NonZeroUsize>,
    step_limit: Option<usize>,
}

impl VMBuilder {
    /// Creates a new instance of `VMBuilder`.
    pub fn new() -> Self {
        VMBuilder {
            cell_count: None,
            step_limit: None,
        }
    }

    /// Determines the number of cells (memory size) the VM should initialize with.
    pub fn set_cell_count(mut self, cell_count: Option<NonZeroUsize>) -> Self {
        self.cell_count = cell_count;
        self
    }

    /// Caps the number of instructions a single run may execute.
    ///
    /// `None` lets programs run for as long as they like, including forever.
    pub fn set_step_limit(mut self, step_limit: Option<usize>) -> Self {
        self.step_limit = step_limit;
        self
    }

    /// Builds and returns a `BrainfuckVM` instance based on the configured options.
    pub fn build(self) -> BrainfuckVM {
        // If no cell count provided, default to 30,000
        let cell_count = self.cell_count.unwrap_or_else(|| {
            log::info!("Using default cell count {}", DEFAULT_CELL_COUNT);
            DEFAULT_CELL_COUNT
        });

        if self.step_limit.is_none() {
            log::info!("No step limit set");
        }

        BrainfuckVM::new(cell_count, self.step_limit)
    }
}
