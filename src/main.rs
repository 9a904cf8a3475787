mod cli;

use bft_interp::VMBuilder;
use bft_types::Program;
use clap::Parser;
use cli::Cli;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;
type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// Entry point for the Brainfuck interpreter program.
///
/// Reads the program from the file given as the first argument and runs it,
/// feeding it the optional second argument as input. Whatever the program
/// prints goes to stdout exactly as produced, with no trailing newline added.
///
/// # Errors
///
/// A file that cannot be read prints a message on stderr and exits with
/// status 1. A runtime fault prints the output produced up to the fault, then
/// the fault message on stderr, and also exits with status 1.
///
/// # Examples
///
/// ```bash
/// cargo run -- hello.bf
/// cargo run -- cat.bf "some input"
/// ```
fn main() -> Result<ExitCode> {
    env_logger::init();

    let args = Cli::parse();

    let program = match File::open(&args.program)
        .map(BufReader::new)
        .and_then(Program::from_reader)
    {
        Ok(program) => program,
        Err(err) => {
            eprintln!("Error reading file '{}': {}", args.program.display(), err);
            return Ok(ExitCode::FAILURE);
        }
    };
    log::info!(
        "Loaded {} instructions from {}",
        program.len(),
        args.program.display()
    );
    let input = args.input.unwrap_or_default();

    let mut vm = VMBuilder::new()
        .set_cell_count(args.cell_count)
        .set_step_limit(args.step_limit)
        .build();

    let result = vm.interpret(&program, &input);

    let mut stdout = io::stdout().lock();
    stdout.write_all(vm.output().as_bytes())?;
    stdout.flush()?;

    match result {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            eprintln!("Runtime error: {}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}
