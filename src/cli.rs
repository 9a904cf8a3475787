use std::{num::NonZeroUsize, path::PathBuf};

use clap::Parser;

/// Handle CLI arguments for bft
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// The Brainfuck program to execute
    #[clap(name = "PROGRAM")]
    pub program: PathBuf,

    /// Literal text the program reads with `,`
    #[clap(name = "INPUT")]
    pub input: Option<String>,

    /// Specifies the number of cells in the tape.
    ///
    /// Traditionally Brainfuck interpreters use a tape of 30,000 cells.
    #[arg(short, long)]
    pub cell_count: Option<NonZeroUsize>,

    /// Stop with an error after executing this many instructions
    #[arg(short = 'l', long)]
    pub step_limit: Option<usize>,
}
