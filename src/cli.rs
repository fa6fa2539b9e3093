use std::{num::NonZeroUsize, path::PathBuf};

use clap::Parser;

/// Handle CLI arguments for bfd
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// The Brainfuck program to execute
    #[clap(name = "PROGRAM")]
    pub program: PathBuf,

    /// Specifies the number of cells in the tape.
    ///
    /// Traditionally Brainfuck interpreters use a tape of 30,000 cells.
    #[clap(short, long, default_value = "30000")]
    pub cell_count: NonZeroUsize,

    /// Print the final machine state (instruction pointer, memory pointer
    /// and non-zero cells) after execution
    #[clap(short = 's', long)]
    pub report_state: bool,
}
