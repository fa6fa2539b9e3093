mod cli;

use bfd_machine::Machine;
use clap::Parser;
use cli::Cli;
use std::error::Error;
use std::{fs, io};

type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// Entry point for the Brainfuck step-debugger's batch runner.
///
/// Loads a program from the file given on the command line, wires a machine
/// to stdin and stdout, and runs it to completion or first error. With
/// `--report-state` the final machine state is printed afterwards, on the
/// error path too, so a failing program can still be inspected.
fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let program = fs::read_to_string(&cli.program)?;
    log::info!(
        "loaded {} bytes of program text from {}",
        program.len(),
        cli.program.display()
    );

    let mut machine = Machine::new(
        program,
        cli.cell_count,
        Some(Box::new(io::stdin())),
        Some(Box::new(io::stdout())),
    );

    let outcome = machine.run();
    if cli.report_state {
        report_state(&machine);
    }
    outcome?;

    Ok(())
}

// Final state dump for debugging: pointers plus every non-zero cell as
// [index, value] pairs.
fn report_state(machine: &Machine) {
    let non_zero_cells = machine
        .memory
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value != 0)
        .map(|(index, value)| format!("[{}, {}]", index, value))
        .collect::<Vec<String>>()
        .join(",");

    println!("ip: {}", machine.ip);
    println!("mem_ptr: {}", machine.mem_ptr);
    println!("non-zero cells: {}", non_zero_cells);
}
