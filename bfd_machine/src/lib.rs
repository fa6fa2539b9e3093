//! # Step-Debuggable Brainfuck Machine
//!
//! A Brainfuck execution engine built around a single [`Machine`] that can be
//! driven one instruction at a time. The machine's program text, instruction
//! pointer, memory tape and memory pointer are all public, so a caller can
//! inspect or alter them between steps; this is an execution core for
//! debuggers rather than a batch-only evaluator.
//!
//! Input and output are capability handles supplied at construction; either
//! may be absent, and a missing handle only surfaces as an error when the
//! program reaches the corresponding operation.
//!
//! ```
//! use bfd_machine::Machine;
//! use std::num::NonZeroUsize;
//!
//! let cell_count = NonZeroUsize::new(100).expect("cell count cannot be zero");
//! let mut machine = Machine::new("+[+<]", cell_count, None, None);
//!
//! machine.step().expect("'+' steps cleanly");
//! // The caller may patch state between steps.
//! machine.memory[machine.mem_ptr] = 0;
//! machine.run().expect("loop body is skipped");
//! assert!(machine.finished());
//! ```

// The machine itself: construction, step, run.
pub mod machine;

// Everything a step can fail with.
pub mod machine_error;

// Step-by-step iteration over a running machine.
pub mod machine_iterator;

// Copyable per-step state snapshots.
pub mod state;

pub use machine::Machine;
pub use machine_error::MachineError;
pub use machine_iterator::MachineIterator;
pub use state::StepState;
