use crate::machine_error::MachineError;
use crate::machine_iterator::MachineIterator;
use std::{
    io::{self, Read, Write},
    num::NonZeroUsize,
};

// A Brainfuck machine capable of being driven one instruction at a time. It
// owns the program text, the instruction pointer, the memory tape and the
// memory pointer, all of which are public so a debugging caller can inspect
// and alter them between steps.
pub struct Machine {
    /// The program text, indexed by byte position. Only the eight operator
    /// characters have defined behavior; anything else is a no-op.
    pub program: String,
    /// Instruction pointer. `ip >= program.len()` is the terminal state; a
    /// negative value is corruption injected from outside and is reported as
    /// such on the next step.
    pub ip: isize,
    /// The memory tape. Fixed length, every cell wraps modulo 256.
    pub memory: Vec<u8>,
    /// Memory pointer. Movement wraps modulo `memory.len()`, so the tape is
    /// logically circular and this index is always in range.
    pub mem_ptr: usize,
    input: Option<Box<dyn Read>>,
    output: Option<Box<dyn Write>>,
}

impl Machine {
    /// Creates a machine over `program` with a zero-filled memory tape of
    /// `cell_count` cells, the instruction and memory pointers on their
    /// first positions.
    ///
    /// `input` and `output` may be `None` if the program never uses the
    /// corresponding operation; construction itself cannot fail, a missing
    /// handle only surfaces when the operation is reached.
    ///
    /// # Examples
    ///
    /// ```
    /// use bfd_machine::Machine;
    /// use std::num::NonZeroUsize;
    ///
    /// let cell_count = NonZeroUsize::new(100).expect("cell count cannot be zero");
    /// let mut machine = Machine::new(
    ///     "++++++++[>++++++++<-]>+.",
    ///     cell_count,
    ///     None,
    ///     Some(Box::new(std::io::stdout())),
    /// );
    /// machine.run().expect("program is well formed");
    /// // Prints "A".
    /// ```
    pub fn new(
        program: impl Into<String>,
        cell_count: NonZeroUsize,
        input: Option<Box<dyn Read>>,
        output: Option<Box<dyn Write>>,
    ) -> Self {
        Machine {
            program: program.into(),
            ip: 0,
            memory: vec![0; cell_count.get()],
            mem_ptr: 0,
            input,
            output,
        }
    }

    /// True once the instruction pointer has moved past the end of the
    /// program. An empty program is finished from the start.
    pub fn finished(&self) -> bool {
        self.ip >= self.program.len() as isize
    }

    /// Executes exactly one instruction.
    ///
    /// Returns `Ok(finished)` on success. On failure the instruction pointer
    /// is left where the error variant documents it: unchanged for
    /// `CorruptedState`, `AlreadyFinished` and the unmatched-loop errors,
    /// frozen on the instruction for `NoInput`/`NoOutput`, and already
    /// advanced past the instruction for `Io` so that the next step resumes
    /// after the failed read or write. Whether a failed machine counts as
    /// finished is `err.is_terminal() || machine.finished()`.
    pub fn step(&mut self) -> Result<bool, MachineError> {
        if self.ip < 0 {
            return Err(MachineError::CorruptedState { ip: self.ip });
        }
        if self.finished() {
            return Err(MachineError::AlreadyFinished);
        }

        let index = self.ip as usize;
        match self.program.as_bytes()[index] {
            b'+' => self.memory[self.mem_ptr] = self.memory[self.mem_ptr].wrapping_add(1),
            b'-' => self.memory[self.mem_ptr] = self.memory[self.mem_ptr].wrapping_sub(1),
            b'>' => self.mem_ptr = (self.mem_ptr + 1) % self.memory.len(),
            b'<' => self.mem_ptr = (self.mem_ptr + self.memory.len() - 1) % self.memory.len(),
            b'.' => {
                let output = self
                    .output
                    .as_mut()
                    .ok_or(MachineError::NoOutput { ip: index })?;
                if let Err(source) = output.write_all(&[self.memory[self.mem_ptr]]) {
                    // Move past the instruction first so the caller resumes
                    // on the next one instead of repeating the failed write.
                    self.ip += 1;
                    return Err(MachineError::Io { ip: index, source });
                }
            }
            b',' => {
                let input = self
                    .input
                    .as_mut()
                    .ok_or(MachineError::NoInput { ip: index })?;
                let mut buffer = [0u8; 1];
                match input.read_exact(&mut buffer) {
                    Ok(()) => self.memory[self.mem_ptr] = buffer[0],
                    // End of stream is not an error: the cell reads as zero.
                    Err(source) if source.kind() == io::ErrorKind::UnexpectedEof => {
                        self.memory[self.mem_ptr] = 0;
                    }
                    Err(source) => {
                        self.ip += 1;
                        return Err(MachineError::Io { ip: index, source });
                    }
                }
            }
            b'[' => {
                if self.memory[self.mem_ptr] == 0 {
                    let target = self.matching_close(index)?;
                    log::debug!("jumping forward from {} to {}", index, target);
                    self.ip = target as isize;
                }
            }
            b']' => {
                if self.memory[self.mem_ptr] != 0 {
                    let target = self.matching_open(index)?;
                    log::debug!("jumping backward from {} to {}", index, target);
                    self.ip = target as isize;
                }
            }
            // Any other character is a comment.
            _ => {}
        }

        // Exactly one increment on every non-error path. Jumps land on the
        // partner bracket, so this moves past it into or out of the loop.
        self.ip += 1;
        Ok(self.finished())
    }

    /// Runs the program until it finishes or a step fails, returning the
    /// first error unchanged. All semantics live in [`Machine::step`]; a
    /// machine that is already finished on entry (including one built from
    /// an empty program) returns `Ok(())`.
    pub fn run(&mut self) -> Result<(), MachineError> {
        while !self.finished() {
            self.step()?;
        }
        Ok(())
    }

    /// Returns an iterator that executes one step per `next()` call and
    /// yields a [`crate::state::StepState`] snapshot after each, ending once
    /// the machine is finished.
    pub fn steps(&mut self) -> MachineIterator<'_> {
        MachineIterator::new(self)
    }

    // Position of the ']' matching the '[' at `open`. Nesting-aware linear
    // scan: depth starts at 1 and each further bracket adjusts it until it
    // reaches 0 on the partner.
    fn matching_close(&self, open: usize) -> Result<usize, MachineError> {
        let code = self.program.as_bytes();
        let mut depth = 1;
        let mut position = open;
        loop {
            position += 1;
            if position == code.len() {
                return Err(MachineError::UnmatchedOpenLoop { ip: open });
            }
            match code[position] {
                b'[' => depth += 1,
                b']' => depth -= 1,
                _ => {}
            }
            if depth == 0 {
                return Ok(position);
            }
        }
    }

    // Mirror image of matching_close, scanning backward from the ']' at
    // `close` toward the start of the program.
    fn matching_open(&self, close: usize) -> Result<usize, MachineError> {
        let code = self.program.as_bytes();
        let mut depth = 1;
        let mut position = close;
        loop {
            if position == 0 {
                return Err(MachineError::UnmatchedCloseLoop { ip: close });
            }
            position -= 1;
            match code[position] {
                b'[' => depth -= 1,
                b']' => depth += 1,
                _ => {}
            }
            if depth == 0 {
                return Ok(position);
            }
        }
    }
}
