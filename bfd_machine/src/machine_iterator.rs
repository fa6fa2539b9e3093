use crate::{machine::Machine, machine_error::MachineError, state::StepState};

// Facilitates step-by-step execution of a program, yielding a snapshot of the
// machine after each step. This is particularly useful for debugging.
//
// The iteration ends once the machine reports itself finished; errors are
// yielded as items so the caller can decide whether the machine is worth
// stepping further (terminal errors are not).
pub struct MachineIterator<'a> {
    machine: &'a mut Machine,
}

impl<'a> MachineIterator<'a> {
    pub fn new(machine: &'a mut Machine) -> Self {
        MachineIterator { machine }
    }
}

impl<'a> Iterator for MachineIterator<'a> {
    type Item = Result<StepState, MachineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.machine.finished() {
            return None;
        }
        Some(self.machine.step().map(|_| StepState {
            ip: self.machine.ip,
            mem_ptr: self.machine.mem_ptr,
            cell_value: self.machine.memory[self.machine.mem_ptr],
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    #[test]
    fn test_iterator_is_empty_for_an_empty_program() {
        let cell_count = NonZeroUsize::new(1).expect("non-zero");
        let mut machine = Machine::new("", cell_count, None, None);
        assert!(machine.steps().next().is_none());
    }

    #[test]
    fn test_iterator_yields_errors_without_ending() {
        let cell_count = NonZeroUsize::new(1).expect("non-zero");
        let mut machine = Machine::new(".", cell_count, None, None);
        let item = machine.steps().next().expect("machine is not finished");
        assert!(matches!(item, Err(MachineError::NoOutput { ip: 0 })));
    }
}
