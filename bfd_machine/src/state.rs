use core::fmt;

// A copyable snapshot of the interesting parts of the machine after one step,
// useful for debugging or state inspection without holding a borrow of the
// machine itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepState {
    /// Instruction pointer after the step.
    pub ip: isize,
    /// Memory pointer after the step.
    pub mem_ptr: usize,
    /// Value of the cell under the memory pointer after the step.
    pub cell_value: u8,
}

impl fmt::Display for StepState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ip: {}, mem_ptr: {}, cell value: {}",
            self.ip, self.mem_ptr, self.cell_value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_state_display() {
        let state = StepState {
            ip: 4,
            mem_ptr: 1,
            cell_value: 255,
        };
        assert_eq!(format!("{}", state), "ip: 4, mem_ptr: 1, cell value: 255");
    }
}
