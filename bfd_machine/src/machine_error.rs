use core::fmt;
use std::io;

// Everything that can go wrong inside a single step. Nothing is retried
// internally; every error is handed straight back to the caller, who decides
// what to do with the machine afterwards.
#[derive(Debug)]
pub enum MachineError {
    // The instruction pointer was negative on entry to a step. Normal
    // execution never produces this; it models state corrupted from outside.
    CorruptedState { ip: isize },
    // A step was requested on a machine whose instruction pointer is already
    // past the end of the program. Machine state is left untouched.
    AlreadyFinished,
    // An input operation was reached but no input handle was configured.
    // The instruction pointer stays on the offending instruction.
    NoInput { ip: usize },
    // As above, for an output operation with no output handle.
    NoOutput { ip: usize },
    // The underlying read or write failed. The instruction pointer has
    // already been advanced past the instruction, so the next step resumes
    // after the failed I/O rather than repeating it.
    Io { ip: usize, source: io::Error },
    // A '[' has no matching ']' before the end of the program.
    UnmatchedOpenLoop { ip: usize },
    // A ']' has no matching '[' before the start of the program.
    UnmatchedCloseLoop { ip: usize },
}

impl MachineError {
    /// Whether this error also reports the machine as finished: no further
    /// step can make progress from the state that produced it.
    ///
    /// `NoInput`/`NoOutput` are not terminal (the caller may attach a handle
    /// and step again), and after `Io` the machine may or may not be finished
    /// depending on where the pointer landed; ask the machine itself.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            MachineError::CorruptedState { .. }
                | MachineError::AlreadyFinished
                | MachineError::UnmatchedOpenLoop { .. }
                | MachineError::UnmatchedCloseLoop { .. }
        )
    }
}

impl fmt::Display for MachineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MachineError::CorruptedState { ip } => {
                write!(f, "corrupted state: negative instruction pointer {}", ip)
            }
            MachineError::AlreadyFinished => {
                write!(f, "step requested but the machine is already finished")
            }
            MachineError::NoInput { ip } => {
                write!(f, "no input defined on input operation at {}", ip)
            }
            MachineError::NoOutput { ip } => {
                write!(f, "no output defined on output operation at {}", ip)
            }
            MachineError::Io { ip, source } => {
                write!(f, "I/O error at {}: {}", ip, source)
            }
            MachineError::UnmatchedOpenLoop { ip } => {
                write!(f, "loop opened at {} is never closed", ip)
            }
            MachineError::UnmatchedCloseLoop { ip } => {
                write!(f, "no matching opening loop instruction for {}", ip)
            }
        }
    }
}

impl std::error::Error for MachineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MachineError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unmatched_open_loop() {
        let err = MachineError::UnmatchedOpenLoop { ip: 3 };
        assert_eq!(format!("{}", err), "loop opened at 3 is never closed");
        assert!(err.is_terminal());
    }

    #[test]
    fn test_io_error_exposes_source() {
        let err = MachineError::Io {
            ip: 0,
            source: io::Error::new(io::ErrorKind::BrokenPipe, "pipe gone"),
        };
        assert!(!err.is_terminal());
        assert!(std::error::Error::source(&err).is_some());
    }
}
