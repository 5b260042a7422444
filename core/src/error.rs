use thiserror::Error;

/// Fatal execution faults.
///
/// None of these are recoverable; the driver is expected to dump the
/// machine state and terminate the run. Every variant carries the context
/// needed to diagnose the offending program location.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    #[error("illegal instruction {word:#06X} at {pc:#05X}")]
    IllegalInstruction { pc: u16, word: u16 },

    #[error("call stack overflow at {pc:#05X}")]
    StackOverflow { pc: u16 },

    #[error("return with an empty call stack at {pc:#05X}")]
    StackUnderflow { pc: u16 },

    #[error("memory access out of range at {addr:#05X}")]
    AddressOutOfRange { addr: u16 },

    #[error("program image is {size} bytes but only {max} fit")]
    ProgramTooLarge { size: usize, max: usize },
}
