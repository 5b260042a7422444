pub use error::Fault;
pub use frame::Frame;
pub use instruction::{AluOp, Directive, Instruction};
pub use machine::{Machine, Step};
pub use opcode::Opcode;

pub mod constants;
mod error;
mod frame;
mod instruction;
mod keypad;
mod machine;
mod memory;
mod opcode;
mod timers;
