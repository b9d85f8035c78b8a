pub mod constants;
mod cpu;
mod error;
mod keypad;
mod opcode;
mod vm;

/// Version of this implementation, as published.
pub const IMPL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Borrowed view of the 64x32 monochrome display buffer, for a
/// rendering collaborator to sample between cycles.
pub type OchoDisplayBuffer<'a> = &'a [bool; constants::DISPLAY_BUFFER_SIZE];

pub mod prelude {
    pub use super::{
        error::{OchoError, OchoResult, RuntimeError},
        keypad::KeyCode,
        opcode::{Instruction, Opcode},
        vm::{Flow, OchoConf, OchoVm},
    };
    pub use crate::OchoDisplayBuffer;
}
