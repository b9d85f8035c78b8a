//! Result and errors.
use std::fmt::{self, Display, Formatter};
use std::io;

pub type OchoResult<T> = std::result::Result<T, OchoError>;

#[derive(Debug)]
pub enum OchoError {
    /// VM fault raised during the interpreter loop.
    Runtime(RuntimeError),
    /// Attempt to load a ROM image that can't fit in memory.
    LargeProgram,
    /// ROM image could not be read.
    Io(io::Error),
    Fmt(fmt::Error),
}

impl Display for OchoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Runtime(err) => write!(f, "runtime error: {}", err),
            Self::LargeProgram => write!(f, "program too large for VM memory"),
            Self::Io(err) => write!(f, "{}", err),
            Self::Fmt(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for OchoError {}

impl From<RuntimeError> for OchoError {
    fn from(err: RuntimeError) -> Self {
        OchoError::Runtime(err)
    }
}

impl From<io::Error> for OchoError {
    fn from(err: io::Error) -> Self {
        OchoError::Io(err)
    }
}

impl From<fmt::Error> for OchoError {
    fn from(err: fmt::Error) -> Self {
        OchoError::Fmt(err)
    }
}

/// Faults the machine can hit while executing a program.
///
/// Well-formed programs never raise these. A fault sets the trap flag,
/// so the machine stays halted once one is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeError {
    /// Subroutine call beyond the maximum nesting depth.
    StackOverflow,
    /// Return with no subroutine call in flight.
    StackUnderflow,
    /// Memory access through the index register fell outside addressable RAM.
    AddressOutOfBounds(u16),
    /// Instruction fetch past the end of addressable RAM.
    PcOutOfBounds(u16),
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::StackOverflow => write!(f, "call stack overflow"),
            Self::StackUnderflow => write!(f, "call stack underflow"),
            Self::AddressOutOfBounds(addr) => {
                write!(f, "memory access out of bounds: 0x{:04X}", addr)
            }
            Self::PcOutOfBounds(addr) => {
                write!(f, "instruction fetch out of bounds: 0x{:04X}", addr)
            }
        }
    }
}

impl std::error::Error for RuntimeError {}
