//! Constant values of the Chip-8 architecture.

/// Number of general purpose registers.
pub const REGISTER_COUNT: usize = 0x10; // 16

/// The lower memory space was historically used for the interpreter itself,
/// but is now used for fonts.
pub const MEM_START: usize = 0x200; // 512
pub const MEM_SIZE: usize = 0x1000; // 4096

/// Levels of nesting allowed in the call stack.
///
/// Calls beyond this depth, or returns with no call in flight,
/// are reported as runtime faults rather than touching memory
/// outside the stack.
pub const STACK_SIZE: usize = 16;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;
pub const DISPLAY_BUFFER_SIZE: usize = DISPLAY_WIDTH * DISPLAY_HEIGHT;

/// Number of keys on the keypad (0x0-0xF)
pub const KEY_COUNT: u8 = 16;

/// Address where the builtin font glyphs are stored.
pub const FONTSET_START: usize = 0x50;

/// Each glyph is one byte wide and five bytes tall.
pub const FONTSET_HEIGHT: usize = 5;

/// Builtin glyph bitmaps for the hexadecimal digits 0-F.
///
/// Packed together without padding for historical reasons.
#[rustfmt::skip]
pub const FONTSET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

/// Type for storing the 12-bit memory addresses.
pub type Address = u16;
