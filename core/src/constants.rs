use std::time::Duration;

/// Total addressable memory.
pub const MEMORY_SIZE: usize = 4096;

/// Program images are loaded here; execution also begins here.
pub const PROGRAM_START: u16 = 0x200;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Maximum call-stack nesting before a call faults.
pub const STACK_DEPTH: usize = 16;

pub const KEY_COUNT: usize = 16;

/// Each font glyph is a 5-byte bitmap.
pub const GLYPH_HEIGHT: u16 = 5;

/// Both timers count down at 60 Hz of wall-clock time.
pub const TIMER_TICK: Duration = Duration::from_micros(16_667);

/// Default CPU clock in instructions per second.
pub const DEFAULT_CYCLE_HZ: u32 = 500;

/// Bitmaps for the hexadecimal digits 0..F, resident at address 0x000.
///
/// Each glyph is 8 pixels wide (only the high nibble is ever set) and
/// [`GLYPH_HEIGHT`] rows tall.
pub const FONT: [u8; 80] = [
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
