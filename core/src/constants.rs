/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 4096;

/// Addresses are 12 bits wide; anything above is masked off
pub const ADDRESS_MASK: u16 = 0x0FFF;

/// 0x200 is where programs are loaded into memory
pub const PROGRAM_START: u16 = 0x200;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Number of general purpose registers (V0..VF)
pub const REGISTER_COUNT: usize = 16;

/// Number of return addresses the stack can hold
pub const STACK_SIZE: usize = 16;

/// Number of keys on the hexadecimal keypad
pub const KEY_COUNT: usize = 16;

/// Sprites are at most 15 rows tall since the height is a single nibble
pub const MAX_SPRITE_HEIGHT: usize = 15;

/// Bytes per glyph in the sprite sheet
pub const GLYPH_SIZE: u16 = 5;

/// The delay and sound timers always count down at 60Hz
pub const TIMER_RATE_HZ: u32 = 60;

/// CPU cycles executed per timer tick; 10 gives roughly 600 instructions/second
pub const DEFAULT_CYCLES_PER_TICK: u32 = 10;

/// # Sprite Sheet
/// The built-in hexadecimal font, stored at the very start of memory.
///
/// Each glyph is 5 rows of 8 pixels where only the high nibble is used,
/// so glyph `k` lives at `5 * k`.
/// ```text
/// 0xF0 ████
/// 0x90 █  █
/// 0x90 █  █
/// 0x90 █  █
/// 0xF0 ████
/// ```
#[rustfmt::skip]
pub const SPRITE_SHEET: [u8; 80] = [
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
