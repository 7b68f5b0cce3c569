// crates/vgaball-core/src/wire/control.rs

use std::fmt;

/// Background color as the driver stores it (`vga_ball_color_t`).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Ball position in device units (`vga_ball_position_t`).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// The `vga_ball_arg_t` union handed to the driver on every request.
///
/// There is no tag: the request code decides which view is meaningful.
/// Every constructor starts from `zeroed()`, so all four bytes are always
/// initialised and reading either view is defined.
#[repr(C)]
#[derive(Copy, Clone)]
pub union ControlBlock {
    background: Rgb,
    position: Position,
}

impl ControlBlock {
    pub const SIZE: usize = std::mem::size_of::<ControlBlock>();

    #[inline]
    pub const fn zeroed() -> Self {
        ControlBlock {
            position: Position { x: 0, y: 0 },
        }
    }

    #[inline]
    pub fn from_background(color: Rgb) -> Self {
        let mut block = Self::zeroed();
        block.background = color;
        block
    }

    #[inline]
    pub fn from_position(position: Position) -> Self {
        let mut block = Self::zeroed();
        block.position = position;
        block
    }

    #[inline]
    pub fn background(&self) -> Rgb {
        // SAFETY: every byte is initialised (see `zeroed`) and any bit pattern is a valid Rgb.
        unsafe { self.background }
    }

    #[inline]
    pub fn position(&self) -> Position {
        // SAFETY: as above; Position is two plain u16 fields.
        unsafe { self.position }
    }

    /// Raw bytes in native order, as the driver sees them.
    pub fn to_bytes(&self) -> [u8; 4] {
        let p = self.position();
        let x = p.x.to_ne_bytes();
        let y = p.y.to_ne_bytes();
        [x[0], x[1], y[0], y[1]]
    }
}

impl Default for ControlBlock {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl PartialEq for ControlBlock {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for ControlBlock {}

impl fmt::Debug for ControlBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.to_bytes();
        write!(f, "ControlBlock([{:02x} {:02x} {:02x} {:02x}])", b[0], b[1], b[2], b[3])
    }
}
