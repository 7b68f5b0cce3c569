// crates/vgaball-core/src/wire/request.rs

use std::fmt;

use crate::wire::control::ControlBlock;

/// ioctl type byte used by the vga_ball driver.
pub const VGA_BALL_MAGIC: u8 = b'q';

/// Size field encoded into every request code.
/// The driver header passes `vga_ball_arg_t *` to `_IOR`/`_IOW`, so this is
/// the pointer width, not `size_of::<ControlBlock>()`.
pub const ARG_SIZE: usize = std::mem::size_of::<*mut ControlBlock>();

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// driver -> process
    Read,
    /// process -> driver
    Write,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Background,
    Position,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Request {
    WriteBackground,
    ReadBackground,
    WritePosition,
    ReadPosition,
}

impl Request {
    pub const ALL: [Request; 4] = [
        Request::WriteBackground,
        Request::ReadBackground,
        Request::WritePosition,
        Request::ReadPosition,
    ];

    /// ioctl sequence number (`nr`) within the `VGA_BALL_MAGIC` space.
    #[inline]
    pub const fn number(self) -> u8 {
        match self {
            Request::WriteBackground => 1,
            Request::ReadBackground => 2,
            Request::WritePosition => 3,
            Request::ReadPosition => 4,
        }
    }

    #[inline]
    pub const fn direction(self) -> Direction {
        match self {
            Request::WriteBackground | Request::WritePosition => Direction::Write,
            Request::ReadBackground | Request::ReadPosition => Direction::Read,
        }
    }

    #[inline]
    pub const fn resource(self) -> Resource {
        match self {
            Request::WriteBackground | Request::ReadBackground => Resource::Background,
            Request::WritePosition | Request::ReadPosition => Resource::Position,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Request::WriteBackground => "VGA_BALL_WRITE_BACKGROUND",
            Request::ReadBackground => "VGA_BALL_READ_BACKGROUND",
            Request::WritePosition => "VGA_BALL_WRITE_POSITION",
            Request::ReadPosition => "VGA_BALL_READ_POSITION",
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
