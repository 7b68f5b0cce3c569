// crates/vgaball-core/src/device.rs
//
// Device channel: one blocking request per operation, no retries.

use std::io;

use crate::error::{Result, VgaError};
use crate::wire::control::{ControlBlock, Position, Rgb};
use crate::wire::request::{Direction, Request, Resource};

/// A channel to the vga_ball driver.
///
/// Implementors provide the raw exchange; the four typed operations
/// marshal through `ControlBlock` and are shared by every backend.
pub trait BallDevice {
    /// Issue `request` with `block` as the argument. For reads the driver
    /// fills `block`; for writes it consumes it.
    fn exchange(&mut self, request: Request, block: &mut ControlBlock) -> io::Result<()>;

    fn read_background(&mut self) -> Result<Rgb> {
        let mut block = ControlBlock::zeroed();
        issue(self, Request::ReadBackground, &mut block)?;
        Ok(block.background())
    }

    fn write_background(&mut self, color: Rgb) -> Result<()> {
        let mut block = ControlBlock::from_background(color);
        issue(self, Request::WriteBackground, &mut block)
    }

    fn read_position(&mut self) -> Result<Position> {
        let mut block = ControlBlock::zeroed();
        issue(self, Request::ReadPosition, &mut block)?;
        Ok(block.position())
    }

    fn write_position(&mut self, position: Position) -> Result<()> {
        let mut block = ControlBlock::from_position(position);
        issue(self, Request::WritePosition, &mut block)
    }
}

fn issue<D: BallDevice + ?Sized>(
    device: &mut D,
    request: Request,
    block: &mut ControlBlock,
) -> Result<()> {
    device
        .exchange(request, block)
        .map_err(|source| VgaError::Device { request, source })
}

impl<D: BallDevice + ?Sized> BallDevice for &mut D {
    fn exchange(&mut self, request: Request, block: &mut ControlBlock) -> io::Result<()> {
        (**self).exchange(request, block)
    }
}

/// In-process stand-in for the driver: one register block per resource.
///
/// Records every request it sees and can be told to reject specific ones.
#[derive(Debug, Default)]
pub struct MemoryDevice {
    background: ControlBlock,
    position: ControlBlock,
    requests: Vec<Request>,
    failing: Vec<Request>,
}

impl MemoryDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every future `request` fail with EIO.
    pub fn fail_on(&mut self, request: Request) {
        if !self.failing.contains(&request) {
            self.failing.push(request);
        }
    }

    pub fn clear_failures(&mut self) {
        self.failing.clear();
    }

    /// Requests seen so far, in issue order (failed ones included).
    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn background(&self) -> Rgb {
        self.background.background()
    }

    pub fn position(&self) -> Position {
        self.position.position()
    }

    fn register(&mut self, resource: Resource) -> &mut ControlBlock {
        match resource {
            Resource::Background => &mut self.background,
            Resource::Position => &mut self.position,
        }
    }
}

impl BallDevice for MemoryDevice {
    fn exchange(&mut self, request: Request, block: &mut ControlBlock) -> io::Result<()> {
        self.requests.push(request);
        if self.failing.contains(&request) {
            return Err(io::Error::from_raw_os_error(5)); // EIO
        }

        let reg = self.register(request.resource());
        match request.direction() {
            Direction::Write => *reg = *block,
            Direction::Read => *block = *reg,
        }
        Ok(())
    }
}
