// crates/vgaball-core/src/motion/pixel.rs

use crate::motion::{reflect_axis, Bounce, Step};
use crate::wire::control::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelParams {
    pub width: i32,
    pub height: i32,
    /// Clearance kept from every edge.
    pub radius: i32,
    pub start: (i32, i32),
    pub velocity: (i32, i32),
    /// Left shift spreading frame coordinates across the u16 channel.
    pub shift: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelMotion {
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
    params: PixelParams,
}

impl PixelMotion {
    pub fn new(params: PixelParams) -> Self {
        Self {
            x: params.start.0,
            y: params.start.1,
            dx: params.velocity.0,
            dy: params.velocity.1,
            params,
        }
    }

    #[inline]
    pub fn xy(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    #[inline]
    pub fn velocity(&self) -> (i32, i32) {
        (self.dx, self.dy)
    }

    pub fn step(&mut self) -> Step {
        let p = &self.params;
        self.x += self.dx;
        self.y += self.dy;

        let bounce = Bounce {
            x: reflect_axis(&mut self.x, &mut self.dx, p.radius, p.width - p.radius),
            y: reflect_axis(&mut self.y, &mut self.dy, p.radius, p.height - p.radius),
        };

        Step {
            position: self.device_position(),
            bounce,
        }
    }

    pub fn device_position(&self) -> Position {
        Position::new(
            to_device(self.x, self.params.shift),
            to_device(self.y, self.params.shift),
        )
    }
}

/// `pos << shift`, saturated into u16.
#[inline]
pub fn to_device(pos: i32, shift: u32) -> u16 {
    let wide = (pos.max(0) as u64) << shift.min(32);
    wide.min(u16::MAX as u64) as u16
}
