// crates/vgaball-core/src/motion/normalized.rs

use crate::motion::{reflect_axis, Bounce, Step};
use crate::wire::control::Position;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedParams {
    pub start: (f32, f32),
    pub velocity: (f32, f32),
    /// Device units per 1.0 on each axis.
    pub scale: (f32, f32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedMotion {
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
    scale: (f32, f32),
}

impl NormalizedMotion {
    pub fn new(params: NormalizedParams) -> Self {
        Self {
            x: params.start.0,
            y: params.start.1,
            dx: params.velocity.0,
            dy: params.velocity.1,
            scale: params.scale,
        }
    }

    #[inline]
    pub fn xy(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    #[inline]
    pub fn velocity(&self) -> (f32, f32) {
        (self.dx, self.dy)
    }

    pub fn step(&mut self) -> Step {
        self.x += self.dx;
        self.y += self.dy;

        let bounce = Bounce {
            x: reflect_axis(&mut self.x, &mut self.dx, 0.0, 1.0),
            y: reflect_axis(&mut self.y, &mut self.dy, 0.0, 1.0),
        };

        Step {
            position: self.device_position(),
            bounce,
        }
    }

    pub fn device_position(&self) -> Position {
        Position::new(
            to_device(self.x, self.scale.0),
            to_device(self.y, self.scale.1),
        )
    }
}

/// `pos * scale` truncated; `as` saturates negatives to 0 and large values to u16::MAX.
#[inline]
pub fn to_device(pos: f32, scale: f32) -> u16 {
    (pos * scale) as u16
}
