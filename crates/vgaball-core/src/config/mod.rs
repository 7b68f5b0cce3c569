// crates/vgaball-core/src/config/mod.rs

pub mod defaults;

use std::time::Duration;

use crate::motion::normalized::NormalizedParams;
use crate::motion::pixel::PixelParams;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorParams {
    /// Starting hue in degrees.
    pub hue: f32,
    /// Degrees added per tick.
    pub hue_step: f32,
    pub saturation: f32,
    pub value: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotionConfig {
    Pixel(PixelParams),
    Normalized(NormalizedParams),
}

/// Everything the animation loop needs besides the device handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    pub color: ColorParams,
    pub motion: MotionConfig,
    /// Fixed pause between ticks. Zero disables pacing.
    pub interval: Duration,
}
