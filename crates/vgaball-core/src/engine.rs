// crates/vgaball-core/src/engine.rs

use crate::color::cycle::HueCycle;
use crate::config::{AnimationConfig, MotionConfig};
use crate::error::Result;
use crate::motion::{Bounce, Motion, NormalizedMotion, PixelMotion};
use crate::validate::validate_config;
use crate::wire::control::{Position, Rgb};

/// Values produced by one animation tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Hue the color was computed from (before this tick's advance).
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
    pub color: Rgb,
    pub position: Position,
    pub bounce: Bounce,
}

/// Animation state: hue cycle plus ball motion. Pure, no I/O.
pub struct Animator {
    hue: HueCycle,
    motion: Motion,
    ticks: u64,
}

impl Animator {
    pub fn new(cfg: &AnimationConfig) -> Result<Self> {
        validate_config(cfg)?;

        let c = &cfg.color;
        let motion = match cfg.motion {
            MotionConfig::Pixel(p) => Motion::Pixel(PixelMotion::new(p)),
            MotionConfig::Normalized(n) => Motion::Normalized(NormalizedMotion::new(n)),
        };

        Ok(Self {
            hue: HueCycle::new(c.hue, c.hue_step, c.saturation, c.value),
            motion,
            ticks: 0,
        })
    }

    pub fn hue_cycle(&self) -> &HueCycle {
        &self.hue
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    /// Ticks taken since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance one tick.
    pub fn tick(&mut self) -> Frame {
        let hue = self.hue.hue();
        let color = self.hue.color();
        self.hue.advance();

        let step = self.motion.step();
        self.ticks += 1;

        Frame {
            hue,
            saturation: self.hue.saturation(),
            value: self.hue.value(),
            color,
            position: step.position,
            bounce: step.bounce,
        }
    }
}
