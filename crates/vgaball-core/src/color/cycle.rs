// crates/vgaball-core/src/color/cycle.rs

use crate::color::hsv::{hsv_to_rgb, wrap_hue, FULL_TURN};
use crate::wire::control::Rgb;

/// Hue that walks around the color wheel at a fixed step per tick.
/// Saturation and value stay constant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HueCycle {
    hue: f32,
    step: f32,
    saturation: f32,
    value: f32,
}

impl HueCycle {
    pub fn new(hue: f32, step: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue: wrap_hue(hue),
            step,
            saturation,
            value,
        }
    }

    #[inline]
    pub fn hue(&self) -> f32 {
        self.hue
    }

    #[inline]
    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Color for the current hue.
    #[inline]
    pub fn color(&self) -> Rgb {
        hsv_to_rgb(self.hue, self.saturation, self.value)
    }

    /// Move to the next hue. Reaching 360 restarts at 0 rather than carrying
    /// the remainder over.
    pub fn advance(&mut self) {
        let next = self.hue + self.step;
        self.hue = if next >= FULL_TURN {
            0.0
        } else if next < 0.0 {
            wrap_hue(next)
        } else {
            next
        };
    }
}
