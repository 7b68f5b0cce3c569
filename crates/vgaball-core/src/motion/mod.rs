// crates/vgaball-core/src/motion/mod.rs
//
// Bouncing-ball motion. Two policies share one reflection rule:
// step, and if the new position touches a bound, negate the velocity and
// apply it once more in the same tick. No clamping; a large velocity may
// overshoot a bound by one step.

pub mod normalized;
pub mod pixel;

use std::ops::{AddAssign, Neg};

use crate::wire::control::Position;

pub use normalized::NormalizedMotion;
pub use pixel::PixelMotion;

/// Per-axis bounce flags for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounce {
    pub x: bool,
    pub y: bool,
}

impl Bounce {
    #[inline]
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

/// Result of advancing the motion one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Position in device units, ready for `WRITE_POSITION`.
    pub position: Position,
    pub bounce: Bounce,
}

/// Reflect `pos` off `[lo, hi]` (inclusive). Returns true on contact.
#[inline]
pub fn reflect_axis<T>(pos: &mut T, vel: &mut T, lo: T, hi: T) -> bool
where
    T: Copy + PartialOrd + Neg<Output = T> + AddAssign,
{
    if *pos >= hi || *pos <= lo {
        *vel = -*vel;
        *pos += *vel;
        true
    } else {
        false
    }
}

/// Selectable motion policy.
#[derive(Clone, Debug, PartialEq)]
pub enum Motion {
    /// Integer frame coordinates with radius clearance, shifted into u16 range.
    Pixel(PixelMotion),
    /// [0, 1] per axis, scaled by per-axis multipliers.
    Normalized(NormalizedMotion),
}

impl Motion {
    pub fn step(&mut self) -> Step {
        match self {
            Motion::Pixel(m) => m.step(),
            Motion::Normalized(m) => m.step(),
        }
    }

    pub fn policy_name(&self) -> &'static str {
        match self {
            Motion::Pixel(_) => "pixel",
            Motion::Normalized(_) => "normalized",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect_applies_negated_velocity_once() {
        let (mut p, mut v) = (16i32, -1i32);
        assert!(reflect_axis(&mut p, &mut v, 16, 624));
        assert_eq!((p, v), (17, 1));

        let (mut p, mut v) = (30i32, -1i32);
        assert!(!reflect_axis(&mut p, &mut v, 16, 624));
        assert_eq!((p, v), (30, -1));
    }

    #[test]
    fn reflect_does_not_clamp_overshoot() {
        let (mut p, mut v) = (1.05f32, 0.1f32);
        assert!(reflect_axis(&mut p, &mut v, 0.0, 1.0));
        assert!(p > 0.9 && p < 1.0);
        assert_eq!(v, -0.1);

        // far past the bound: one reflection, still outside
        let (mut p, mut v) = (1.5f32, 0.1f32);
        assert!(reflect_axis(&mut p, &mut v, 0.0, 1.0));
        assert!(p > 1.0);
    }
}
