// crates/vgaball-core/src/color/hsv.rs
//
// HSV -> 8-bit RGB, hexagon/sector method.

use crate::wire::control::Rgb;

pub const FULL_TURN: f32 = 360.0;
const SECTOR_DEG: f32 = 60.0;

/// Wrap any hue into [0, 360). Non-finite input maps to 0.
#[inline]
pub fn wrap_hue(hue: f32) -> f32 {
    if !hue.is_finite() {
        return 0.0;
    }
    let h = hue.rem_euclid(FULL_TURN);
    // rem_euclid can round a tiny negative up to exactly 360.0
    if h >= FULL_TURN {
        0.0
    } else {
        h
    }
}

/// Convert hue (degrees), saturation and value (both 0..=1) to RGB.
///
/// Channels are scaled by 255 and truncated, so v=0.3 gives 76, not 77.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Rgb {
    let h = wrap_hue(hue);
    let (s, v) = (saturation, value);

    let scaled = h / SECTOR_DEG;
    let sector = scaled as u32; // floor: h is non-negative
    let f = scaled - sector as f32;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::new(to_channel(r), to_channel(g), to_channel(b))
}

#[inline]
fn to_channel(x: f32) -> u8 {
    (x * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_handles_both_directions() {
        assert_eq!(wrap_hue(360.25), 0.25);
        assert_eq!(wrap_hue(-0.25), 359.75);
        assert_eq!(wrap_hue(720.0), 0.0);
        assert_eq!(wrap_hue(f32::NAN), 0.0);
        assert_eq!(wrap_hue(f32::INFINITY), 0.0);
    }

    #[test]
    fn sector_boundary_uses_floor() {
        // 120 exactly belongs to sector 2: (p, v, t) with f = 0 -> t = p
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Rgb::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Rgb::new(0, 0, 255));
    }
}
