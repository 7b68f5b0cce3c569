use crate::config::{AnimationConfig, MotionConfig};
use crate::error::{Result, VgaError};
use crate::motion::normalized::NormalizedParams;
use crate::motion::pixel::PixelParams;

pub fn validate_config(c: &AnimationConfig) -> Result<()> {
    let color = &c.color;
    if !(0.0..=1.0).contains(&color.saturation) {
        return Err(VgaError::Validation("saturation must be within 0..=1".into()));
    }
    if !(0.0..=1.0).contains(&color.value) {
        return Err(VgaError::Validation("value must be within 0..=1".into()));
    }
    if !color.hue.is_finite() || !color.hue_step.is_finite() {
        return Err(VgaError::Validation("hue and hue step must be finite".into()));
    }

    match &c.motion {
        MotionConfig::Pixel(p) => validate_pixel(p),
        MotionConfig::Normalized(n) => validate_normalized(n),
    }
}

fn validate_pixel(p: &PixelParams) -> Result<()> {
    if p.radius < 0 {
        return Err(VgaError::Validation("radius must be >= 0".into()));
    }
    // Need room to move between the two reflection lines.
    let span = 2 * i64::from(p.radius);
    if i64::from(p.width) <= span || i64::from(p.height) <= span {
        return Err(VgaError::Validation(
            "frame must be larger than twice the radius".into(),
        ));
    }
    let (x, y) = p.start;
    if x < 0 || x >= p.width || y < 0 || y >= p.height {
        return Err(VgaError::Validation("start position must lie inside the frame".into()));
    }
    let (vx, vy) = p.velocity;
    if vx.unsigned_abs() >= p.width.unsigned_abs() || vy.unsigned_abs() >= p.height.unsigned_abs() {
        return Err(VgaError::Validation(
            "velocity must be smaller than the frame on each axis".into(),
        ));
    }
    if p.shift > 16 {
        return Err(VgaError::Validation("shift must be <= 16".into()));
    }
    // Largest coordinate, shifted, must still fit the 16-bit channel.
    let max_extent = p.width.max(p.height) as u64 - 1;
    if (max_extent << p.shift) > u16::MAX as u64 {
        return Err(VgaError::Validation(format!(
            "frame {}x{} << {} overflows 16-bit position",
            p.width, p.height, p.shift
        )));
    }
    Ok(())
}

fn validate_normalized(n: &NormalizedParams) -> Result<()> {
    let (x, y) = n.start;
    if !(0.0..=1.0).contains(&x) || !(0.0..=1.0).contains(&y) {
        return Err(VgaError::Validation("start position must lie within 0..=1".into()));
    }
    let (vx, vy) = n.velocity;
    if !vx.is_finite() || !vy.is_finite() {
        return Err(VgaError::Validation("velocity must be finite".into()));
    }
    for s in [n.scale.0, n.scale.1] {
        if !s.is_finite() || !(0.0..=u16::MAX as f32).contains(&s) {
            return Err(VgaError::Validation("scale must be within 0..=65535".into()));
        }
    }
    Ok(())
}
