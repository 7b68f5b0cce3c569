// crates/vgaball-core/src/config/defaults.rs
//
// The two animation presets the board has shipped with.

use std::time::Duration;

use crate::config::{AnimationConfig, ColorParams, MotionConfig};
use crate::motion::normalized::NormalizedParams;
use crate::motion::pixel::PixelParams;

pub const DEFAULT_DEVICE_PATH: &str = "/dev/vga_ball";
pub const HUE_STEP_DEG: f32 = 0.5;

/// 640x480 frame, 16px radius, one pixel per tick, x64 to fill u16.
/// Dim background (v = 0.3), 10 ms pacing.
pub fn pixel_preset() -> AnimationConfig {
    AnimationConfig {
        color: ColorParams {
            hue: 0.0,
            hue_step: HUE_STEP_DEG,
            saturation: 1.0,
            value: 0.3,
        },
        motion: MotionConfig::Pixel(PixelParams {
            width: 640,
            height: 480,
            radius: 16,
            start: (20, 20),
            velocity: (1, 1),
            shift: 6,
        }),
        interval: Duration::from_millis(10),
    }
}

/// Unit square scaled by (170, 120), 0.01 per tick.
/// Full-brightness background, 20 ms pacing.
pub fn normalized_preset() -> AnimationConfig {
    AnimationConfig {
        color: ColorParams {
            hue: 0.0,
            hue_step: HUE_STEP_DEG,
            saturation: 1.0,
            value: 1.0,
        },
        motion: MotionConfig::Normalized(NormalizedParams {
            start: (0.2, 0.0),
            velocity: (0.01, 0.01),
            scale: (170.0, 120.0),
        }),
        interval: Duration::from_millis(20),
    }
}
