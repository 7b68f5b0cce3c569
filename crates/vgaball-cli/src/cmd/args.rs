// crates/vgaball-cli/src/cmd/args.rs
//
// Flags shared by several subcommands.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, ValueEnum};
use vgaball_core::config::defaults::{normalized_preset, pixel_preset, DEFAULT_DEVICE_PATH};
use vgaball_core::AnimationConfig;

#[derive(Args, Debug)]
pub struct DeviceArgs {
    /// Device node exposed by the vga_ball driver
    #[arg(long, env = "VGA_BALL_DEVICE", default_value = DEFAULT_DEVICE_PATH)]
    pub device: PathBuf,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// 640x480 frame, radius 16, x64 device scaling, v=0.3, 10 ms
    Pixel,
    /// Unit square scaled by (170, 120), v=1.0, 20 ms
    Normalized,
}

#[derive(Args, Debug)]
pub struct AnimationArgs {
    /// Motion policy and its color/pacing defaults
    #[arg(long, value_enum, default_value_t = Preset::Pixel)]
    pub preset: Preset,

    /// Override starting hue (degrees)
    #[arg(long)]
    pub hue: Option<f32>,

    /// Override hue increment per tick (degrees)
    #[arg(long)]
    pub hue_step: Option<f32>,

    /// Override saturation (0..=1)
    #[arg(long)]
    pub saturation: Option<f32>,

    /// Override value / brightness (0..=1)
    #[arg(long)]
    pub value: Option<f32>,

    /// Override pause between ticks, in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,
}

impl AnimationArgs {
    /// Preset with the explicit overrides applied. Validation happens when
    /// the animator is built.
    pub fn to_config(&self) -> AnimationConfig {
        let mut cfg = match self.preset {
            Preset::Pixel => pixel_preset(),
            Preset::Normalized => normalized_preset(),
        };
        if let Some(h) = self.hue {
            cfg.color.hue = h;
        }
        if let Some(step) = self.hue_step {
            cfg.color.hue_step = step;
        }
        if let Some(s) = self.saturation {
            cfg.color.saturation = s;
        }
        if let Some(v) = self.value {
            cfg.color.value = v;
        }
        if let Some(ms) = self.interval_ms {
            cfg.interval = Duration::from_millis(ms);
        }
        cfg
    }
}
