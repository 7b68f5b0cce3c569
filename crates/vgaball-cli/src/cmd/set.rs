// crates/vgaball-cli/src/cmd/set.rs
//
// One-shot writes, handy when bringing up the driver.

use clap::Args;
use vgaball_core::{BallDevice, Position, Rgb};

use crate::cmd::args::DeviceArgs;
use crate::io::console::{self, parse_rgb};
use crate::io::ioctl::IoctlDevice;

#[derive(Args, Debug)]
pub struct SetBackgroundArgs {
    #[command(flatten)]
    pub device: DeviceArgs,

    /// Color as "r,g,b" (decimal, 0..=255)
    #[arg(long, value_parser = parse_rgb)]
    pub rgb: Rgb,
}

#[derive(Args, Debug)]
pub struct SetPositionArgs {
    #[command(flatten)]
    pub device: DeviceArgs,

    #[arg(long)]
    pub x: u16,

    #[arg(long)]
    pub y: u16,
}

pub fn run_background(args: SetBackgroundArgs) -> anyhow::Result<()> {
    let mut dev = IoctlDevice::open(&args.device.device)?;
    dev.write_background(args.rgb)?;
    log::info!(
        "{}: background = {}",
        dev.path().display(),
        console::background_line(args.rgb)
    );
    Ok(())
}

pub fn run_position(args: SetPositionArgs) -> anyhow::Result<()> {
    let mut dev = IoctlDevice::open(&args.device.device)?;
    let pos = Position::new(args.x, args.y);
    dev.write_position(pos)?;
    log::info!("{}: {}", dev.path().display(), console::position_line(pos));
    Ok(())
}
