use clap::Args;
use vgaball_core::BallDevice;

use crate::cmd::args::DeviceArgs;
use crate::io::console;
use crate::io::ioctl::IoctlDevice;

#[derive(Args, Debug)]
pub struct ReadArgs {
    #[command(flatten)]
    pub device: DeviceArgs,
}

pub fn run(args: ReadArgs) -> anyhow::Result<()> {
    let mut dev = IoctlDevice::open(&args.device.device)?;

    let bg = dev.read_background()?;
    println!("{}", console::background_line(bg));

    let pos = dev.read_position()?;
    println!("{}", console::position_line(pos));

    Ok(())
}
