// crates/vgaball-cli/src/cmd/run.rs

use anyhow::Context;
use clap::Args;
use vgaball_core::validate::validate_config;
use vgaball_core::{BallDevice, RunSummary, Session, StopToken};

use crate::cmd::args::{AnimationArgs, DeviceArgs};
use crate::io::console;
use crate::io::ioctl::IoctlDevice;

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub device: DeviceArgs,

    #[command(flatten)]
    pub anim: AnimationArgs,

    /// Stop after this many ticks (default: until Ctrl-C)
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Do not print the per-tick HSV / position lines
    #[arg(long)]
    pub quiet: bool,
}

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let cfg = args.anim.to_config();
    validate_config(&cfg)?;

    log::info!("VGA ball userspace program started");
    let device = IoctlDevice::open(&args.device.device)?;
    let mut session = Session::new(device, &cfg)?;

    let stop = StopToken::new();
    let handler = stop.clone();
    ctrlc::set_handler(move || handler.stop()).context("install Ctrl-C handler")?;

    let summary = drive(&mut session, &stop, args.ticks, !args.quiet);
    drop(session);

    log::info!(
        "VGA ball userspace program terminating ({} ticks, {} failed calls)",
        summary.ticks,
        summary.failed_calls
    );
    Ok(())
}

/// Run the session, echoing each tick to stdout. A broken stdout ends the run.
pub fn drive<D: BallDevice>(
    session: &mut Session<D>,
    stop: &StopToken,
    ticks: Option<u64>,
    echo: bool,
) -> RunSummary {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let halt = stop.clone();

    session.run(stop, ticks, |r| {
        if !echo {
            return;
        }
        if let Err(e) = console::write_tick(&mut out, r) {
            log::error!("stdout: {e}");
            halt.stop();
        }
    })
}
