// crates/vgaball-cli/src/cmd/sim.rs

use std::time::Duration;

use clap::{Args, ValueEnum};
use vgaball_core::{MemoryDevice, Request, Session, StopToken};

use crate::cmd::args::AnimationArgs;
use crate::cmd::run::drive;
use crate::io::console;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailRequest {
    WriteBackground,
    ReadBackground,
    WritePosition,
    ReadPosition,
}

impl From<FailRequest> for Request {
    fn from(f: FailRequest) -> Self {
        match f {
            FailRequest::WriteBackground => Request::WriteBackground,
            FailRequest::ReadBackground => Request::ReadBackground,
            FailRequest::WritePosition => Request::WritePosition,
            FailRequest::ReadPosition => Request::ReadPosition,
        }
    }
}

#[derive(Args, Debug)]
pub struct SimArgs {
    #[command(flatten)]
    pub anim: AnimationArgs,

    /// Ticks to simulate
    #[arg(long, default_value_t = 100)]
    pub ticks: u64,

    /// Make the simulated driver reject this request (repeatable)
    #[arg(long, value_enum)]
    pub fail: Vec<FailRequest>,

    /// Print run statistics to stderr
    #[arg(long)]
    pub stats: bool,

    /// Do not print the per-tick HSV / position lines
    #[arg(long)]
    pub quiet: bool,
}

pub fn run(args: SimArgs) -> anyhow::Result<()> {
    let mut cfg = args.anim.to_config();
    // Unpaced unless asked for.
    if args.anim.interval_ms.is_none() {
        cfg.interval = Duration::ZERO;
    }

    let mut device = MemoryDevice::new();
    for f in &args.fail {
        device.fail_on((*f).into());
    }

    let mut session = Session::new(device, &cfg)?;
    let summary = drive(&mut session, &StopToken::new(), Some(args.ticks), !args.quiet);

    if args.stats {
        let dev = session.device();
        eprintln!("--- sim ---");
        eprintln!("motion          = {}", session.animator().motion().policy_name());
        eprintln!("ticks           = {}", summary.ticks);
        eprintln!("bounces         = {}", summary.bounces);
        eprintln!("failed_calls    = {}", summary.failed_calls);
        eprintln!("requests        = {}", dev.requests().len());
        eprintln!("final_hue       = {:.2}", session.animator().hue_cycle().hue());
        eprintln!("background      = {}", console::background_line(dev.background()));
        eprintln!("position        = {}", console::position_line(dev.position()));
    }

    Ok(())
}
