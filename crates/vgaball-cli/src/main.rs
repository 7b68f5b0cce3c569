// crates/vgaball-cli/src/main.rs

use clap::{ArgAction, Parser, Subcommand};

mod cmd;
mod io;
mod logging;

#[derive(Parser)]
#[command(name = "vgaball-cli")]
#[command(about = "Userspace driver for the vga_ball display peripheral", long_about = None)]
pub struct Cli {
    /// More log output on stderr (-v debug, -vv trace). RUST_LOG also works.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Animate the ball and background on the device until Ctrl-C
    Run(cmd::run::RunArgs),

    /// Run the same animation against an in-memory device
    Sim(cmd::sim::SimArgs),

    /// Read and print the current background color and ball position
    Read(cmd::read::ReadArgs),

    /// Write a single background color
    SetBackground(cmd::set::SetBackgroundArgs),

    /// Write a single ball position (device units)
    SetPosition(cmd::set::SetPositionArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::setup(cli.verbose);

    match cli.cmd {
        Commands::Run(args) => cmd::run::run(args),
        Commands::Sim(args) => cmd::sim::run(args),
        Commands::Read(args) => cmd::read::run(args),
        Commands::SetBackground(args) => cmd::set::run_background(args),
        Commands::SetPosition(args) => cmd::set::run_position(args),
    }
}
