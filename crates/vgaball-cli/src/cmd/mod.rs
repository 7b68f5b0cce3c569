// crates/vgaball-cli/src/cmd/mod.rs

pub mod args;
pub mod read;
pub mod run;
pub mod set;
pub mod sim;
