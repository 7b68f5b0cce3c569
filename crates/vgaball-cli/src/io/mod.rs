// crates/vgaball-cli/src/io/mod.rs

pub mod console;
pub mod ioctl;
