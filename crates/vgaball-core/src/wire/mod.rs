// crates/vgaball-core/src/wire/mod.rs
//
// Driver ABI: the control block exchanged per ioctl and the request numbering.

pub mod control;
pub mod request;
