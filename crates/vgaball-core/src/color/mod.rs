// crates/vgaball-core/src/color/mod.rs

pub mod cycle;
pub mod hsv;
