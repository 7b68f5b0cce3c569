// crates/vgaball-core/src/session.rs
//
// The animation loop bound to one device handle.

use std::time::Duration;

use crate::config::AnimationConfig;
use crate::device::BallDevice;
use crate::engine::{Animator, Frame};
use crate::error::Result;
use crate::stop::StopToken;
use crate::wire::control::Position;

/// Outcome of one tick against the device.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickReport {
    pub frame: Frame,
    pub background_written: bool,
    pub position_written: bool,
    /// Position as read back from the driver; None if the read failed.
    pub readback: Option<Position>,
}

impl TickReport {
    pub fn failed_calls(&self) -> u64 {
        u64::from(!self.background_written)
            + u64::from(!self.position_written)
            + u64::from(self.readback.is_none())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub failed_calls: u64,
    pub bounces: u64,
}

impl RunSummary {
    pub fn observe(&mut self, r: &TickReport) {
        self.ticks += 1;
        self.failed_calls += r.failed_calls();
        self.bounces += u64::from(r.frame.bounce.x) + u64::from(r.frame.bounce.y);
    }
}

/// Owns the device for its whole lifetime; dropping the session releases it.
pub struct Session<D: BallDevice> {
    device: D,
    animator: Animator,
    interval: Duration,
}

impl<D: BallDevice> Session<D> {
    pub fn new(device: D, cfg: &AnimationConfig) -> Result<Self> {
        Ok(Self {
            device,
            animator: Animator::new(cfg)?,
            interval: cfg.interval,
        })
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// One tick: background, position, read-back. Call failures are logged
    /// and skipped; the tick always completes.
    pub fn tick(&mut self) -> TickReport {
        let frame = self.animator.tick();
        log::trace!("frame {:?}", frame);
        if frame.bounce.any() {
            log::debug!(
                "bounce x={} y={} at {:?}",
                frame.bounce.x,
                frame.bounce.y,
                frame.position
            );
        }

        let background_written = match self.device.write_background(frame.color) {
            Ok(()) => true,
            Err(e) => {
                log::error!("{e}");
                false
            }
        };

        let position_written = match self.device.write_position(frame.position) {
            Ok(()) => true,
            Err(e) => {
                log::error!("{e}");
                false
            }
        };

        let readback = match self.device.read_position() {
            Ok(p) => Some(p),
            Err(e) => {
                log::error!("{e}");
                None
            }
        };

        TickReport {
            frame,
            background_written,
            position_written,
            readback,
        }
    }

    /// Tick until `stop` fires or `max_ticks` is reached, pausing the fixed
    /// interval after each tick. The pause is not interruptible; `stop` is
    /// checked between ticks.
    pub fn run<F>(&mut self, stop: &StopToken, max_ticks: Option<u64>, mut on_tick: F) -> RunSummary
    where
        F: FnMut(&TickReport),
    {
        let mut summary = RunSummary::default();
        log::info!(
            "animation started (motion={}, interval={:?})",
            self.animator.motion().policy_name(),
            self.interval
        );

        while !stop.is_stopped() {
            if max_ticks.is_some_and(|max| summary.ticks >= max) {
                break;
            }

            let report = self.tick();
            summary.observe(&report);
            on_tick(&report);

            if !self.interval.is_zero() {
                std::thread::sleep(self.interval);
            }
        }

        log::info!(
            "animation stopped after {} ticks ({} failed calls)",
            summary.ticks,
            summary.failed_calls
        );
        summary
    }
}
