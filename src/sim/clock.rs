//! Fixed-timestep clock
//!
//! Turns variable frame times into a whole number of `SIM_DT` ticks.

use super::state::World;
use super::tick::tick;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStep {
    pub dt: f64,
    pub max_substeps: u32,
    accumulator: f64,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT)
    }
}

impl FixedStep {
    pub fn new(dt: f64) -> Self {
        Self {
            dt,
            max_substeps: MAX_SUBSTEPS,
            accumulator: 0.0,
        }
    }

    /// Leftover time not yet consumed by a tick
    pub fn pending(&self) -> f64 {
        self.accumulator
    }

    /// Drop any leftover time (after a pause, say)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    /// Account for `frame_dt` seconds and tick the world as often as it fits
    ///
    /// Returns the number of ticks run.
    pub fn advance(&mut self, world: &mut World, frame_dt: f64) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.dt && substeps < self.max_substeps {
            tick(world, self.dt);
            self.accumulator -= self.dt;
            substeps += 1;
        }
        substeps
    }
}
