//! Simulation tick
//!
//! Advances every blob by one timestep, in index order.

use super::state::World;

/// Advance the world by `dt`
pub fn tick(world: &mut World, dt: f64) {
    for blob in world.blobs_mut() {
        blob.simulate(dt);
    }
    world.time_ticks += 1;
}

/// Run `ticks` fixed steps of `dt`
pub fn run(world: &mut World, dt: f64, ticks: u64) {
    for _ in 0..ticks {
        tick(world, dt);
    }
    log::debug!("Ran {} ticks, world at tick {}", ticks, world.time_ticks);
}
