//! Blob Arena demo runner
//!
//! Usage: `blob-arena [settings.json]`
//!
//! Builds a seeded world, runs it for the configured number of ticks, splits
//! the heaviest blob once halfway through and prints the final snapshot as
//! JSON on stdout.

use std::path::Path;
use std::process::ExitCode;

use blob_arena::sim::{World, WorldError, run};
use blob_arena::Settings;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Blob Arena starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(Path::new(&path)),
        None => Settings::default(),
    };

    match simulate(&settings) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Simulation failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn simulate(settings: &Settings) -> Result<String, Box<dyn std::error::Error>> {
    let mut world = World::new(settings)?;
    for blob in world.blobs_mut() {
        let v = blob.velocity();
        blob.set_velocity(v * settings.speed_scale);
    }

    let half = settings.ticks / 2;
    run(&mut world, settings.dt, half);

    if let Some(index) = heaviest(&world) {
        let mass = world.blobs()[index].mass() / 4.0;
        match world.eject(index, mass, 1.0, 0.0) {
            Ok(child) => log::info!("Blob {index} ejected blob {child} ({mass:.1} mass)"),
            Err(WorldError::Blob(e)) => log::warn!("Ejection skipped: {e}"),
            Err(e) => return Err(e.into()),
        }
    }

    run(&mut world, settings.dt, settings.ticks - half);
    log::info!(
        "Finished at tick {} with {} blobs, total mass {:.1}",
        world.time_ticks,
        world.blobs().len(),
        world.total_mass()
    );

    Ok(serde_json::to_string_pretty(&world.snapshot())?)
}

fn heaviest(world: &World) -> Option<usize> {
    world
        .blobs()
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| {
            a.mass()
                .partial_cmp(&b.mass())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
}
