//! World state driven by the tick loop
//!
//! Owns one arena, the blobs living in it and the seeded RNG used for their
//! random defaults. Same seed, same calls, same world.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::blob::{Blob, BlobError, BlobSpec, BlobView};
use super::space::{Arena, Space};
use crate::settings::Settings;

/// Errors raised by world-level operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WorldError {
    #[error("no blob at index {0}")]
    NoSuchBlob(usize),
    #[error(transparent)]
    Blob(#[from] BlobError),
}

/// Serializable picture of the whole world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub seed: u64,
    pub time_ticks: u64,
    pub arena_width: f64,
    pub arena_size: f64,
    pub blobs: Vec<BlobView>,
}

/// Arena plus the blobs in it
#[derive(Debug)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    arena: Arena,
    /// Blobs in creation order
    blobs: Vec<Blob>,
    rng: Pcg32,
}

impl World {
    /// Build a world from settings and populate it with random blobs
    pub fn new(settings: &Settings) -> Result<Self, WorldError> {
        let mut world = Self::empty(
            settings.seed,
            Arena::with_dimensions(settings.arena_width, settings.arena_size),
        );
        for _ in 0..settings.blob_count {
            world.spawn(BlobSpec::random())?;
        }
        log::info!(
            "World seeded with {}: {} blobs in {}x{} arena",
            settings.seed,
            world.blobs.len(),
            settings.arena_width,
            settings.arena_size
        );
        Ok(world)
    }

    /// A world with no blobs yet
    pub fn empty(seed: u64, arena: Arena) -> Self {
        Self {
            seed,
            time_ticks: 0,
            arena,
            blobs: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    pub fn blobs_mut(&mut self) -> &mut [Blob] {
        &mut self.blobs
    }

    pub fn blob(&self, index: usize) -> Option<&Blob> {
        self.blobs.get(index)
    }

    /// Create a blob in this world's arena; returns its index
    pub fn spawn(&mut self, spec: BlobSpec) -> Result<usize, BlobError> {
        let blob = Blob::new(&mut self.arena, spec, &mut self.rng)?;
        self.blobs.push(blob);
        Ok(self.blobs.len() - 1)
    }

    /// Split mass off the blob at `index`; returns the ejecta's index
    pub fn eject(
        &mut self,
        index: usize,
        mass: f64,
        speed: f64,
        degrees: f64,
    ) -> Result<usize, WorldError> {
        let parent = self
            .blobs
            .get_mut(index)
            .ok_or(WorldError::NoSuchBlob(index))?;
        let ejecta = parent.eject(&mut self.arena, mass, speed, degrees)?;
        self.blobs.push(ejecta);
        Ok(self.blobs.len() - 1)
    }

    /// Total mass across all blobs
    pub fn total_mass(&self) -> f64 {
        self.blobs.iter().map(Blob::mass).sum()
    }

    /// Mass-weighted centre of the world
    pub fn centre_of_mass(&self) -> Option<DVec2> {
        let total = self.total_mass();
        if self.blobs.is_empty() || total == 0.0 {
            return None;
        }
        let weighted: DVec2 = self.blobs.iter().map(|b| b.position() * b.mass()).sum();
        Some(weighted / total)
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            seed: self.seed,
            time_ticks: self.time_ticks,
            arena_width: self.arena.width(),
            arena_size: self.arena.size(),
            blobs: self.blobs.iter().map(Blob::view).collect(),
        }
    }
}
