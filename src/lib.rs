//! Blob Arena - mass-bearing blobs in a bounded 2D arena
//!
//! Core modules:
//! - `geometry`: Vector helpers (norm, unit vector, angles)
//! - `sim`: Blob physics, the `Space` collaborator and the tick driver
//! - `settings`: JSON-loadable configuration for the demo driver

pub mod geometry;
pub mod settings;
pub mod sim;

pub use geometry::{angle_of, heading, norm, polar_to_cartesian, to_degrees, to_radians, unit_vector};
pub use settings::{Settings, SettingsError};
pub use sim::{
    Arena, Blob, BlobError, BlobObserver, BlobSpec, BlobView, FixedStep, Space, SpaceId, World,
    WorldError, WorldSnapshot, radius_from_mass, tick,
};

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f64 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the clock will account for (seconds)
    pub const MAX_FRAME_DT: f64 = 0.1;

    /// The largest mass (above the floor) a blob is randomly created with
    pub const DEFAULT_MAX_MASS: f64 = 10_000.0;
    /// Floor of the random mass range
    pub const DEFAULT_MIN_MASS: f64 = 2_500.0;

    /// Default arena dimensions
    pub const DEFAULT_ARENA_WIDTH: f64 = 1_000.0;
    pub const DEFAULT_ARENA_SIZE: f64 = 1_000.0;
}
