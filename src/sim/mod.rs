//! Deterministic simulation module
//!
//! All blob logic lives here. This module must stay pure and deterministic:
//! - Caller-driven timestep only
//! - Seeded RNG only
//! - Stable iteration order (by blob index)
//! - No rendering or platform dependencies

pub mod blob;
pub mod clock;
pub mod collision;
pub mod space;
pub mod state;
pub mod tick;

pub use blob::{Blob, BlobError, BlobObserver, BlobSpec, BlobView, Heading, mass_color, radius_from_mass, steer};
pub use clock::FixedStep;
pub use collision::{WallContact, reflect_velocity, wall_contact};
pub use space::{Arena, Space, SpaceId};
pub use state::{World, WorldError, WorldSnapshot};
pub use tick::{run, tick};
