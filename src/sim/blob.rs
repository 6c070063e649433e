//! The blob entity
//!
//! A blob stores mass, position, velocity and its last known heading.
//! Radius and direction are always derived: radius from mass, direction
//! from the last non-zero velocity it was given.

use std::f64::consts::PI;
use std::fmt;
use std::sync::Arc;

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::collision::{reflect_velocity, wall_contact};
use super::space::{Arena, Space, SpaceId};
use crate::consts::{DEFAULT_MAX_MASS, DEFAULT_MIN_MASS};
use crate::geometry::{angle_of, heading, norm, polar_to_cartesian, to_degrees, to_radians, unit_vector};

/// Errors raised by blob operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BlobError {
    /// Ejection asked for at least as much mass as the blob holds.
    #[error("cannot eject {requested} mass from a blob holding {available}")]
    EjectionOverdraw { requested: f64, available: f64 },
    /// Mass must be positive and finite.
    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f64),
    /// The space handed to `eject` is not the one the blob lives in.
    #[error("blob belongs to a different space")]
    ForeignSpace,
}

/// Radius of a blob of the given mass (mass is area)
#[inline]
pub fn radius_from_mass(mass: f64) -> f64 {
    (mass / PI).sqrt()
}

fn check_mass(mass: f64) -> Result<f64, BlobError> {
    if mass.is_finite() && mass > 0.0 {
        Ok(mass)
    } else {
        Err(BlobError::InvalidMass(mass))
    }
}

/// Construction parameters; any field left `None` is drawn at random
///
/// - mass: uniform in `[DEFAULT_MIN_MASS, DEFAULT_MIN_MASS + DEFAULT_MAX_MASS)`
/// - position: each axis uniform in `[r, width - r)` where `r` is the radius
///   of the (possibly random) mass
/// - velocity: each component uniform in `[0, 1)`, so random blobs only ever
///   head into the first quadrant
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BlobSpec {
    pub mass: Option<f64>,
    pub position: Option<DVec2>,
    pub velocity: Option<DVec2>,
}

impl BlobSpec {
    /// Everything random
    pub fn random() -> Self {
        Self::default()
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn with_position(mut self, position: DVec2) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_velocity(mut self, velocity: DVec2) -> Self {
        self.velocity = Some(velocity);
        self
    }
}

/// Velocity together with the heading it implies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heading {
    pub velocity: DVec2,
    /// Radians
    pub direction: f64,
}

/// Pure velocity transition
///
/// A non-zero velocity takes its own angle as the new direction; a zero
/// velocity keeps `previous_direction`.
pub fn steer(velocity: DVec2, previous_direction: f64) -> Heading {
    let direction = if norm(velocity) != 0.0 {
        angle_of(velocity)
    } else {
        previous_direction
    };
    Heading { velocity, direction }
}

/// Display colour for a mass: red when light, blue when heavy
pub fn mass_color(mass: f64) -> [u8; 3] {
    let t = mass / DEFAULT_MAX_MASS;
    let channel = |v: f64| (255.0 * v).round().clamp(0.0, 255.0) as u8;
    [channel(1.0 - t), 0, channel(t)]
}

/// Read-only snapshot handed to observers and renderers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlobView {
    pub position: DVec2,
    pub velocity: DVec2,
    pub radius: f64,
    pub mass: f64,
    /// Degrees
    pub direction: f64,
    /// Corner of the bounding square (centre minus radius)
    pub top_left: DVec2,
    pub diameter: f64,
    pub color: [u8; 3],
}

/// Change notification hook
///
/// Called once after every public mutation of a blob, with the blob's state
/// after the change.
pub trait BlobObserver: Send + Sync {
    fn blob_changed(&self, view: &BlobView);
}

impl<F> BlobObserver for F
where
    F: Fn(&BlobView) + Send + Sync,
{
    fn blob_changed(&self, view: &BlobView) {
        self(view)
    }
}

/// Arena dimensions captured from the owning space
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    width: f64,
    size: f64,
}

/// A mass-bearing circle in a bounded arena
pub struct Blob {
    space: SpaceId,
    bounds: Bounds,
    mass: f64,
    position: DVec2,
    velocity: DVec2,
    /// Radians; last known heading
    direction: f64,
    observer: Option<Arc<dyn BlobObserver>>,
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blob")
            .field("space", &self.space)
            .field("mass", &self.mass)
            .field("position", &self.position)
            .field("velocity", &self.velocity)
            .field("direction", &self.direction())
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

impl Blob {
    /// Create a blob in `space`, filling unset fields from `rng`, and register it
    pub fn new<S, R>(space: &mut S, spec: BlobSpec, rng: &mut R) -> Result<Self, BlobError>
    where
        S: Space + ?Sized,
        R: Rng,
    {
        let mass = match spec.mass {
            Some(m) => check_mass(m)?,
            None => rng.random::<f64>() * DEFAULT_MAX_MASS + DEFAULT_MIN_MASS,
        };

        let position = spec.position.unwrap_or_else(|| {
            let r = radius_from_mass(mass);
            let inner_width = space.width() - 2.0 * r;
            let x = r + rng.random::<f64>() * inner_width;
            let y = r + rng.random::<f64>() * inner_width;
            DVec2::new(x, y)
        });

        let velocity = spec
            .velocity
            .unwrap_or_else(|| DVec2::new(rng.random(), rng.random()));

        Ok(Self::place(space, mass, position, velocity, None))
    }

    /// Create a blob in a fresh default arena, returning both
    pub fn with_default_space<R>(spec: BlobSpec, rng: &mut R) -> Result<(Self, Arena), BlobError>
    where
        R: Rng,
    {
        let mut arena = Arena::default();
        let blob = Self::new(&mut arena, spec, rng)?;
        Ok((blob, arena))
    }

    /// Build from resolved values, notify, then register with the space
    fn place<S>(
        space: &mut S,
        mass: f64,
        position: DVec2,
        velocity: DVec2,
        observer: Option<Arc<dyn BlobObserver>>,
    ) -> Self
    where
        S: Space + ?Sized,
    {
        let blob = Self {
            space: space.id(),
            bounds: Bounds {
                width: space.width(),
                size: space.size(),
            },
            mass,
            position,
            velocity,
            direction: steer(velocity, 0.0).direction,
            observer,
        };
        blob.notify();
        space.add_blob(&blob);
        blob
    }

    /// Attach a change observer; it is told about the current state at once
    pub fn observe(&mut self, observer: Arc<dyn BlobObserver>) {
        self.observer = Some(observer);
        self.notify();
    }

    /// Detach the change observer, if any
    pub fn unobserve(&mut self) {
        self.observer = None;
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            observer.blob_changed(&self.view());
        }
    }

    /// Snapshot of the derived display state
    pub fn view(&self) -> BlobView {
        let radius = self.radius();
        BlobView {
            position: self.position,
            velocity: self.velocity,
            radius,
            mass: self.mass,
            direction: self.direction(),
            top_left: self.position - DVec2::splat(radius),
            diameter: 2.0 * radius,
            color: mass_color(self.mass),
        }
    }

    pub fn space_id(&self) -> SpaceId {
        self.space
    }

    /// Width of the owning arena
    pub fn arena_width(&self) -> f64 {
        self.bounds.width
    }

    /// Edge length of the owning arena
    pub fn arena_size(&self) -> f64 {
        self.bounds.size
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn set_mass(&mut self, mass: f64) -> Result<(), BlobError> {
        self.mass = check_mass(mass)?;
        self.notify();
        Ok(())
    }

    /// Always recomputed; mass may change after construction
    pub fn radius(&self) -> f64 {
        radius_from_mass(self.mass)
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Place the centre without any wall check
    pub fn set_position(&mut self, position: DVec2) {
        self.position = position;
        self.notify();
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: DVec2) {
        self.apply_velocity(velocity);
        self.notify();
    }

    fn apply_velocity(&mut self, velocity: DVec2) {
        let next = steer(velocity, self.direction);
        self.velocity = next.velocity;
        self.direction = next.direction;
    }

    /// Heading in degrees
    pub fn direction(&self) -> f64 {
        to_degrees(self.direction)
    }

    /// Rotate velocity to `degrees`, keeping its speed
    ///
    /// Goes through `set_velocity`, so a blob at rest keeps its old heading.
    pub fn set_direction(&mut self, degrees: f64) {
        let speed = norm(self.velocity);
        self.set_velocity(heading(degrees) * speed);
    }

    /// Move towards `candidate`, stopping at the walls and bouncing off them
    ///
    /// Wall contact uses the arena `size` on both axes. Returns the new position.
    pub fn move_to(&mut self, candidate: DVec2) -> DVec2 {
        let contact = wall_contact(candidate, self.radius(), self.bounds.size);
        if contact.hit() {
            log::debug!(
                "Blob bounced at ({:.2}, {:.2}), bounce=({}, {})",
                contact.position.x,
                contact.position.y,
                contact.bounce.x,
                contact.bounce.y
            );
        }

        self.position = contact.position;
        self.apply_velocity(reflect_velocity(self.velocity, &contact));
        self.notify();
        self.position
    }

    /// Advance by `dt` with a single explicit Euler step
    ///
    /// No sub-stepping: a large `dt` can carry a blob past a wall in one step,
    /// in which case it is clamped to the far side's edge.
    pub fn simulate(&mut self, dt: f64) -> DVec2 {
        self.move_to(self.position + self.velocity * dt)
    }

    /// Split `mass` off into a new blob in the same space
    ///
    /// The ejecta is placed tangent to this blob along `degrees`. Its velocity
    /// is `unit_vector(-speed * velocity)`: it always has unit length, and
    /// `speed` only decides whether it points against or along this blob's
    /// motion. A blob at rest ejects a blob at rest.
    ///
    /// The ejecta is not wall-checked until its first move.
    pub fn eject<S>(
        &mut self,
        space: &mut S,
        mass: f64,
        speed: f64,
        degrees: f64,
    ) -> Result<Blob, BlobError>
    where
        S: Space + ?Sized,
    {
        if space.id() != self.space {
            return Err(BlobError::ForeignSpace);
        }
        let mass = check_mass(mass)?;
        // Equal mass would leave this blob with nothing
        if mass >= self.mass {
            return Err(BlobError::EjectionOverdraw {
                requested: mass,
                available: self.mass,
            });
        }

        let ejecta_radius = radius_from_mass(mass);
        let offset = polar_to_cartesian(self.radius() + ejecta_radius, to_radians(degrees));
        let position = self.position + offset;
        let velocity = unit_vector(self.velocity * -speed);

        let ejecta = Self::place(space, mass, position, velocity, self.observer.clone());
        self.mass -= ejecta.mass();
        self.notify();

        log::debug!(
            "Ejected {:.1} mass at {:.1} deg, parent now {:.1}",
            ejecta.mass(),
            degrees,
            self.mass
        );
        Ok(ejecta)
    }
}
