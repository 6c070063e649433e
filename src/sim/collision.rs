//! Wall contact for a circle inside a square arena
//!
//! The arena spans `[0, size]` on both axes. A blob may not poke past a wall:
//! its centre is clamped so the whole circle stays inside, and every axis that
//! needed clamping reports a bounce of -1.

use glam::DVec2;

/// Result of clamping a candidate position against the arena walls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallContact {
    /// Position after clamping
    pub position: DVec2,
    /// Per-axis velocity multiplier: -1 on an axis that hit a wall, 1 otherwise
    pub bounce: DVec2,
}

impl WallContact {
    /// Whether any wall was hit
    pub fn hit(&self) -> bool {
        self.bounce.x < 0.0 || self.bounce.y < 0.0
    }
}

/// Clamp one axis; returns (coordinate, bounce factor)
#[inline]
fn clamp_axis(c: f64, radius: f64, size: f64) -> (f64, f64) {
    if c - radius < 0.0 {
        (radius, -1.0)
    } else if c + radius > size {
        (size - radius, -1.0)
    } else {
        (c, 1.0)
    }
}

/// Check a candidate centre against the walls of a `size` x `size` arena
pub fn wall_contact(candidate: DVec2, radius: f64, size: f64) -> WallContact {
    let (x, bx) = clamp_axis(candidate.x, radius, size);
    let (y, by) = clamp_axis(candidate.y, radius, size);
    WallContact {
        position: DVec2::new(x, y),
        bounce: DVec2::new(bx, by),
    }
}

/// Reflect velocity on the axes that hit a wall
#[inline]
pub fn reflect_velocity(velocity: DVec2, contact: &WallContact) -> DVec2 {
    velocity * contact.bounce
}
