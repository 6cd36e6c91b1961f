//! Core state types for the attractor simulation.
//!
//! Defines:
//! - `Particle`   a test mass with position, momentum and a consumed flag
//! - `Attractor`  the single dominant point mass, moved by the host
//! - `Population` the collection of particles integrated each frame
//!
//! Particles never interact with each other, only with the attractor.

use nalgebra::Vector2;

use crate::simulation::forces::distance;
use crate::visualization::palette::StarTint;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: NVec2,    // position
    pub momentum: NVec2,    // momentum, p = m v
    mass: f64,              // fixed at creation
    consumed: bool,         // once set, never cleared
    tint: Option<StarTint>, // galaxy stars only, fixed at spawn
}

impl Particle {
    pub fn new(position: NVec2, momentum: NVec2, mass: f64) -> Self {
        Self {
            position,
            momentum,
            mass,
            consumed: false,
            tint: None,
        }
    }

    pub fn with_tint(mut self, tint: StarTint) -> Self {
        self.tint = Some(tint);
        self
    }

    pub fn tint(&self) -> Option<StarTint> {
        self.tint
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Scalar speed |p| / m
    pub fn speed(&self) -> f64 {
        self.momentum.norm() / self.mass
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// Marks the particle as swallowed by the horizon
    pub fn mark_consumed(&mut self) {
        self.consumed = true;
    }

    /// Distance from `point`
    pub fn distance_to(&self, point: &NVec2) -> f64 {
        distance(&self.position, point)
    }
}

/// The dominant point mass. Mass and G live in `Parameters`; only the
/// position changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attractor {
    pub position: NVec2, // current position, set by the host once per frame
    pub home: NVec2,     // parking spot when the pointer leaves the field
}

impl Attractor {
    pub fn new(home: NVec2) -> Self {
        Self {
            position: home,
            home,
        }
    }

    pub fn follow(&mut self, position: NVec2) {
        self.position = position;
    }

    pub fn park(&mut self) {
        self.position = self.home;
    }
}

#[derive(Debug, Clone, Default)]
pub struct Population {
    pub particles: Vec<Particle>,
}

impl Population {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
        }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            particles: Vec::with_capacity(n),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    /// Number of particles not yet consumed
    pub fn active_count(&self) -> usize {
        self.particles.iter().filter(|p| !p.is_consumed()).count()
    }

    /// Removes the particles at `indices`, which must be sorted ascending.
    /// Order is not preserved. Returns how many were removed.
    pub fn remove_indices(&mut self, indices: &[usize]) -> usize {
        let mut removed = 0;
        // walk backwards so swap_remove never moves a pending index
        for &i in indices.iter().rev() {
            if i < self.particles.len() {
                self.particles.swap_remove(i);
                removed += 1;
            }
        }
        removed
    }
}
