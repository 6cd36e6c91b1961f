//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the per-variant constants:
//! - gravitational constant and attractor mass (`G`, `M`),
//! - step size and particle mass,
//! - force law,
//! - horizon radius (consume) and minimum distance (skip)

use crate::configuration::config::PhysicsConfig;
use crate::configuration::error::{positive, ConfigError};
use crate::simulation::forces::ForceLaw;

pub const DEFAULT_MIN_DISTANCE: f64 = 1.0;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64,                      // gravitational constant
    pub M: f64,                      // attractor mass
    pub dt: f64,                     // step size
    pub particle_mass: f64,          // mass of every particle
    pub force_law: ForceLaw,         // falloff with distance
    pub horizon_radius: Option<f64>, // particles inside are consumed
    pub min_distance: f64,           // particles inside are left untouched
}

impl Parameters {
    /// Fail fast on values that would poison every particle later
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("G", self.G)?;
        positive("M", self.M)?;
        positive("dt", self.dt)?;
        positive("particle_mass", self.particle_mass)?;
        positive("min_distance", self.min_distance)?;
        if let Some(h) = self.horizon_radius {
            positive("horizon_radius", h)?;
        }
        Ok(())
    }

    /// Circular orbit speed at radius `r` under this force law
    pub fn circular_speed(&self, r: f64) -> f64 {
        self.force_law.circular_speed(self.G, self.M, r)
    }

    /// Parameters of the sandbox: inverse-linear pull, no horizon
    pub fn sandbox() -> Self {
        Self {
            G: 0.1,
            M: 1.0e8,
            dt: 0.001,
            particle_mass: 2.0,
            force_law: ForceLaw::InverseLinear,
            horizon_radius: None,
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }

    /// Parameters of the galaxy, identical physics to the sandbox
    pub fn galaxy() -> Self {
        Self::sandbox()
    }

    /// Parameters of the black hole: inverse-square pull with a horizon
    pub fn blackhole() -> Self {
        Self {
            G: 1.0,
            M: 5.0e6,
            dt: 0.005,
            particle_mass: 2.0,
            force_law: ForceLaw::InverseSquare,
            horizon_radius: Some(50.0),
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }
}

impl TryFrom<&PhysicsConfig> for Parameters {
    type Error = ConfigError;

    fn try_from(cfg: &PhysicsConfig) -> Result<Self, Self::Error> {
        let params = Parameters {
            G: cfg.G,
            M: cfg.M,
            dt: cfg.dt,
            particle_mass: cfg.particle_mass,
            force_law: cfg.force_law.into(),
            horizon_radius: cfg.horizon_radius,
            min_distance: cfg.min_distance.unwrap_or(DEFAULT_MIN_DISTANCE),
        };
        params.validate()?;
        Ok(params)
    }
}
