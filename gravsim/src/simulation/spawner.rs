//! Particle creation: orbiting disks, spiral arms and sandbox brushes
//!
//! Orbiting particles are launched tangentially at the circular-orbit speed
//! of the active force law, so an undisturbed particle traces a near-circle.
//! Radii are drawn from a skewed distribution that crowds the inner disk,
//! and a little multiplicative jitter on the momentum keeps the disk from
//! looking perfectly regular.

use std::f64::consts::{FRAC_PI_2, TAU};

use rand::Rng;

use crate::configuration::config::{PopulationConfig, SandboxConfig, SpiralArmsConfig};
use crate::configuration::error::{non_negative, positive, ConfigError};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle};

/// Spiral arm layout for galaxy populations
#[derive(Debug, Clone, PartialEq)]
pub struct SpiralArms {
    pub count: u32,     // arms, evenly spaced around the attractor
    pub tightness: f64, // angle added per unit of ln(r)
    pub spread: f64,    // width of the uniform angular jitter
}

/// The disk that bulk populations and replacements are sampled from
#[derive(Debug, Clone, PartialEq)]
pub struct DiskDistribution {
    pub r_min: f64,               // inner radius
    pub r_max: f64,               // outer radius
    pub exponent: f64,            // r = r_min + u^exponent (r_max - r_min)
    pub momentum_jitter: f64,     // components scaled by [1 - j, 1 + j]
    pub arms: Option<SpiralArms>, // uniform angle when None
}

impl DiskDistribution {
    /// Accretion disk around the black hole
    pub fn accretion_disk() -> Self {
        Self {
            r_min: 70.0,
            r_max: 800.0,
            exponent: 1.5,
            momentum_jitter: 0.02,
            arms: None,
        }
    }

    /// Three-armed spiral galaxy
    pub fn spiral_galaxy() -> Self {
        Self {
            r_min: 10.0,
            r_max: 360.0,
            exponent: 2.0,
            momentum_jitter: 0.05,
            arms: Some(SpiralArms {
                count: 3,
                tightness: 1.5,
                spread: 0.8,
            }),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("r_min", self.r_min)?;
        positive("r_max", self.r_max)?;
        if self.r_max <= self.r_min {
            return Err(ConfigError::InvalidDistribution {
                reason: "r_max must be greater than r_min",
            });
        }
        positive("exponent", self.exponent)?;
        non_negative("momentum_jitter", self.momentum_jitter)?;
        if self.momentum_jitter >= 1.0 {
            return Err(ConfigError::InvalidParameter {
                name: "momentum_jitter",
                value: self.momentum_jitter,
                reason: "must be below 1.0",
            });
        }
        if let Some(arms) = &self.arms {
            if arms.count == 0 {
                return Err(ConfigError::InvalidDistribution {
                    reason: "a spiral needs at least one arm",
                });
            }
            non_negative("spread", arms.spread)?;
            if !arms.tightness.is_finite() {
                return Err(ConfigError::InvalidParameter {
                    name: "tightness",
                    value: arms.tightness,
                    reason: "must be finite",
                });
            }
        }
        Ok(())
    }

    /// Draw a radius from the skewed distribution
    pub fn sample_radius<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u: f64 = rng.gen();
        self.r_min + u.powf(self.exponent) * (self.r_max - self.r_min)
    }

    /// Draw a position angle for a particle at radius `r`
    pub fn sample_angle<R: Rng + ?Sized>(&self, r: f64, rng: &mut R) -> f64 {
        match &self.arms {
            None => rng.gen::<f64>() * TAU,
            Some(arms) => {
                let arm = rng.gen_range(0..arms.count) as f64;
                let arm_angle = arm * TAU / arms.count as f64;
                let jitter = (rng.gen::<f64>() - 0.5) * arms.spread;
                arm_angle + spiral_offset(r, arms.tightness) + jitter
            }
        }
    }
}

impl From<&SpiralArmsConfig> for SpiralArms {
    fn from(cfg: &SpiralArmsConfig) -> Self {
        Self {
            count: cfg.count,
            tightness: cfg.tightness,
            spread: cfg.spread,
        }
    }
}

impl TryFrom<&PopulationConfig> for DiskDistribution {
    type Error = ConfigError;

    fn try_from(cfg: &PopulationConfig) -> Result<Self, Self::Error> {
        let dist = DiskDistribution {
            r_min: cfg.r_min,
            r_max: cfg.r_max,
            exponent: cfg.exponent,
            momentum_jitter: cfg.momentum_jitter,
            arms: cfg.arms.as_ref().map(SpiralArms::from),
        };
        dist.validate()?;
        Ok(dist)
    }
}

/// Logarithmic spiral term: the further out, the further it winds
pub fn spiral_offset(r: f64, tightness: f64) -> f64 {
    r.ln() * tightness
}

/// Particle on an exact circular orbit at `radius` and position `angle`
/// around `center`, moving counter-clockwise
pub fn circular_orbit(center: &NVec2, params: &Parameters, radius: f64, angle: f64) -> Particle {
    let position = center + NVec2::new(angle.cos(), angle.sin()) * radius;

    // Tangent: position angle rotated by 90 degrees
    let vel_angle = angle + FRAC_PI_2;
    let p = params.circular_speed(radius) * params.particle_mass;
    let momentum = NVec2::new(vel_angle.cos(), vel_angle.sin()) * p;

    Particle::new(position, momentum, params.particle_mass)
}

/// Spawn one particle on a roughly circular orbit around `center`
pub fn spawn_orbiting<R: Rng + ?Sized>(
    center: &NVec2,
    params: &Parameters,
    dist: &DiskDistribution,
    rng: &mut R,
) -> Particle {
    let r = dist.sample_radius(rng);
    let angle = dist.sample_angle(r, rng);
    let mut particle = circular_orbit(center, params, r, angle);

    let j = dist.momentum_jitter;
    particle.momentum.x *= 1.0 - j + rng.gen::<f64>() * 2.0 * j;
    particle.momentum.y *= 1.0 - j + rng.gen::<f64>() * 2.0 * j;

    particle
}

/// Sandbox spawn brushes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnPattern {
    Single,         // one particle at the point
    HorizontalLine, // across the field width at the point's y
    VerticalLine,   // across the field height at the point's x
    Circle,         // uniform over a small disk around the point
}

/// Field and brush settings for sandbox spawns
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    pub field: NVec2,    // width, height
    pub count: usize,    // particles per line / circle
    pub radius: f64,     // circle radius
    pub momentum: NVec2, // initial momentum of every brushed particle
}

impl Default for Brush {
    fn default() -> Self {
        Self::from(&SandboxConfig::default())
    }
}

impl From<&SandboxConfig> for Brush {
    fn from(cfg: &SandboxConfig) -> Self {
        Self {
            field: NVec2::new(cfg.field[0], cfg.field[1]),
            count: cfg.brush_count,
            radius: cfg.brush_radius,
            momentum: NVec2::new(cfg.spawn_momentum[0], cfg.spawn_momentum[1]),
        }
    }
}

impl Brush {
    /// Positions a brush stroke of `pattern` at `at` produces
    pub fn positions<R: Rng + ?Sized>(&self, pattern: SpawnPattern, at: NVec2, rng: &mut R) -> Vec<NVec2> {
        match pattern {
            SpawnPattern::Single => vec![at],
            SpawnPattern::HorizontalLine => (0..self.count)
                .map(|_| NVec2::new(rng.gen::<f64>() * self.field.x, at.y))
                .collect(),
            SpawnPattern::VerticalLine => (0..self.count)
                .map(|_| NVec2::new(at.x, rng.gen::<f64>() * self.field.y))
                .collect(),
            SpawnPattern::Circle => (0..self.count)
                .map(|_| {
                    let angle = rng.gen::<f64>() * TAU;
                    // sqrt keeps the density uniform over the area
                    let r = rng.gen::<f64>().sqrt() * self.radius;
                    at + NVec2::new(angle.cos(), angle.sin()) * r
                })
                .collect(),
        }
    }
}
