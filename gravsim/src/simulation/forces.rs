//! Force law and vector helpers for particle-to-attractor gravity
//!
//! Every variant pulls particles toward one attractor. The variants differ
//! only in how the force falls off with distance:
//! - `InverseSquare`: F = G m M / r^2, the black-hole variant
//! - `InverseLinear`: F = G m M / r, the sandbox and galaxy variants
//!
//! The inverse-linear law is not real gravity, but it is what gives the
//! sandbox and galaxy their flat rotation curves, so it stays.

use crate::configuration::config::ForceLawConfig;
use crate::simulation::states::NVec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceLaw {
    InverseSquare,
    InverseLinear,
}

impl ForceLaw {
    /// Magnitude of the pull on mass `m` at distance `r` from mass `big_m`.
    /// Callers guard against `r` near zero.
    #[allow(non_snake_case)]
    pub fn magnitude(&self, G: f64, m: f64, big_m: f64, r: f64) -> f64 {
        match self {
            ForceLaw::InverseSquare => G * m * big_m / (r * r),
            ForceLaw::InverseLinear => G * m * big_m / r,
        }
    }

    /// Speed of a circular orbit at radius `r`.
    ///
    /// Balancing the pull against the centripetal force m v^2 / r:
    /// - inverse-square: v = sqrt(G M / r)
    /// - inverse-linear: v = sqrt(G M), the same at every radius
    #[allow(non_snake_case)]
    pub fn circular_speed(&self, G: f64, big_m: f64, r: f64) -> f64 {
        match self {
            ForceLaw::InverseSquare => (G * big_m / r).sqrt(),
            ForceLaw::InverseLinear => (G * big_m).sqrt(),
        }
    }
}

impl From<ForceLawConfig> for ForceLaw {
    fn from(cfg: ForceLawConfig) -> Self {
        match cfg {
            ForceLawConfig::InverseSquare => ForceLaw::InverseSquare,
            ForceLawConfig::InverseLinear => ForceLaw::InverseLinear,
        }
    }
}

/// Euclidean distance between two points
pub fn distance(a: &NVec2, b: &NVec2) -> f64 {
    (a - b).norm()
}

/// Angle of the direction pointing from `from` toward `to`
pub fn bearing(from: &NVec2, to: &NVec2) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Force vector of magnitude `magnitude` along `theta`
pub fn force_vector(magnitude: f64, theta: f64) -> NVec2 {
    NVec2::new(magnitude * theta.cos(), magnitude * theta.sin())
}
