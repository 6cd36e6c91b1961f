//! Thin-lens approximation of how the accretion disk looks around the hole
//!
//! The 2D orbital plane is treated as a disk seen almost edge-on: the
//! plane's y axis is the depth axis, tilted by a fixed angle toward the
//! viewer. Each particle then maps to
//! - a primary image outside its true position, always drawn, and
//! - a secondary image on the opposite side, only for particles behind the
//!   hole and only when it lands outside the shadow.
//!
//! With `beta` the projected impact distance and `RE` the Einstein radius:
//!
//! ```text
//! r_plus  = (beta + sqrt(beta^2 + 4 RE^2)) / 2
//! r_minus = (sqrt(beta^2 + 4 RE^2) - beta) / 2
//! ```
//!
//! so `r_plus * r_minus = RE^2` and `r_plus - r_minus = beta`.

use std::f64::consts::PI;

use crate::configuration::config::LensConfig;
use crate::configuration::error::{non_negative, positive, ConfigError};
use crate::simulation::states::NVec2;

/// Floor on `beta`, keeps `atan2` and the image radii well defined at the center
pub const MIN_IMPACT: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct LensProjector {
    einstein_radius: f64,
    shadow_radius: f64,
    sin_tilt: f64,
    cos_tilt: f64,
}

/// Apparent positions of one particle, as offsets from the attractor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensedImages {
    pub primary: NVec2,
    pub secondary: Option<NVec2>,
}

impl LensProjector {
    pub fn new(lens_radius: f64, shadow_radius: f64, tilt: f64) -> Result<Self, ConfigError> {
        positive("lens_radius", lens_radius)?;
        non_negative("shadow_radius", shadow_radius)?;
        if !tilt.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "tilt",
                value: tilt,
                reason: "must be finite",
            });
        }
        Ok(Self {
            einstein_radius: lens_radius,
            shadow_radius,
            sin_tilt: tilt.sin(),
            cos_tilt: tilt.cos(),
        })
    }

    /// Lens used by the black-hole variant: RE = 68, shadow = 50, tilt = 0.15 rad
    pub fn accretion_disk() -> Self {
        Self {
            einstein_radius: 68.0,
            shadow_radius: 50.0,
            sin_tilt: 0.15_f64.sin(),
            cos_tilt: 0.15_f64.cos(),
        }
    }

    pub fn einstein_radius(&self) -> f64 {
        self.einstein_radius
    }

    pub fn shadow_radius(&self) -> f64 {
        self.shadow_radius
    }

    /// Image radii `(r_plus, r_minus)` for impact distance `beta` (clamped)
    pub fn image_radii(&self, beta: f64) -> (f64, f64) {
        let beta = beta.max(MIN_IMPACT);
        let root = (beta * beta + 4.0 * self.einstein_radius * self.einstein_radius).sqrt();
        (0.5 * (beta + root), 0.5 * (root - beta))
    }

    /// Project a position relative to the attractor to its lensed images
    pub fn project(&self, relative: NVec2) -> LensedImages {
        let u = relative.x;
        let v = relative.y * self.sin_tilt;
        let w = relative.y * self.cos_tilt; // > 0: behind the hole

        let beta = (u * u + v * v).sqrt().max(MIN_IMPACT);
        let phi = v.atan2(u);
        let (r_plus, r_minus) = self.image_radii(beta);

        let primary = polar(r_plus, phi);
        let secondary = if w > 0.0 && r_minus > self.shadow_radius {
            Some(polar(r_minus, phi + PI))
        } else {
            None
        };

        LensedImages { primary, secondary }
    }
}

impl TryFrom<&LensConfig> for LensProjector {
    type Error = ConfigError;

    fn try_from(cfg: &LensConfig) -> Result<Self, Self::Error> {
        LensProjector::new(cfg.lens_radius, cfg.shadow_radius, cfg.tilt)
    }
}

fn polar(r: f64, angle: f64) -> NVec2 {
    NVec2::new(r * angle.cos(), r * angle.sin())
}
