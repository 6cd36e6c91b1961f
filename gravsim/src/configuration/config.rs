//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`VariantConfig`]    – which of the three variants to run
//! - [`PhysicsConfig`]    – physical constants, step size and force law
//! - [`LensConfig`]       – lens constants (black-hole variant only)
//! - [`PopulationConfig`] – bulk population size and disk distribution
//! - [`AttractorConfig`]  – home position of the attractor
//! - [`SandboxConfig`]    – field size and brush settings for interactive spawns
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example black-hole scenario matching these types:
//!
//! ```yaml
//! variant: blackhole
//!
//! physics:
//!   G: 1.0                    # gravitational constant
//!   M: 5.0e6                  # attractor mass
//!   dt: 0.005                 # fixed step size
//!   particle_mass: 2.0
//!   force_law: inverse_square # or inverse_linear
//!   horizon_radius: 50.0      # particles inside are consumed
//!
//! lens:
//!   lens_radius: 68.0         # Einstein radius
//!   shadow_radius: 50.0
//!   tilt: 0.15                # disk tilt in radians
//!
//! population:
//!   count: 5000
//!   r_min: 70.0
//!   r_max: 800.0
//!   exponent: 1.5             # > 1 crowds the inner disk
//!   momentum_jitter: 0.02
//!   seed: 7
//!
//! attractor:
//!   home: [750.0, 400.0]
//! ```
//!
//! Nothing here is validated on load. [`crate::Scenario::build_scenario`]
//! checks every value and maps the configuration into runtime types.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use super::error::ConfigError;

/// Which variant of the simulation to run
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantConfig {
    #[serde(rename = "sandbox")] // empty field, particles spawned by the host
    Sandbox,

    #[serde(rename = "galaxy")] // auto-populated spiral galaxy
    Galaxy,

    #[serde(rename = "blackhole")] // accretion disk with horizon and lensing
    Blackhole,
}

/// Force law selected by a scenario
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceLawConfig {
    #[serde(rename = "inverse_square")] // F = G m M / r^2
    InverseSquare,

    #[serde(rename = "inverse_linear")] // F = G m M / r
    InverseLinear,
}

/// Physical constants and integration settings
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct PhysicsConfig {
    pub G: f64,                      // gravitational constant
    pub M: f64,                      // attractor mass
    pub dt: f64,                     // time step size
    pub particle_mass: f64,          // mass of every particle
    pub force_law: ForceLawConfig,   // inverse-square or inverse-linear
    pub horizon_radius: Option<f64>, // consume radius, horizon variants only
    pub min_distance: Option<f64>,   // skip radius, defaults to 1.0
}

/// Lens constants for the black-hole variant
#[derive(Deserialize, Debug, Clone)]
pub struct LensConfig {
    pub lens_radius: f64,   // Einstein radius RE
    pub shadow_radius: f64, // secondary images inside are occluded
    pub tilt: f64,          // disk tilt in radians
}

/// Spiral arm layout for the galaxy variant
#[derive(Deserialize, Debug, Clone)]
pub struct SpiralArmsConfig {
    pub count: u32,     // number of arms, evenly spaced
    pub tightness: f64, // coefficient of the ln(r) spiral term
    pub spread: f64,    // width of the uniform angular jitter
}

/// Bulk population and the disk it is sampled from
#[derive(Deserialize, Debug, Clone)]
pub struct PopulationConfig {
    pub count: usize,                    // particles created at startup
    pub r_min: f64,                      // inner disk radius
    pub r_max: f64,                      // outer disk radius
    pub exponent: f64,                   // radius skew, r = r_min + u^p (r_max - r_min)
    pub momentum_jitter: f64,            // per-component multiplicative jitter
    pub seed: Option<u64>,               // deterministic seed, entropy when absent
    pub arms: Option<SpiralArmsConfig>,  // spiral layout, uniform angle when absent
}

/// Where the attractor sits when the pointer is not driving it
#[derive(Deserialize, Debug, Clone)]
pub struct AttractorConfig {
    pub home: [f64; 2],
}

/// Interactive spawn settings for the sandbox variant
#[derive(Deserialize, Debug, Clone)]
pub struct SandboxConfig {
    #[serde(default = "default_field")]
    pub field: [f64; 2], // width, height of the spawn field
    #[serde(default = "default_brush_count")]
    pub brush_count: usize, // particles per line / circle brush
    #[serde(default = "default_brush_radius")]
    pub brush_radius: f64, // circle brush radius
    #[serde(default = "default_spawn_momentum")]
    pub spawn_momentum: [f64; 2], // initial momentum of brushed particles
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            field: default_field(),
            brush_count: default_brush_count(),
            brush_radius: default_brush_radius(),
            spawn_momentum: default_spawn_momentum(),
        }
    }
}

fn default_field() -> [f64; 2] {
    [1500.0, 800.0]
}

fn default_brush_count() -> usize {
    100
}

fn default_brush_radius() -> f64 {
    50.0
}

fn default_spawn_momentum() -> [f64; 2] {
    [500.0, 500.0]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub variant: VariantConfig,         // which engine configuration to build
    pub physics: PhysicsConfig,         // constants and force law
    pub lens: Option<LensConfig>,       // required by the black-hole variant
    pub population: PopulationConfig,   // bulk population at startup
    pub attractor: AttractorConfig,     // attractor home position
    #[serde(default)]
    pub sandbox: SandboxConfig,         // brush settings, defaults when absent
}

impl ScenarioConfig {
    /// Parse a scenario from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// Open and parse a scenario file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }
}
