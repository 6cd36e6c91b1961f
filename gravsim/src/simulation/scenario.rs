//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `Scenario`:
//! - a configured `Engine` with its population seeded around the attractor
//! - the home position of the attractor and the sandbox brush
//!
//! All validation happens here, before a single particle is integrated.

use log::info;

use crate::configuration::config::ScenarioConfig;
use crate::configuration::error::ConfigError;
use crate::simulation::engine::{Engine, Variant};
use crate::simulation::params::Parameters;
use crate::simulation::spawner::{Brush, DiskDistribution};
use crate::simulation::states::NVec2;
use crate::visualization::lensing::LensProjector;

/// A ready-to-run simulation built from a [`ScenarioConfig`]
pub struct Scenario {
    pub engine: Engine,
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self, ConfigError> {
        let variant = Variant::from(cfg.variant);

        // Parameters (runtime) from PhysicsConfig, validated on conversion
        let parameters = Parameters::try_from(&cfg.physics)?;

        // Lens only matters to the black hole, but a bad one is still an error
        let lens = cfg.lens.as_ref().map(LensProjector::try_from).transpose()?;

        let distribution = DiskDistribution::try_from(&cfg.population)?;
        let brush = Brush::from(&cfg.sandbox);
        let home = NVec2::new(cfg.attractor.home[0], cfg.attractor.home[1]);

        let mut engine = Engine::configure(variant, parameters, lens)?
            .with_home(home)
            .with_brush(brush);
        if let Some(seed) = cfg.population.seed {
            engine = engine.with_seed(seed);
        }
        engine.initialize_population(cfg.population.count, distribution)?;

        info!(
            "built {:?} scenario: {} particles, G = {}, M = {:e}, dt = {}, {:?}",
            variant,
            engine.population().len(),
            engine.parameters().G,
            engine.parameters().M,
            engine.parameters().dt,
            engine.parameters().force_law
        );

        Ok(Self { engine })
    }
}
