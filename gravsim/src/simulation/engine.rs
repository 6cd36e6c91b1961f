//! The simulation engine: one configuration of the shared physics core
//!
//! An `Engine` owns the parameters, the attractor, the population and the
//! rng. Each `advance_frame` runs three passes:
//! 1. integrate every particle, collecting the ones that crossed the horizon
//! 2. remove those and spawn one replacement each
//! 3. project every particle into a render snapshot

use log::{debug, trace};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use thiserror::Error;

use crate::configuration::config::VariantConfig;
use crate::configuration::error::ConfigError;
use crate::simulation::integrator::step_population;
use crate::simulation::params::Parameters;
use crate::simulation::spawner::{spawn_orbiting, Brush, DiskDistribution, SpawnPattern};
use crate::simulation::states::{Attractor, NVec2, Particle, Population};
use crate::visualization::lensing::LensProjector;
use crate::visualization::palette::{ColorBucket, StarTint};
use crate::visualization::snapshot::{RenderPoint, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Sandbox,
    Galaxy,
    Blackhole,
}

impl From<VariantConfig> for Variant {
    fn from(cfg: VariantConfig) -> Self {
        match cfg {
            VariantConfig::Sandbox => Variant::Sandbox,
            VariantConfig::Galaxy => Variant::Galaxy,
            VariantConfig::Blackhole => Variant::Blackhole,
        }
    }
}

/// Misuse of a configured engine
#[derive(Debug, Error)]
pub enum SimError {
    #[error("{operation} is only available in the sandbox variant, not {variant:?}")]
    UnsupportedForVariant {
        operation: &'static str,
        variant: Variant,
    },

    #[error("particle spawned with a non-finite position or momentum")]
    NonFiniteParticle,
}

pub struct Engine {
    variant: Variant,
    params: Parameters,
    lens: Option<LensProjector>,
    attractor: Attractor,
    population: Population,
    distribution: DiskDistribution, // used for bulk seeding and replacements
    brush: Brush,
    rng: ChaChaRng,
    frame: u64,
    consumed_total: u64,
}

impl Engine {
    /// Build an engine, validating everything up front.
    ///
    /// The black-hole variant needs a lens and a horizon; the other two
    /// ignore a lens if one is given.
    pub fn configure(variant: Variant, params: Parameters, lens: Option<LensProjector>) -> Result<Self, ConfigError> {
        params.validate()?;

        let lens = match variant {
            Variant::Blackhole => Some(lens.ok_or(ConfigError::MissingLens)?),
            Variant::Sandbox | Variant::Galaxy => None,
        };
        if variant == Variant::Blackhole && params.horizon_radius.is_none() {
            return Err(ConfigError::MissingHorizon);
        }

        let distribution = match variant {
            Variant::Galaxy => DiskDistribution::spiral_galaxy(),
            Variant::Sandbox | Variant::Blackhole => DiskDistribution::accretion_disk(),
        };

        Ok(Self {
            variant,
            params,
            lens,
            attractor: Attractor::new(NVec2::zeros()),
            population: Population::new(),
            distribution,
            brush: Brush::default(),
            rng: ChaChaRng::from_entropy(),
            frame: 0,
            consumed_total: 0,
        })
    }

    /// Seed the rng so runs are reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaChaRng::seed_from_u64(seed);
        self
    }

    /// Place the attractor's home (and current position)
    pub fn with_home(mut self, home: NVec2) -> Self {
        self.attractor = Attractor::new(home);
        self
    }

    pub fn with_brush(mut self, brush: Brush) -> Self {
        self.brush = brush;
        self
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn lens(&self) -> Option<&LensProjector> {
        self.lens.as_ref()
    }

    pub fn attractor(&self) -> &Attractor {
        &self.attractor
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn distribution(&self) -> &DiskDistribution {
        &self.distribution
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn consumed_total(&self) -> u64 {
        self.consumed_total
    }

    /// Replace the population with `count` orbiting particles from `dist`.
    /// The distribution is kept for later replacements.
    pub fn initialize_population(&mut self, count: usize, dist: DiskDistribution) -> Result<(), ConfigError> {
        dist.validate()?;
        self.distribution = dist;

        let center = self.attractor.position;
        let mut population = Population::with_capacity(count);
        for _ in 0..count {
            population.push(self.spawn_one());
        }
        self.population = population;

        debug!(
            "seeded {} particles in r = [{}, {}] around ({:.1}, {:.1})",
            count, self.distribution.r_min, self.distribution.r_max, center.x, center.y
        );
        Ok(())
    }

    /// Add one particle with an explicit momentum (sandbox only)
    pub fn inject_particle(&mut self, position: NVec2, momentum: NVec2) -> Result<(), SimError> {
        self.require_sandbox("inject_particle")?;
        if !(position.iter().all(|c| c.is_finite()) && momentum.iter().all(|c| c.is_finite())) {
            return Err(SimError::NonFiniteParticle);
        }
        self.population.push(Particle::new(position, momentum, self.params.particle_mass));
        Ok(())
    }

    /// Add a brush stroke of particles at `at` (sandbox only).
    /// Returns how many particles were added.
    pub fn inject_pattern(&mut self, pattern: SpawnPattern, at: NVec2) -> Result<usize, SimError> {
        self.require_sandbox("inject_pattern")?;
        let positions = self.brush.positions(pattern, at, &mut self.rng);
        let n = positions.len();
        for position in positions {
            self.population.push(Particle::new(position, self.brush.momentum, self.params.particle_mass));
        }
        debug!("{:?} brush added {} particles at ({:.1}, {:.1})", pattern, n, at.x, at.y);
        Ok(n)
    }

    /// Attractor follows the pointer
    pub fn move_attractor(&mut self, position: NVec2) {
        self.attractor.follow(position);
    }

    /// Pointer left the field, park the attractor at home
    pub fn park_attractor(&mut self) {
        self.attractor.park();
    }

    /// Advance one frame with the attractor at `attractor` and return the
    /// render snapshot
    pub fn advance_frame(&mut self, attractor: NVec2) -> Snapshot {
        self.advance_frame_into(attractor, Snapshot::default())
    }

    /// Same as `advance_frame`, writing into a recycled snapshot buffer
    pub fn advance_frame_into(&mut self, attractor: NVec2, mut out: Snapshot) -> Snapshot {
        self.attractor.follow(attractor);
        let center = self.attractor.position;

        let consumed = step_population(&mut self.population, &center, &self.params);
        // live after the move pass, before respawn
        let active = self.population.active_count();
        let replaced = self.replace_consumed(&consumed);
        self.consumed_total += replaced as u64;
        self.frame += 1;

        out.clear();
        self.render_into(&mut out);
        out.active_count = active;
        out.consumed_this_frame = replaced;

        trace!(
            "frame {}: {} active, {} consumed ({} total)",
            self.frame,
            out.active_count,
            replaced,
            self.consumed_total
        );
        out
    }

    /// Remove the consumed particles at `indices` (ascending) and spawn one
    /// orbiting replacement for each. Returns the number replaced.
    fn replace_consumed(&mut self, indices: &[usize]) -> usize {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]), "indices must be ascending");
        debug_assert!(
            indices
                .iter()
                .all(|&i| self.population.particles.get(i).is_some_and(|p| p.is_consumed())),
            "only consumed particles are replaced"
        );

        let removed = self.population.remove_indices(indices);
        for _ in 0..removed {
            let fresh = self.spawn_one();
            self.population.push(fresh);
        }
        removed
    }

    /// One orbiting particle around the current attractor position.
    /// Galaxy stars get their radial tint here and keep it for life.
    fn spawn_one(&mut self) -> Particle {
        let center = self.attractor.position;
        let particle = spawn_orbiting(&center, &self.params, &self.distribution, &mut self.rng);
        match self.variant {
            Variant::Galaxy => {
                let ratio = particle.distance_to(&center) / self.distribution.r_max;
                particle.with_tint(StarTint::sample(ratio, &mut self.rng))
            }
            Variant::Sandbox | Variant::Blackhole => particle,
        }
    }

    /// Project the current population into `out`
    pub fn render_into(&self, out: &mut Snapshot) {
        let center = self.attractor.position;
        out.frame = self.frame;
        out.attractor = center;
        out.active_count = self.population.active_count();
        out.consumed_total = self.consumed_total;

        let live = self.population.iter().filter(|p| !p.is_consumed());

        match &self.lens {
            None => {
                out.points
                    .extend(live.map(|p| render_point(p.position, p.speed(), p.tint(), false)));
            }
            Some(lens) => {
                // Secondaries are drawn first, behind the shadow
                let images: Vec<_> = live
                    .map(|p| (p.speed(), p.tint(), lens.project(p.position - center)))
                    .collect();

                for (speed, tint, img) in &images {
                    if let Some(offset) = img.secondary {
                        out.points.push(render_point(center + offset, *speed, *tint, true));
                    }
                }
                for (speed, tint, img) in &images {
                    out.points.push(render_point(center + img.primary, *speed, *tint, false));
                }
            }
        }
    }

    fn require_sandbox(&self, operation: &'static str) -> Result<(), SimError> {
        if self.variant == Variant::Sandbox {
            Ok(())
        } else {
            Err(SimError::UnsupportedForVariant {
                operation,
                variant: self.variant,
            })
        }
    }
}

fn render_point(at: NVec2, speed: f64, tint: Option<StarTint>, is_secondary: bool) -> RenderPoint {
    RenderPoint {
        render_x: at.x,
        render_y: at.y,
        speed,
        bucket: ColorBucket::classify(speed),
        is_secondary,
        tint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blackhole(n: usize) -> Engine {
        let mut engine = Engine::configure(Variant::Blackhole, Parameters::blackhole(), Some(LensProjector::accretion_disk()))
            .expect("valid blackhole configuration")
            .with_seed(13)
            .with_home(NVec2::new(750.0, 400.0));
        engine
            .initialize_population(n, DiskDistribution::accretion_disk())
            .expect("valid distribution");
        engine
    }

    #[test]
    fn replacements_spawn_around_current_attractor() {
        let mut engine = blackhole(10);
        let moved = NVec2::new(100.0, 100.0);
        engine.move_attractor(moved);
        for i in [0, 3, 7] {
            engine.population.particles[i].mark_consumed();
        }

        assert_eq!(engine.replace_consumed(&[0, 3, 7]), 3);
        assert_eq!(engine.population.len(), 10);
        assert_eq!(engine.population.active_count(), 10);

        // swap_remove leaves the survivors up front, fresh ones are appended
        let dist = engine.distribution.clone();
        for p in &engine.population.particles[7..] {
            let r = p.distance_to(&moved);
            assert!(r >= dist.r_min - 1e-9 && r <= dist.r_max + 1e-9, "replacement at r = {r}");
        }
        assert_eq!(engine.replace_consumed(&[]), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "only consumed particles are replaced")]
    fn replacing_a_live_particle_is_rejected() {
        let mut engine = blackhole(5);
        engine.replace_consumed(&[2]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "indices must be ascending")]
    fn unsorted_indices_are_rejected() {
        let mut engine = blackhole(5);
        engine.population.particles[1].mark_consumed();
        engine.population.particles[3].mark_consumed();
        engine.replace_consumed(&[3, 1]);
    }
}
