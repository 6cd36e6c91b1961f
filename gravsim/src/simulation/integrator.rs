//! Fixed-step semi-implicit Euler integrator
//!
//! Each particle is advanced independently toward the attractor:
//! momentum is kicked by the force first, then the position drifts with the
//! updated momentum. Particles never see each other.

use super::forces::{bearing, force_vector};
use super::params::Parameters;
use super::states::{NVec2, Particle, Population};

/// What a single step did to a particle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced, // kicked and drifted
    Skipped,  // inside the minimum distance, left untouched
    Consumed, // crossed the horizon on this step
    Inert,    // already consumed before this step
}

/// Advance one particle by one step of `params.dt` toward `attractor`
pub fn semi_implicit_euler(particle: &mut Particle, attractor: &NVec2, params: &Parameters) -> StepOutcome {
    if particle.is_consumed() {
        return StepOutcome::Inert;
    }

    let r = particle.distance_to(attractor);

    // Horizon: swallowed, position and momentum stay as they were
    if let Some(horizon) = params.horizon_radius {
        if r < horizon {
            particle.mark_consumed();
            return StepOutcome::Consumed;
        }
    }

    // Too close to resolve a direction, leave it alone this step
    if r < params.min_distance {
        return StepOutcome::Skipped;
    }

    let m = particle.mass();
    let magnitude = params.force_law.magnitude(params.G, m, params.M, r);
    let theta = bearing(&particle.position, attractor);
    let force = force_vector(magnitude, theta);

    // Kick: p_n+1 = p_n + F dt
    particle.momentum += force * params.dt;

    // Drift with the new momentum: x_n+1 = x_n + (p_n+1 / m) dt
    particle.position += particle.momentum * (params.dt / m);

    StepOutcome::Advanced
}

/// Advance every particle in the population by one step.
///
/// Returns the indices (ascending) of particles consumed during this step.
/// Nothing is removed here; replacement is a separate pass.
pub fn step_population(population: &mut Population, attractor: &NVec2, params: &Parameters) -> Vec<usize> {
    population
        .particles
        .iter_mut()
        .enumerate()
        .filter_map(|(i, p)| match semi_implicit_euler(p, attractor, params) {
            StepOutcome::Consumed => Some(i),
            _ => None,
        })
        .collect()
}
