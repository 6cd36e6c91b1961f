use std::time::Instant;

use crate::configuration::error::ConfigError;
use crate::simulation::engine::{Engine, Variant};
use crate::simulation::integrator::step_population;
use crate::simulation::params::Parameters;
use crate::simulation::spawner::DiskDistribution;
use crate::simulation::states::NVec2;
use crate::visualization::lensing::LensProjector;
use crate::visualization::snapshot::Snapshot;

const FRAMES: usize = 200;

fn seeded_engine(variant: Variant, n: usize) -> Result<Engine, ConfigError> {
    let (params, lens, dist) = match variant {
        Variant::Blackhole => (
            Parameters::blackhole(),
            Some(LensProjector::accretion_disk()),
            DiskDistribution::accretion_disk(),
        ),
        Variant::Galaxy | Variant::Sandbox => (Parameters::galaxy(), None, DiskDistribution::spiral_galaxy()),
    };

    let mut engine = Engine::configure(variant, params, lens)?
        .with_seed(42)
        .with_home(NVec2::new(750.0, 400.0));
    engine.initialize_population(n, dist)?;
    Ok(engine)
}

/// Time the integration pass alone, for both force laws
pub fn bench_integrator() -> Result<(), ConfigError> {
    // Different population sizes to test
    let ns = [1_000, 2_000, 4_000, 8_000, 16_000, 32_000];

    for n in ns {
        let galaxy = seeded_engine(Variant::Galaxy, n)?;
        let hole = seeded_engine(Variant::Blackhole, n)?;
        let center = galaxy.attractor().position;

        let mut linear_pop = galaxy.population().clone();
        let mut square_pop = hole.population().clone();

        // Warm up
        step_population(&mut linear_pop, &center, galaxy.parameters());
        step_population(&mut square_pop, &center, hole.parameters());

        // Time inverse-linear
        let t0 = Instant::now();
        for _ in 0..FRAMES {
            step_population(&mut linear_pop, &center, galaxy.parameters());
        }
        let dt_linear = t0.elapsed().as_secs_f64() / FRAMES as f64;

        // Time inverse-square (consumed particles just go inert here)
        let t1 = Instant::now();
        for _ in 0..FRAMES {
            step_population(&mut square_pop, &center, hole.parameters());
        }
        let dt_square = t1.elapsed().as_secs_f64() / FRAMES as f64;

        println!("N = {n:6}, 1/r = {:9.6} s/step, 1/r^2 = {:9.6} s/step", dt_linear, dt_square);
    }
    Ok(())
}

/// Time whole frames (integrate, replace, project) per variant
pub fn bench_frame() -> Result<(), ConfigError> {
    let ns = [1_000, 4_000, 16_000];

    for variant in [Variant::Galaxy, Variant::Blackhole] {
        for n in ns {
            let mut engine = seeded_engine(variant, n)?;
            let center = engine.attractor().position;
            let mut buffer = Snapshot::default();

            let t0 = Instant::now();
            for _ in 0..FRAMES {
                buffer = engine.advance_frame_into(center, buffer);
            }
            let per_frame = t0.elapsed().as_secs_f64() / FRAMES as f64;

            println!(
                "{:?} N = {n:6}, {:9.6} s/frame, {} points, {} consumed",
                variant,
                per_frame,
                buffer.points.len(),
                engine.consumed_total()
            );
        }
    }
    Ok(())
}
