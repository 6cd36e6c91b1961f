pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Particle, Attractor, Population, NVec2};
pub use simulation::params::Parameters;
pub use simulation::forces::ForceLaw;
pub use simulation::integrator::{semi_implicit_euler, step_population, StepOutcome};
pub use simulation::spawner::{spawn_orbiting, circular_orbit, Brush, DiskDistribution, SpiralArms, SpawnPattern};
pub use simulation::engine::{Engine, SimError, Variant};
pub use simulation::scenario::Scenario;
pub use simulation::runner::{spawn_loop, run_loop, HostEvent, StopReason};

pub use configuration::config::{ScenarioConfig, VariantConfig, PhysicsConfig, LensConfig, PopulationConfig, SandboxConfig};
pub use configuration::error::ConfigError;

pub use visualization::lensing::{LensProjector, LensedImages};
pub use visualization::palette::{ColorBucket, StarClass, StarTint};
pub use visualization::snapshot::{RenderPoint, Snapshot, SnapshotSlot};

pub use benchmark::benchmark::{bench_integrator, bench_frame};
