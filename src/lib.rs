pub mod simulation;
pub mod configuration;
pub mod presentation;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, BodyKind, System, NVec3};
pub use simulation::forces::{NewtonianGravity, Softening};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::clock::SimulationClock;
pub use simulation::trail::OrbitTrail;
pub use simulation::params::Parameters;
pub use simulation::engine::RunState;
pub use simulation::driver::Simulation;
pub use simulation::scenario::build_simulation;

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig, SofteningMode};

pub use presentation::report::{BodyReport, TrailFilter};

pub use benchmark::benchmark::bench_tick_curve;

pub use error::{ConfigError, SimError};
