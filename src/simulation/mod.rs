pub mod states;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod clock;
pub mod trail;
pub mod driver;
pub mod scenario;
