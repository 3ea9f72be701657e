//! Procedural underwater environment: derived sensor readings, a drifting
//! particle field, a moving probe and a rolling sensor history, all advanced
//! one frame at a time.

pub mod clock;
pub mod config;
pub mod environment;
pub mod history;
pub mod parameters;
pub mod particles;
pub mod probe;
pub mod simulation;

pub use clock::{FrameLoop, SimulationClock, TICK_SECONDS};
pub use config::{Config, ConfigError};
pub use environment::Metrics;
pub use history::{SensorHistory, SensorSample};
pub use parameters::{Parameter, Parameters};
pub use particles::{Particle, ParticleField};
pub use probe::{ProbeView, SonarRing};
pub use simulation::{ParticleView, Simulation, Snapshot};
