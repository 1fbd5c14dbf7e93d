//! Particle Life: typed particles attracting and repelling each other on a
//! wrap-around plane, with the interaction rules re-rolled periodically.
//!
//! ```no_run
//! use particle_swarm::{initialize, tick, SimulationParameters};
//!
//! let params = SimulationParameters::default();
//! let mut state = initialize(&params);
//! loop {
//!     tick(&mut state, &params, 1.0 / 60.0);
//!     let _vertices = state.point_cloud();
//! }
//! ```

pub mod clock;
pub mod error;
pub mod force;
pub mod integrator;
pub mod interaction;
pub mod point_cloud;
pub mod settings;
pub mod stepper;
pub mod swarm;
pub mod torus;

pub use clock::SimulationClock;
pub use error::ConfigError;
pub use interaction::{InteractionTable, Rule};
pub use point_cloud::PointVertex;
pub use settings::{SimulationParameters, UpdateOrder};
pub use stepper::tick;
pub use swarm::{Particle, SimulationState, SwarmSnapshot};
pub use torus::{Position, Velocity};

/// Spawns a random swarm and a freshly randomized interaction table.
pub fn initialize(params: &SimulationParameters) -> SimulationState {
    SimulationState::new(params)
}
