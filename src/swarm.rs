use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clock::SimulationClock;
use crate::interaction::InteractionTable;
use crate::settings::SimulationParameters;
use crate::torus::{Position, Velocity};

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub type_id: usize,
    pub position: Position,
    pub velocity: Velocity,
}

impl Particle {
    /// A particle at rest
    pub fn new(type_id: usize, position: Position) -> Self {
        Self {
            type_id,
            position,
            velocity: Velocity::zeros(),
        }
    }

    /// A particle at rest with a uniformly random type and position
    pub fn random<R: Rng + ?Sized>(rng: &mut R, num_types: usize, scale: f64) -> Self {
        let type_id = rng.gen_range(0..num_types);
        let position = Position::new(rng.gen_range(-scale..scale), rng.gen_range(-scale..scale));
        Self::new(type_id, position)
    }
}

/// Read-only copy of the swarm handed to consumers once per frame
#[derive(Debug, Clone, Default)]
pub struct SwarmSnapshot {
    pub positions: Vec<Position>,
    pub velocities: Vec<Velocity>,
    pub types: Vec<usize>,
    pub particle_count: usize,
    pub type_count: Vec<usize>,
}

/// Everything one running simulation owns: the swarm, its interaction
/// table, the refresh clock and the random source used for refreshes.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub(crate) particles: Vec<Particle>,
    pub(crate) table: InteractionTable,
    pub(crate) clock: SimulationClock,
    pub(crate) rng: StdRng,
    pub(crate) force_buffer: Vec<Vector2<f64>>,
    /// While set, ticks leave the state untouched
    pub paused: bool,
}

impl SimulationState {
    /// Spawns `num_particles` random particles at rest and a freshly
    /// randomized interaction table.
    pub fn new(params: &SimulationParameters) -> Self {
        assert!(params.num_types > 0, "simulation needs at least one type");
        assert!(params.num_particles > 0, "simulation needs at least one particle");
        assert!(params.domain_scale > 0.0, "domain scale must be positive");

        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let particles: Vec<Particle> = (0..params.num_particles)
            .map(|_| Particle::random(&mut rng, params.num_types, params.domain_scale))
            .collect();
        let table = InteractionTable::random(params.num_types, &mut rng);

        log::info!(
            "initialized swarm of {} particles across {} types",
            particles.len(),
            params.num_types
        );

        Self {
            force_buffer: vec![Vector2::zeros(); particles.len()],
            particles,
            table,
            clock: SimulationClock::new(params.refresh_period),
            rng,
            paused: false,
        }
    }

    /// Builds a state from an explicit swarm and table.
    pub fn from_parts(
        particles: Vec<Particle>,
        table: InteractionTable,
        params: &SimulationParameters,
    ) -> Self {
        assert!(!particles.is_empty(), "simulation needs at least one particle");
        assert!(
            particles.iter().all(|p| p.type_id < table.num_types()),
            "particle type outside interaction table"
        );

        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            force_buffer: vec![Vector2::zeros(); particles.len()],
            particles,
            table,
            clock: SimulationClock::new(params.refresh_period),
            rng,
            paused: false,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn table(&self) -> &InteractionTable {
        &self.table
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn num_types(&self) -> usize {
        self.table.num_types()
    }

    pub fn positions(&self) -> impl Iterator<Item = &Position> + '_ {
        self.particles.iter().map(|p| &p.position)
    }

    pub fn types(&self) -> impl Iterator<Item = usize> + '_ {
        self.particles.iter().map(|p| p.type_id)
    }

    pub fn type_count(&self) -> Vec<usize> {
        let mut type_count = vec![0; self.num_types()];
        for type_id in self.types() {
            type_count[type_id] += 1;
        }
        type_count
    }

    pub fn mean_speed(&self) -> f64 {
        let total: f64 = self.particles.iter().map(|p| p.velocity.norm()).sum();
        total / self.particles.len() as f64
    }

    pub fn take_snapshot(&self) -> SwarmSnapshot {
        SwarmSnapshot {
            positions: self.particles.iter().map(|p| p.position).collect(),
            velocities: self.particles.iter().map(|p| p.velocity).collect(),
            types: self.types().collect(),
            particle_count: self.particles.len(),
            type_count: self.type_count(),
        }
    }

    /// Re-randomizes the interaction table now and restarts the refresh period.
    pub fn refresh_table(&mut self) {
        self.table.randomize(&mut self.rng);
        self.clock.reset_phase();
        log::debug!("interaction table refreshed ({} so far)", self.clock.refreshes());
    }

    /// Gives every particle a new random type and position and stops it,
    /// keeping the interaction table.
    pub fn respawn(&mut self, params: &SimulationParameters) {
        let num_types = self.num_types();
        for particle in &mut self.particles {
            *particle = Particle::random(&mut self.rng, num_types, params.domain_scale);
        }
    }
}
