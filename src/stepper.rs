use nalgebra::Vector2;
use rayon::prelude::*;

use crate::force::pairwise_force;
use crate::integrator;
use crate::interaction::InteractionTable;
use crate::settings::{SimulationParameters, UpdateOrder};
use crate::swarm::{Particle, SimulationState};
use crate::torus;

/// Advances the simulation by one tick of `dt` simulated seconds.
///
/// Does nothing while the state is paused. Otherwise the refresh clock is
/// advanced first (possibly re-randomizing the interaction table), then
/// every particle is pushed by every other particle and integrated.
/// `params.domain_scale` is read here on every call.
pub fn tick(state: &mut SimulationState, params: &SimulationParameters, dt: f64) {
    if state.paused {
        return;
    }

    assert_eq!(
        state.table.num_types(),
        params.num_types,
        "interaction table does not match the configured number of types"
    );
    assert!(params.domain_scale > 0.0, "domain scale must be positive");

    if state.clock.advance(dt) {
        state.table.randomize(&mut state.rng);
        log::debug!(
            "interaction table refreshed at t={:.2}s ({} so far)",
            state.clock.elapsed(),
            state.clock.refreshes()
        );
    }

    match params.update_order {
        UpdateOrder::Sequential => step_sequential(state, params),
        UpdateOrder::Parallel => step_parallel(state, params),
    }
}

/// Every other particle index, in order.
pub(crate) fn partners(i: usize, count: usize) -> impl Iterator<Item = usize> {
    (0..count).filter(move |&j| j != i)
}

/// Sum of the forces every other particle exerts on particle `i`.
pub fn accumulate_force(
    i: usize,
    particles: &[Particle],
    table: &InteractionTable,
    gain: f64,
    scale: f64,
) -> Vector2<f64> {
    let particle = &particles[i];
    partners(i, particles.len()).fold(Vector2::zeros(), |total, j| {
        let other = &particles[j];
        let delta = torus::displacement(&particle.position, &other.position, scale);
        let (distance, direction) = torus::separation(delta);
        total + pairwise_force(particle.type_id, other.type_id, distance, &direction, table, gain)
    })
}

// Each particle moves before the next one's force is computed.
fn step_sequential(state: &mut SimulationState, params: &SimulationParameters) {
    let scale = params.domain_scale;
    for i in 0..state.particles.len() {
        let force = accumulate_force(i, &state.particles, &state.table, params.attraction_gain, scale);
        integrator::step(&mut state.particles[i], &force, params.friction, scale);
    }
}

// All forces come from the positions at the start of the tick.
fn step_parallel(state: &mut SimulationState, params: &SimulationParameters) {
    let scale = params.domain_scale;
    let gain = params.attraction_gain;
    let friction = params.friction;

    let count = state.particles.len();
    if state.force_buffer.len() != count {
        state.force_buffer.resize(count, Vector2::zeros());
    }

    let particles = &state.particles;
    let table = &state.table;
    let chunk_size = (count / num_cpus::get()).max(1);

    state
        .force_buffer
        .par_chunks_mut(chunk_size)
        .enumerate()
        .for_each(|(chunk_idx, force_chunk)| {
            let start_idx = chunk_idx * chunk_size;
            for (local_i, force) in force_chunk.iter_mut().enumerate() {
                *force = accumulate_force(start_idx + local_i, particles, table, gain, scale);
            }
        });

    let forces = &state.force_buffer;
    state
        .particles
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, particle)| integrator::step(particle, &forces[i], friction, scale));
}
