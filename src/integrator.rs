use nalgebra::Vector2;

use crate::swarm::Particle;
use crate::torus::wrap_position;

/// Advances one particle by a single unit tick.
///
/// The force is taken as the acceleration (unit mass). Friction damps the
/// velocity after the force is applied, on every tick, and the new position
/// is wrapped back into `[-scale, scale)` on both axes.
pub fn step(particle: &mut Particle, force: &Vector2<f64>, friction: f64, scale: f64) {
    particle.velocity += force;
    particle.velocity *= friction;
    particle.position += particle.velocity;
    particle.position = wrap_position(&particle.position, scale);
}
