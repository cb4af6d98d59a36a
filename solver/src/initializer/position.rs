use crate::initializer::InitError;
use idealgas_core::{Particle, State};
use na::Vector2;
use rand::Rng;

/// Create a state of `number_particles` particles at rest with unit mass.
pub fn initialize_particles(number_particles: usize) -> State {
    let mut particles: Vec<Particle> = vec![];
    for _ in 0..number_particles {
        particles.push(Particle::default());
    }
    State { particles }
}

/// Scatter particles uniformly over `[0, width) x [0, height)`.
pub fn initialize_particles_position(
    state: &mut State,
    rng: &mut impl Rng,
    width: f64,
    height: f64,
) -> Result<(), InitError> {
    if !(width > 0.0) || !(height > 0.0) {
        return Err(InitError::NonPositiveBox);
    }
    for particle in &mut state.particles {
        particle.position = Vector2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height));
    }
    Ok(())
}
