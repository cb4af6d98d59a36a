use crate::initializer::InitError;
use idealgas_core::State;
use na::Vector2;
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use std::f64::consts::PI;

/// Draw a random heading and speed for every particle.
///
/// Headings are uniform over `[0, 2*pi)`, speeds are uniform over
/// `[0.8 * mean_speed, 1.2 * mean_speed]`.
pub fn initialize_velocities_for_gas(
    state: &mut State,
    rng: &mut impl Rng,
    mean_speed: f64,
) -> Result<(), InitError> {
    if !(mean_speed > 0.0) {
        return Err(InitError::NonPositiveMeanSpeed);
    }
    let angle_distribution = Uniform::new(0.0, 2.0 * PI);
    let speed_distribution = Uniform::new_inclusive(0.8 * mean_speed, 1.2 * mean_speed);
    for particle in &mut state.particles {
        let angle = angle_distribution.sample(rng);
        let speed = speed_distribution.sample(rng);
        particle.velocity = Vector2::new(speed * angle.cos(), speed * angle.sin());
    }
    Ok(())
}
