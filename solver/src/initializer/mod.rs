mod position;
mod velocity;

pub use position::*;
pub use velocity::*;

use idealgas_core::State;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Eq, PartialEq, Debug)]
pub enum InitError {
    NonPositiveBox,
    NonPositiveMeanSpeed,
}

/// Build a randomized gas of `number_particles` particles in the box
/// `[0, width) x [0, height)` around mean speed `mean_speed`.
///
/// Configuration is checked before any particle is created. Pass `seed` to
/// make the result reproducible; `None` seeds from entropy.
pub fn initialize_gas(
    number_particles: usize,
    width: f64,
    height: f64,
    mean_speed: f64,
    seed: Option<u64>,
) -> Result<State, InitError> {
    if !(width > 0.0) || !(height > 0.0) {
        return Err(InitError::NonPositiveBox);
    }
    if !(mean_speed > 0.0) {
        return Err(InitError::NonPositiveMeanSpeed);
    }
    let mut rng: StdRng = match seed {
        Some(seed) => SeedableRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut state = initialize_particles(number_particles);
    initialize_particles_position(&mut state, &mut rng, width, height)?;
    initialize_velocities_for_gas(&mut state, &mut rng, mean_speed)?;
    log::debug!(
        "initialized {} particles in {}x{} box",
        number_particles,
        width,
        height
    );
    Ok(state)
}
