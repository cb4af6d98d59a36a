use crate::macro_parameters::MacroParametersError;
use idealgas_core::State;

/// Total kinetic energy of the state. An empty state has zero energy.
pub fn get_kinetic_energy(state: &State) -> f64 {
    state
        .particles
        .iter()
        .map(|particle| particle.kinetic_energy())
        .sum()
}

/// Mean kinetic energy per particle.
pub fn get_mean_kinetic_energy(state: &State) -> Result<f64, MacroParametersError> {
    if state.particles.is_empty() {
        return Err(MacroParametersError::EmptyState);
    }
    Ok(get_kinetic_energy(state) / state.particles.len() as f64)
}
