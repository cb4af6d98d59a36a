use crate::macro_parameters::{get_mean_kinetic_energy, MacroParametersError};
use idealgas_core::State;

/// Effective temperature of the gas from its mean kinetic energy.
pub fn get_temperature(state: &State, k_b: f64) -> Result<f64, MacroParametersError> {
    let mean_energy = get_mean_kinetic_energy(state)?;
    Ok((2.0 / 2.0) * mean_energy / k_b) // 2 degrees of freedom (x, y)
}
