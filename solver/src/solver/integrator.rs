use idealgas_core::State;

pub enum Integrator {
    /// Straight-line flight between wall contacts
    FreeFlight,
}

impl Integrator {
    /// One time step: move every particle along its velocity, then resolve
    /// wall contacts. Particles are processed in their stored order and do
    /// not interact, so the evolution of a given state is deterministic.
    pub fn calculate(&self, state: &mut State, delta_time: f64, width: f64, height: f64) {
        match self {
            Integrator::FreeFlight => {
                state.particles.iter_mut().for_each(|particle| {
                    particle.advance(delta_time);
                });
                state.apply_boundary_conditions(width, height);
            }
        }
    }
}
