use na::Vector2;
use serde::{Deserialize, Serialize};

/// Structure that keeps all data for particle
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Particle {
    /// position of particle in the box
    pub position: Vector2<f64>,
    /// velocity of particle
    pub velocity: Vector2<f64>,
    /// Mass of particle
    pub mass: f64,
}

/// Structure that keeps current state
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct State {
    /// Particles that exists right now
    pub particles: Vec<Particle>,
}

impl Particle {
    /// Create new particle in given position with given velocity and unit mass.
    pub fn new(position: Vector2<f64>, velocity: Vector2<f64>) -> Self {
        Particle {
            position,
            velocity,
            mass: 1.0,
        }
    }

    /// Move the particle along its velocity for `delta_time`.
    pub fn advance(&mut self, delta_time: f64) {
        self.position += self.velocity * delta_time;
    }

    /// Bounce the particle off the walls of the box `[0, width] x [0, height]`.
    ///
    /// Each axis is checked independently, so a corner contact reflects both
    /// components in one call. On wall contact the normal velocity component
    /// is negated and the coordinate is clamped back into the box.
    ///
    /// # Examples
    ///
    /// ```
    /// # use nalgebra::Vector2;
    /// # use idealgas_core::Particle;
    /// let mut particle = Particle::new(Vector2::new(0.0, 0.5), Vector2::new(-1.0, 0.0));
    /// particle.reflect(1.0, 1.0);
    /// assert_eq!(particle.velocity.x, 1.0);
    /// assert!(particle.position.x >= 0.0 && particle.position.x <= 1.0);
    /// ```
    pub fn reflect(&mut self, width: f64, height: f64) {
        if self.position.x <= 0.0 || self.position.x >= width {
            self.velocity.x = -self.velocity.x;
            self.position.x = self.position.x.clamp(0.0, width);
        }
        if self.position.y <= 0.0 || self.position.y >= height {
            self.velocity.y = -self.velocity.y;
            self.position.y = self.position.y.clamp(0.0, height);
        }
    }

    /// Kinetic energy of the particle, `m * v^2 / 2`.
    pub fn kinetic_energy(&self) -> f64 {
        self.mass * self.velocity.dot(&self.velocity) / 2.0
    }
}

impl Default for Particle {
    /// Creates particle at rest in the box origin with mass 1.0.
    fn default() -> Self {
        Particle {
            position: Vector2::new(0.0, 0.0),
            velocity: Vector2::new(0.0, 0.0),
            mass: 1.0,
        }
    }
}

impl State {
    /// Makes every particle bounce off the box walls.
    pub fn apply_boundary_conditions(&mut self, width: f64, height: f64) {
        self.particles.iter_mut().for_each(|particle| {
            particle.reflect(width, height);
        });
    }

    /// Current particle coordinates in particle order.
    ///
    /// The iterator borrows the state, so it observes the positions as of the
    /// call; restart it after a step to see the new ones.
    pub fn positions(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.particles
            .iter()
            .map(|particle| (particle.position.x, particle.position.y))
    }

    /// Get minimal and maximum speed of particles.
    /// > **Warning**
    /// > This function doesn't check that the state has any particles!
    pub fn get_min_max_velocity(&self) -> (f64, f64) {
        let mut v_squared_max = 0.0;
        let mut v_squared_min = f64::MAX;
        self.particles.iter().for_each(|particle| {
            let velocity_squared = particle.velocity.magnitude_squared();
            if velocity_squared > v_squared_max {
                v_squared_max = velocity_squared;
            }
            if velocity_squared < v_squared_min {
                v_squared_min = velocity_squared;
            }
        });
        (v_squared_min.sqrt(), v_squared_max.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_along_velocity() {
        let mut particle = Particle::new(Vector2::new(0.5, 0.5), Vector2::new(1.0, -0.5));
        particle.advance(0.1);
        assert!((particle.position.x - 0.6).abs() < 1e-12);
        assert!((particle.position.y - 0.45).abs() < 1e-12);
        assert_eq!(particle.velocity, Vector2::new(1.0, -0.5));
    }

    #[test]
    fn reflect_on_left_wall() {
        let mut particle = Particle::new(Vector2::new(0.0, 0.5), Vector2::new(-1.0, 0.0));
        particle.reflect(1.0, 1.0);
        assert_eq!(particle.velocity.x, 1.0);
        assert_eq!(particle.velocity.y, 0.0);
        assert!(particle.position.x >= 0.0 && particle.position.x <= 1.0);
    }

    #[test]
    fn reflect_clamps_overshoot() {
        let mut particle = Particle::new(Vector2::new(1.5, 0.5), Vector2::new(2.0, 0.0));
        particle.reflect(1.0, 1.0);
        assert_eq!(particle.position.x, 1.0);
        assert_eq!(particle.velocity.x, -2.0);
    }

    #[test]
    fn reflect_corner_flips_both_components() {
        let mut particle = Particle::new(Vector2::new(-0.1, 1.2), Vector2::new(-0.5, 0.5));
        particle.reflect(1.0, 1.0);
        assert_eq!(particle.velocity.x, 0.5);
        assert_eq!(particle.velocity.y, -0.5);
        assert_eq!(particle.position.x, 0.0);
        assert_eq!(particle.position.y, 1.0);
    }

    // Wall contact is decided by position alone, so a particle sitting
    // exactly on a wall is flipped even when it already moves inward.
    #[test]
    fn reflect_on_wall_contact_ignores_velocity_direction() {
        let mut particle = Particle::new(Vector2::new(0.0, 0.5), Vector2::new(1.0, 0.0));
        particle.reflect(1.0, 1.0);
        assert_eq!(particle.velocity.x, -1.0);
    }

    #[test]
    fn kinetic_energy_computed() {
        let mut particle = Particle::new(Vector2::new(0.0, 0.0), Vector2::new(3.0, 4.0));
        particle.mass = 2.0;
        // |v|^2 = 25, E = 0.5 * 2 * 25
        assert!((particle.kinetic_energy() - 25.0).abs() < 1e-12);
    }

    #[test]
    fn boundary_conditions_keep_particles_in_box() {
        let mut state = State {
            particles: vec![
                Particle::new(Vector2::new(-0.5, 0.5), Vector2::new(-1.0, 0.0)),
                Particle::new(Vector2::new(2.5, 3.5), Vector2::new(1.0, 1.0)),
            ],
        };
        state.apply_boundary_conditions(2.0, 3.0);
        for particle in &state.particles {
            assert!(particle.position.x >= 0.0 && particle.position.x <= 2.0);
            assert!(particle.position.y >= 0.0 && particle.position.y <= 3.0);
        }
    }

    #[test]
    fn positions_iterate_in_particle_order() {
        let state = State {
            particles: vec![
                Particle::new(Vector2::new(1.0, 2.0), Vector2::new(0.0, 0.0)),
                Particle::new(Vector2::new(3.0, 4.0), Vector2::new(0.0, 0.0)),
            ],
        };
        let positions: Vec<(f64, f64)> = state.positions().collect();
        assert_eq!(positions, vec![(1.0, 2.0), (3.0, 4.0)]);
    }
}
