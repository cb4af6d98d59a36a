mod particle;
mod save_data;
extern crate nalgebra as na;
extern crate serde;

pub use particle::Particle;
pub use particle::State;
pub use save_data::DataFile;
pub use save_data::SaveLoadError;

/// Boltzmann constant in J/K.
pub const K_B: f64 = 1.38e-23;

#[cfg(test)]
mod tests {
    use crate::DataFile;
    use crate::Particle;
    use crate::State;
    use na::Vector2;
    use tempdir::TempDir;

    fn test_particle() -> Particle {
        Particle {
            position: Vector2::new(0.1, 0.2),
            velocity: Vector2::new(1.5, -0.5),
            mass: 2.0,
        }
    }

    fn check_particle_equality(p1: &Particle, p2: &Particle) {
        assert_eq!(p1.position, p2.position);
        assert_eq!(p1.velocity, p2.velocity);
        assert_eq!(p1.mass, p2.mass);
    }

    #[test]
    fn state_serialization() {
        let state = State {
            particles: vec![test_particle(), test_particle()],
        };

        let serialized = serde_json::to_string(&state).unwrap();
        let deserialized: State = serde_json::from_str(&serialized).unwrap();

        for p in &deserialized.particles {
            check_particle_equality(p, &test_particle());
        }
    }

    #[test]
    fn data_file_round_trip() {
        let temp_dir = TempDir::new("test_dir").expect("Can't create temp directory");
        let mut path = temp_dir.into_path();
        path.push("state.json");
        let state = State {
            particles: vec![test_particle()],
        };
        let data = DataFile::init_from_state(&state, 10.0, 5.0);
        data.save_to_file(&path, true).expect("Can't save data to file");
        let loaded = DataFile::load_from_file(&path).expect("Can't load data from file");
        assert_eq!(loaded.width, 10.0);
        assert_eq!(loaded.height, 5.0);
        assert_eq!(loaded.state.particles.len(), 1);
        check_particle_equality(&loaded.state.particles[0], &test_particle());
    }
}
