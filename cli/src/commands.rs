use idealgas_core::{DataFile, K_B};
use idealgas_solver::initializer::initialize_gas;
use idealgas_solver::macro_parameters::{
    get_kinetic_energy, get_mean_kinetic_energy, get_temperature,
};
use idealgas_solver::solver::Integrator;
use indicatif::ProgressBar;
use std::path::PathBuf;

pub fn initialize(
    file: &PathBuf,
    particle_count: usize,
    width: f64,
    height: f64,
    mean_speed: f64,
    seed: Option<u64>,
    pretty_print: bool,
) {
    let state = initialize_gas(particle_count, width, height, mean_speed, seed)
        .expect("Can't initialize gas");
    let data = DataFile::init_from_state(&state, width, height);
    data.save_to_file(file, pretty_print)
        .expect("Can't save data to file");
    log::info!(
        "saved {} particles to {}",
        particle_count,
        file.to_string_lossy()
    );
}

pub fn solve(
    in_file: &PathBuf,
    out_file: &PathBuf,
    iteration_count: usize,
    delta_time: f64,
    pretty_print: bool,
) {
    let data = DataFile::load_from_file(in_file).expect("Can't load data from file");
    let (width, height) = (data.width, data.height);
    let mut state = data.state;
    let integrator = Integrator::FreeFlight;
    log::info!("total energy before run: {:e}", get_kinetic_energy(&state));
    let pb = ProgressBar::new(iteration_count as u64);
    for _ in 0..iteration_count {
        integrator.calculate(&mut state, delta_time, width, height);
        pb.inc(1);
    }
    pb.finish_with_message(format!(
        "Calculated. State saved to {}",
        out_file.to_string_lossy()
    ));
    log::info!("total energy after run: {:e}", get_kinetic_energy(&state));
    let data = DataFile::init_from_state(&state, width, height);
    data.save_to_file(out_file, pretty_print)
        .expect("Can't save data to file");
}

pub fn solve_macro(file: &PathBuf, out_file: &PathBuf, kinetic_energy: bool, temperature: bool) {
    let data = DataFile::load_from_file(file).expect("Can't load data from file");
    let state = data.state;
    let mut header: Vec<String> = vec!["particle_count".into()];
    let mut row: Vec<String> = vec![format!("{}", state.particles.len())];
    if kinetic_energy {
        header.push("kinetic_energy".into());
        row.push(format!("{}", get_kinetic_energy(&state)));
        header.push("mean_kinetic_energy".into());
        row.push(format!(
            "{}",
            get_mean_kinetic_energy(&state).expect("Can't compute mean energy of empty state")
        ));
    }
    if temperature {
        header.push("temperature".into());
        row.push(format!(
            "{}",
            get_temperature(&state, K_B).expect("Can't compute temperature of empty state")
        ));
    }
    let mut writer = csv::Writer::from_path(out_file).expect("Can't create file");
    writer.write_record(&header).expect("Can't write to file");
    writer.write_record(&row).expect("Can't write to file");
    writer.flush().expect("Can't write to file");
}

pub fn export_positions(file: &PathBuf, out_file: &PathBuf) {
    let data = DataFile::load_from_file(file).expect("Can't load data from file");
    let mut writer = csv::Writer::from_path(out_file).expect("Can't create file");
    writer.write_record(["x", "y"]).expect("Can't write to file");
    for (x, y) in data.state.positions() {
        writer
            .write_record(&[format!("{}", x), format!("{}", y)])
            .expect("Can't write to file");
    }
    writer.flush().expect("Can't write to file");
}

pub fn generate_histogram(file: &PathBuf, out_file: &PathBuf, bins: usize) {
    let data = DataFile::load_from_file(file).expect("Can't load data from file");
    let state = data.state;
    let mut writer = csv::Writer::from_path(out_file).expect("Can't create file");
    writer
        .write_record(["bin_low", "bin_high", "count"])
        .expect("Can't write to file");
    if state.particles.is_empty() || bins == 0 {
        writer.flush().expect("Can't write to file");
        return;
    }
    let (v_min, v_max) = state.get_min_max_velocity();
    let bin_width = (v_max - v_min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for particle in &state.particles {
        let speed = particle.velocity.magnitude();
        // all speeds equal leaves a single degenerate bin
        let index = if bin_width > 0.0 {
            (((speed - v_min) / bin_width) as usize).min(bins - 1)
        } else {
            0
        };
        counts[index] += 1;
    }
    for (i, count) in counts.iter().enumerate() {
        writer
            .write_record(&[
                format!("{}", v_min + bin_width * i as f64),
                format!("{}", v_min + bin_width * (i + 1) as f64),
                format!("{}", count),
            ])
            .expect("Can't write to file");
    }
    writer.flush().expect("Can't write to file");
}

pub fn particle_count(file: &PathBuf) {
    let data = DataFile::load_from_file(file).expect("Can't load data from file");
    println!("{}", data.state.particles.len());
}
