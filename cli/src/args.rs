use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// path to file with particles data
    #[arg(short = 'f', long)]
    pub file: PathBuf,
    /// pretty print output json
    #[arg(short = 'p', long, default_value_t = false)]
    pub pretty_print: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// initialize a randomized gas state
    Initialize {
        /// number of particles
        #[arg(short = 'n', long, default_value_t = 30)]
        particle_count: usize,
        /// box width
        #[arg(short = 'W', long, default_value_t = 10.0)]
        width: f64,
        /// box height
        #[arg(short = 'H', long, default_value_t = 10.0)]
        height: f64,
        /// mean particle speed
        #[arg(short = 'v', long, default_value_t = 1.0)]
        mean_speed: f64,
        /// RNG seed for a reproducible state
        #[arg(short = 's', long)]
        seed: Option<u64>,
    },
    /// run solver on particle state
    Solve {
        /// file for output
        #[arg(short = 'o', long)]
        out_file: PathBuf,
        /// number of time steps
        #[arg(short = 'i', long, default_value_t = 500)]
        iteration_count: usize,
        /// time step size
        #[arg(short = 'd', long, default_value_t = 0.05)]
        delta_time: f64,
    },
    /// compute macro parameters of a saved state
    SolveMacroParameters {
        /// file for output
        #[arg(short = 'o', long)]
        out_file: PathBuf,
        /// total and mean kinetic energy
        #[arg(short = 'k', long, default_value_t = false)]
        kinetic_energy: bool,
        /// effective temperature
        #[arg(short = 't', long, default_value_t = false)]
        temperature: bool,
        /// all macro parameters
        #[arg(long, default_value_t = false)]
        all: bool,
    },
    /// export particle positions for plotting
    ExportPositions {
        /// file for output
        #[arg(short = 'o', long)]
        out_file: PathBuf,
    },
    /// histogram of particle speeds
    GenerateVelocitiesHistogram {
        /// file for output
        #[arg(short = 'o', long)]
        out_file: PathBuf,
        /// number of histogram bins
        #[arg(short = 'b', long, default_value_t = 20)]
        bins: usize,
    },
    /// print number of particles in file
    ParticleCount,
}
