use crate::args::*;
use crate::commands::{
    export_positions, generate_histogram, initialize, particle_count, solve, solve_macro,
};
use clap::Parser;

mod args;
mod commands;


fn main() {
    env_logger::init();
    let args = Args::parse();
    match &args.command {
        Commands::Initialize {
            particle_count,
            width,
            height,
            mean_speed,
            seed,
        } => {
            initialize(
                &args.file,
                *particle_count,
                *width,
                *height,
                *mean_speed,
                *seed,
                args.pretty_print,
            );
        }
        Commands::Solve {
            out_file,
            iteration_count,
            delta_time,
        } => {
            solve(
                &args.file,
                out_file,
                *iteration_count,
                *delta_time,
                args.pretty_print,
            );
        }
        Commands::SolveMacroParameters {
            out_file,
            kinetic_energy,
            temperature,
            all,
        } => {
            if *all {
                solve_macro(&args.file, out_file, true, true);
            } else {
                solve_macro(&args.file, out_file, *kinetic_energy, *temperature);
            }
        }
        Commands::ExportPositions { out_file } => {
            export_positions(&args.file, out_file);
        }
        Commands::GenerateVelocitiesHistogram { out_file, bins } => {
            generate_histogram(&args.file, out_file, *bins);
        }
        Commands::ParticleCount => {
            particle_count(&args.file);
        }
    }
}
