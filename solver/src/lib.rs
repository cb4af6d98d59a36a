extern crate idealgas_core;
extern crate nalgebra as na;
extern crate rand_distr;
pub mod initializer;
pub mod macro_parameters;
pub mod solver;
