mod energy;
mod temperature;

pub use energy::*;
pub use temperature::*;

#[derive(Eq, PartialEq, Debug)]
pub enum MacroParametersError {
    EmptyState,
}
