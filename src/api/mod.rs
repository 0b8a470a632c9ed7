mod options;
pub(crate) mod outputs;
mod solver;

pub use options::SolverOptions;
pub use solver::Solver;
