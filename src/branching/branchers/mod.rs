//! Provides several implementations of [`crate::branching::Brancher`]s.
pub mod independent_variable_value_brancher;

pub use independent_variable_value_brancher::DefaultBrancher;
pub use independent_variable_value_brancher::IndependentVariableValueBrancher;
