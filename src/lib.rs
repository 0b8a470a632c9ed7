//! # Crossfill
//! Crossfill fills a crossword structure with words from a vocabulary by modelling it as a
//! Constraint Satisfaction Problem. Every slot of the grid is a variable whose domain is a set
//! of candidate words; crossing slots must agree on their shared cell, and no word may be used
//! twice.
//!
//! Solving happens in three steps:
//! 1. Node consistency removes the words whose length does not match the slot.
//! 2. Arc consistency (AC-3) removes the words which have no partner in a crossing slot.
//! 3. Backtracking search, guided by a [`branching::Brancher`], picks words until the grid is full.
//!
//! The [`Solver`] is the entry point; see its documentation for an example. Structure and words
//! files are read by the `crossfill-format` crate, and [`render`] turns a solution back into a
//! grid.
pub mod asserts;
pub mod branching;
pub mod model;
pub mod render;
pub mod runner;

mod api;
mod basic_types;
mod engine;
mod propagators;
#[cfg(test)]
mod tests;

pub use api::Solver;
pub use basic_types::EmptyDomain;
pub use branching::DefaultBrancher;
pub use propagators::DirectedArc;

pub mod statistics {
    //! Contains functions which configure the printing of solver statistics.
    pub use crate::basic_types::statistic_logging::configure;
    pub use crate::basic_types::statistic_logging::log_statistic;
    pub use crate::basic_types::statistic_logging::log_statistic_postfix;
    pub use crate::basic_types::statistic_logging::should_log_statistics;
}

pub mod termination {
    //! Contains the conditions which can stop the search before it reaches a conclusion.
    pub use crate::engine::termination::*;
}

pub mod results {
    //! Contains the outputs of the [`crate::Solver`].
    pub use crate::api::outputs::*;
}

pub mod options {
    //! Contains the options of the [`crate::Solver`].
    pub use crate::api::SolverOptions;
}
