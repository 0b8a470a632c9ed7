pub(crate) mod constraint_satisfaction_solver;
pub(crate) mod propagation;
pub(crate) mod termination;

mod assignment;
mod domains;
#[cfg(test)]
pub(crate) mod test_helper;

pub(crate) use assignment::Assignment;
pub(crate) use constraint_satisfaction_solver::ConstraintSatisfactionSolver;
pub(crate) use domains::DomainStore;
