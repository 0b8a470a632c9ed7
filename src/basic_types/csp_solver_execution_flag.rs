/// The outcome of a call to [`crate::engine::ConstraintSatisfactionSolver::solve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CSPSolverExecutionFlag {
    /// A complete, consistent assignment was found.
    Feasible,
    /// No assignment exists within the current domains.
    Infeasible,
    /// The termination condition stopped the search before a conclusion was reached.
    Timeout,
}
