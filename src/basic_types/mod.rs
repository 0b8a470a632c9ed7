mod csp_solver_execution_flag;
mod propagation_status;
pub(crate) mod statistic_logging;

pub(crate) use csp_solver_execution_flag::CSPSolverExecutionFlag;
pub use propagation_status::EmptyDomain;
pub(crate) use propagation_status::PropagationStatus;

pub(crate) type HashSet<K> = fnv::FnvHashSet<K>;
