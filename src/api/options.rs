/// Options which determine how the [`crate::Solver`] prepares the domains before search.
#[derive(Clone, Copy, Debug)]
pub struct SolverOptions {
    /// Whether [`crate::Solver::solve`] runs AC-3 after node consistency. Search is complete
    /// either way; arc consistency only shrinks the domains it explores.
    pub arc_consistency: bool,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            arc_consistency: true,
        }
    }
}
