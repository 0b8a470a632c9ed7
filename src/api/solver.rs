use log::debug;

use super::outputs::SatisfactionResult;
use super::outputs::Solution;
use super::options::SolverOptions;
use crate::basic_types::statistic_logging::log_statistic_postfix;
use crate::basic_types::CSPSolverExecutionFlag;
use crate::basic_types::EmptyDomain;
use crate::branching::Brancher;
use crate::branching::DefaultBrancher;
use crate::engine::termination::Indefinite;
use crate::engine::termination::TerminationCondition;
use crate::engine::Assignment;
use crate::engine::ConstraintSatisfactionSolver;
use crate::model::Puzzle;
use crate::model::VariableId;
use crate::model::Vocabulary;
use crate::propagators::DirectedArc;

/// The main interaction point which allows the filling of a crossword.
///
/// A [`Solver`] is created from a [`Puzzle`] and a [`Vocabulary`]; initially every variable may
/// take every word. The domains can then be narrowed step by step
/// ([`Solver::enforce_node_consistency`], [`Solver::revise`], [`Solver::ac3`]) before searching
/// with [`Solver::satisfy`], or all of it can be done at once with [`Solver::solve`].
///
/// # Example
/// ```
/// use crossfill::model::Puzzle;
/// use crossfill::model::Vocabulary;
/// use crossfill::results::SatisfactionResult;
/// use crossfill::Solver;
///
/// // ___
/// // _##
/// // _##
/// let structure = vec![
///     vec![true, true, true],
///     vec![true, false, false],
///     vec![true, false, false],
/// ];
/// let puzzle = Puzzle::new(3, 3, structure).expect("rows have the declared width");
/// let vocabulary = Vocabulary::new(["CAT", "COW"]);
///
/// let mut solver = Solver::new(puzzle, vocabulary);
/// let SatisfactionResult::Satisfiable(solution) = solver.solve() else {
///     panic!("the crossing words share their first letter");
/// };
///
/// let words: Vec<&str> = solution.iter().map(|(_, word)| word).collect();
/// assert_eq!(words, vec!["CAT", "COW"]);
/// ```
#[derive(Debug)]
pub struct Solver {
    /// The internal [`ConstraintSatisfactionSolver`] which is used to solve the problems.
    engine: ConstraintSatisfactionSolver,
    options: SolverOptions,
}

impl Solver {
    pub fn new(puzzle: Puzzle, vocabulary: Vocabulary) -> Solver {
        Solver::with_options(puzzle, vocabulary, SolverOptions::default())
    }

    pub fn with_options(puzzle: Puzzle, vocabulary: Vocabulary, options: SolverOptions) -> Solver {
        Solver {
            engine: ConstraintSatisfactionSolver::new(puzzle, vocabulary),
            options,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        self.engine.puzzle()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        self.engine.vocabulary()
    }

    /// The candidate words of `variable`, in vocabulary order.
    pub fn domain(&self, variable: VariableId) -> impl Iterator<Item = &str> + '_ {
        let vocabulary = self.engine.vocabulary();
        self.engine
            .domain(variable)
            .iter()
            .map(|&word| vocabulary.word(word))
    }

    /// Whether a propagation step has shown that the puzzle has no solution.
    pub fn is_inconsistent(&self) -> bool {
        self.engine.is_infeasible()
    }

    /// Remove every word whose length differs from the length of its variable.
    ///
    /// Returns an [`EmptyDomain`] error if a variable is left without candidates, after which the
    /// solver is inconsistent.
    pub fn enforce_node_consistency(&mut self) -> Result<(), EmptyDomain> {
        self.engine.enforce_node_consistency()
    }

    /// Make `x` arc consistent with `y`. Returns whether the domain of `x` changed.
    ///
    /// A word of `x` is kept only if some other word of `y` has the same letter in the cell the
    /// two variables share. Variables which do not cross are left untouched.
    pub fn revise(&mut self, x: VariableId, y: VariableId) -> bool {
        self.engine.revise(x, y)
    }

    /// Enforce arc consistency with AC-3, starting from the given arcs or, if `None`, from every
    /// arc of the puzzle.
    ///
    /// Returns an [`EmptyDomain`] error if a domain becomes empty, after which the solver is
    /// inconsistent.
    pub fn ac3(&mut self, arcs: Option<Vec<DirectedArc>>) -> Result<(), EmptyDomain> {
        self.engine.ac3(arcs)
    }

    /// Search for a solution over the current domains, using the provided [`Brancher`] to make
    /// decisions and the [`TerminationCondition`] to decide when to give up.
    ///
    /// The domains are not narrowed by this call; see [`Solver::solve`] for the full pipeline.
    pub fn satisfy(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
    ) -> SatisfactionResult {
        match self.engine.solve(termination, brancher) {
            CSPSolverExecutionFlag::Feasible => match self.engine.solution() {
                Some(assignment) => SatisfactionResult::Satisfiable(self.extract(assignment)),
                None => unreachable!("a feasible search always stores its solution"),
            },
            CSPSolverExecutionFlag::Infeasible => SatisfactionResult::Unsatisfiable,
            CSPSolverExecutionFlag::Timeout => SatisfactionResult::Unknown,
        }
    }

    /// Fill the crossword with the [`DefaultBrancher`] and without a budget. See
    /// [`Solver::solve_with`].
    pub fn solve(&mut self) -> SatisfactionResult {
        self.solve_with(&mut DefaultBrancher::default(), &mut Indefinite)
    }

    /// Enforce node consistency, then arc consistency (unless disabled in the [`SolverOptions`]),
    /// and finally search with the given brancher and termination condition.
    pub fn solve_with(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
    ) -> SatisfactionResult {
        if self.engine.enforce_node_consistency().is_err() {
            return SatisfactionResult::Unsatisfiable;
        }

        if self.options.arc_consistency && self.engine.ac3(None).is_err() {
            debug!("Arc consistency showed the puzzle has no solution");
            return SatisfactionResult::Unsatisfiable;
        }

        self.satisfy(brancher, termination)
    }

    /// Log the statistics gathered so far through the configured statistic logger.
    pub fn log_statistics(&self) {
        self.engine.log_statistics();
        log_statistic_postfix();
    }

    fn extract(&self, assignment: &Assignment) -> Solution {
        let puzzle = self.engine.puzzle();
        let vocabulary = self.engine.vocabulary();

        let entries = assignment
            .iter()
            .map(|(variable, word)| {
                (
                    *puzzle.variable(variable),
                    vocabulary.word(word).to_owned(),
                )
            })
            .collect();

        Solution::new(entries)
    }
}
