//! Houses the solver which fills a crossword by treating it as a Constraint Satisfaction Problem
//! (CSP): consistency filtering first, then backtracking search over the filtered domains.

use std::cmp::max;
use std::time::Instant;

use log::debug;
use log::warn;

use super::propagation::PropagationContextMut;
use super::propagation::PropagationCounters;
use super::propagation::Propagator;
use super::termination::TerminationCondition;
use super::Assignment;
use super::DomainStore;
use crate::basic_types::statistic_logging::log_statistic;
use crate::basic_types::CSPSolverExecutionFlag;
use crate::basic_types::EmptyDomain;
use crate::basic_types::PropagationStatus;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::crossfill_assert_advanced;
use crate::crossfill_assert_simple;
use crate::model::Puzzle;
use crate::model::VariableId;
use crate::model::Vocabulary;
use crate::model::WordId;
use crate::propagators::arc_consistency;
use crate::propagators::ArcConsistency;
use crate::propagators::DirectedArc;
use crate::propagators::NodeConsistency;

/// A solver which attempts to find a complete assignment of words to the slots of a crossword.
///
/// The solver works in two phases. First, propagators ([`NodeConsistency`] and
/// [`ArcConsistency`]) remove candidate words which cannot be part of any solution. Then a
/// depth-first backtracking search, guided by a [`Brancher`], assigns words one variable at a
/// time and undoes an assignment as soon as it conflicts with an earlier one.
///
/// The domains are not modified during search; all narrowing is done up front. The search is
/// complete with respect to the filtered domains.
#[derive(Debug)]
pub(crate) struct ConstraintSatisfactionSolver {
    /// The solver continuously changes states during the search.
    /// The state helps track additional information and contributes to making the code clearer.
    state: CSPSolverState,
    puzzle: Puzzle,
    vocabulary: Vocabulary,
    domains: DomainStore,
    /// The assignment found by the last successful call to
    /// [`ConstraintSatisfactionSolver::solve`].
    solution: Option<Assignment>,
    /// A set of counters updated during propagation and search.
    counters: Counters,
}

impl ConstraintSatisfactionSolver {
    /// Create a solver in which every variable of the puzzle may take any word of the vocabulary.
    pub(crate) fn new(puzzle: Puzzle, vocabulary: Vocabulary) -> Self {
        let domains = DomainStore::new(&puzzle, &vocabulary);

        ConstraintSatisfactionSolver {
            state: CSPSolverState::default(),
            puzzle,
            vocabulary,
            domains,
            solution: None,
            counters: Counters::default(),
        }
    }

    pub(crate) fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub(crate) fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub(crate) fn domain(&self, variable: VariableId) -> &[WordId] {
        self.domains.domain(variable)
    }

    pub(crate) fn is_infeasible(&self) -> bool {
        self.state.is_infeasible()
    }

    pub(crate) fn solution(&self) -> Option<&Assignment> {
        self.solution.as_ref()
    }

    pub(crate) fn log_statistics(&self) {
        self.counters.log_statistics()
    }

    /// Run the propagator over the domains. If it empties a domain, the solver becomes
    /// infeasible.
    fn propagate(&mut self, propagator: &impl Propagator) -> PropagationStatus {
        let domain_sizes_before = self.domains.total_size();
        let context = PropagationContextMut::new(
            &self.puzzle,
            &self.vocabulary,
            &mut self.domains,
            &mut self.counters.propagation,
        );
        let status = propagator.propagate(context);

        debug!(
            "{} removed {} candidate words",
            propagator.name(),
            domain_sizes_before - self.domains.total_size()
        );

        if let Err(EmptyDomain(variable)) = status {
            debug!(
                "{} found no candidates for {}",
                propagator.name(),
                self.puzzle.variable(variable)
            );
            self.state.declare_infeasible();
        }

        status
    }

    pub(crate) fn enforce_node_consistency(&mut self) -> PropagationStatus {
        self.propagate(&NodeConsistency)
    }

    pub(crate) fn ac3(&mut self, arcs: Option<Vec<DirectedArc>>) -> PropagationStatus {
        self.propagate(&ArcConsistency::new(arcs))
    }

    pub(crate) fn revise(&mut self, x: VariableId, y: VariableId) -> bool {
        let mut context = PropagationContextMut::new(
            &self.puzzle,
            &self.vocabulary,
            &mut self.domains,
            &mut self.counters.propagation,
        );

        arc_consistency::revise(&mut context, x, y)
    }

    /// Search for a complete, consistent assignment over the current domains.
    ///
    /// The brancher decides which variable is assigned next and in which order its words are
    /// tried; the termination condition is polled before every decision.
    pub(crate) fn solve(
        &mut self,
        termination: &mut impl TerminationCondition,
        brancher: &mut impl Brancher,
    ) -> CSPSolverExecutionFlag {
        if self.state.is_infeasible() {
            return CSPSolverExecutionFlag::Infeasible;
        }

        self.state.declare_solving();
        self.solution = None;
        let start_time = Instant::now();

        let mut assignment = Assignment::new(self.puzzle.num_variables());
        let mut search = BacktrackingSearch {
            puzzle: &self.puzzle,
            vocabulary: &self.vocabulary,
            domains: &self.domains,
            brancher,
            termination,
            counters: &mut self.counters,
        };
        let status = search.backtrack(&mut assignment);

        self.counters.time_spent_in_solver += start_time.elapsed().as_millis() as u64;

        match status {
            SearchStatus::Found => {
                crossfill_assert_advanced!(
                    assignment.is_complete()
                        && assignment.is_consistent(&self.puzzle, &self.vocabulary)
                );
                crossfill_assert_advanced!(assignment
                    .iter()
                    .all(|(variable, word)| self.domains.contains(variable, word)));
                self.state.declare_solution_found();
                self.solution = Some(assignment);
                CSPSolverExecutionFlag::Feasible
            }
            SearchStatus::Exhausted => {
                crossfill_assert_simple!(assignment.num_assigned() == 0);
                self.state.declare_infeasible();
                CSPSolverExecutionFlag::Infeasible
            }
            SearchStatus::Stopped => {
                crossfill_assert_simple!(assignment.num_assigned() == 0);
                self.state.declare_timeout();
                CSPSolverExecutionFlag::Timeout
            }
        }
    }
}

/// How a (recursive) call of [`BacktrackingSearch::backtrack`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SearchStatus {
    /// The assignment is complete and consistent; it is left in place.
    Found,
    /// Every candidate failed; the assignment is as it was before the call.
    Exhausted,
    /// The termination condition triggered; the assignment is as it was before the call.
    Stopped,
}

/// The state shared by every frame of the recursive search. The domains are only borrowed
/// immutably; the single mutable [`Assignment`] is passed down the recursion.
struct BacktrackingSearch<'a, B, T> {
    puzzle: &'a Puzzle,
    vocabulary: &'a Vocabulary,
    domains: &'a DomainStore,
    brancher: &'a mut B,
    termination: &'a mut T,
    counters: &'a mut Counters,
}

impl<B: Brancher, T: TerminationCondition> BacktrackingSearch<'_, B, T> {
    fn backtrack(&mut self, assignment: &mut Assignment) -> SearchStatus {
        if assignment.is_complete() {
            return SearchStatus::Found;
        }

        let context =
            SelectionContext::new(self.puzzle, self.vocabulary, self.domains, assignment);
        let Some(variable) = self.brancher.next_variable(&context) else {
            warn!("The brancher did not select a variable while the assignment is incomplete");
            return SearchStatus::Exhausted;
        };
        let candidates = self.brancher.order_values(variable, &context);

        self.counters.peak_depth = max(self.counters.peak_depth, assignment.num_assigned() + 1);

        for word in candidates {
            if self.termination.should_stop() {
                return SearchStatus::Stopped;
            }

            self.counters.num_decisions += 1;
            assignment.assign(variable, word);

            if assignment.is_consistent_at(variable, self.puzzle, self.vocabulary) {
                match self.backtrack(assignment) {
                    SearchStatus::Found => return SearchStatus::Found,
                    SearchStatus::Stopped => {
                        assignment.unassign(variable);
                        return SearchStatus::Stopped;
                    }
                    SearchStatus::Exhausted => {}
                }
            } else {
                self.counters.num_conflicts += 1;
            }

            assignment.unassign(variable);
        }

        self.counters.num_backtracks += 1;
        SearchStatus::Exhausted
    }
}

/// Structure responsible for storing several statistics of the solving process of the
/// [`ConstraintSatisfactionSolver`].
#[derive(Default, Debug, Copy, Clone)]
struct Counters {
    propagation: PropagationCounters,
    num_decisions: u64,
    num_conflicts: u64,
    num_backtracks: u64,
    peak_depth: usize,
    time_spent_in_solver: u64,
}

impl Counters {
    fn log_statistics(&self) {
        log_statistic("numberOfRevisions", self.propagation.num_revisions);
        log_statistic("numberOfPrunedValues", self.propagation.num_pruned_values);
        log_statistic("numberOfDecisions", self.num_decisions);
        log_statistic("numberOfConflicts", self.num_conflicts);
        log_statistic("numberOfBacktracks", self.num_backtracks);
        log_statistic("peakSearchDepth", self.peak_depth);
        log_statistic("timeSpentInSolverInMilliseconds", self.time_spent_in_solver);
    }
}

#[derive(Default, Debug)]
enum CSPSolverStateInternal {
    #[default]
    Ready,
    Solving,
    ContainsSolution,
    Infeasible,
    Timeout,
}

#[derive(Default, Debug)]
struct CSPSolverState {
    internal_state: CSPSolverStateInternal,
}

impl CSPSolverState {
    fn is_infeasible(&self) -> bool {
        matches!(self.internal_state, CSPSolverStateInternal::Infeasible)
    }

    fn declare_solving(&mut self) {
        crossfill_assert_simple!(!self.is_infeasible());
        self.internal_state = CSPSolverStateInternal::Solving;
    }

    fn declare_infeasible(&mut self) {
        self.internal_state = CSPSolverStateInternal::Infeasible;
    }

    fn declare_solution_found(&mut self) {
        crossfill_assert_simple!(!self.is_infeasible());
        self.internal_state = CSPSolverStateInternal::ContainsSolution;
    }

    fn declare_timeout(&mut self) {
        crossfill_assert_simple!(!self.is_infeasible());
        self.internal_state = CSPSolverStateInternal::Timeout;
    }
}
