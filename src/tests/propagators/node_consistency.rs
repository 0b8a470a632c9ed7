#![cfg(test)]

use crate::basic_types::EmptyDomain;
use crate::engine::test_helper::TestSolver;
use crate::model::Direction;
use crate::propagators::NodeConsistency;

#[test]
fn only_words_of_the_slot_length_remain() {
    let mut solver = TestSolver::new(&["____", "_##_", "_##_"], &["AB", "CAT", "COW", "DOGS"]);
    let across = solver.variable(0, 0, Direction::Across);
    let left = solver.variable(0, 0, Direction::Down);

    let result = solver.propagate(&NodeConsistency);

    assert_eq!(result, Ok(()));
    assert_eq!(solver.domain_words(across), vec!["DOGS"]);
    assert_eq!(solver.domain_words(left), vec!["CAT", "COW"]);
}

#[test]
fn enforcing_twice_removes_nothing() {
    let mut solver = TestSolver::new(&["___", "_##", "_##"], &["AB", "CAT", "COW", "DOGS"]);
    solver.enforce_node_consistency();
    let pruned = solver.counters.num_pruned_values;

    solver.enforce_node_consistency();

    assert_eq!(solver.counters.num_pruned_values, pruned);
}

#[test]
fn slot_without_fitting_words_empties_its_domain() {
    let mut solver = TestSolver::new(&["____"], &["CAT", "DOG"]);
    let across = solver.variable(0, 0, Direction::Across);

    let result = solver.propagate(&NodeConsistency);

    assert_eq!(result, Err(EmptyDomain(across)));
    assert!(solver.domain_words(across).is_empty());
}
